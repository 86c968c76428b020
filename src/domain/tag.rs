//! Hashtags shown in the sidebar.

use serde::Serialize;
use std::fmt;

use crate::domain::ColorTag;

/// A colored hashtag label.
///
/// Tags are flat labels displayed with a leading `#`. Unlike category names
/// they keep their case, so `#AITools` stays `#AITools`.
///
/// # Validation Rules
/// - A single leading `#` is stripped
/// - Non-empty after trimming
/// - Must contain only alphanumeric characters, hyphens, and underscores
///
/// # Examples
///
/// ```
/// use noteboard::domain::{ColorTag, Tag};
///
/// let tag = Tag::new("#AITools", ColorTag::Yellow).unwrap();
/// assert_eq!(tag.name(), "AITools");
/// assert_eq!(tag.to_string(), "#AITools");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    name: String,
    color: ColorTag,
}

/// Error returned when constructing an invalid tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTagError {
    #[error("tag cannot be empty")]
    Empty,
    #[error(
        "invalid tag '{0}': tags must contain only alphanumeric characters, hyphens, and underscores"
    )]
    InvalidCharacters(String),
}

impl Tag {
    /// Creates a new tag from a name with or without the leading `#`.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the name is empty or contains characters
    /// other than alphanumerics, hyphens and underscores.
    pub fn new(name: &str, color: ColorTag) -> Result<Self, ParseTagError> {
        let trimmed = name.trim();
        let bare = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if bare.is_empty() {
            return Err(ParseTagError::Empty);
        }

        if !bare
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ParseTagError::InvalidCharacters(bare.to_string()));
        }

        Ok(Self {
            name: bare.to_string(),
            color,
        })
    }

    /// Returns the tag name without the leading `#`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> ColorTag {
        self.color
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ===========================================
    // Validation
    // ===========================================

    #[test]
    fn new_with_valid_tag() {
        let tag = Tag::new("learning", ColorTag::Green).unwrap();
        assert_eq!(tag.name(), "learning");
        assert_eq!(tag.color(), ColorTag::Green);
    }

    #[test]
    fn strips_leading_hash() {
        let tag = Tag::new("#Fun", ColorTag::Red).unwrap();
        assert_eq!(tag.name(), "Fun");
    }

    #[test]
    fn strips_only_one_hash() {
        let err = Tag::new("##Fun", ColorTag::Red).unwrap_err();
        assert_eq!(err, ParseTagError::InvalidCharacters("#Fun".to_string()));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Tag::new("", ColorTag::Red), Err(ParseTagError::Empty));
        assert_eq!(Tag::new("  # ", ColorTag::Red), Err(ParseTagError::Empty));
    }

    #[test]
    fn rejects_spaces() {
        assert!(Tag::new("motion capture", ColorTag::Blue).is_err());
    }

    #[test]
    fn allows_hyphens_and_underscores() {
        assert!(Tag::new("needs-review", ColorTag::Blue).is_ok());
        assert!(Tag::new("work_in_progress", ColorTag::Blue).is_ok());
    }

    // ===========================================
    // Display
    // ===========================================

    #[test]
    fn display_preserves_case_with_hash() {
        let tag = Tag::new("AITools", ColorTag::Yellow).unwrap();
        assert_eq!(format!("{}", tag), "#AITools");
    }
}
