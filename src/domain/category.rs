//! Category: a named, colored bucket that notes refer to by name.

use serde::Serialize;
use std::fmt;

use crate::domain::ColorTag;

/// Error returned when constructing a category with an empty name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid category: name cannot be empty")]
pub struct EmptyCategoryName;

/// A category in the sidebar list.
///
/// Names are stored trimmed and are never empty. They are not required to be
/// unique; lookups by name resolve to the first match in list order.
///
/// # Examples
///
/// ```
/// use noteboard::domain::{Category, ColorTag};
///
/// let category = Category::new("  Ideas ", ColorTag::Pink).unwrap();
/// assert_eq!(category.name(), "Ideas");
/// assert!(Category::new("   ", ColorTag::Pink).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    name: String,
    color: ColorTag,
}

impl Category {
    /// Creates a category, trimming the name.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCategoryName` if the name is empty or whitespace-only.
    pub fn new(name: impl AsRef<str>, color: ColorTag) -> Result<Self, EmptyCategoryName> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmptyCategoryName);
        }
        Ok(Self {
            name: trimmed.to_string(),
            color,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> ColorTag {
        self.color
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
