//! Color tags for categories and the resolved display color of note cards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six selectable visual markers for a category.
///
/// The order of [`ColorTag::ALL`] is the order of the palette shown to the
/// user; its first entry is the default color of a fresh draft.
///
/// # Examples
///
/// ```
/// use noteboard::domain::ColorTag;
///
/// let tag: ColorTag = "Purple".parse().unwrap();
/// assert_eq!(tag, ColorTag::Purple);
/// assert_eq!(ColorTag::default(), ColorTag::Yellow);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Yellow,
    Blue,
    Green,
    Red,
    Purple,
    Pink,
}

/// Error returned when parsing an unknown color name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}': expected one of yellow, blue, green, red, purple, pink")]
pub struct ParseColorError(String);

impl ColorTag {
    /// The full palette in display order.
    pub const ALL: [ColorTag; 6] = [
        ColorTag::Yellow,
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Red,
        ColorTag::Purple,
        ColorTag::Pink,
    ];

    /// Returns the lowercase name of the color.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Yellow => "yellow",
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Red => "red",
            ColorTag::Purple => "purple",
            ColorTag::Pink => "pink",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ColorTag {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ColorTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| ParseColorError(s.trim().to_string()))
    }
}

/// The color a note card is drawn with.
///
/// A card takes the color of the category it references, or the neutral gray
/// when that category no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardColor {
    Tagged(ColorTag),
    Neutral,
}

impl CardColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardColor::Tagged(tag) => tag.as_str(),
            CardColor::Neutral => "gray",
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, CardColor::Neutral)
    }
}

impl From<ColorTag> for CardColor {
    fn from(tag: ColorTag) -> Self {
        CardColor::Tagged(tag)
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for CardColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
