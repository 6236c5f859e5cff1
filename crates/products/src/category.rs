//! Category tags and glove sizes.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use fairway_core::DomainError;

/// Product category as tagged by the backend.
///
/// Only the three known tags drive a spec panel; anything else is carried as
/// `Unknown` so it still lists in the catalog and can still be filtered on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Clubs,
    Gloves,
    Balls,
    Unknown(String),
}

impl Category {
    /// The categories the storefront knows how to render, in menu order.
    pub const KNOWN: [Category; 3] = [Category::Clubs, Category::Gloves, Category::Balls];

    /// Parse a backend tag. Case-insensitive, surrounding whitespace ignored.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_lowercase();
        match normalized.as_str() {
            "clubs" => Category::Clubs,
            "gloves" => Category::Gloves,
            "balls" => Category::Balls,
            _ => Category::Unknown(normalized),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Category::Clubs => "clubs",
            Category::Gloves => "gloves",
            Category::Balls => "balls",
            Category::Unknown(tag) => tag,
        }
    }

    /// Label shown in the category filter.
    pub fn label(&self) -> &str {
        match self {
            Category::Clubs => "Palos",
            Category::Gloves => "Guantes",
            Category::Balls => "Bolas",
            Category::Unknown(tag) => tag,
        }
    }

    pub fn is_gloves(&self) -> bool {
        matches!(self, Category::Gloves)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from_tag(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.tag().to_string()
    }
}

/// Glove size, in the fixed display order S, M, L, XL, XXL.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GloveSize {
    S,
    M,
    L,
    XL,
    XXL,
}

impl GloveSize {
    pub const ALL: [GloveSize; 5] = [
        GloveSize::S,
        GloveSize::M,
        GloveSize::L,
        GloveSize::XL,
        GloveSize::XXL,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GloveSize::S => "S",
            GloveSize::M => "M",
            GloveSize::L => "L",
            GloveSize::XL => "XL",
            GloveSize::XXL => "XXL",
        }
    }
}

impl core::fmt::Display for GloveSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GloveSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        GloveSize::ALL
            .into_iter()
            .find(|size| size.as_str() == upper)
            .ok_or_else(|| DomainError::validation(format!("unknown glove size: {s}")))
    }
}
