use crate::MapError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed set of institutional classifications used for color-coding
/// and filtering. Records whose category is not one of these are dropped
/// during validation, so an unknown category can never reach rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Academic,
    Healthcare,
    Research,
    Government,
    Commercial,
}

impl Category {
    /// All categories, in legend order.
    pub const ALL: [Category; 5] = [
        Category::Academic,
        Category::Healthcare,
        Category::Research,
        Category::Government,
        Category::Commercial,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Display color used by markers and the legend.
    pub fn color(self) -> &'static str {
        match self {
            Category::Academic => "#1976d2",
            Category::Healthcare => "#7b1fa2",
            Category::Research => "#388e3c",
            Category::Government => "#f57c00",
            Category::Commercial => "#c2185b",
        }
    }

    /// Display name, as it appears in the data feed and the legend.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Academic => "Academic",
            Category::Healthcare => "Healthcare",
            Category::Research => "Research",
            Category::Government => "Government",
            Category::Commercial => "Commercial",
        }
    }

    /// Lowercase form used in CSS class names and layer ids.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Academic => "academic",
            Category::Healthcare => "healthcare",
            Category::Research => "research",
            Category::Government => "government",
            Category::Commercial => "commercial",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Academic" => Ok(Category::Academic),
            "Healthcare" => Ok(Category::Healthcare),
            "Research" => Ok(Category::Research),
            "Government" => Ok(Category::Government),
            "Commercial" => Ok(Category::Commercial),
            other => Err(MapError::UnknownCategory(other.to_string())),
        }
    }
}
