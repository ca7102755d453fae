//! Catalog categories known at build time

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// A top-level entity kind in the upstream catalog. Each category has its
/// own paginated listing upstream and its own table locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    People,
    Films,
    Starships,
}

impl Category {
    /// All categories, in import order.
    pub fn all() -> [Category; 3] {
        [Category::People, Category::Films, Category::Starships]
    }

    /// The path segment the upstream API uses for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Films => "films",
            Category::Starships => "starships",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "people" => Ok(Category::People),
            "films" => Ok(Category::Films),
            "starships" => Ok(Category::Starships),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories() {
        assert_eq!("people".parse::<Category>().unwrap(), Category::People);
        assert_eq!("films".parse::<Category>().unwrap(), Category::Films);
        assert_eq!(
            "starships".parse::<Category>().unwrap(),
            Category::Starships
        );
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "planets".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: planets");
    }

    #[test]
    fn display_round_trips() {
        for category in Category::all() {
            assert_eq!(
                category.to_string().parse::<Category>().unwrap(),
                category
            );
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Category::Starships).unwrap();
        assert_eq!(json, "\"starships\"");
    }
}
