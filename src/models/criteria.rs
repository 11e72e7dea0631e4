//! Filter criteria applied to the catalog

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;
use validator::Validate;

/// Category selector: everything, or one named category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    pub const ALL: &'static str = "all";

    pub fn as_str(&self) -> &str {
        match self {
            Category::All => Self::ALL,
            Category::Named(name) => name.as_str(),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case(Self::ALL) {
            Category::All
        } else {
            Category::Named(s.to_string())
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from(s.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Category::from(s))
    }
}

/// Current constraints on the catalog. Absent and empty fields do not
/// constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FilterCriteria {
    #[serde(default)]
    #[schema(value_type = String, example = "all")]
    pub category: Category,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl FilterCriteria {
    pub fn genre(&self) -> Option<&str> {
        non_empty(&self.genre)
    }

    pub fn year(&self) -> Option<&str> {
        non_empty(&self.year)
    }

    pub fn search(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    /// Apply a partial update; fields left out of `update` are kept
    pub fn merge(&mut self, update: CriteriaUpdate) {
        if let Some(category) = update.category {
            self.category = Category::from(category);
        }
        if let Some(genre) = update.genre {
            self.genre = Some(genre);
        }
        if let Some(year) = update.year {
            self.year = Some(year);
        }
        if let Some(search) = update.search {
            self.search = Some(search);
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Partial criteria update, as sent by the sidebars and the search bar
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CriteriaUpdate {
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 100))]
    pub genre: Option<String>,
    /// Number or text; stored as text
    #[serde(default, deserialize_with = "crate::models::book::optional_year_as_text")]
    #[validate(length(max = 16))]
    pub year: Option<String>,
    #[validate(length(max = 200))]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from("all"), Category::All);
        assert_eq!(Category::from("ALL"), Category::All);
        assert_eq!(Category::from(""), Category::All);
        assert_eq!(Category::from("Fantasy"), Category::Named("Fantasy".to_string()));
    }

    #[test]
    fn test_empty_fields_do_not_constrain() {
        let criteria: FilterCriteria = serde_json::from_value(json!({
            "category": "all", "genre": "", "year": null
        }))
        .unwrap();
        assert_eq!(criteria.category, Category::All);
        assert_eq!(criteria.genre(), None);
        assert_eq!(criteria.year(), None);
        assert_eq!(criteria.search(), None);
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut criteria = FilterCriteria {
            genre: Some("epic".to_string()),
            ..FilterCriteria::default()
        };
        criteria.merge(CriteriaUpdate {
            category: Some("fantasy".to_string()),
            search: Some("ring".to_string()),
            ..CriteriaUpdate::default()
        });
        assert_eq!(criteria.category, Category::Named("fantasy".to_string()));
        assert_eq!(criteria.genre(), Some("epic"));
        assert_eq!(criteria.search(), Some("ring"));
    }

    #[test]
    fn test_update_accepts_numeric_year() {
        let update: CriteriaUpdate = serde_json::from_value(json!({ "year": 1965 })).unwrap();
        assert_eq!(update.year.as_deref(), Some("1965"));

        let update: CriteriaUpdate = serde_json::from_value(json!({ "year": "1937" })).unwrap();
        assert_eq!(update.year.as_deref(), Some("1937"));

        let update: CriteriaUpdate = serde_json::from_value(json!({ "search": "x" })).unwrap();
        assert_eq!(update.year, None);
    }

    #[test]
    fn test_update_rejects_oversized_search() {
        let update = CriteriaUpdate {
            search: Some("x".repeat(500)),
            ..CriteriaUpdate::default()
        };
        assert!(update.validate().is_err());
    }
}
