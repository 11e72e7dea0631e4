//! Book model and related types

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::preferences::PreferenceSet;

/// Book record as served by the remote library API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Genre; the remote API calls this field `generation`
    #[serde(rename = "generation", alias = "genre", default)]
    pub genre: String,
    /// Publication year, held as text whatever the wire type
    #[serde(default, deserialize_with = "year_as_text")]
    pub year: String,
}

/// Book as shown by the views: the remote record plus flags derived from
/// the preference set at decoration time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Book {
    #[serde(flatten)]
    pub record: BookRecord,
    pub is_read: bool,
    pub is_favorite: bool,
}

impl Book {
    /// Attach read/favorite flags from `prefs` to a raw record
    pub fn decorate(record: BookRecord, prefs: &PreferenceSet) -> Self {
        let is_read = prefs.read.contains(&record.id);
        let is_favorite = prefs.favorites.contains(&record.id);
        Self {
            record,
            is_read,
            is_favorite,
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }
}

/// Decorate a whole catalog, preserving order
pub fn decorate_all(records: &[BookRecord], prefs: &PreferenceSet) -> Vec<Book> {
    records
        .iter()
        .cloned()
        .map(|record| Book::decorate(record, prefs))
        .collect()
}

fn year_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(year_text(value))
}

/// Like `year_as_text`, but an absent or null year stays `None`
pub(crate) fn optional_year_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map(year_text))
}

fn year_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_accepts_numeric_and_text_year() {
        let numeric: BookRecord = serde_json::from_value(json!({
            "_id": "b1", "title": "Dune", "year": 1965
        }))
        .unwrap();
        assert_eq!(numeric.year, "1965");

        let text: BookRecord = serde_json::from_value(json!({
            "id": "b2", "title": "Hobbit", "year": "1937", "genre": "epic"
        }))
        .unwrap();
        assert_eq!(text.id, "b2");
        assert_eq!(text.year, "1937");
        assert_eq!(text.genre, "epic");
        assert_eq!(text.description, "");
    }

    #[test]
    fn test_decorate_reflects_membership() {
        let record: BookRecord = serde_json::from_value(json!({ "_id": "b1" })).unwrap();
        let mut prefs = PreferenceSet::default();
        prefs.favorites.insert("b1".to_string());

        let book = Book::decorate(record, &prefs);
        assert!(!book.is_read);
        assert!(book.is_favorite);
    }
}
