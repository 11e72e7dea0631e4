//! Persisted view preferences (theme, read and favorite books)

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Colour scheme of the whole UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme: {}", s)),
        }
    }
}

/// Theme plus the read and favorite book identifiers, in the order they were
/// added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSet {
    pub theme: Theme,
    pub read: IndexSet<String>,
    pub favorites: IndexSet<String>,
}

/// Flip membership of `id` in `set`; returns the new membership
pub fn toggle_membership(set: &mut IndexSet<String>, id: &str) -> bool {
    if set.shift_remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}

/// Preferences as exposed over the HTTP surface
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PreferencesResponse {
    pub theme: Theme,
    pub read_books: Vec<String>,
    pub favorite_books: Vec<String>,
}

impl From<PreferenceSet> for PreferencesResponse {
    fn from(set: PreferenceSet) -> Self {
        Self {
            theme: set.theme,
            read_books: set.read.into_iter().collect(),
            favorite_books: set.favorites.into_iter().collect(),
        }
    }
}

/// Set theme request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetTheme {
    pub theme: Theme,
}

/// Result of toggling a read or favorite flag
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ToggleResponse {
    pub book_id: String,
    /// Membership after the toggle
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle_membership_keeps_order() {
        let mut set = IndexSet::new();
        assert!(toggle_membership(&mut set, "a"));
        assert!(toggle_membership(&mut set, "b"));
        assert!(toggle_membership(&mut set, "c"));
        assert!(!toggle_membership(&mut set, "b"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "c"]);
    }
}
