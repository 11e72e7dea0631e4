//! Data models for Bookshelf

pub mod book;
pub mod catalog;
pub mod criteria;
pub mod preferences;
pub mod session;

// Re-export commonly used types
pub use book::{Book, BookRecord};
pub use catalog::{CatalogStatus, Facets, RefreshOutcome};
pub use criteria::{Category, CriteriaUpdate, FilterCriteria};
pub use preferences::{PreferenceSet, Theme};
pub use session::{Role, SessionContext, SessionUser};
