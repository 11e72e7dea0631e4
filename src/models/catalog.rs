//! Catalog-level types: refresh outcome, status and sidebar facets

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// What happened to a completed catalog fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RefreshOutcome {
    /// The response was the latest one issued and replaced the catalog
    Applied { count: usize },
    /// A newer fetch was issued meanwhile; the response was dropped
    Superseded,
}

/// Catalog status summary
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct CatalogStatus {
    pub count: usize,
    pub fetched_at: Option<DateTime<Utc>>,
    /// Message of the last failed fetch, cleared by the next applied one
    pub last_error: Option<String>,
}

/// Values offered by the sidebars, computed over the full catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Facets {
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub years: Vec<String>,
    pub read_count: usize,
    pub favorite_count: usize,
}
