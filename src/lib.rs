//! Bookshelf presentation layer
//!
//! Holds the view state of the book library UI (theme, read and favorite
//! flags, filter criteria, session identity), fetches the catalog from the
//! remote library API and composes the screens for each UI path.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod services;
pub mod storage;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
