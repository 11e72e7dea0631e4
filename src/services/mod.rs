//! Presentation services: preferences, catalog, criteria, session and users

pub mod catalog;
pub mod criteria;
pub mod preferences;
pub mod session;
pub mod users;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    storage::{FileStorage, KeyValueStorage, MemoryStorage},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub preferences: preferences::PreferenceStore,
    pub catalog: catalog::CatalogService,
    pub criteria: criteria::CriteriaService,
    pub session: session::SessionService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services against the configured remote API and storage
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.api.timeout())
            .user_agent(concat!("bookshelf-web/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_parts(
            Arc::new(catalog::HttpBookApi::new(client.clone(), &config.api)),
            Arc::new(users::HttpUserApi::new(client, &config.api)),
            Arc::new(FileStorage::new(&config.storage.path)),
            Arc::new(MemoryStorage::new()),
        ))
    }

    /// Wire services from explicit collaborators
    pub fn with_parts(
        book_api: Arc<dyn catalog::BookApi>,
        user_api: Arc<dyn users::UserApi>,
        persistent: Arc<dyn KeyValueStorage>,
        session: Arc<dyn KeyValueStorage>,
    ) -> Self {
        let preferences = preferences::PreferenceStore::new(persistent);
        Self {
            catalog: catalog::CatalogService::new(book_api, preferences.clone()),
            preferences,
            criteria: criteria::CriteriaService::new(),
            session: session::SessionService::new(session),
            users: users::UsersService::new(user_api),
        }
    }

    /// Re-fetch the catalog after a preference change. If the fetch fails the
    /// cached catalog is re-decorated so its flags still match the store.
    pub async fn refresh_after_toggle(&self) {
        if let Err(e) = self.catalog.refresh().await {
            tracing::warn!("Catalog refresh after preference change failed: {}", e);
            self.catalog.redecorate();
        }
    }
}
