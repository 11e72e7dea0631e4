//! Book catalog fetching and decoration

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::preferences::PreferenceStore;
use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
    filter,
    models::{
        book::{decorate_all, Book, BookRecord},
        CatalogStatus, Facets, FilterCriteria, RefreshOutcome,
    },
};

/// Remote source of book records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookApi: Send + Sync {
    async fn fetch_books(&self) -> AppResult<Vec<BookRecord>>;
}

/// [`BookApi`] over the library REST API
#[derive(Clone)]
pub struct HttpBookApi {
    client: reqwest::Client,
    url: String,
}

impl HttpBookApi {
    pub fn new(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            url: config.books_url(),
        }
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn fetch_books(&self) -> AppResult<Vec<BookRecord>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Network(format!(
                "GET {} returned {}",
                self.url, status
            )));
        }
        Ok(response.json::<Vec<BookRecord>>().await?)
    }
}

#[derive(Default)]
struct CatalogState {
    records: Vec<BookRecord>,
    books: Vec<Book>,
    fetched_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

#[derive(Clone)]
pub struct CatalogService {
    api: Arc<dyn BookApi>,
    preferences: PreferenceStore,
    state: Arc<RwLock<CatalogState>>,
    latest_request: Arc<AtomicU64>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn BookApi>, preferences: PreferenceStore) -> Self {
        Self {
            api,
            preferences,
            state: Arc::new(RwLock::new(CatalogState::default())),
            latest_request: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Fetch the full catalog and decorate it with the current preferences.
    ///
    /// Every call takes a new request token. A response is applied only if no
    /// other fetch was issued after it; otherwise it is dropped and the call
    /// reports [`RefreshOutcome::Superseded`]. On failure the previous catalog
    /// is kept.
    pub async fn refresh(&self) -> AppResult<RefreshOutcome> {
        let token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Catalog fetch #{} started", token);

        let result = self.api.fetch_books().await;
        let prefs = self.preferences.snapshot();

        // Token check and state update happen under the same lock
        let mut state = self.write();
        if self.latest_request.load(Ordering::SeqCst) != token {
            tracing::debug!("Catalog fetch #{} superseded, response dropped", token);
            return Ok(RefreshOutcome::Superseded);
        }

        match result {
            Ok(records) => {
                let books = decorate_all(&records, &prefs);
                let count = books.len();

                state.records = records;
                state.books = books;
                state.fetched_at = Some(Utc::now());
                state.last_error = None;

                tracing::info!("Catalog loaded: {} books", count);
                Ok(RefreshOutcome::Applied { count })
            }
            Err(e) => {
                tracing::error!("Error fetching books: {}", e);
                state.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Recompute derived flags of the cached catalog against the current
    /// preferences, without fetching
    pub fn redecorate(&self) {
        let prefs = self.preferences.snapshot();
        let mut state = self.write();
        state.books = decorate_all(&state.records, &prefs);
    }

    /// Snapshot of the decorated catalog
    pub fn books(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    pub fn find(&self, id: &str) -> Option<Book> {
        self.read().books.iter().find(|b| b.id() == id).cloned()
    }

    /// Catalog narrowed by `criteria`
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<Book> {
        filter::apply(&self.read().books, criteria)
    }

    pub fn facets(&self) -> Facets {
        filter::facets(&self.read().books)
    }

    pub fn status(&self) -> CatalogStatus {
        let state = self.read();
        CatalogStatus {
            count: state.books.len(),
            fetched_at: state.fetched_at,
            last_error: state.last_error.clone(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
