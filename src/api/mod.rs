//! HTTP surface: composed views and the mutations their buttons call

pub mod catalog;
pub mod criteria;
pub mod health;
pub mod openapi;
pub mod preferences;
pub mod session;
pub mod users;
pub mod views;

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{models::SessionContext, AppState};

/// Identity of the current session, resolved once per request and passed
/// explicitly to whatever composes the response
pub struct Session(pub SessionContext);

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Session(state.services.session.context()))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Views
        .route("/views", get(views::render_root))
        .route("/views/*path", get(views::render_path))
        // Preferences
        .route("/preferences", get(preferences::get_preferences))
        .route("/preferences/theme", put(preferences::set_theme))
        .route("/preferences/theme/toggle", post(preferences::toggle_theme))
        .route("/books/:id/read", post(preferences::toggle_read))
        .route("/books/:id/favorite", post(preferences::toggle_favorite))
        // Catalog
        .route("/catalog", get(catalog::list_books))
        .route("/catalog/refresh", post(catalog::refresh))
        .route("/catalog/facets", get(catalog::get_facets))
        // Criteria
        .route("/criteria", get(criteria::get_criteria))
        .route("/criteria", put(criteria::update_criteria))
        .route("/criteria", delete(criteria::reset_criteria))
        // Session
        .route("/session", get(session::get_session))
        .route("/session", post(session::sign_in))
        .route("/session", delete(session::sign_out))
        .route("/session/pending-email", put(session::set_pending_email))
        // Users
        .route("/users/:id", delete(users::delete_user))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
