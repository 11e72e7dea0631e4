//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{catalog, criteria, health, preferences, session, users, views};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "Presentation host for the book library: composed views, preferences and filtering",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Views
        views::render_root,
        views::render_path,
        // Preferences
        preferences::get_preferences,
        preferences::set_theme,
        preferences::toggle_theme,
        preferences::toggle_read,
        preferences::toggle_favorite,
        // Catalog
        catalog::list_books,
        catalog::refresh,
        catalog::get_facets,
        // Criteria
        criteria::get_criteria,
        criteria::update_criteria,
        criteria::reset_criteria,
        // Session
        session::get_session,
        session::sign_in,
        session::sign_out,
        session::set_pending_email,
        // Users
        users::delete_user,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookRecord,
            crate::models::catalog::CatalogStatus,
            crate::models::catalog::Facets,
            catalog::CatalogResponse,
            catalog::RefreshResponse,
            // Preferences
            crate::models::preferences::Theme,
            crate::models::preferences::PreferencesResponse,
            crate::models::preferences::SetTheme,
            crate::models::preferences::ToggleResponse,
            // Criteria
            crate::models::criteria::FilterCriteria,
            crate::models::criteria::CriteriaUpdate,
            // Session
            crate::models::session::Role,
            crate::models::session::SessionContext,
            crate::models::session::SessionUser,
            crate::models::session::SignIn,
            crate::models::session::PendingEmail,
            // Views
            crate::views::Page,
            crate::views::page::Navbar,
            crate::views::page::Screen,
            crate::views::page::BookLayout,
            crate::views::page::BookCard,
            crate::views::page::ThemeToggle,
            crate::views::page::CategorySidebar,
            crate::views::page::FilterSidebar,
            crate::views::page::UpdateScope,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "views", description = "Composed pages per UI path"),
        (name = "preferences", description = "Theme, read and favorite flags"),
        (name = "catalog", description = "Book catalog"),
        (name = "criteria", description = "Book list filtering"),
        (name = "session", description = "Signed-in identity"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
