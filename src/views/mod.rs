//! View routing and page composition
//!
//! [`Route::parse`] maps a path to a route and [`compose`] turns the route
//! into a [`Page`] from an explicit [`ViewContext`]. Composition is pure: all
//! state (session, preferences, criteria, catalog) comes in through the
//! context.

pub mod page;
pub mod routes;

pub use page::{Navbar, Page, Screen};
pub use routes::Route;

use crate::{
    filter,
    models::{Book, FilterCriteria, SessionContext, Theme},
};
use page::{BookCard, BookLayout, CategorySidebar, FilterSidebar, ThemeToggle, UpdateScope};

/// Everything a page is composed from
pub struct ViewContext<'a> {
    pub session: &'a SessionContext,
    pub theme: Theme,
    pub criteria: &'a FilterCriteria,
    pub catalog: &'a [Book],
}

const BACK_TO_LIST: &str = "/";

/// Compose the page for `route`
pub fn compose(route: &Route, ctx: &ViewContext<'_>) -> Page {
    let screen = match route {
        Route::BookList => {
            let books: Vec<BookCard> = filter::apply(ctx.catalog, ctx.criteria)
                .into_iter()
                .map(BookCard::from)
                .collect();
            Screen::BookList {
                layout: book_layout(ctx),
                search: ctx.criteria.search().unwrap_or_default().to_string(),
                total: ctx.catalog.len(),
                books,
            }
        }
        Route::BookDetail { id } => Screen::BookDetail {
            layout: book_layout(ctx),
            book_id: id.clone(),
            book: ctx
                .catalog
                .iter()
                .find(|b| b.id() == id)
                .cloned()
                .map(BookCard::from),
            back: BACK_TO_LIST.to_string(),
        },
        Route::Reader => Screen::Reader {
            layout: book_layout(ctx),
            back: BACK_TO_LIST.to_string(),
        },
        Route::Home => Screen::Home,
        Route::Register => Screen::Register,
        Route::Login => Screen::Login,
        Route::Verify => Screen::Verify {
            email: ctx.session.pending_email.clone(),
        },
        Route::ForgotPassword => Screen::ForgotPassword,
        Route::ResetPassword { token } => Screen::ResetPassword {
            token: token.clone(),
        },
        Route::Users => Screen::Users {
            delete_action: "/users/{id}".to_string(),
        },
        Route::UserDetails { user_id } => Screen::UserDetails {
            user_id: user_id.clone(),
        },
        Route::UpdateUser { user_id } => Screen::UpdateUser {
            user_id: user_id.clone(),
            scope: UpdateScope::Admin,
        },
        Route::UpdateOwnAccount { user_id } => Screen::UpdateUser {
            user_id: user_id.clone(),
            scope: UpdateScope::Own,
        },
        Route::Settings => Screen::Settings,
        Route::UpdateInfo => Screen::UpdateInfo,
        Route::ChangePassword => Screen::ChangePassword,
        Route::AdminBooks => Screen::AdminBooks,
        Route::AddBook => Screen::AddBook,
        Route::EditBook => Screen::EditBook,
    };

    Page {
        path: route.path(),
        theme: ctx.theme,
        navbar: Navbar::for_session(ctx.session),
        screen,
    }
}

fn book_layout(ctx: &ViewContext<'_>) -> BookLayout {
    let facets = filter::facets(ctx.catalog);
    BookLayout {
        theme_toggle: ThemeToggle::new(ctx.theme),
        category_sidebar: CategorySidebar {
            selected: ctx.criteria.category.to_string(),
            categories: facets.categories.clone(),
        },
        filter_sidebar: FilterSidebar {
            genre: ctx.criteria.genre().unwrap_or_default().to_string(),
            year: ctx.criteria.year().unwrap_or_default().to_string(),
            facets,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookRecord, Category, Role};

    fn catalog() -> Vec<Book> {
        let record = |id: &str, title: &str, category: &str, year: &str| BookRecord {
            id: id.to_string(),
            title: title.to_string(),
            author: String::new(),
            description: String::new(),
            category: category.to_string(),
            genre: "epic".to_string(),
            year: year.to_string(),
        };
        vec![
            Book {
                record: record("1", "Dune", "scifi", "1965"),
                is_read: true,
                is_favorite: false,
            },
            Book {
                record: record("2", "Hobbit", "fantasy", "1937"),
                is_read: false,
                is_favorite: true,
            },
        ]
    }

    fn admin() -> SessionContext {
        SessionContext {
            role: Role::Admin,
            ..SessionContext::default()
        }
    }

    #[test]
    fn test_navbar_follows_role() {
        let books = catalog();
        let criteria = FilterCriteria::default();
        for (session, expected) in [
            (admin(), Navbar::Admin),
            (SessionContext::visitor(), Navbar::Member),
            (
                SessionContext {
                    role: Role::User,
                    ..SessionContext::default()
                },
                Navbar::Member,
            ),
        ] {
            let ctx = ViewContext {
                session: &session,
                theme: Theme::Light,
                criteria: &criteria,
                catalog: &books,
            };
            assert_eq!(compose(&Route::Login, &ctx).navbar, expected);
        }
    }

    #[test]
    fn test_book_list_is_filtered_and_bound() {
        let books = catalog();
        let session = SessionContext::visitor();
        let criteria = FilterCriteria {
            category: Category::from("fantasy"),
            ..FilterCriteria::default()
        };
        let ctx = ViewContext {
            session: &session,
            theme: Theme::Dark,
            criteria: &criteria,
            catalog: &books,
        };

        let page = compose(&Route::BookList, &ctx);
        assert_eq!(page.path, "/");
        assert_eq!(page.theme, Theme::Dark);
        match page.screen {
            Screen::BookList { layout, books, total, .. } => {
                assert_eq!(total, 2);
                assert_eq!(books.len(), 1);
                assert_eq!(books[0].book.record.title, "Hobbit");
                assert_eq!(books[0].toggle_favorite, "/books/2/favorite");
                assert_eq!(layout.category_sidebar.selected, "fantasy");
                assert_eq!(layout.category_sidebar.categories, vec!["fantasy", "scifi"]);
                assert_eq!(layout.theme_toggle.label, "Switch to light mode");
                assert_eq!(layout.filter_sidebar.facets.read_count, 1);
            }
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_detail_looks_up_full_catalog() {
        let books = catalog();
        let session = SessionContext::visitor();
        // The detail screen ignores criteria that would hide the book
        let criteria = FilterCriteria {
            search: Some("zzz".to_string()),
            ..FilterCriteria::default()
        };
        let ctx = ViewContext {
            session: &session,
            theme: Theme::Light,
            criteria: &criteria,
            catalog: &books,
        };

        match compose(&Route::parse("/book/1").unwrap(), &ctx).screen {
            Screen::BookDetail { book, back, .. } => {
                assert_eq!(book.unwrap().book.record.title, "Dune");
                assert_eq!(back, "/");
            }
            other => panic!("unexpected screen {:?}", other),
        }

        match compose(&Route::parse("/book/404").unwrap(), &ctx).screen {
            Screen::BookDetail { book, book_id, .. } => {
                assert!(book.is_none());
                assert_eq!(book_id, "404");
            }
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_verify_shows_pending_email_and_update_scopes() {
        let books = Vec::new();
        let session = SessionContext {
            pending_email: Some("new@example.org".to_string()),
            ..SessionContext::default()
        };
        let criteria = FilterCriteria::default();
        let ctx = ViewContext {
            session: &session,
            theme: Theme::Light,
            criteria: &criteria,
            catalog: &books,
        };

        assert_eq!(
            compose(&Route::Verify, &ctx).screen,
            Screen::Verify {
                email: Some("new@example.org".to_string())
            }
        );
        assert_eq!(
            compose(&Route::parse("/login/updateUser1/9").unwrap(), &ctx).screen,
            Screen::UpdateUser {
                user_id: "9".to_string(),
                scope: UpdateScope::Own
            }
        );
    }
}
