//! View documents returned for each route

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Book, Facets, SessionContext, Theme};

/// Top navigation bar variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Navbar {
    Admin,
    Member,
}

impl Navbar {
    pub fn for_session(session: &SessionContext) -> Self {
        if session.is_admin() {
            Navbar::Admin
        } else {
            Navbar::Member
        }
    }
}

/// A fully composed page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Page {
    pub path: String,
    pub theme: Theme,
    pub navbar: Navbar,
    pub screen: Screen,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ThemeToggle {
    pub current: Theme,
    pub label: String,
    pub action: String,
}

impl ThemeToggle {
    pub fn new(current: Theme) -> Self {
        Self {
            current,
            label: format!("Switch to {} mode", current.toggled()),
            action: "/preferences/theme/toggle".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategorySidebar {
    pub selected: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FilterSidebar {
    pub genre: String,
    pub year: String,
    pub facets: Facets,
}

/// Chrome shared by the list, detail and reader screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookLayout {
    pub theme_toggle: ThemeToggle,
    pub category_sidebar: CategorySidebar,
    pub filter_sidebar: FilterSidebar,
}

/// Book plus the endpoints its buttons are bound to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookCard {
    #[serde(flatten)]
    pub book: Book,
    pub detail: String,
    pub toggle_read: String,
    pub toggle_favorite: String,
}

impl From<Book> for BookCard {
    fn from(book: Book) -> Self {
        let id = book.id().to_string();
        Self {
            detail: format!("/book/{}", id),
            toggle_read: format!("/books/{}/read", id),
            toggle_favorite: format!("/books/{}/favorite", id),
            book,
        }
    }
}

/// Who a user update form edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UpdateScope {
    /// An administrator editing any account
    Admin,
    /// Users editing their own account
    Own,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    BookList {
        layout: BookLayout,
        search: String,
        total: usize,
        books: Vec<BookCard>,
    },
    BookDetail {
        layout: BookLayout,
        book_id: String,
        book: Option<BookCard>,
        back: String,
    },
    Reader {
        layout: BookLayout,
        back: String,
    },
    Home,
    Register,
    Login,
    Verify {
        email: Option<String>,
    },
    ForgotPassword,
    ResetPassword {
        token: String,
    },
    Users {
        delete_action: String,
    },
    UserDetails {
        user_id: String,
    },
    UpdateUser {
        user_id: String,
        scope: UpdateScope,
    },
    Settings,
    UpdateInfo,
    ChangePassword,
    AdminBooks,
    AddBook,
    EditBook,
}
