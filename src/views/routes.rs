//! URL path to route mapping

use crate::error::{AppError, AppResult};

/// Every screen the UI can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    // Auth
    Register,
    Login,
    Verify,
    ForgotPassword,
    ResetPassword { token: String },
    // Users
    Users,
    UserDetails { user_id: String },
    UpdateUser { user_id: String },
    UpdateOwnAccount { user_id: String },
    Settings,
    UpdateInfo,
    ChangePassword,
    // Books
    BookList,
    Home,
    BookDetail { id: String },
    Reader,
    // Admin books
    AdminBooks,
    AddBook,
    EditBook,
}

impl Route {
    /// Resolve a path. Static segments match case-insensitively, empty
    /// segments and any query string are ignored.
    pub fn parse(path: &str) -> AppResult<Self> {
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let lowered: Vec<String> = segments.iter().map(|s| s.to_lowercase()).collect();
        let keys: Vec<&str> = lowered.iter().map(String::as_str).collect();
        let param = |i: usize| segments[i].to_string();

        let route = match keys.as_slice() {
            [] => Route::BookList,
            ["register"] => Route::Register,
            ["login"] => Route::Login,
            ["verify"] => Route::Verify,
            ["forgetpassword"] => Route::ForgotPassword,
            ["resetpassword", _] => Route::ResetPassword { token: param(1) },
            ["users"] => Route::Users,
            ["users", "updateuser", _] => Route::UpdateUser { user_id: param(2) },
            ["users", "details", _] => Route::UserDetails { user_id: param(2) },
            ["settings"] => Route::Settings,
            ["updateinfo"] => Route::UpdateInfo,
            ["changepassword"] => Route::ChangePassword,
            ["login", "updateuser1", _] => Route::UpdateOwnAccount { user_id: param(2) },
            ["home"] | ["home1"] => Route::Home,
            ["book"] => Route::AdminBooks,
            ["book", _] => Route::BookDetail { id: param(1) },
            ["reader"] => Route::Reader,
            ["admin", "add-book"] => Route::AddBook,
            ["admin", "edit-book"] => Route::EditBook,
            _ => return Err(AppError::NotFound(format!("No screen for path /{}", segments.join("/")))),
        };
        Ok(route)
    }

    /// Canonical path of this route
    pub fn path(&self) -> String {
        match self {
            Route::Register => "/register".to_string(),
            Route::Login => "/login".to_string(),
            Route::Verify => "/verify".to_string(),
            Route::ForgotPassword => "/forgetpassword".to_string(),
            Route::ResetPassword { token } => format!("/resetpassword/{}", token),
            Route::Users => "/users".to_string(),
            Route::UserDetails { user_id } => format!("/users/details/{}", user_id),
            Route::UpdateUser { user_id } => format!("/users/updateUser/{}", user_id),
            Route::UpdateOwnAccount { user_id } => format!("/login/updateUser1/{}", user_id),
            Route::Settings => "/settings".to_string(),
            Route::UpdateInfo => "/updateInfo".to_string(),
            Route::ChangePassword => "/changePassword".to_string(),
            Route::BookList => "/".to_string(),
            Route::Home => "/home".to_string(),
            Route::BookDetail { id } => format!("/book/{}", id),
            Route::Reader => "/reader".to_string(),
            Route::AdminBooks => "/Book".to_string(),
            Route::AddBook => "/admin/add-book".to_string(),
            Route::EditBook => "/admin/edit-book".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_paths() {
        assert_eq!(Route::parse("/").unwrap(), Route::BookList);
        assert_eq!(Route::parse("").unwrap(), Route::BookList);
        assert_eq!(
            Route::parse("/book/abc123").unwrap(),
            Route::BookDetail { id: "abc123".to_string() }
        );
        assert_eq!(Route::parse("/reader/").unwrap(), Route::Reader);
        assert_eq!(Route::parse("/Book").unwrap(), Route::AdminBooks);
        assert_eq!(Route::parse("/admin/add-book").unwrap(), Route::AddBook);
        assert_eq!(Route::parse("/home1").unwrap(), Route::Home);
    }

    #[test]
    fn test_static_segments_ignore_case_but_params_do_not() {
        assert_eq!(
            Route::parse("/users/updateUser/AbC").unwrap(),
            Route::UpdateUser { user_id: "AbC".to_string() }
        );
        assert_eq!(
            Route::parse("/USERS/DETAILS/Xy").unwrap(),
            Route::UserDetails { user_id: "Xy".to_string() }
        );
        assert_eq!(
            Route::parse("/ResetPassword/TokEn?x=1").unwrap(),
            Route::ResetPassword { token: "TokEn".to_string() }
        );
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert!(matches!(Route::parse("/nope"), Err(AppError::NotFound(_))));
        assert!(matches!(Route::parse("/book/1/extra"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_path_round_trips() {
        let routes = vec![
            Route::Login,
            Route::UpdateOwnAccount { user_id: "7".to_string() },
            Route::BookDetail { id: "b1".to_string() },
            Route::AdminBooks,
            Route::EditBook,
            Route::ChangePassword,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }
}
