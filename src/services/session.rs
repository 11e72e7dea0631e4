//! Session identity held in ephemeral storage

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::session::{Role, SessionContext, SessionUser},
    storage::KeyValueStorage,
};

pub const USER_KEY: &str = "user";
pub const PENDING_EMAIL_KEY: &str = "pendingEmail";

#[derive(Clone)]
pub struct SessionService {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionService {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Current identity. Missing, unreadable or corrupt session data all
    /// mean a visitor.
    pub fn context(&self) -> SessionContext {
        let user = match self.storage.get(USER_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<SessionUser>(&raw)
                .map_err(|e| tracing::warn!("Ignoring corrupt session user: {}", e))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Session storage unreadable: {}", e);
                None
            }
        };
        let pending_email = self.storage.get(PENDING_EMAIL_KEY).ok().flatten();

        match user {
            Some(user) => SessionContext {
                role: Role::from(user.role.as_str()),
                email: user.email,
                pending_email,
            },
            None => SessionContext {
                pending_email,
                ..SessionContext::visitor()
            },
        }
    }

    /// Record the user the login screen signed in
    pub fn sign_in(&self, user: &SessionUser) -> AppResult<SessionContext> {
        self.storage.set(USER_KEY, &serde_json::to_string(user)?)?;
        tracing::info!("Signed in as {}", Role::from(user.role.as_str()));
        Ok(self.context())
    }

    pub fn sign_out(&self) -> AppResult<()> {
        self.storage.remove(USER_KEY)
    }

    /// Remember the address a registration is waiting to verify
    pub fn set_pending_email(&self, email: &str) -> AppResult<()> {
        self.storage.set(PENDING_EMAIL_KEY, email)
    }
}
