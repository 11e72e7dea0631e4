//! User management calls made from the admin screens

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn delete_user(&self, id: &str) -> AppResult<()>;
}

/// [`UserApi`] over the library REST API
#[derive(Clone)]
pub struct HttpUserApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpUserApi {
    pub fn new(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn delete_user(&self, id: &str) -> AppResult<()> {
        let url = self.config.user_url(id);
        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        if !status.is_success() {
            return Err(AppError::Network(format!("DELETE {} returned {}", url, status)));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct UsersService {
    api: Arc<dyn UserApi>,
}

impl UsersService {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        Self { api }
    }

    /// Delete a user; failures are logged and handed back to the caller
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        if id.trim().is_empty() {
            return Err(AppError::BadRequest("User id is required".to_string()));
        }

        match self.api.delete_user(id).await {
            Ok(()) => {
                tracing::info!("User {} deleted", id);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error deleting user {}: {}", id, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::function;

    #[tokio::test]
    async fn test_delete_forwards_to_api() {
        let mut api = MockUserApi::new();
        api.expect_delete_user()
            .with(function(|id: &str| id == "42"))
            .times(1)
            .returning(|_| Ok(()));

        let users = UsersService::new(Arc::new(api));
        assert!(users.delete_user("42").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_reports_network_failure() {
        let mut api = MockUserApi::new();
        api.expect_delete_user()
            .returning(|_| Err(AppError::Network("timeout".to_string())));

        let users = UsersService::new(Arc::new(api));
        let err = users.delete_user("42").await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let api = MockUserApi::new();
        let users = UsersService::new(Arc::new(api));
        let result = tokio_test::block_on(users.delete_user("  "));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
