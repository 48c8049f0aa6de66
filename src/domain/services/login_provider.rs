use rocket::async_trait;

use crate::domain::{errors::LoginProviderError, user::User};

#[cfg(test)]
use mockall::automock;

/// Validates third-party access tokens and resolves them to an internal [`User`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LoginProvider: Send + Sync {
    /// `Ok(false)` for a token the provider rejects, `Err` only when the provider
    /// could not be reached.
    async fn is_valid(&self, token: &str) -> Result<bool, LoginProviderError>;

    /// `Ok(None)` when the provider refuses the token or returns an unusable profile.
    async fn user_of_token(&self, token: &str) -> Result<Option<User>, LoginProviderError>;
}
