use std::collections::HashMap;

use crate::domain::{
    errors::{AuthenticationError, InvalidTokenError},
    services::login_provider::LoginProvider,
    user::{Platform, User},
};

/// Resolves a third-party token to a [`User`] through the login provider
/// registered for the token's platform.
#[derive(Default)]
pub struct Authenticator {
    login_providers: HashMap<Platform, Box<dyn LoginProvider>>,
}

impl Authenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, platform: Platform, provider: Box<dyn LoginProvider>) -> Self {
        self.login_providers.insert(platform, provider);
        self
    }

    pub async fn authenticate(
        &self,
        platform: Platform,
        token: &str,
    ) -> Result<User, AuthenticationError> {
        let login_provider = self
            .login_providers
            .get(&platform)
            .ok_or(AuthenticationError::UnsupportedPlatform(platform))?;

        if !login_provider.is_valid(token).await? {
            return Err(InvalidTokenError::new(format!(
                "The {} token is invalid or has expired",
                platform
            ))
            .into());
        }

        let user = login_provider.user_of_token(token).await?.ok_or_else(|| {
            InvalidTokenError::new(format!("No {} user could be found for this token", platform))
        })?;

        info!("successfully authenticated a user from {}", platform);
        Ok(user)
    }
}
