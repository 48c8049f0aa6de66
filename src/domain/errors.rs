use std::error::Error as StdError;

use thiserror::Error;

use super::user::Platform;

/// Raised when a token presented to the authentication use case cannot be trusted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidTokenError {
    pub message: String,
}

impl InvalidTokenError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoginProviderError {
    #[error("failed to reach the identity provider")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Error, Debug)]
pub enum AuthenticationError {
    #[error(transparent)]
    InvalidToken(#[from] InvalidTokenError),
    #[error("no login provider registered for platform {0}")]
    UnsupportedPlatform(Platform),
    #[error(transparent)]
    LoginProvider(#[from] LoginProviderError),
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("article storage failure: {0}")]
    Storage(String),
}
