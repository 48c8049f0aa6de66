use std::env;

use thiserror::Error;

const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Registered GitHub OAuth application and the endpoints it talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubConfig {
    pub client_id: String,
    pub client_secret: String,
    pub api_base_url: String,
    pub token_check_base_url: String,
}

impl GithubConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let with_default = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_GITHUB_BASE_URL.to_string())
        };

        Ok(GithubConfig {
            client_id: required("GITHUB_CLIENT_ID")?,
            client_secret: required("GITHUB_CLIENT_SECRET")?,
            api_base_url: with_default("GITHUB_API_BASE_URL"),
            token_check_base_url: with_default("GITHUB_TOKEN_CHECK_BASE_URL"),
        })
    }
}
