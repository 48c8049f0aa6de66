use std::{collections::HashSet, time::Duration};

use reqwest::header;
use rocket::{
    async_trait,
    serde::{json::serde_json, Deserialize, Serialize},
};
use serde_with::{serde_as, NoneAsEmptyString};

use crate::{
    config::GithubConfig,
    domain::{
        errors::LoginProviderError,
        services::login_provider::LoginProvider,
        user::{Platform, SocialLink, User},
    },
};

const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
const TWITTER_BASE_URL: &str = "https://twitter.com/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GithubLoginProvider {
    http_client: reqwest::Client,
    config: GithubConfig,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct CheckTokenRequestBody<'r> {
    access_token: &'r str,
}

/// The subset of GitHub's `GET /user` payload the blog cares about.
///
/// Every field is optional here; [`GithubProfile::into_user`] decides which ones
/// a usable profile must carry.
#[serde_as]
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(crate = "rocket::serde")]
pub struct GithubProfile {
    pub login: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub email: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub bio: Option<String>,
    pub blog: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub twitter_username: Option<String>,
}

impl GithubProfile {
    /// Maps the profile to a [`User`], or `None` if the identity fields are missing.
    pub fn into_user(self) -> Option<User> {
        let login = self.login.filter(|login| !login.is_empty())?;
        let profile_picture = self.avatar_url?;
        let html_url = self.html_url?;

        let mut social_links = HashSet::from([SocialLink::new(Platform::Github, html_url)]);
        if let Some(twitter_username) = self.twitter_username {
            social_links.insert(SocialLink::new(
                Platform::Twitter,
                format!("{}{}", TWITTER_BASE_URL, twitter_username),
            ));
        }

        let first_name = self.name.unwrap_or_else(|| capitalize(&login));

        Some(User {
            email: self.email.unwrap_or(login),
            first_name,
            profile_picture,
            bio: self.bio,
            website: self.blog,
            login_from: Platform::Github,
            social_links,
        })
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<reqwest::Error> for LoginProviderError {
    fn from(error: reqwest::Error) -> Self {
        LoginProviderError::Transport(Box::new(error))
    }
}

impl GithubLoginProvider {
    pub fn new(config: GithubConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(HTTP_TIMEOUT)
            .build()?;

        Ok(GithubLoginProvider {
            http_client,
            config,
        })
    }

    fn check_token_url(&self) -> String {
        format!(
            "{}/applications/{}/token",
            self.config.token_check_base_url.trim_end_matches('/'),
            self.config.client_id
        )
    }

    fn user_url(&self) -> String {
        format!("{}/user", self.config.api_base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LoginProvider for GithubLoginProvider {
    async fn is_valid(&self, token: &str) -> Result<bool, LoginProviderError> {
        let response = self
            .http_client
            .post(self.check_token_url())
            .header(header::ACCEPT, GITHUB_V3_MEDIA_TYPE)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .json(&CheckTokenRequestBody {
                access_token: token,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            info!("GitHub token check answered {}, token is not valid", status);
        }
        Ok(status.is_success())
    }

    async fn user_of_token(&self, token: &str) -> Result<Option<User>, LoginProviderError> {
        let response = self
            .http_client
            .get(self.user_url())
            .header(header::ACCEPT, GITHUB_V3_MEDIA_TYPE)
            .header(header::AUTHORIZATION, format!("token {}", token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("GitHub GET /user answered {}, no user for this token", status);
            return Ok(None);
        }

        let body = response.text().await?;
        let profile = match serde_json::from_str::<GithubProfile>(&body) {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Failed to decode GitHub user profile. Error: {}", e);
                return Ok(None);
            }
        };

        let user = profile.into_user();
        if user.is_none() {
            warn!("GitHub user profile lacks login, avatar_url or html_url");
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::{GithubLoginProvider, GithubProfile, GITHUB_V3_MEDIA_TYPE};
    use crate::{
        config::GithubConfig,
        domain::{
            errors::LoginProviderError,
            services::login_provider::LoginProvider,
            user::{Platform, SocialLink},
        },
    };
    use claim::{assert_none, assert_ok_eq, assert_some};
    use httpmock::prelude::*;
    use rocket::{serde::json::serde_json, tokio};
    use std::collections::HashSet;

    const TOKEN: &str = "token";
    const TOKEN_AUTH: &str = "token token";
    const CLIENT_ID: &str = "9b6bffa9841d19dfd8aa";
    const CLIENT_SECRET: &str = "1e70ed907875eb633f6232235e4c4037888d0adb";
    // base64("9b6bffa9841d19dfd8aa:1e70ed907875eb633f6232235e4c4037888d0adb")
    const BASIC_AUTH: &str =
        "Basic OWI2YmZmYTk4NDFkMTlkZmQ4YWE6MWU3MGVkOTA3ODc1ZWI2MzNmNjIzMjIzNWU0YzQwMzc4ODhkMGFkYg==";

    const PROFILE_WITH_EMAIL: &str = r#"{
        "login": "login",
        "id": 45454545454,
        "node_id": "xxxxxxxxxxxxxxxxxx",
        "avatar_url": "https://avatars.githubusercontent.com/u/13754910?v=4",
        "gravatar_id": "",
        "url": "https://api.github.com/users/login",
        "html_url": "https://github.com/login",
        "type": "User",
        "site_admin": false,
        "name": null,
        "company": null,
        "blog": "https://zerofiltre.tech",
        "location": null,
        "email": "optimium@gmail.com",
        "hireable": null,
        "bio": null,
        "twitter_username": null,
        "public_repos": 40,
        "created_at": "2015-08-11T20:51:21Z",
        "plan": {
            "name": "free",
            "space": 121211111,
            "collaborators": 0,
            "private_repos": 10000
        }
    }"#;

    const PROFILE_WITH_NAME_AND_TWITTER: &str = r#"{
        "login": "login",
        "id": 45454545454,
        "avatar_url": "https://avatars.githubusercontent.com/u/13754910?v=4",
        "html_url": "https://github.com/login",
        "name": "Watson ONANA",
        "blog": "https://zerofiltre.tech",
        "email": null,
        "bio": null,
        "twitter_username": "login"
    }"#;

    fn provider_for(server: &MockServer) -> GithubLoginProvider {
        GithubLoginProvider::new(GithubConfig {
            client_id: CLIENT_ID.to_string(),
            client_secret: CLIENT_SECRET.to_string(),
            api_base_url: server.base_url(),
            token_check_base_url: server.base_url(),
        })
        .unwrap()
    }

    fn profile(json: &str) -> GithubProfile {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn into_user_prefers_email_and_capitalizes_login() {
        let user = assert_some!(profile(PROFILE_WITH_EMAIL).into_user());

        assert_eq!("optimium@gmail.com", user.email);
        assert_eq!("Login", user.first_name);
        assert_eq!(
            "https://avatars.githubusercontent.com/u/13754910?v=4",
            user.profile_picture
        );
        assert_none!(user.bio);
        assert_eq!(Some("https://zerofiltre.tech".to_string()), user.website);
        assert_eq!(Platform::Github, user.login_from);
        assert_eq!(
            HashSet::from([SocialLink::new(Platform::Github, "https://github.com/login")]),
            user.social_links
        );
    }

    #[test]
    fn into_user_falls_back_to_login_and_links_twitter() {
        let user = assert_some!(profile(PROFILE_WITH_NAME_AND_TWITTER).into_user());

        assert_eq!("login", user.email);
        assert_eq!("Watson ONANA", user.first_name);
        assert_eq!(Platform::Github, user.login_from);
        assert_eq!(
            HashSet::from([
                SocialLink::new(Platform::Github, "https://github.com/login"),
                SocialLink::new(Platform::Twitter, "https://twitter.com/login"),
            ]),
            user.social_links
        );
    }

    #[test]
    fn into_user_treats_empty_strings_as_absent() {
        let user = assert_some!(profile(
            r#"{
                "login": "octocat",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
                "html_url": "https://github.com/octocat",
                "email": "",
                "name": "",
                "twitter_username": "",
                "blog": ""
            }"#
        )
        .into_user());

        assert_eq!("octocat", user.email);
        assert_eq!("Octocat", user.first_name);
        assert_eq!(1, user.social_links.len());
        assert_eq!(Some(String::new()), user.website);

        let user = assert_some!(profile(
            r#"{
                "login": "octocat",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
                "html_url": "https://github.com/octocat",
                "blog": null
            }"#
        )
        .into_user());

        assert_none!(user.website);
    }

    #[test]
    fn into_user_rejects_profile_without_identity() {
        assert_none!(profile(
            r#"{"email": "optimium@gmail.com", "html_url": "https://github.com/login"}"#
        )
        .into_user());
        assert_none!(profile(r#"{"login": "", "avatar_url": "a", "html_url": "h"}"#).into_user());
        assert_none!(profile(r#"{"login": "login", "avatar_url": "a"}"#).into_user());
    }

    #[tokio::test]
    async fn is_valid_returns_true_on_valid_token() {
        let server = MockServer::start_async().await;
        let check = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/applications/{}/token", CLIENT_ID))
                    .header("Accept", GITHUB_V3_MEDIA_TYPE)
                    .header("Authorization", BASIC_AUTH)
                    .json_body(serde_json::json!({ "access_token": TOKEN }));
                then.status(200);
            })
            .await;

        let result = provider_for(&server).is_valid(TOKEN).await;

        check.assert_async().await;
        assert_ok_eq!(result, true);
    }

    #[tokio::test]
    async fn is_valid_returns_false_on_response_error() {
        let server = MockServer::start_async().await;
        let check = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(format!("/applications/{}/token", CLIENT_ID));
                then.status(404);
            })
            .await;

        let result = provider_for(&server).is_valid(TOKEN).await;

        check.assert_async().await;
        assert_ok_eq!(result, false);
    }

    #[tokio::test]
    async fn user_of_token_builds_user_properly() {
        let server = MockServer::start_async().await;
        let get_user = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/user")
                    .header("Accept", GITHUB_V3_MEDIA_TYPE)
                    .header("Authorization", TOKEN_AUTH);
                then.status(200)
                    .header("content-type", "application/json")
                    .body(PROFILE_WITH_NAME_AND_TWITTER);
            })
            .await;

        let result = provider_for(&server).user_of_token(TOKEN).await;

        get_user.assert_async().await;
        let user = assert_some!(result.unwrap());
        assert_eq!("login", user.email);
        assert_eq!("Watson ONANA", user.first_name);
        assert_eq!(2, user.social_links.len());
    }

    #[tokio::test]
    async fn user_of_token_is_empty_on_response_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user");
                then.status(401).body(r#"{"message": "Bad credentials"}"#);
            })
            .await;

        let result = provider_for(&server).user_of_token(TOKEN).await;

        assert_ok_eq!(result.map(|user| user.is_none()), true);
    }

    #[tokio::test]
    async fn user_of_token_is_empty_on_unreadable_profile() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let result = provider_for(&server).user_of_token(TOKEN).await;

        assert_ok_eq!(result.map(|user| user.is_none()), true);
    }

    #[tokio::test]
    async fn transport_failures_are_reported() {
        let provider = GithubLoginProvider::new(GithubConfig {
            client_id: CLIENT_ID.to_string(),
            client_secret: CLIENT_SECRET.to_string(),
            api_base_url: "http://127.0.0.1:1".to_string(),
            token_check_base_url: "http://127.0.0.1:1".to_string(),
        })
        .unwrap();

        assert!(matches!(
            provider.is_valid(TOKEN).await,
            Err(LoginProviderError::Transport(_))
        ));
        assert!(matches!(
            provider.user_of_token(TOKEN).await,
            Err(LoginProviderError::Transport(_))
        ));
    }
}
