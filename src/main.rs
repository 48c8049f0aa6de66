#[macro_use]
extern crate rocket;

mod application;
mod config;
mod domain;
mod identity_providers;
mod persistence;
mod rest;

use dotenv::dotenv;

use crate::{
    application::authenticator::Authenticator, config::GithubConfig, domain::user::Platform,
    identity_providers::github::GithubLoginProvider,
    persistence::in_memory::InMemoryArticleProvider,
};

#[launch]
fn rocket() -> _ {
    dotenv().ok();

    let github_config = GithubConfig::from_env().expect("Invalid GitHub configuration");
    let github_login_provider =
        GithubLoginProvider::new(github_config).expect("Failed to build the GitHub HTTP client");

    rest::router::new(
        Authenticator::new().with_provider(Platform::Github, Box::new(github_login_provider)),
        Box::new(InMemoryArticleProvider::new()),
    )
}
