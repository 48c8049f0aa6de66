use std::{collections::HashSet, fmt, str::FromStr};

use rocket::serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform a user can log in from or link a profile on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(crate = "rocket::serde", rename_all = "UPPERCASE")]
pub enum Platform {
    Github,
    Twitter,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown platform {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(input: &str) -> Result<Platform, Self::Err> {
        match input.to_ascii_uppercase().as_str() {
            "GITHUB" => Ok(Platform::Github),
            "TWITTER" => Ok(Platform::Twitter),
            _ => Err(UnknownPlatform(input.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Platform::Github => f.write_str("GITHUB"),
            Platform::Twitter => f.write_str("TWITTER"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
#[serde(crate = "rocket::serde")]
pub struct SocialLink {
    pub platform: Platform,
    pub link: String,
}

impl SocialLink {
    pub fn new(platform: Platform, link: impl Into<String>) -> Self {
        Self {
            platform,
            link: link.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct User {
    pub email: String,
    pub first_name: String,
    pub profile_picture: String,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub login_from: Platform,
    pub social_links: HashSet<SocialLink>,
}
