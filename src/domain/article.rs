use rocket::serde::{Deserialize, Serialize};

/// A blog article. `id` is `None` until the article has been stored.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct Article {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub content: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            summary: summary.into(),
            content: content.into(),
        }
    }
}
