use rocket::async_trait;

use crate::domain::{article::Article, errors::PersistenceError};

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArticleProvider: Send + Sync {
    async fn article_of_id(&self, article_id: u64) -> Result<Option<Article>, PersistenceError>;

    /// Stores a new article (assigning its id) or replaces an existing one.
    async fn save(&self, article: Article) -> Result<Article, PersistenceError>;

    /// Pages are zero-indexed, newest article first.
    async fn articles_of(
        &self,
        page_number: u32,
        number_per_page: u32,
    ) -> Result<Vec<Article>, PersistenceError>;
}
