use std::collections::BTreeMap;

use rocket::{async_trait, tokio::sync::RwLock};

use crate::domain::{
    article::Article, errors::PersistenceError, services::article_provider::ArticleProvider,
};

#[derive(Default)]
struct Store {
    articles: BTreeMap<u64, Article>,
    last_id: u64,
}

/// Process-local [`ArticleProvider`]; articles are lost on restart.
#[derive(Default)]
pub struct InMemoryArticleProvider {
    store: RwLock<Store>,
}

impl InMemoryArticleProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleProvider for InMemoryArticleProvider {
    async fn article_of_id(&self, article_id: u64) -> Result<Option<Article>, PersistenceError> {
        let store = self.store.read().await;
        Ok(store.articles.get(&article_id).cloned())
    }

    async fn save(&self, mut article: Article) -> Result<Article, PersistenceError> {
        let mut store = self.store.write().await;

        let article_id = match article.id {
            Some(article_id) => article_id,
            None => store.last_id.checked_add(1).ok_or_else(|| {
                PersistenceError::Storage("article id space exhausted".to_string())
            })?,
        };
        if article_id == 0 {
            return Err(PersistenceError::Storage(
                "article id 0 is reserved".to_string(),
            ));
        }

        store.last_id = store.last_id.max(article_id);
        article.id = Some(article_id);
        store.articles.insert(article_id, article.clone());
        Ok(article)
    }

    async fn articles_of(
        &self,
        page_number: u32,
        number_per_page: u32,
    ) -> Result<Vec<Article>, PersistenceError> {
        let store = self.store.read().await;
        let skipped = page_number as usize * number_per_page as usize;

        Ok(store
            .articles
            .values()
            .rev()
            .skip(skipped)
            .take(number_per_page as usize)
            .cloned()
            .collect())
    }
}
