use rocket::{http::Status, serde::json::Json, State};

use crate::{
    domain::{article::Article, services::article_provider::ArticleProvider},
    rest::problem::{self, ProblemResponse},
};

const DEFAULT_NUMBER_PER_PAGE: u32 = 10;
const MAX_NUMBER_PER_PAGE: u32 = 100;

#[get("/<article_id>")]
pub async fn article_of_id(
    article_id: u64,
    article_provider: &State<Box<dyn ArticleProvider>>,
) -> Result<Json<Article>, ProblemResponse> {
    match article_provider.article_of_id(article_id).await? {
        Some(article) => Ok(Json(article)),
        None => Err(problem::new_response(
            Status::NotFound,
            "Article not found",
            format!("No article with id {}", article_id),
        )),
    }
}

#[get("/?<page_number>&<number_per_page>")]
pub async fn articles_of(
    page_number: Option<u32>,
    number_per_page: Option<u32>,
    article_provider: &State<Box<dyn ArticleProvider>>,
) -> Result<Json<Vec<Article>>, ProblemResponse> {
    let number_per_page = number_per_page
        .unwrap_or(DEFAULT_NUMBER_PER_PAGE)
        .min(MAX_NUMBER_PER_PAGE);

    let articles = article_provider
        .articles_of(page_number.unwrap_or(0), number_per_page)
        .await?;
    Ok(Json(articles))
}

#[post("/", format = "json", data = "<article>")]
pub async fn save_article(
    article: Json<Article>,
    article_provider: &State<Box<dyn ArticleProvider>>,
) -> Result<Json<Article>, ProblemResponse> {
    let article = article_provider.save(article.into_inner()).await?;
    info!("saved article {:?} \"{}\"", article.id, article.title);
    Ok(Json(article))
}
