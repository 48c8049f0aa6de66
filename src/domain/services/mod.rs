pub mod article_provider;
pub mod login_provider;
