pub mod article;
pub mod errors;
pub mod services;
pub mod user;
