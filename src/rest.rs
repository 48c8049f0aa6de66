mod articles;
mod authentications;
mod cors;
mod health;
mod problem;
pub mod router;
