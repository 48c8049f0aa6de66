use rocket::{Build, Rocket};

use crate::{
    application::authenticator::Authenticator,
    domain::services::article_provider::ArticleProvider,
};

pub fn new(
    authenticator: Authenticator,
    article_provider: Box<dyn ArticleProvider>,
) -> Rocket<Build> {
    rocket::build()
        .manage(authenticator)
        .manage(article_provider)
        .attach(super::cors::Cors)
        .mount(
            "/",
            routes![
                super::cors::options_preflight_handler,
                super::health::health_check
            ],
        )
        .mount(
            "/authentications",
            routes![super::authentications::authenticate],
        )
        .mount(
            "/articles",
            routes![
                super::articles::article_of_id,
                super::articles::articles_of,
                super::articles::save_article
            ],
        )
}
