use rocket::{
    http::Status,
    serde::{json::Json, Deserialize},
    State,
};

use crate::{
    application::authenticator::Authenticator,
    domain::user::{Platform, User},
    rest::problem::{self, ProblemResponse},
};

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct TokenAuthenticationRequest {
    token: String,
}

#[post("/<platform>", format = "json", data = "<request>")]
pub async fn authenticate(
    platform: &str,
    request: Json<TokenAuthenticationRequest>,
    authenticator: &State<Authenticator>,
) -> Result<Json<User>, ProblemResponse> {
    let platform = platform.parse::<Platform>().map_err(|e| {
        problem::new_response(Status::NotFound, "Unsupported platform", e.to_string())
    })?;

    let user = authenticator.authenticate(platform, &request.token).await?;
    Ok(Json(user))
}
