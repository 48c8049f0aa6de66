use rocket::{
    http::Status,
    response::status,
    serde::{json::Json, Serialize},
};

use crate::domain::errors::{AuthenticationError, LoginProviderError, PersistenceError};

// Error body following the "Problem Details for HTTP APIs" RFC: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Serialize, Debug, Clone)]
#[serde(crate = "rocket::serde")]
pub struct Problem {
    title: String,
    detail: String,
    status: u16,
}

pub type ProblemResponse = status::Custom<Json<Problem>>;

pub fn new_response(status: Status, title: &str, detail: String) -> ProblemResponse {
    status::Custom(
        status,
        Json(Problem {
            title: title.to_string(),
            detail,
            status: status.code,
        }),
    )
}

impl From<AuthenticationError> for ProblemResponse {
    fn from(error: AuthenticationError) -> Self {
        match error {
            AuthenticationError::InvalidToken(e) => {
                warn!("Rejected login attempt. Error: {}", e);
                new_response(Status::Unauthorized, "Invalid token", e.message)
            }
            AuthenticationError::UnsupportedPlatform(platform) => new_response(
                Status::NotFound,
                "Unsupported platform",
                format!("Login from {} is not supported", platform),
            ),
            AuthenticationError::LoginProvider(LoginProviderError::Transport(e)) => {
                error!("Identity provider unreachable. Error: {}", e);
                new_response(
                    Status::BadGateway,
                    "Identity provider unreachable",
                    "Failed to reach the identity provider, please retry later".to_string(),
                )
            }
        }
    }
}

impl From<PersistenceError> for ProblemResponse {
    fn from(error: PersistenceError) -> Self {
        error!("Article persistence failure. Error: {}", error);
        new_response(
            Status::InternalServerError,
            "Persistence failure",
            error.to_string(),
        )
    }
}
