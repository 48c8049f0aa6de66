use rocket::http::Status;

#[get("/health")]
pub fn health_check() -> Status {
    Status::Ok
}
