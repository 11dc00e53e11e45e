use rocket::serde::json::Json;

use crate::model::error::auth_errors::LoginError;
use crate::model::request::LoginRequest;
use crate::model::response::api_responses::{ApiVersion, LoginResponse};
use crate::model::response::BasicMessage;
use crate::service::auth_service;

static API_VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

#[get("/version")]
pub fn api_version() -> Json<ApiVersion> {
    Json(ApiVersion {
        version: API_VERSION_NUMBER,
    })
}

#[post("/login", data = "<login>")]
pub fn login(login: Json<LoginRequest>) -> LoginResponse {
    match auth_service::login(&login.passcode) {
        Ok(session) => LoginResponse::Success(Json::from(session)),
        Err(LoginError::BadPasscode) => {
            LoginResponse::BadPasscode(BasicMessage::new("Incorrect passcode"))
        }
    }
}
