use rocket::serde::json::Json;
use rocket::serde::Serialize;

use crate::model::response::{BasicMessage, SessionApi};

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ApiVersion {
    pub version: &'static str,
}

#[derive(Responder)]
pub enum LoginResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<SessionApi>),
    #[response(status = 401, content_type = "json")]
    BadPasscode(Json<BasicMessage>),
}
