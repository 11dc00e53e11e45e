use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;

use crate::model::service::CheckSessionResult;
use crate::service::auth_service;

/// used to represent the result of calling `SessionAuth::validate`
#[derive(PartialEq, Debug)]
pub enum ValidateResult {
    Ok,
    Expired,
    Invalid,
}

/// the session token a client got from `POST /api/login`, sent back as `Authorization: Bearer <token>`
#[derive(Debug)]
pub struct SessionAuth {
    pub token: String,
}

impl SessionAuth {
    /// creates a `SessionAuth` object from the passed header value.
    /// The value of header must be a bearer token
    pub fn from(header: &str) -> Result<SessionAuth, &str> {
        match header.strip_prefix("Bearer ").map(str::trim) {
            Some(token) if !token.is_empty() => Ok(SessionAuth {
                token: token.to_string(),
            }),
            Some(_) => Err("Invalid bearer auth format: missing token"),
            None => Err("Invalid bearer auth format: not a bearer token"),
        }
    }

    /// checks the token's signature and expiry
    ///
    /// _this is a convenience method to be used only in handlers_
    pub fn validate(&self) -> ValidateResult {
        match auth_service::check_session(&self.token) {
            CheckSessionResult::Valid => ValidateResult::Ok,
            CheckSessionResult::Expired => ValidateResult::Expired,
            CheckSessionResult::Invalid => ValidateResult::Invalid,
        }
    }
}

impl ValidateResult {
    /// the message to send back for a rejected session, or `None` if the session is fine
    pub fn rejection(&self) -> Option<String> {
        match self {
            ValidateResult::Ok => None,
            ValidateResult::Expired => Some(
                "Session expired. You can start a new one by making a POST to `/api/login`"
                    .to_string(),
            ),
            ValidateResult::Invalid => Some("Bad Credentials".to_string()),
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionAuth {
    type Error = AuthError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.headers().get_one("Authorization") {
            None => Outcome::Error((Status::Unauthorized, AuthError::Missing)),
            Some(value) => match SessionAuth::from(value) {
                Ok(auth) => Outcome::Success(auth),
                Err(_) => Outcome::Error((Status::Unauthorized, AuthError::Invalid)),
            },
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    Missing,
    Invalid,
}
