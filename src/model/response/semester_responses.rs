use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, NoContent, SemesterApi};

#[derive(Responder)]
pub enum GetSemestersResponse {
    #[response(status = 200)]
    Success(Json<Vec<SemesterApi>>),
    #[response(status = 500, content_type = "json")]
    SemesterDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum CreateSemesterResponse {
    #[response(status = 201, content_type = "json")]
    Success(Json<SemesterApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 500, content_type = "json")]
    SemesterDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteSemesterResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 500, content_type = "json")]
    SemesterDbError(Json<BasicMessage>),
}
