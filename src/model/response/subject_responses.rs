use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, NoContent, SubjectApi};

#[derive(Responder)]
pub enum GetSubjectsResponse {
    #[response(status = 200)]
    Success(Json<Vec<SubjectApi>>),
    /// the `semester_id` filter is required
    #[response(status = 400, content_type = "json")]
    MissingFilter(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    SubjectDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum CreateSubjectResponse {
    #[response(status = 201, content_type = "json")]
    Success(Json<SubjectApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 404, content_type = "json")]
    SemesterNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    SubjectDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteSubjectResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 500, content_type = "json")]
    SubjectDbError(Json<BasicMessage>),
}
