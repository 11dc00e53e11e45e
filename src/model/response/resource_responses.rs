use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, NoContent, ResourceApi};

#[derive(Responder)]
pub enum GetResourcesResponse {
    #[response(status = 200)]
    Success(Json<Vec<ResourceApi>>),
    /// the `subject_id` filter is required
    #[response(status = 400, content_type = "json")]
    MissingFilter(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    ResourceDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum CreateResourceResponse {
    #[response(status = 201, content_type = "json")]
    Success(Json<ResourceApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 404, content_type = "json")]
    SubjectNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    ResourceDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteResourceResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 401)]
    Unauthorized(String),
    #[response(status = 500, content_type = "json")]
    ResourceDbError(Json<BasicMessage>),
}
