use rocket::serde::json::Json;

use crate::guard::SessionAuth;
use crate::model::error::resource_errors::CreateResourceError;
use crate::model::request::CreateResourceRequest;
use crate::model::response::resource_responses::{
    CreateResourceResponse, DeleteResourceResponse, GetResourcesResponse,
};
use crate::model::response::BasicMessage;
use crate::service::resource_service;

#[get("/?<subject_id>")]
pub fn get_resources(subject_id: Option<&str>) -> GetResourcesResponse {
    let Some(subject_id) = subject_id else {
        return GetResourcesResponse::MissingFilter(BasicMessage::new(
            "The `subject_id` query parameter is required.",
        ));
    };
    match resource_service::get_resources(subject_id) {
        Ok(resources) => GetResourcesResponse::Success(Json::from(resources)),
        Err(_) => GetResourcesResponse::ResourceDbError(BasicMessage::new(
            "Failed to pull resources from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<resource>")]
pub fn create_resource(
    resource: Json<CreateResourceRequest>,
    auth: SessionAuth,
) -> CreateResourceResponse {
    if let Some(message) = auth.validate().rejection() {
        return CreateResourceResponse::Unauthorized(message);
    }
    match resource_service::create_resource(resource.into_inner()) {
        Ok(created) => CreateResourceResponse::Success(Json::from(created)),
        Err(CreateResourceError::MissingTitle) => {
            CreateResourceResponse::BadRequest(BasicMessage::new("A resource needs a title."))
        }
        Err(CreateResourceError::MissingLink) => {
            CreateResourceResponse::BadRequest(BasicMessage::new("A resource needs a drive link."))
        }
        Err(CreateResourceError::InvalidLink) => CreateResourceResponse::BadRequest(
            BasicMessage::new("The drive link must be an http(s) url."),
        ),
        Err(CreateResourceError::SubjectNotFound) => CreateResourceResponse::SubjectNotFound(
            BasicMessage::new("The subject with the passed id could not be found."),
        ),
        Err(CreateResourceError::DbError) => CreateResourceResponse::ResourceDbError(
            BasicMessage::new("Failed to save resource to database. Check server logs for details"),
        ),
    }
}

#[delete("/<id>")]
pub fn delete_resource(id: &str, auth: SessionAuth) -> DeleteResourceResponse {
    if let Some(message) = auth.validate().rejection() {
        return DeleteResourceResponse::Unauthorized(message);
    }
    match resource_service::delete_resource(id) {
        Ok(()) => DeleteResourceResponse::Success(()),
        Err(_) => DeleteResourceResponse::ResourceDbError(BasicMessage::new(
            "Failed to delete resource from database. Check server logs for details.",
        )),
    }
}
