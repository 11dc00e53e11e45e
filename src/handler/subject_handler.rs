use rocket::serde::json::Json;

use crate::guard::SessionAuth;
use crate::model::error::subject_errors::CreateSubjectError;
use crate::model::request::CreateSubjectRequest;
use crate::model::response::subject_responses::{
    CreateSubjectResponse, DeleteSubjectResponse, GetSubjectsResponse,
};
use crate::model::response::BasicMessage;
use crate::service::subject_service;

#[get("/?<semester_id>")]
pub fn get_subjects(semester_id: Option<&str>) -> GetSubjectsResponse {
    let Some(semester_id) = semester_id else {
        return GetSubjectsResponse::MissingFilter(BasicMessage::new(
            "The `semester_id` query parameter is required.",
        ));
    };
    match subject_service::get_subjects(semester_id) {
        Ok(subjects) => GetSubjectsResponse::Success(Json::from(subjects)),
        Err(_) => GetSubjectsResponse::SubjectDbError(BasicMessage::new(
            "Failed to pull subjects from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<subject>")]
pub fn create_subject(
    subject: Json<CreateSubjectRequest>,
    auth: SessionAuth,
) -> CreateSubjectResponse {
    if let Some(message) = auth.validate().rejection() {
        return CreateSubjectResponse::Unauthorized(message);
    }
    match subject_service::create_subject(subject.into_inner()) {
        Ok(created) => CreateSubjectResponse::Success(Json::from(created)),
        Err(CreateSubjectError::MissingName) => {
            CreateSubjectResponse::BadRequest(BasicMessage::new("A subject needs a name."))
        }
        Err(CreateSubjectError::SemesterNotFound) => CreateSubjectResponse::SemesterNotFound(
            BasicMessage::new("The semester with the passed id could not be found."),
        ),
        Err(CreateSubjectError::DbError) => CreateSubjectResponse::SubjectDbError(
            BasicMessage::new("Failed to save subject to database. Check server logs for details"),
        ),
    }
}

#[delete("/<id>")]
pub fn delete_subject(id: &str, auth: SessionAuth) -> DeleteSubjectResponse {
    if let Some(message) = auth.validate().rejection() {
        return DeleteSubjectResponse::Unauthorized(message);
    }
    match subject_service::delete_subject(id) {
        Ok(()) => DeleteSubjectResponse::Success(()),
        Err(_) => DeleteSubjectResponse::SubjectDbError(BasicMessage::new(
            "Failed to delete subject from database. Check server logs for details.",
        )),
    }
}
