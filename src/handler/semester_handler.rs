use rocket::serde::json::Json;

use crate::guard::SessionAuth;
use crate::model::error::semester_errors::CreateSemesterError;
use crate::model::request::CreateSemesterRequest;
use crate::model::response::semester_responses::{
    CreateSemesterResponse, DeleteSemesterResponse, GetSemestersResponse,
};
use crate::model::response::BasicMessage;
use crate::service::semester_service;

#[get("/")]
pub fn get_semesters() -> GetSemestersResponse {
    match semester_service::get_semesters() {
        Ok(semesters) => GetSemestersResponse::Success(Json::from(semesters)),
        Err(_) => GetSemestersResponse::SemesterDbError(BasicMessage::new(
            "Failed to pull semesters from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<semester>")]
pub fn create_semester(
    semester: Json<CreateSemesterRequest>,
    auth: SessionAuth,
) -> CreateSemesterResponse {
    if let Some(message) = auth.validate().rejection() {
        return CreateSemesterResponse::Unauthorized(message);
    }
    match semester_service::create_semester(semester.into_inner()) {
        Ok(created) => CreateSemesterResponse::Success(Json::from(created)),
        Err(CreateSemesterError::MissingName) => CreateSemesterResponse::BadRequest(
            BasicMessage::new("A semester needs a name."),
        ),
        Err(CreateSemesterError::DbError) => CreateSemesterResponse::SemesterDbError(
            BasicMessage::new("Failed to save semester to database. Check server logs for details"),
        ),
    }
}

#[delete("/<id>")]
pub fn delete_semester(id: &str, auth: SessionAuth) -> DeleteSemesterResponse {
    if let Some(message) = auth.validate().rejection() {
        return DeleteSemesterResponse::Unauthorized(message);
    }
    match semester_service::delete_semester(id) {
        Ok(()) => DeleteSemesterResponse::Success(()),
        Err(_) => DeleteSemesterResponse::SemesterDbError(BasicMessage::new(
            "Failed to delete semester from database. Check server logs for details.",
        )),
    }
}
