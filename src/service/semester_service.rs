use crate::model::error::semester_errors::{
    CreateSemesterError, DeleteSemesterError, GetSemestersError,
};
use crate::model::request::CreateSemesterRequest;
use crate::model::response::SemesterApi;
use crate::repository::{close_connection, open_connection, semester_repository};
use crate::service::{log_db_error, required};

/// returns every semester ordered by name
pub fn get_semesters() -> Result<Vec<SemesterApi>, GetSemestersError> {
    let con = open_connection().map_err(|e| {
        log_db_error("open a database connection", &e);
        GetSemestersError::DbError
    })?;
    let semesters = semester_repository::get_semesters(&con);
    close_connection(con);
    match semesters {
        Ok(semesters) => Ok(semesters.into_iter().map(SemesterApi::from).collect()),
        Err(e) => {
            log_db_error("retrieve semesters", &e);
            Err(GetSemestersError::DbError)
        }
    }
}

/// creates a semester with the trimmed name from the request
pub fn create_semester(request: CreateSemesterRequest) -> Result<SemesterApi, CreateSemesterError> {
    let Some(name) = required(&request.name) else {
        return Err(CreateSemesterError::MissingName);
    };
    let con = open_connection().map_err(|e| {
        log_db_error("open a database connection", &e);
        CreateSemesterError::DbError
    })?;
    let created = semester_repository::create_semester(name, &con);
    close_connection(con);
    match created {
        Ok(semester) => {
            log::info!("Created semester {} ({})", semester.name, semester.id);
            Ok(SemesterApi::from(semester))
        }
        Err(e) => {
            log_db_error(&format!("create semester {name}"), &e);
            Err(CreateSemesterError::DbError)
        }
    }
}

/// deletes the semester along with everything under it. Does nothing if that semester doesn't exist
pub fn delete_semester(id: &str) -> Result<(), DeleteSemesterError> {
    let con = open_connection().map_err(|e| {
        log_db_error("open a database connection", &e);
        DeleteSemesterError::DbError
    })?;
    let deleted = semester_repository::delete_semester(id, &con);
    close_connection(con);
    if let Err(e) = deleted {
        log_db_error(&format!("delete semester with id {id}"), &e);
        return Err(DeleteSemesterError::DbError);
    }
    log::info!("Deleted semester {id}");
    Ok(())
}
