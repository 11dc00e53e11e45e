use crate::model::error::subject_errors::{
    CreateSubjectError, DeleteSubjectError, GetSubjectsError,
};
use crate::model::request::CreateSubjectRequest;
use crate::model::response::SubjectApi;
use crate::repository::{
    close_connection, is_foreign_key_violation, open_connection, subject_repository,
};
use crate::service::{log_db_error, required};

/// returns the subjects of the semester ordered by name. An unknown semester simply has no subjects
pub fn get_subjects(semester_id: &str) -> Result<Vec<SubjectApi>, GetSubjectsError> {
    let con = open_connection().map_err(|e| {
        log_db_error("open a database connection", &e);
        GetSubjectsError::DbError
    })?;
    let subjects = subject_repository::get_subjects_for_semester(semester_id, &con);
    close_connection(con);
    match subjects {
        Ok(subjects) => Ok(subjects.into_iter().map(SubjectApi::from).collect()),
        Err(e) => {
            log_db_error(&format!("retrieve subjects for semester {semester_id}"), &e);
            Err(GetSubjectsError::DbError)
        }
    }
}

pub fn create_subject(request: CreateSubjectRequest) -> Result<SubjectApi, CreateSubjectError> {
    let Some(name) = required(&request.name) else {
        return Err(CreateSubjectError::MissingName);
    };
    let con = open_connection().map_err(|e| {
        log_db_error("open a database connection", &e);
        CreateSubjectError::DbError
    })?;
    let created = subject_repository::create_subject(name, &request.semester_id, &con);
    close_connection(con);
    match created {
        Ok(subject) => {
            log::info!(
                "Created subject {} ({}) in semester {}",
                subject.name,
                subject.id,
                subject.semester_id
            );
            Ok(SubjectApi::from(subject))
        }
        Err(e) if is_foreign_key_violation(&e) => {
            log::warn!(
                "Refusing to create subject {name}, semester {} does not exist",
                request.semester_id
            );
            Err(CreateSubjectError::SemesterNotFound)
        }
        Err(e) => {
            log_db_error(&format!("create subject {name}"), &e);
            Err(CreateSubjectError::DbError)
        }
    }
}

/// deletes the subject along with its resources. Does nothing if that subject doesn't exist
pub fn delete_subject(id: &str) -> Result<(), DeleteSubjectError> {
    let con = open_connection().map_err(|e| {
        log_db_error("open a database connection", &e);
        DeleteSubjectError::DbError
    })?;
    let deleted = subject_repository::delete_subject(id, &con);
    close_connection(con);
    if let Err(e) = deleted {
        log_db_error(&format!("delete subject with id {id}"), &e);
        return Err(DeleteSubjectError::DbError);
    }
    log::info!("Deleted subject {id}");
    Ok(())
}
