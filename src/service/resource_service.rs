use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::error::resource_errors::{
    CreateResourceError, DeleteResourceError, GetResourcesError,
};
use crate::model::request::CreateResourceRequest;
use crate::model::response::ResourceApi;
use crate::repository::{
    close_connection, is_foreign_key_violation, open_connection, resource_repository,
};
use crate::service::{log_db_error, required};

/// links only need to look like a url, nothing checks that they resolve
static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)https?://[^\s/$.?#][^\s]*$").expect("link pattern is a valid regex")
});

pub fn is_url_shaped(link: &str) -> bool {
    LINK_PATTERN.is_match(link)
}

/// returns the resources of the subject ordered by title
pub fn get_resources(subject_id: &str) -> Result<Vec<ResourceApi>, GetResourcesError> {
    let con = open_connection().map_err(|e| {
        log_db_error("open a database connection", &e);
        GetResourcesError::DbError
    })?;
    let resources = resource_repository::get_resources_for_subject(subject_id, &con);
    close_connection(con);
    match resources {
        Ok(resources) => Ok(resources.into_iter().map(ResourceApi::from).collect()),
        Err(e) => {
            log_db_error(&format!("retrieve resources for subject {subject_id}"), &e);
            Err(GetResourcesError::DbError)
        }
    }
}

pub fn create_resource(
    request: CreateResourceRequest,
) -> Result<ResourceApi, CreateResourceError> {
    let Some(title) = required(&request.title) else {
        return Err(CreateResourceError::MissingTitle);
    };
    let Some(drive_link) = required(&request.drive_link) else {
        return Err(CreateResourceError::MissingLink);
    };
    if !is_url_shaped(drive_link) {
        return Err(CreateResourceError::InvalidLink);
    }
    let con = open_connection().map_err(|e| {
        log_db_error("open a database connection", &e);
        CreateResourceError::DbError
    })?;
    let created =
        resource_repository::create_resource(title, drive_link, &request.subject_id, &con);
    close_connection(con);
    match created {
        Ok(resource) => {
            log::info!(
                "Created resource {} ({}) in subject {}",
                resource.title,
                resource.id,
                resource.subject_id
            );
            Ok(ResourceApi::from(resource))
        }
        Err(e) if is_foreign_key_violation(&e) => {
            log::warn!(
                "Refusing to create resource {title}, subject {} does not exist",
                request.subject_id
            );
            Err(CreateResourceError::SubjectNotFound)
        }
        Err(e) => {
            log_db_error(&format!("create resource {title}"), &e);
            Err(CreateResourceError::DbError)
        }
    }
}

pub fn delete_resource(id: &str) -> Result<(), DeleteResourceError> {
    let con = open_connection().map_err(|e| {
        log_db_error("open a database connection", &e);
        DeleteResourceError::DbError
    })?;
    let deleted = resource_repository::delete_resource(id, &con);
    close_connection(con);
    if let Err(e) = deleted {
        log_db_error(&format!("delete resource with id {id}"), &e);
        return Err(DeleteResourceError::DbError);
    }
    log::info!("Deleted resource {id}");
    Ok(())
}
