use std::fmt;

use crate::model::error::auth_errors::LoginError;
use crate::model::error::resource_errors::{
    CreateResourceError, DeleteResourceError, GetResourcesError,
};
use crate::model::error::semester_errors::{
    CreateSemesterError, DeleteSemesterError, GetSemestersError,
};
use crate::model::error::subject_errors::{
    CreateSubjectError, DeleteSubjectError, GetSubjectsError,
};
use crate::model::request::{CreateResourceRequest, CreateSemesterRequest, CreateSubjectRequest};
use crate::model::response::{ResourceApi, SemesterApi, SubjectApi};
use crate::model::service::CheckSessionResult;
use crate::service::{auth_service, resource_service, semester_service, subject_service};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceErrorKind {
    /// the store refused the write, usually a missing parent
    Constraint,
    /// the session was missing, expired or forged
    Unauthorized,
    /// the store rejected the submitted fields
    Validation,
    /// the store failed internally
    Store,
}

/// any failure reported by the catalog store. The message is the store's own reason and is meant
/// for logs, not for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceError {
    pub kind: PersistenceErrorKind,
    pub message: String,
}

impl PersistenceError {
    pub fn new(kind: PersistenceErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PersistenceError {}

/// The calls the catalog screens make against the store. One call per operation, no retries,
/// no caching. A failure is reported to the caller exactly once.
///
/// Writes carry the session token from [`crate::client::auth::AuthGate::token`]. A missing,
/// expired or forged token fails with [`PersistenceErrorKind::Unauthorized`]
#[rocket::async_trait]
pub trait CatalogApi: Send + Sync {
    /// every semester, ordered by name
    async fn list_semesters(&self) -> Result<Vec<SemesterApi>, PersistenceError>;
    async fn create_semester(&self, token: &str, name: &str)
        -> Result<SemesterApi, PersistenceError>;
    async fn delete_semester(&self, token: &str, id: &str) -> Result<(), PersistenceError>;

    /// the subjects of one semester, ordered by name
    async fn list_subjects(&self, semester_id: &str) -> Result<Vec<SubjectApi>, PersistenceError>;
    async fn create_subject(
        &self,
        token: &str,
        name: &str,
        semester_id: &str,
    ) -> Result<SubjectApi, PersistenceError>;
    async fn delete_subject(&self, token: &str, id: &str) -> Result<(), PersistenceError>;

    /// the resources of one subject, ordered by title
    async fn list_resources(&self, subject_id: &str)
        -> Result<Vec<ResourceApi>, PersistenceError>;
    async fn create_resource(
        &self,
        token: &str,
        title: &str,
        drive_link: &str,
        subject_id: &str,
    ) -> Result<ResourceApi, PersistenceError>;
    async fn delete_resource(&self, token: &str, id: &str) -> Result<(), PersistenceError>;

    /// exchanges the admin passcode for a session token. `Ok(None)` means the code was wrong
    async fn login(&self, passcode: &str) -> Result<Option<String>, PersistenceError>;
}

/// [`CatalogApi`] backed directly by this crate's services, for screens running in the same process as the store
#[derive(Debug, Default, Clone, Copy)]
pub struct ServiceCatalogApi;

#[rocket::async_trait]
impl CatalogApi for ServiceCatalogApi {
    async fn list_semesters(&self) -> Result<Vec<SemesterApi>, PersistenceError> {
        Ok(semester_service::get_semesters()?)
    }

    async fn create_semester(
        &self,
        token: &str,
        name: &str,
    ) -> Result<SemesterApi, PersistenceError> {
        authorize(token)?;
        Ok(semester_service::create_semester(CreateSemesterRequest {
            name: name.to_string(),
        })?)
    }

    async fn delete_semester(&self, token: &str, id: &str) -> Result<(), PersistenceError> {
        authorize(token)?;
        Ok(semester_service::delete_semester(id)?)
    }

    async fn list_subjects(&self, semester_id: &str) -> Result<Vec<SubjectApi>, PersistenceError> {
        Ok(subject_service::get_subjects(semester_id)?)
    }

    async fn create_subject(
        &self,
        token: &str,
        name: &str,
        semester_id: &str,
    ) -> Result<SubjectApi, PersistenceError> {
        authorize(token)?;
        Ok(subject_service::create_subject(CreateSubjectRequest {
            name: name.to_string(),
            semester_id: semester_id.to_string(),
        })?)
    }

    async fn delete_subject(&self, token: &str, id: &str) -> Result<(), PersistenceError> {
        authorize(token)?;
        Ok(subject_service::delete_subject(id)?)
    }

    async fn list_resources(
        &self,
        subject_id: &str,
    ) -> Result<Vec<ResourceApi>, PersistenceError> {
        Ok(resource_service::get_resources(subject_id)?)
    }

    async fn create_resource(
        &self,
        token: &str,
        title: &str,
        drive_link: &str,
        subject_id: &str,
    ) -> Result<ResourceApi, PersistenceError> {
        authorize(token)?;
        Ok(resource_service::create_resource(CreateResourceRequest {
            title: title.to_string(),
            drive_link: drive_link.to_string(),
            subject_id: subject_id.to_string(),
        })?)
    }

    async fn delete_resource(&self, token: &str, id: &str) -> Result<(), PersistenceError> {
        authorize(token)?;
        Ok(resource_service::delete_resource(id)?)
    }

    async fn login(&self, passcode: &str) -> Result<Option<String>, PersistenceError> {
        match auth_service::login(passcode) {
            Ok(session) => Ok(Some(session.token)),
            Err(LoginError::BadPasscode) => Ok(None),
        }
    }
}

// ----------------------------------

/// the same session check the bearer guard runs for the HTTP routes
fn authorize(token: &str) -> Result<(), PersistenceError> {
    match auth_service::check_session(token) {
        CheckSessionResult::Valid => Ok(()),
        CheckSessionResult::Expired => Err(PersistenceError::new(
            PersistenceErrorKind::Unauthorized,
            "the admin session has expired",
        )),
        CheckSessionResult::Invalid => Err(PersistenceError::new(
            PersistenceErrorKind::Unauthorized,
            "no valid admin session",
        )),
    }
}

fn store_error(entity: &str) -> PersistenceError {
    PersistenceError::new(
        PersistenceErrorKind::Store,
        &format!("the store failed to handle the {entity}"),
    )
}

impl From<GetSemestersError> for PersistenceError {
    fn from(_: GetSemestersError) -> Self {
        store_error("semester list")
    }
}

impl From<CreateSemesterError> for PersistenceError {
    fn from(value: CreateSemesterError) -> Self {
        match value {
            CreateSemesterError::MissingName => {
                PersistenceError::new(PersistenceErrorKind::Validation, "a semester needs a name")
            }
            CreateSemesterError::DbError => store_error("new semester"),
        }
    }
}

impl From<DeleteSemesterError> for PersistenceError {
    fn from(_: DeleteSemesterError) -> Self {
        store_error("semester delete")
    }
}

impl From<GetSubjectsError> for PersistenceError {
    fn from(_: GetSubjectsError) -> Self {
        store_error("subject list")
    }
}

impl From<CreateSubjectError> for PersistenceError {
    fn from(value: CreateSubjectError) -> Self {
        match value {
            CreateSubjectError::MissingName => {
                PersistenceError::new(PersistenceErrorKind::Validation, "a subject needs a name")
            }
            CreateSubjectError::SemesterNotFound => PersistenceError::new(
                PersistenceErrorKind::Constraint,
                "the subject's semester does not exist",
            ),
            CreateSubjectError::DbError => store_error("new subject"),
        }
    }
}

impl From<DeleteSubjectError> for PersistenceError {
    fn from(_: DeleteSubjectError) -> Self {
        store_error("subject delete")
    }
}

impl From<GetResourcesError> for PersistenceError {
    fn from(_: GetResourcesError) -> Self {
        store_error("resource list")
    }
}

impl From<CreateResourceError> for PersistenceError {
    fn from(value: CreateResourceError) -> Self {
        match value {
            CreateResourceError::MissingTitle => {
                PersistenceError::new(PersistenceErrorKind::Validation, "a resource needs a title")
            }
            CreateResourceError::MissingLink => PersistenceError::new(
                PersistenceErrorKind::Validation,
                "a resource needs a drive link",
            ),
            CreateResourceError::InvalidLink => PersistenceError::new(
                PersistenceErrorKind::Validation,
                "the drive link is not an http(s) url",
            ),
            CreateResourceError::SubjectNotFound => PersistenceError::new(
                PersistenceErrorKind::Constraint,
                "the resource's subject does not exist",
            ),
            CreateResourceError::DbError => store_error("new resource"),
        }
    }
}

impl From<DeleteResourceError> for PersistenceError {
    fn from(_: DeleteResourceError) -> Self {
        store_error("resource delete")
    }
}
