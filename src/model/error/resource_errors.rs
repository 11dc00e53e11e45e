#[derive(PartialEq, Debug)]
pub enum GetResourcesError {
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum CreateResourceError {
    /// the title was empty or only whitespace
    MissingTitle,
    /// the drive link was empty or only whitespace
    MissingLink,
    /// the drive link isn't shaped like an http(s) url
    InvalidLink,
    /// no subject exists with the requested `subject_id`
    SubjectNotFound,
    /// the database failed to save the resource
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteResourceError {
    DbError,
}
