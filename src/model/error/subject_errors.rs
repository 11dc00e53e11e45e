#[derive(PartialEq, Debug)]
pub enum GetSubjectsError {
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum CreateSubjectError {
    /// the name was empty or only whitespace
    MissingName,
    /// no semester exists with the requested `semester_id`
    SemesterNotFound,
    /// the database failed to save the subject
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteSubjectError {
    DbError,
}
