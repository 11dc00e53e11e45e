#[derive(PartialEq, Debug)]
pub enum GetSemestersError {
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum CreateSemesterError {
    /// the name was empty or only whitespace
    MissingName,
    /// the database failed to save the semester
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteSemesterError {
    DbError,
}
