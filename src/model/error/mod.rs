pub mod auth_errors;
pub mod resource_errors;
pub mod semester_errors;
pub mod subject_errors;
