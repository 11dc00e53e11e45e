pub mod api_handler;
pub mod resource_handler;
pub mod semester_handler;
pub mod shell_handler;
pub mod subject_handler;
