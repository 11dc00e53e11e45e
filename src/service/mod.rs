use std::backtrace::Backtrace;

pub mod auth_service;
pub mod resource_service;
pub mod semester_service;
pub mod subject_service;


/// logs a failed database action with a captured backtrace. Callers then collapse the error into their own enum
fn log_db_error(action: &str, e: &rusqlite::Error) {
    log::error!(
        "Failed to {action}! Error is {e:?}\n{}",
        Backtrace::force_capture()
    );
}

/// trims `value`, returning `None` if nothing is left
fn required(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
