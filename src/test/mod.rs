use std::fs::remove_file;
use std::path::Path;

use rocket::http::Header;
use rocket::local::blocking::Client;

use crate::repository::{
    initialize_db, open_connection, resource_repository, semester_repository, subject_repository,
};
use crate::service::auth_service;


/// the passcode the default config ships with
pub static PASSCODE: &str = "150206";

pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

/// starts the current test with an empty database of its own
pub fn init_db_folder() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
    initialize_db().unwrap();
}

pub fn cleanup() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
}

pub fn client() -> Client {
    Client::tracked(crate::rocket()).unwrap()
}

/// an authorization header carrying a freshly issued session token
pub fn auth_header() -> Header<'static> {
    let session = auth_service::login(PASSCODE).unwrap();
    Header::new("Authorization", format!("Bearer {}", session.token))
}

pub fn create_semester_db_entry(name: &str) -> String {
    let connection = open_connection().unwrap();
    let id = semester_repository::create_semester(name, &connection)
        .unwrap()
        .id;
    connection.close().unwrap();
    id
}

pub fn create_subject_db_entry(name: &str, semester_id: &str) -> String {
    let connection = open_connection().unwrap();
    let id = subject_repository::create_subject(name, semester_id, &connection)
        .unwrap()
        .id;
    connection.close().unwrap();
    id
}

pub fn create_resource_db_entry(title: &str, drive_link: &str, subject_id: &str) -> String {
    let connection = open_connection().unwrap();
    let id = resource_repository::create_resource(title, drive_link, subject_id, &connection)
        .unwrap()
        .id;
    connection.close().unwrap();
    id
}
