use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository;

pub mod api_responses;
pub mod resource_responses;
pub mod semester_responses;
pub mod subject_responses;

pub type NoContent = ();

/// represents a basic json message
#[derive(Responder, Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BasicMessage {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone)]
#[serde(crate = "rocket::serde")]
pub struct SemesterApi {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone)]
#[serde(crate = "rocket::serde")]
pub struct SubjectApi {
    pub id: String,
    pub name: String,
    pub semester_id: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone)]
#[serde(crate = "rocket::serde")]
pub struct ResourceApi {
    pub id: String,
    pub title: String,
    pub drive_link: String,
    pub subject_id: String,
}

/// returned from a successful login. `expires_at` is in seconds since the unix epoch
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct SessionApi {
    pub token: String,
    pub expires_at: u64,
}

// ----------------------------------

impl BasicMessage {
    pub fn new(message: &str) -> Json<BasicMessage> {
        Json::from(BasicMessage {
            message: message.to_string(),
        })
    }
}

impl From<repository::Semester> for SemesterApi {
    fn from(value: repository::Semester) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl From<repository::Subject> for SubjectApi {
    fn from(value: repository::Subject) -> Self {
        Self {
            id: value.id,
            name: value.name,
            semester_id: value.semester_id,
        }
    }
}

impl From<repository::Resource> for ResourceApi {
    fn from(value: repository::Resource) -> Self {
        Self {
            id: value.id,
            title: value.title,
            drive_link: value.drive_link,
            subject_id: value.subject_id,
        }
    }
}
