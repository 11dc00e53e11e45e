use rocket::serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct CreateSemesterRequest {
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct CreateSubjectRequest {
    pub name: String,
    pub semester_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct CreateResourceRequest {
    pub title: String,
    pub drive_link: String,
    pub subject_id: String,
}

/// the body of `POST /api/login`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct LoginRequest {
    pub passcode: String,
}
