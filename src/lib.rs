#[macro_use]
extern crate rocket;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};

use handler::{
    api_handler::{api_version, login},
    resource_handler::{create_resource, delete_resource, get_resources},
    semester_handler::{create_semester, delete_semester, get_semesters},
    shell_handler::{admin_sub_view, admin_view, public_view},
    subject_handler::{create_subject, delete_subject, get_subjects},
};

use crate::config::CATALOG_CONFIG;
use crate::repository::initialize_db;

pub mod client;
pub mod config;
pub mod guard;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
#[cfg(test)]
mod test;

/// builds the catalog server. The database tables are created on ignite if they don't exist yet
pub fn rocket() -> Rocket<Build> {
    if CATALOG_CONFIG.auth.uses_default_token_secret() {
        log::warn!(
            "auth.tokensecret is still the default value, anyone can forge admin sessions. Set it in StudyCatalog.toml"
        );
    }
    rocket::build()
        .attach(AdHoc::try_on_ignite("Initialize database", |rocket| async {
            match initialize_db() {
                Ok(()) => Ok(rocket),
                Err(e) => {
                    log::error!("Failed to initialize the catalog database: {e:?}");
                    Err(rocket)
                }
            }
        }))
        .mount("/", routes![public_view, admin_view, admin_sub_view])
        .mount("/api", routes![api_version, login])
        .mount(
            "/semesters",
            routes![get_semesters, create_semester, delete_semester],
        )
        .mount(
            "/subjects",
            routes![get_subjects, create_subject, delete_subject],
        )
        .mount(
            "/resources",
            routes![get_resources, create_resource, delete_resource],
        )
}
