use std::path::Path;

use rusqlite::{Connection, OpenFlags, Result};

pub mod metadata_repository;
pub mod resource_repository;
pub mod semester_repository;
pub mod subject_repository;


#[cfg(not(test))]
fn database_location() -> String {
    crate::config::CATALOG_CONFIG.database.location.clone()
}

#[cfg(test)]
fn database_location() -> String {
    format!("{}.sqlite", crate::test::current_thread_name())
}

/// creates a new connection with foreign keys enforced. Cascading deletes depend on that pragma,
/// and sqlite resets it for every connection
pub fn open_connection() -> Result<Connection> {
    let con = Connection::open_with_flags(
        Path::new(database_location().as_str()),
        OpenFlags::default(),
    )?;
    con.pragma_update(None, "foreign_keys", "ON")?;
    Ok(con)
}

/// closes the connection, logging instead of failing if sqlite refuses
pub fn close_connection(con: Connection) {
    if let Err((_, e)) = con.close() {
        log::warn!("Failed to close database connection: {e:?}");
    }
}

/// runs init.sql on the database
fn create_db(con: &Connection) -> Result<()> {
    con.execute_batch(include_str!("../assets/init.sql"))
}

/// handles checking if the database exists, creating the tables if not
pub fn initialize_db() -> Result<()> {
    let con = open_connection()?;
    let created = match metadata_repository::get_version(&con) {
        Ok(version) => {
            log::info!("Found catalog database at version {version}");
            Ok(())
        }
        Err(_) => {
            // tables haven't been created yet
            log::info!("No catalog tables found, creating them");
            create_db(&con)
        }
    };
    close_connection(con);
    created
}

/// true when `e` is sqlite rejecting a row because its parent reference doesn't exist
pub fn is_foreign_key_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}
