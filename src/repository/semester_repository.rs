use rusqlite::Connection;

use crate::model::repository::Semester;

/// inserts a semester and returns it with the id the database generated for it
pub fn create_semester(name: &str, con: &Connection) -> Result<Semester, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/semesters/create_semester.sql"
    ))?;
    pst.query_row(rusqlite::params![name], semester_mapper)
}

/// retrieves every semester, ordered by name
pub fn get_semesters(con: &Connection) -> Result<Vec<Semester>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/semesters/get_all_semesters.sql"
    ))?;
    let rows = pst.query_map([], semester_mapper)?;
    rows.collect::<Result<Vec<Semester>, rusqlite::Error>>()
}

/// deletes the semester. Its subjects and their resources are removed by the foreign key cascade.
/// Deleting an id that doesn't exist is not an error
pub fn delete_semester(id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/semesters/delete_semester.sql"
    ))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

fn semester_mapper(row: &rusqlite::Row) -> Result<Semester, rusqlite::Error> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    Ok(Semester { id, name })
}
