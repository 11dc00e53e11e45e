use rusqlite::Connection;

use crate::model::repository::Subject;

/// inserts a subject under the passed semester. Fails with a foreign key violation if the semester doesn't exist
pub fn create_subject(
    name: &str,
    semester_id: &str,
    con: &Connection,
) -> Result<Subject, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/subjects/create_subject.sql"))?;
    pst.query_row(rusqlite::params![name, semester_id], subject_mapper)
}

/// retrieves the subjects of a semester, ordered by name
pub fn get_subjects_for_semester(
    semester_id: &str,
    con: &Connection,
) -> Result<Vec<Subject>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/subjects/get_subjects_for_semester.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![semester_id], subject_mapper)?;
    rows.collect::<Result<Vec<Subject>, rusqlite::Error>>()
}

/// deletes the subject. Its resources are removed by the foreign key cascade
pub fn delete_subject(id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/subjects/delete_subject.sql"))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

fn subject_mapper(row: &rusqlite::Row) -> Result<Subject, rusqlite::Error> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let semester_id: String = row.get(2)?;
    Ok(Subject {
        id,
        name,
        semester_id,
    })
}
