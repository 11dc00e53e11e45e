use rusqlite::Connection;

use crate::model::repository::Resource;

/// inserts a resource under the passed subject. Fails with a foreign key violation if the subject doesn't exist
pub fn create_resource(
    title: &str,
    drive_link: &str,
    subject_id: &str,
    con: &Connection,
) -> Result<Resource, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/resources/create_resource.sql"
    ))?;
    pst.query_row(
        rusqlite::params![title, drive_link, subject_id],
        resource_mapper,
    )
}

/// retrieves the resources of a subject, ordered by title
pub fn get_resources_for_subject(
    subject_id: &str,
    con: &Connection,
) -> Result<Vec<Resource>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/resources/get_resources_for_subject.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![subject_id], resource_mapper)?;
    rows.collect::<Result<Vec<Resource>, rusqlite::Error>>()
}

pub fn delete_resource(id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/resources/delete_resource.sql"
    ))?;
    pst.execute(rusqlite::params![id])?;
    Ok(())
}

fn resource_mapper(row: &rusqlite::Row) -> Result<Resource, rusqlite::Error> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let drive_link: String = row.get(2)?;
    let subject_id: String = row.get(3)?;
    Ok(Resource {
        id,
        title,
        drive_link,
        subject_id,
    })
}
