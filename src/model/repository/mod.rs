/// a row of the `semesters` table
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Semester {
    /// assigned by the database on insert
    pub id: String,
    /// display label, usually an academic term code such as `4-2`
    pub name: String,
}

/// a row of the `subjects` table. Always belongs to exactly one [`Semester`]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub semester_id: String,
}

/// a row of the `resources` table. Always belongs to exactly one [`Subject`]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Resource {
    pub id: String,
    pub title: String,
    /// link to the material on an external drive. Only checked for being url-shaped
    pub drive_link: String,
    pub subject_id: String,
}
