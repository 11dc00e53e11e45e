use std::collections::BTreeMap;

use crate::client::api::{CatalogApi, PersistenceError};
use crate::client::list_state::{ListState, Ticket};
use crate::model::response::{ResourceApi, SemesterApi, SubjectApi};

/// the subjects of one expanded semester, plus whichever of them are expanded in turn
#[derive(Debug, Default)]
pub struct SubjectTree {
    subjects: ListState<SubjectApi>,
    expanded: BTreeMap<String, ListState<ResourceApi>>,
}

impl SubjectTree {
    pub fn subjects(&self) -> &ListState<SubjectApi> {
        &self.subjects
    }

    pub fn resources(&self, subject_id: &str) -> Option<&ListState<ResourceApi>> {
        self.expanded.get(subject_id)
    }

    pub fn is_expanded(&self, subject_id: &str) -> bool {
        self.expanded.contains_key(subject_id)
    }
}

/// The read-only accordion on the public page. Any number of semesters can be open at once, and
/// within each open semester any number of subjects.
///
/// Collapsing a node drops everything beneath it, so opening it again fetches fresh lists
#[derive(Debug, Default)]
pub struct PublicCatalog {
    semesters: ListState<SemesterApi>,
    expanded: BTreeMap<String, SubjectTree>,
}

impl PublicCatalog {
    /// starts the semester fetch done on mount
    pub fn begin_load(&mut self) -> Ticket {
        self.semesters.begin(None)
    }

    pub fn apply_semesters(
        &mut self,
        ticket: &Ticket,
        result: Result<Vec<SemesterApi>, PersistenceError>,
    ) -> bool {
        let items = or_empty(result, "semesters");
        self.semesters.resolve(ticket, items)
    }

    /// Opens or closes a semester. Opening it hands back the ticket for its subject fetch
    pub fn toggle_semester(&mut self, semester_id: &str) -> Option<Ticket> {
        if self.expanded.remove(semester_id).is_some() {
            return None;
        }
        let mut tree = SubjectTree::default();
        let ticket = tree.subjects.begin(Some(semester_id));
        self.expanded.insert(semester_id.to_string(), tree);
        Some(ticket)
    }

    /// stores a subject list for the semester named by the ticket. Dropped if that semester was collapsed since
    pub fn apply_subjects(
        &mut self,
        ticket: &Ticket,
        result: Result<Vec<SubjectApi>, PersistenceError>,
    ) -> bool {
        let items = or_empty(result, "subjects");
        match ticket
            .scope
            .as_deref()
            .and_then(|id| self.expanded.get_mut(id))
        {
            Some(tree) => tree.subjects.resolve(ticket, items),
            None => false,
        }
    }

    /// Opens or closes a subject inside an open semester. Does nothing if the semester is closed
    pub fn toggle_subject(&mut self, semester_id: &str, subject_id: &str) -> Option<Ticket> {
        let tree = self.expanded.get_mut(semester_id)?;
        if tree.expanded.remove(subject_id).is_some() {
            return None;
        }
        let mut resources = ListState::default();
        let ticket = resources.begin(Some(subject_id));
        tree.expanded.insert(subject_id.to_string(), resources);
        Some(ticket)
    }

    pub fn apply_resources(
        &mut self,
        semester_id: &str,
        ticket: &Ticket,
        result: Result<Vec<ResourceApi>, PersistenceError>,
    ) -> bool {
        let items = or_empty(result, "resources");
        let resources = ticket.scope.as_deref().and_then(|subject_id| {
            self.expanded
                .get_mut(semester_id)
                .and_then(|tree| tree.expanded.get_mut(subject_id))
        });
        match resources {
            Some(resources) => resources.resolve(ticket, items),
            None => false,
        }
    }

    /// fetches the semester list
    pub async fn load(&mut self, api: &dyn CatalogApi) {
        let ticket = self.begin_load();
        let result = api.list_semesters().await;
        self.apply_semesters(&ticket, result);
    }

    /// toggles a semester, fetching its subjects if it was opened
    pub async fn click_semester(&mut self, api: &dyn CatalogApi, semester_id: &str) {
        if let Some(ticket) = self.toggle_semester(semester_id) {
            let result = api.list_subjects(semester_id).await;
            self.apply_subjects(&ticket, result);
        }
    }

    /// toggles a subject, fetching its resources if it was opened
    pub async fn click_subject(&mut self, api: &dyn CatalogApi, semester_id: &str, subject_id: &str) {
        if let Some(ticket) = self.toggle_subject(semester_id, subject_id) {
            let result = api.list_resources(subject_id).await;
            self.apply_resources(semester_id, &ticket, result);
        }
    }

    pub fn semesters(&self) -> &ListState<SemesterApi> {
        &self.semesters
    }

    pub fn semester(&self, semester_id: &str) -> Option<&SubjectTree> {
        self.expanded.get(semester_id)
    }

    pub fn is_semester_expanded(&self, semester_id: &str) -> bool {
        self.expanded.contains_key(semester_id)
    }

    /// ids of the open semesters
    pub fn expanded_semesters(&self) -> Vec<&str> {
        self.expanded.keys().map(String::as_str).collect()
    }
}

/// a failed fetch on the public page is logged and shown as an empty list
fn or_empty<T>(result: Result<Vec<T>, PersistenceError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::error!("Error loading {what}: {e}");
        Vec::new()
    })
}
