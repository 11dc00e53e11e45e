use crate::client::api::{CatalogApi, PersistenceError, PersistenceErrorKind};
use crate::client::forms::{EntityForm, ResourceForm, SemesterForm, SubjectForm, SubmitBlocked};
use crate::client::list_state::{ListState, Ticket};
use crate::client::notification::NotificationOverlay;
use crate::model::response::{ResourceApi, SemesterApi, SubjectApi};

pub const DELETE_SEMESTER_PROMPT: &str =
    "Are you sure you want to delete this semester and all its contents?";
pub const DELETE_SUBJECT_PROMPT: &str =
    "Are you sure you want to delete this subject and all its resources?";
pub const DELETE_RESOURCE_PROMPT: &str = "Are you sure you want to delete this resource?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// nothing was sent to the store
    Blocked(SubmitBlocked),
    Persistence(PersistenceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// the admin declined the confirmation, nothing was sent
    Cancelled,
    Deleted,
}

impl From<SubmitBlocked> for SubmitError {
    fn from(value: SubmitBlocked) -> Self {
        SubmitError::Blocked(value)
    }
}

/// The three pane admin screen: semesters, the subjects of the selected semester, and the resources
/// of the selected subject. Every write is followed by a notification and a re-fetch of the list it touched
#[derive(Debug, Default)]
pub struct AdminDashboard {
    semesters: ListState<SemesterApi>,
    subjects: ListState<SubjectApi>,
    resources: ListState<ResourceApi>,
    selected_semester: Option<String>,
    selected_subject: Option<String>,
    semester_form: EntityForm<SemesterForm>,
    subject_form: EntityForm<SubjectForm>,
    resource_form: EntityForm<ResourceForm>,
    notifications: NotificationOverlay,
}

impl AdminDashboard {
    pub fn new(notifications: NotificationOverlay) -> Self {
        Self {
            notifications,
            ..Default::default()
        }
    }

    // ---------------- lists and selection ----------------

    pub fn begin_load_semesters(&mut self) -> Ticket {
        self.semesters.begin(None)
    }

    pub fn apply_semesters(
        &mut self,
        ticket: &Ticket,
        result: Result<Vec<SemesterApi>, PersistenceError>,
    ) -> bool {
        self.settle_semesters(ticket, result, true)
    }

    /// Selects a semester, dropping the subject selection and resource list that belonged to
    /// the previous one. Returns the ticket for the semester's subject fetch
    pub fn select_semester(&mut self, semester_id: &str) -> Ticket {
        self.selected_semester = Some(semester_id.to_string());
        self.selected_subject = None;
        self.resources.clear();
        self.subjects.begin(Some(semester_id))
    }

    pub fn apply_subjects(
        &mut self,
        ticket: &Ticket,
        result: Result<Vec<SubjectApi>, PersistenceError>,
    ) -> bool {
        self.settle_subjects(ticket, result, true)
    }

    /// Selects a subject of the selected semester. Does nothing while no semester is selected
    pub fn select_subject(&mut self, subject_id: &str) -> Option<Ticket> {
        self.selected_semester.as_ref()?;
        self.selected_subject = Some(subject_id.to_string());
        Some(self.resources.begin(Some(subject_id)))
    }

    pub fn apply_resources(
        &mut self,
        ticket: &Ticket,
        result: Result<Vec<ResourceApi>, PersistenceError>,
    ) -> bool {
        self.settle_resources(ticket, result, true)
    }

    pub async fn load_semesters(&mut self, api: &dyn CatalogApi) {
        self.fetch_semesters(api, true).await;
    }

    pub async fn open_semester(&mut self, api: &dyn CatalogApi, semester_id: &str) {
        let ticket = self.select_semester(semester_id);
        let result = api.list_subjects(semester_id).await;
        self.apply_subjects(&ticket, result);
    }

    pub async fn open_subject(&mut self, api: &dyn CatalogApi, subject_id: &str) {
        if let Some(ticket) = self.select_subject(subject_id) {
            let result = api.list_resources(subject_id).await;
            self.apply_resources(&ticket, result);
        }
    }

    // refreshes after a write keep the write's notification on screen. A failed refresh is only logged

    async fn fetch_semesters(&mut self, api: &dyn CatalogApi, announce: bool) {
        let ticket = self.begin_load_semesters();
        let result = api.list_semesters().await;
        self.settle_semesters(&ticket, result, announce);
    }

    async fn refresh_subjects(&mut self, api: &dyn CatalogApi) {
        if let Some(semester_id) = self.selected_semester.clone() {
            let ticket = self.subjects.begin(Some(semester_id.as_str()));
            let result = api.list_subjects(&semester_id).await;
            self.settle_subjects(&ticket, result, false);
        }
    }

    async fn refresh_resources(&mut self, api: &dyn CatalogApi) {
        if let Some(subject_id) = self.selected_subject.clone() {
            let ticket = self.resources.begin(Some(subject_id.as_str()));
            let result = api.list_resources(&subject_id).await;
            self.settle_resources(&ticket, result, false);
        }
    }

    fn settle_semesters(
        &mut self,
        ticket: &Ticket,
        result: Result<Vec<SemesterApi>, PersistenceError>,
        announce: bool,
    ) -> bool {
        let announce = announce && self.semesters.is_current(ticket);
        let items = self.or_notify(result, "semesters", announce);
        self.semesters.resolve(ticket, items)
    }

    fn settle_subjects(
        &mut self,
        ticket: &Ticket,
        result: Result<Vec<SubjectApi>, PersistenceError>,
        announce: bool,
    ) -> bool {
        let announce = announce && self.subjects.is_current(ticket);
        let items = self.or_notify(result, "subjects", announce);
        self.subjects.resolve(ticket, items)
    }

    fn settle_resources(
        &mut self,
        ticket: &Ticket,
        result: Result<Vec<ResourceApi>, PersistenceError>,
        announce: bool,
    ) -> bool {
        let announce = announce && self.resources.is_current(ticket);
        let items = self.or_notify(result, "resources", announce);
        self.resources.resolve(ticket, items)
    }

    // ---------------- create ----------------

    pub fn open_semester_form(&mut self) {
        self.semester_form.open();
    }

    /// returns false without opening anything while no semester is selected
    pub fn open_subject_form(&mut self) -> bool {
        if self.selected_semester.is_none() {
            return false;
        }
        self.subject_form.open();
        true
    }

    /// returns false without opening anything while no subject is selected
    pub fn open_resource_form(&mut self) -> bool {
        if self.selected_subject.is_none() {
            return false;
        }
        self.resource_form.open();
        true
    }

    pub fn cancel_semester_form(&mut self) {
        self.semester_form.cancel();
    }

    pub fn cancel_subject_form(&mut self) {
        self.subject_form.cancel();
    }

    pub fn cancel_resource_form(&mut self) {
        self.resource_form.cancel();
    }

    /// Sends the semester form with the admin's `session` token. Without a session nothing is
    /// sent and the submit fails as unauthorized
    pub async fn submit_semester_form(
        &mut self,
        api: &dyn CatalogApi,
        session: Option<&str>,
    ) -> Result<SemesterApi, SubmitError> {
        let buffer = self.semester_form.begin_submit()?;
        let created = match session {
            Some(token) => api.create_semester(token, &buffer.name).await,
            None => Err(no_session()),
        };
        match created {
            Ok(semester) => {
                self.semester_form.succeed();
                self.notifications.success("Semester created successfully");
                self.fetch_semesters(api, false).await;
                Ok(semester)
            }
            Err(e) => {
                log::error!("Failed to create semester: {e}");
                self.semester_form.fail();
                self.notifications.error("Error creating semester");
                Err(SubmitError::Persistence(e))
            }
        }
    }

    pub async fn submit_subject_form(
        &mut self,
        api: &dyn CatalogApi,
        session: Option<&str>,
    ) -> Result<SubjectApi, SubmitError> {
        let semester_id = self
            .selected_semester
            .clone()
            .ok_or(SubmitBlocked::NoParent)?;
        let buffer = self.subject_form.begin_submit()?;
        let created = match session {
            Some(token) => api.create_subject(token, &buffer.name, &semester_id).await,
            None => Err(no_session()),
        };
        match created {
            Ok(subject) => {
                self.subject_form.succeed();
                self.notifications.success("Subject created successfully");
                self.refresh_subjects(api).await;
                Ok(subject)
            }
            Err(e) => {
                log::error!("Failed to create subject: {e}");
                self.subject_form.fail();
                self.notifications.error("Error creating subject");
                Err(SubmitError::Persistence(e))
            }
        }
    }

    pub async fn submit_resource_form(
        &mut self,
        api: &dyn CatalogApi,
        session: Option<&str>,
    ) -> Result<ResourceApi, SubmitError> {
        let subject_id = self
            .selected_subject
            .clone()
            .ok_or(SubmitBlocked::NoParent)?;
        let buffer = self.resource_form.begin_submit()?;
        let created = match session {
            Some(token) => {
                api.create_resource(token, &buffer.title, &buffer.drive_link, &subject_id)
                    .await
            }
            None => Err(no_session()),
        };
        match created {
            Ok(resource) => {
                self.resource_form.succeed();
                self.notifications.success("Resource created successfully");
                self.refresh_resources(api).await;
                Ok(resource)
            }
            Err(e) => {
                log::error!("Failed to create resource: {e}");
                self.resource_form.fail();
                self.notifications.error("Error creating resource");
                Err(SubmitError::Persistence(e))
            }
        }
    }

    // ---------------- delete ----------------

    /// Deletes a semester after `confirm` accepts the prompt. The store removes its subjects and
    /// resources along with it
    pub async fn delete_semester<F>(
        &mut self,
        api: &dyn CatalogApi,
        session: Option<&str>,
        semester_id: &str,
        confirm: F,
    ) -> Result<DeleteOutcome, PersistenceError>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_SEMESTER_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }
        let deleted = match session {
            Some(token) => api.delete_semester(token, semester_id).await,
            None => Err(no_session()),
        };
        if let Err(e) = deleted {
            log::error!("Failed to delete semester {semester_id}: {e}");
            self.notifications.error("Error deleting semester");
            return Err(e);
        }
        if self.selected_semester.as_deref() == Some(semester_id) {
            self.selected_semester = None;
            self.selected_subject = None;
            self.subjects.clear();
            self.resources.clear();
        }
        self.notifications.success("Semester deleted successfully");
        self.fetch_semesters(api, false).await;
        Ok(DeleteOutcome::Deleted)
    }

    pub async fn delete_subject<F>(
        &mut self,
        api: &dyn CatalogApi,
        session: Option<&str>,
        subject_id: &str,
        confirm: F,
    ) -> Result<DeleteOutcome, PersistenceError>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_SUBJECT_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }
        let deleted = match session {
            Some(token) => api.delete_subject(token, subject_id).await,
            None => Err(no_session()),
        };
        if let Err(e) = deleted {
            log::error!("Failed to delete subject {subject_id}: {e}");
            self.notifications.error("Error deleting subject");
            return Err(e);
        }
        if self.selected_subject.as_deref() == Some(subject_id) {
            self.selected_subject = None;
            self.resources.clear();
        }
        self.notifications.success("Subject deleted successfully");
        self.refresh_subjects(api).await;
        Ok(DeleteOutcome::Deleted)
    }

    pub async fn delete_resource<F>(
        &mut self,
        api: &dyn CatalogApi,
        session: Option<&str>,
        resource_id: &str,
        confirm: F,
    ) -> Result<DeleteOutcome, PersistenceError>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_RESOURCE_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }
        let deleted = match session {
            Some(token) => api.delete_resource(token, resource_id).await,
            None => Err(no_session()),
        };
        if let Err(e) = deleted {
            log::error!("Failed to delete resource {resource_id}: {e}");
            self.notifications.error("Error deleting resource");
            return Err(e);
        }
        self.notifications.success("Resource deleted successfully");
        self.refresh_resources(api).await;
        Ok(DeleteOutcome::Deleted)
    }

    // ---------------- accessors ----------------

    pub fn semesters(&self) -> &ListState<SemesterApi> {
        &self.semesters
    }

    pub fn subjects(&self) -> &ListState<SubjectApi> {
        &self.subjects
    }

    pub fn resources(&self) -> &ListState<ResourceApi> {
        &self.resources
    }

    pub fn selected_semester(&self) -> Option<&str> {
        self.selected_semester.as_deref()
    }

    pub fn selected_subject(&self) -> Option<&str> {
        self.selected_subject.as_deref()
    }

    pub fn semester_form(&self) -> &EntityForm<SemesterForm> {
        &self.semester_form
    }

    pub fn semester_form_mut(&mut self) -> &mut EntityForm<SemesterForm> {
        &mut self.semester_form
    }

    pub fn subject_form(&self) -> &EntityForm<SubjectForm> {
        &self.subject_form
    }

    pub fn subject_form_mut(&mut self) -> &mut EntityForm<SubjectForm> {
        &mut self.subject_form
    }

    pub fn resource_form(&self) -> &EntityForm<ResourceForm> {
        &self.resource_form
    }

    pub fn resource_form_mut(&mut self) -> &mut EntityForm<ResourceForm> {
        &mut self.resource_form
    }

    pub fn notifications(&self) -> &NotificationOverlay {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationOverlay {
        &mut self.notifications
    }

    /// a failed fetch empties the list. `announce` also tells the admin about it
    fn or_notify<T>(
        &mut self,
        result: Result<Vec<T>, PersistenceError>,
        kinds: &str,
        announce: bool,
    ) -> Vec<T> {
        match result {
            Ok(items) => items,
            Err(e) => {
                log::error!("Failed to load {kinds}: {e}");
                if announce {
                    self.notifications.error(&format!("Error loading {kinds}"));
                }
                Vec::new()
            }
        }
    }
}

fn no_session() -> PersistenceError {
    PersistenceError::new(
        PersistenceErrorKind::Unauthorized,
        "not signed in as admin",
    )
}
