use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::client::api::{CatalogApi, PersistenceError, PersistenceErrorKind};
use crate::model::response::{ResourceApi, SemesterApi, SubjectApi};

mod admin_tests;
mod scenario_tests;

/// the session token [`FakeCatalogApi`] hands out and accepts
pub const FAKE_TOKEN: &str = "fake.token";

#[derive(Default)]
struct FakeStore {
    semesters: Vec<SemesterApi>,
    subjects: Vec<SubjectApi>,
    resources: Vec<ResourceApi>,
    next_id: u32,
}

impl FakeStore {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        format!("{:032x}", self.next_id)
    }
}

/// in-memory [`CatalogApi`] that records every call and fails the operations it is told to
#[derive(Default)]
pub struct FakeCatalogApi {
    store: Mutex<FakeStore>,
    failing: Mutex<HashSet<&'static str>>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl FakeCatalogApi {
    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    pub fn recover(&self, operation: &'static str) {
        self.failing.lock().unwrap().remove(operation);
    }

    pub fn calls(&self, operation: &'static str) -> usize {
        *self.calls.lock().unwrap().get(operation).unwrap_or(&0)
    }

    pub fn seed_semester(&self, name: &str) -> String {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.semesters.push(SemesterApi {
            id: id.clone(),
            name: name.to_string(),
        });
        id
    }

    pub fn seed_subject(&self, name: &str, semester_id: &str) -> String {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.subjects.push(SubjectApi {
            id: id.clone(),
            name: name.to_string(),
            semester_id: semester_id.to_string(),
        });
        id
    }

    pub fn seed_resource(&self, title: &str, subject_id: &str) -> String {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.resources.push(ResourceApi {
            id: id.clone(),
            title: title.to_string(),
            drive_link: format!("https://drive.google.com/{id}"),
            subject_id: subject_id.to_string(),
        });
        id
    }

    /// a write call. Anything but [`FAKE_TOKEN`] is turned away before the store is touched
    fn write(&self, operation: &'static str, token: &str) -> Result<(), PersistenceError> {
        self.call(operation)?;
        if token == FAKE_TOKEN {
            Ok(())
        } else {
            Err(PersistenceError::new(
                PersistenceErrorKind::Unauthorized,
                "bad session token",
            ))
        }
    }

    fn call(&self, operation: &'static str) -> Result<(), PersistenceError> {
        *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;
        if self.failing.lock().unwrap().contains(operation) {
            Err(PersistenceError::new(
                PersistenceErrorKind::Store,
                "connection refused",
            ))
        } else {
            Ok(())
        }
    }
}

#[rocket::async_trait]
impl CatalogApi for FakeCatalogApi {
    async fn list_semesters(&self) -> Result<Vec<SemesterApi>, PersistenceError> {
        self.call("list_semesters")?;
        let mut semesters = self.store.lock().unwrap().semesters.clone();
        semesters.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(semesters)
    }

    async fn create_semester(
        &self,
        token: &str,
        name: &str,
    ) -> Result<SemesterApi, PersistenceError> {
        self.write("create_semester", token)?;
        let id = self.seed_semester(name);
        Ok(SemesterApi {
            id,
            name: name.to_string(),
        })
    }

    async fn delete_semester(&self, token: &str, id: &str) -> Result<(), PersistenceError> {
        self.write("delete_semester", token)?;
        let mut store = self.store.lock().unwrap();
        let removed: Vec<String> = store
            .subjects
            .iter()
            .filter(|it| it.semester_id == id)
            .map(|it| it.id.clone())
            .collect();
        store.semesters.retain(|it| it.id != id);
        store.subjects.retain(|it| it.semester_id != id);
        store.resources.retain(|it| !removed.contains(&it.subject_id));
        Ok(())
    }

    async fn list_subjects(&self, semester_id: &str) -> Result<Vec<SubjectApi>, PersistenceError> {
        self.call("list_subjects")?;
        let mut subjects: Vec<SubjectApi> = self
            .store
            .lock()
            .unwrap()
            .subjects
            .iter()
            .filter(|it| it.semester_id == semester_id)
            .cloned()
            .collect();
        subjects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(subjects)
    }

    async fn create_subject(
        &self,
        token: &str,
        name: &str,
        semester_id: &str,
    ) -> Result<SubjectApi, PersistenceError> {
        self.write("create_subject", token)?;
        let id = self.seed_subject(name, semester_id);
        Ok(SubjectApi {
            id,
            name: name.to_string(),
            semester_id: semester_id.to_string(),
        })
    }

    async fn delete_subject(&self, token: &str, id: &str) -> Result<(), PersistenceError> {
        self.write("delete_subject", token)?;
        let mut store = self.store.lock().unwrap();
        store.subjects.retain(|it| it.id != id);
        store.resources.retain(|it| it.subject_id != id);
        Ok(())
    }

    async fn list_resources(
        &self,
        subject_id: &str,
    ) -> Result<Vec<ResourceApi>, PersistenceError> {
        self.call("list_resources")?;
        let mut resources: Vec<ResourceApi> = self
            .store
            .lock()
            .unwrap()
            .resources
            .iter()
            .filter(|it| it.subject_id == subject_id)
            .cloned()
            .collect();
        resources.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(resources)
    }

    async fn create_resource(
        &self,
        token: &str,
        title: &str,
        drive_link: &str,
        subject_id: &str,
    ) -> Result<ResourceApi, PersistenceError> {
        self.write("create_resource", token)?;
        let mut store = self.store.lock().unwrap();
        let resource = ResourceApi {
            id: store.next_id(),
            title: title.to_string(),
            drive_link: drive_link.to_string(),
            subject_id: subject_id.to_string(),
        };
        store.resources.push(resource.clone());
        Ok(resource)
    }

    async fn delete_resource(&self, token: &str, id: &str) -> Result<(), PersistenceError> {
        self.write("delete_resource", token)?;
        self.store.lock().unwrap().resources.retain(|it| it.id != id);
        Ok(())
    }

    async fn login(&self, passcode: &str) -> Result<Option<String>, PersistenceError> {
        self.call("login")?;
        Ok((passcode == "150206").then(|| FAKE_TOKEN.to_string()))
    }
}
