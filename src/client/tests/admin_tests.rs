use std::time::Duration;

use crate::client::admin::{
    AdminDashboard, DeleteOutcome, SubmitError, DELETE_SEMESTER_PROMPT, DELETE_SUBJECT_PROMPT,
};
use crate::client::api::{CatalogApi, PersistenceErrorKind};
use crate::client::forms::{FormState, SubmitBlocked, ValidationError};
use crate::client::list_state::LoadState;
use crate::client::notification::{NotificationKind, NotificationOverlay};
use crate::client::tests::{FakeCatalogApi, FAKE_TOKEN};
use crate::model::response::SubjectApi;

fn dashboard() -> AdminDashboard {
    AdminDashboard::new(NotificationOverlay::new(Duration::from_secs(3)))
}

fn notification_text(dashboard: &AdminDashboard) -> Option<String> {
    dashboard
        .notifications()
        .current()
        .map(|it| it.text.clone())
}

#[rocket::async_test]
async fn selecting_another_semester_clears_subject() {
    let api = FakeCatalogApi::default();
    let first = api.seed_semester("4-1");
    let second = api.seed_semester("4-2");
    let subject = api.seed_subject("Mathematics", &first);
    api.seed_resource("Ch1 Notes", &subject);
    let mut dashboard = dashboard();
    dashboard.load_semesters(&api).await;
    dashboard.open_semester(&api, &first).await;
    dashboard.open_subject(&api, &subject).await;
    assert_eq!(Some(subject.as_str()), dashboard.selected_subject());
    assert_eq!(1, dashboard.resources().items().len());

    dashboard.open_semester(&api, &second).await;
    assert_eq!(Some(second.as_str()), dashboard.selected_semester());
    assert_eq!(None, dashboard.selected_subject());
    assert_eq!(LoadState::Idle, *dashboard.resources().state());
    assert!(dashboard.subjects().items().is_empty());
}

#[rocket::async_test]
async fn deleting_selected_subject_clears_resources() {
    let api = FakeCatalogApi::default();
    let semester = api.seed_semester("4-1");
    let subject = api.seed_subject("Mathematics", &semester);
    let other = api.seed_subject("Physics", &semester);
    api.seed_resource("Ch1 Notes", &subject);
    let mut dashboard = dashboard();
    dashboard.open_semester(&api, &semester).await;
    dashboard.open_subject(&api, &subject).await;

    let mut prompt = String::new();
    let outcome = dashboard
        .delete_subject(&api, Some(FAKE_TOKEN), &subject, |message| {
            prompt = message.to_string();
            true
        })
        .await;
    assert_eq!(Ok(DeleteOutcome::Deleted), outcome);
    assert_eq!(DELETE_SUBJECT_PROMPT, prompt);
    assert_eq!(None, dashboard.selected_subject());
    assert_eq!(Some(semester.as_str()), dashboard.selected_semester());
    assert!(dashboard.resources().items().is_empty());
    let remaining: Vec<&str> = dashboard
        .subjects()
        .items()
        .iter()
        .map(|it| it.id.as_str())
        .collect();
    assert_eq!(vec![other.as_str()], remaining);
    assert_eq!(
        Some("Subject deleted successfully".to_string()),
        notification_text(&dashboard)
    );
}

#[rocket::async_test]
async fn deleting_selected_semester_clears_everything_below() {
    let api = FakeCatalogApi::default();
    let semester = api.seed_semester("4-1");
    let subject = api.seed_subject("Mathematics", &semester);
    let mut dashboard = dashboard();
    dashboard.load_semesters(&api).await;
    dashboard.open_semester(&api, &semester).await;
    dashboard.open_subject(&api, &subject).await;

    let outcome = dashboard
        .delete_semester(&api, Some(FAKE_TOKEN), &semester, |message| {
            message == DELETE_SEMESTER_PROMPT
        })
        .await;
    assert_eq!(Ok(DeleteOutcome::Deleted), outcome);
    assert_eq!(None, dashboard.selected_semester());
    assert_eq!(None, dashboard.selected_subject());
    assert_eq!(LoadState::Idle, *dashboard.subjects().state());
    assert!(dashboard.semesters().items().is_empty());
}

#[rocket::async_test]
async fn declined_delete_makes_no_call() {
    let api = FakeCatalogApi::default();
    let semester = api.seed_semester("4-1");
    let mut dashboard = dashboard();
    dashboard.load_semesters(&api).await;
    let outcome = dashboard
        .delete_semester(&api, Some(FAKE_TOKEN), &semester, |_| false)
        .await;
    assert_eq!(Ok(DeleteOutcome::Cancelled), outcome);
    assert_eq!(0, api.calls("delete_semester"));
    assert_eq!(1, dashboard.semesters().items().len());
    assert_eq!(None, notification_text(&dashboard));
}

#[rocket::async_test]
async fn failed_delete_keeps_selection() {
    let api = FakeCatalogApi::default();
    let semester = api.seed_semester("4-1");
    let subject = api.seed_subject("Mathematics", &semester);
    let mut dashboard = dashboard();
    dashboard.open_semester(&api, &semester).await;
    dashboard.open_subject(&api, &subject).await;
    api.fail("delete_subject");
    let err = dashboard
        .delete_subject(&api, Some(FAKE_TOKEN), &subject, |_| true)
        .await
        .unwrap_err();
    assert_eq!(PersistenceErrorKind::Store, err.kind);
    assert_eq!(Some(subject.as_str()), dashboard.selected_subject());
    let current = dashboard.notifications().current().unwrap();
    assert_eq!("Error deleting subject", current.text);
    assert_eq!(NotificationKind::Error, current.kind);
}

#[rocket::async_test]
async fn form_failure_retains_input() {
    let api = FakeCatalogApi::default();
    let mut dashboard = dashboard();
    dashboard.load_semesters(&api).await;
    dashboard.open_semester_form();
    dashboard.semester_form_mut().buffer_mut().unwrap().name = "4-2".to_string();
    api.fail("create_semester");

    let result = dashboard.submit_semester_form(&api, Some(FAKE_TOKEN)).await;
    assert!(matches!(result, Err(SubmitError::Persistence(_))));
    assert_eq!(FormState::Editing, dashboard.semester_form().state());
    assert_eq!("4-2", dashboard.semester_form().buffer().name);
    assert_eq!(
        Some("Error creating semester".to_string()),
        notification_text(&dashboard)
    );

    api.recover("create_semester");
    let created = dashboard
        .submit_semester_form(&api, Some(FAKE_TOKEN))
        .await
        .unwrap();
    assert_eq!("4-2", created.name);
    assert_eq!(FormState::Closed, dashboard.semester_form().state());
    assert_eq!("", dashboard.semester_form().buffer().name);
    assert_eq!(
        Some("Semester created successfully".to_string()),
        notification_text(&dashboard)
    );
    assert_eq!(vec![created], dashboard.semesters().items().to_vec());
}

#[rocket::async_test]
async fn blank_form_makes_no_call() {
    let api = FakeCatalogApi::default();
    let mut dashboard = dashboard();
    dashboard.open_semester_form();
    dashboard.semester_form_mut().buffer_mut().unwrap().name = "   ".to_string();
    let result = dashboard.submit_semester_form(&api, Some(FAKE_TOKEN)).await;
    assert_eq!(
        Err(SubmitError::Blocked(SubmitBlocked::Invalid(ValidationError {
            field: "name"
        }))),
        result
    );
    assert_eq!(0, api.calls("create_semester"));
    assert_eq!(None, notification_text(&dashboard));
    assert_eq!(FormState::Editing, dashboard.semester_form().state());
}

#[rocket::async_test]
async fn add_without_parent_is_inert() {
    let api = FakeCatalogApi::default();
    let mut dashboard = dashboard();
    assert!(!dashboard.open_subject_form());
    assert!(!dashboard.open_resource_form());
    assert_eq!(FormState::Closed, dashboard.subject_form().state());
    assert_eq!(
        Err(SubmitError::Blocked(SubmitBlocked::NoParent)),
        dashboard.submit_subject_form(&api, Some(FAKE_TOKEN)).await
    );
    assert_eq!(0, api.calls("create_subject"));
}

#[rocket::async_test]
async fn cancel_discards_without_call() {
    let api = FakeCatalogApi::default();
    let semester = api.seed_semester("4-1");
    let mut dashboard = dashboard();
    dashboard.open_semester(&api, &semester).await;
    assert!(dashboard.open_subject_form());
    dashboard.subject_form_mut().buffer_mut().unwrap().name = "Physics".to_string();
    dashboard.cancel_subject_form();
    assert_eq!(FormState::Closed, dashboard.subject_form().state());
    assert_eq!("", dashboard.subject_form().buffer().name);
    assert_eq!(0, api.calls("create_subject"));
}

#[rocket::async_test]
async fn load_failure_notifies_and_empties() {
    let api = FakeCatalogApi::default();
    api.seed_semester("4-1");
    api.fail("list_semesters");
    let mut dashboard = dashboard();
    dashboard.load_semesters(&api).await;
    assert_eq!(LoadState::Loaded(vec![]), *dashboard.semesters().state());
    assert_eq!(
        Some("Error loading semesters".to_string()),
        notification_text(&dashboard)
    );
}

#[test]
fn stale_subject_response_is_dropped() {
    let mut dashboard = dashboard();
    let first = dashboard.select_semester("a");
    let second = dashboard.select_semester("b");
    let subject = |id: &str, semester_id: &str| SubjectApi {
        id: id.to_string(),
        name: id.to_string(),
        semester_id: semester_id.to_string(),
    };
    assert!(dashboard.apply_subjects(&second, Ok(vec![subject("s2", "b")])));
    assert!(!dashboard.apply_subjects(&first, Ok(vec![subject("s1", "a")])));
    assert_eq!("s2", dashboard.subjects().items()[0].id);
    assert!(!dashboard.apply_subjects(
        &first,
        Err(crate::client::api::PersistenceError::new(
            PersistenceErrorKind::Store,
            "late"
        ))
    ));
    assert_eq!(None, notification_text(&dashboard));
}

#[rocket::async_test]
async fn write_without_session_is_rejected() {
    let api = FakeCatalogApi::default();
    let semester = api.seed_semester("4-1");
    let mut dashboard = dashboard();
    dashboard.load_semesters(&api).await;
    dashboard.open_semester_form();
    dashboard.semester_form_mut().buffer_mut().unwrap().name = "4-2".to_string();

    let result = dashboard.submit_semester_form(&api, None).await;
    match result {
        Err(SubmitError::Persistence(e)) => assert_eq!(PersistenceErrorKind::Unauthorized, e.kind),
        other => panic!("expected an unauthorized failure, got {other:?}"),
    }
    assert_eq!(0, api.calls("create_semester"));
    assert_eq!(FormState::Editing, dashboard.semester_form().state());
    assert_eq!("4-2", dashboard.semester_form().buffer().name);

    let err = dashboard
        .delete_semester(&api, Some("forged.token"), &semester, |_| true)
        .await
        .unwrap_err();
    assert_eq!(PersistenceErrorKind::Unauthorized, err.kind);
    assert_eq!(
        Some("Error deleting semester".to_string()),
        notification_text(&dashboard)
    );
    assert_eq!(1, api.list_semesters().await.unwrap().len());
}

#[rocket::async_test]
async fn failed_refresh_keeps_delete_notification() {
    let api = FakeCatalogApi::default();
    let semester = api.seed_semester("4-1");
    let subject = api.seed_subject("Mathematics", &semester);
    api.seed_subject("Physics", &semester);
    let mut dashboard = dashboard();
    dashboard.open_semester(&api, &semester).await;
    api.fail("list_subjects");

    let outcome = dashboard
        .delete_subject(&api, Some(FAKE_TOKEN), &subject, |_| true)
        .await;
    assert_eq!(Ok(DeleteOutcome::Deleted), outcome);
    let current = dashboard.notifications().current().unwrap();
    assert_eq!("Subject deleted successfully", current.text);
    assert_eq!(NotificationKind::Success, current.kind);
    assert_eq!(LoadState::Loaded(vec![]), *dashboard.subjects().state());
}

#[rocket::async_test]
async fn failed_refresh_keeps_create_notification() {
    let api = FakeCatalogApi::default();
    let mut dashboard = dashboard();
    dashboard.load_semesters(&api).await;
    api.fail("list_semesters");
    dashboard.open_semester_form();
    dashboard.semester_form_mut().buffer_mut().unwrap().name = "4-1".to_string();
    dashboard
        .submit_semester_form(&api, Some(FAKE_TOKEN))
        .await
        .unwrap();
    assert_eq!(
        Some("Semester created successfully".to_string()),
        notification_text(&dashboard)
    );
    assert!(dashboard.semesters().items().is_empty());
}
