use std::time::Duration;

use crate::client::admin::{AdminDashboard, DeleteOutcome, SubmitError};
use crate::client::api::{CatalogApi, PersistenceErrorKind, ServiceCatalogApi};
use crate::client::auth::{AuthGate, MemorySessionStorage};
use crate::client::catalog_tree::PublicCatalog;
use crate::client::notification::NotificationOverlay;
use crate::client::shell::{Screen, Shell};
use crate::test::{cleanup, init_db_folder};

#[rocket::async_test]
async fn admin_builds_and_prunes_catalog() {
    init_db_folder();
    let api = ServiceCatalogApi;
    let mut gate = AuthGate::new(MemorySessionStorage::default());
    gate.initialize();
    let shell = Shell::from_path("/admin");
    assert_eq!(Screen::AdminLogin, shell.screen(gate.state()));
    assert!(gate.login(&api, "150206").await);
    assert_eq!(Screen::AdminDashboard, shell.screen(gate.state()));

    let session = gate.token();
    let session = session.as_deref();
    let mut dashboard = AdminDashboard::new(NotificationOverlay::new(Duration::from_secs(3)));
    dashboard.load_semesters(&api).await;
    for name in ["4-1", "4-2"] {
        dashboard.open_semester_form();
        dashboard.semester_form_mut().buffer_mut().unwrap().name = name.to_string();
        dashboard.submit_semester_form(&api, session).await.unwrap();
    }
    let names: Vec<&str> = dashboard
        .semesters()
        .items()
        .iter()
        .map(|it| it.name.as_str())
        .collect();
    assert_eq!(vec!["4-1", "4-2"], names);
    let semester_id = dashboard.semesters().items()[1].id.clone();

    dashboard.open_semester(&api, &semester_id).await;
    assert!(dashboard.open_subject_form());
    dashboard.subject_form_mut().buffer_mut().unwrap().name = "Mathematics".to_string();
    let subject = dashboard.submit_subject_form(&api, session).await.unwrap();
    assert_eq!(semester_id, subject.semester_id);

    dashboard.open_subject(&api, &subject.id).await;
    assert!(dashboard.open_resource_form());
    let form = dashboard.resource_form_mut().buffer_mut().unwrap();
    form.title = "Ch1 Notes".to_string();
    form.drive_link = "https://drive.google.com/x".to_string();
    let resource = dashboard.submit_resource_form(&api, session).await.unwrap();
    assert_eq!(vec![resource], dashboard.resources().items().to_vec());

    let outcome = dashboard
        .delete_subject(&api, session, &subject.id, |_| true)
        .await;
    assert_eq!(Ok(DeleteOutcome::Deleted), outcome);
    assert!(dashboard.subjects().items().is_empty());
    assert!(dashboard.resources().items().is_empty());
    assert!(api.list_resources(&subject.id).await.unwrap().is_empty());
    assert_eq!(2, api.list_semesters().await.unwrap().len());

    let mut catalog = PublicCatalog::default();
    catalog.load(&api).await;
    catalog.click_semester(&api, &semester_id).await;
    assert_eq!(2, catalog.semesters().items().len());
    assert!(catalog
        .semester(&semester_id)
        .unwrap()
        .subjects()
        .items()
        .is_empty());
    cleanup();
}

#[rocket::async_test]
async fn signed_out_admin_cannot_write() {
    init_db_folder();
    let api = ServiceCatalogApi;
    let mut gate = AuthGate::new(MemorySessionStorage::default());
    gate.initialize();
    assert!(gate.login(&api, "150206").await);
    let mut dashboard = AdminDashboard::new(NotificationOverlay::new(Duration::from_secs(3)));
    dashboard.open_semester_form();
    dashboard.semester_form_mut().buffer_mut().unwrap().name = "4-1".to_string();
    dashboard
        .submit_semester_form(&api, gate.token().as_deref())
        .await
        .unwrap();
    let semester_id = dashboard.semesters().items()[0].id.clone();

    gate.logout();
    dashboard.open_semester_form();
    dashboard.semester_form_mut().buffer_mut().unwrap().name = "4-2".to_string();
    let result = dashboard
        .submit_semester_form(&api, gate.token().as_deref())
        .await;
    assert!(matches!(result, Err(SubmitError::Persistence(_))));
    let err = dashboard
        .delete_semester(&api, Some("MTAw.deadbeef"), &semester_id, |_| true)
        .await
        .unwrap_err();
    assert_eq!(PersistenceErrorKind::Unauthorized, err.kind);
    let err = api.create_semester("", "4-3").await.unwrap_err();
    assert_eq!(PersistenceErrorKind::Unauthorized, err.kind);

    let names: Vec<String> = api
        .list_semesters()
        .await
        .unwrap()
        .into_iter()
        .map(|it| it.name)
        .collect();
    assert_eq!(vec!["4-1"], names);
    cleanup();
}
