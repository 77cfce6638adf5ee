use crate::helpers::{Backend, appointment_json, spawn_backend};
use appointments_view::api::{ApiError, AppointmentsApi, HttpAppointmentsApi};
use appointments_view::config::Config;
use appointments_view::models::{EditField, EditForm, MutationOutcome, MutationReply};
use appointments_view::view::Rendered;
use appointments_view::{AppointmentsView, Outcome};
use rstest::rstest;
use serde_json::json;

#[tokio::test]
async fn list_decodes_appointments_in_server_order() {
    let app = spawn_backend(Backend {
        list_body: json!([appointment_json(9), appointment_json(4), appointment_json(6)]),
        ..Backend::default()
    })
    .await;

    let appointments = app.api().list_appointments().await.unwrap();

    let ids: Vec<_> = appointments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![9, 4, 6]);
    assert_eq!(app.received()[0].path, "/api/appointments/list");
}

#[rstest]
#[case(500, "500::Internal Server Error")]
#[case(404, "404::Not Found")]
#[case(503, "503::Service Unavailable")]
#[tokio::test]
async fn list_status_failure_is_code_and_reason(#[case] code: u16, #[case] expected: &str) {
    let app = spawn_backend(Backend {
        list_status: code,
        ..Backend::default()
    })
    .await;

    let err = app.api().list_appointments().await.unwrap_err();

    assert!(matches!(err, ApiError::Status { .. }));
    assert_eq!(err.to_string(), expected);
}

#[tokio::test]
async fn malformed_list_is_a_decode_error() {
    let app = spawn_backend(Backend {
        list_body: json!({ "not": "a list" }),
        ..Backend::default()
    })
    .await;

    let err = app.api().list_appointments().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // nothing listens on port 1
    let api = HttpAppointmentsApi::new(Config::new("http://127.0.0.1:1").unwrap());

    let err = api.list_appointments().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}

#[rstest]
#[case("Removed", MutationOutcome::Succeeded(Some("Removed".into())))]
#[case(r#"{"status":"success","message":"Done"}"#, MutationOutcome::Succeeded(Some("Done".into())))]
#[case(r#"{"status":"error","message":"Locked"}"#, MutationOutcome::Failed(Some("Locked".into())))]
#[case(r#"{"status":500,"error":"Internal Server Error"}"#, MutationOutcome::Failed(None))]
#[tokio::test]
async fn delete_reply_is_decoded_tolerantly(#[case] body: &str, #[case] expected: MutationOutcome) {
    let app = spawn_backend(Backend {
        mutation_body: body.to_string(),
        ..Backend::default()
    })
    .await;

    let reply = app.api().delete_appointment(7).await.unwrap();

    assert_eq!(reply.outcome(), expected);
    let received = app.received();
    assert_eq!(received[0].method, "DELETE");
    assert_eq!(received[0].path, "/api/appointments/7");
}

#[tokio::test]
async fn update_sends_the_form_as_json() {
    let app = spawn_backend(Backend::default()).await;
    let api = app.api();
    let appointments = api.list_appointments().await.unwrap();
    let mut form = EditForm::from_appointment(&appointments[1]);
    form.set(EditField::Department, "Oncology").unwrap();
    form.set(EditField::Doctor, "").unwrap();

    let reply = api.update_appointment(2, &form).await.unwrap();

    assert!(matches!(reply, MutationReply::Structured(_)));
    let update = app.received().pop().unwrap();
    assert_eq!(update.method, "PUT");
    assert_eq!(update.path, "/api/appointments/2");
    assert_eq!(update.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        update.body,
        Some(json!({
            "fullName": "Patient 2",
            "phone": "555-0100",
            "department": "Oncology",
            "appointmentDate": "2025-07-01",
            "appointmentTime": "09:00",
            "status": "Scheduled",
            "doctor": null
        }))
    );
}

#[tokio::test]
async fn component_deletes_against_plain_text_backend() {
    let app = spawn_backend(Backend {
        list_body: json!([appointment_json(5), appointment_json(7)]),
        mutation_body: "Removed".to_string(),
        ..Backend::default()
    })
    .await;
    let mut view = AppointmentsView::new(app.api(), |_: &str| true);
    view.mount().await;

    assert_eq!(view.delete(7).await, Outcome::Succeeded);

    let Rendered::List { success, rows } = view.render() else {
        panic!("expected list");
    };
    assert_eq!(success.as_deref(), Some("Removed"));
    assert_eq!(rows.iter().map(|row| row.id()).collect::<Vec<_>>(), vec![5]);
}

#[tokio::test]
async fn component_settles_on_list_failure() {
    let app = spawn_backend(Backend {
        list_status: 500,
        ..Backend::default()
    })
    .await;
    let mut view = AppointmentsView::new(app.api(), |_: &str| true);

    view.mount().await;

    let state = view.snapshot();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("500::Internal Server Error"));
    assert_eq!(view.render().row_count(), 0);
}
