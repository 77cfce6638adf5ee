use crate::helpers::{Backend, spawn_backend};
use appointments_view::api::AppointmentsApi;

#[tokio::test]
async fn department_name_is_path_encoded() {
    let app = spawn_backend(Backend::default()).await;

    let doctors = app
        .api()
        .doctors_by_department("General Surgery")
        .await
        .unwrap();

    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0].full_name, "Dr. Snow");
    assert_eq!(
        app.received()[0].path,
        "/api/doctors/department/General%20Surgery"
    );
}
