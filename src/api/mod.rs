pub mod client;
pub mod error;

use async_trait::async_trait;

use crate::models::{Appointment, AppointmentId, Doctor, EditForm, MutationReply};

pub use client::HttpAppointmentsApi;
pub use error::ApiError;

/// Backend operations the appointments component depends on
#[async_trait]
pub trait AppointmentsApi: Send + Sync {
    /// Full collection, in server order
    async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError>;

    async fn delete_appointment(&self, id: AppointmentId) -> Result<MutationReply, ApiError>;

    async fn update_appointment(
        &self,
        id: AppointmentId,
        form: &EditForm,
    ) -> Result<MutationReply, ApiError>;

    /// Doctors currently available in a department
    async fn doctors_by_department(&self, department: &str) -> Result<Vec<Doctor>, ApiError>;
}
