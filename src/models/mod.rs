pub mod appointment;
pub mod doctor;
pub mod edit_form;
pub mod response;

pub use appointment::{Appointment, AppointmentId, AppointmentStatus, DoctorRef};
pub use doctor::Doctor;
pub use edit_form::{DoctorSelection, EditField, EditForm, FieldError};
pub use response::{MutationOutcome, MutationReply, StatusMessage};
