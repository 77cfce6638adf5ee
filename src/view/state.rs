use thiserror::Error;

use crate::models::{Appointment, AppointmentId, EditField, EditForm, FieldError};

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("no appointment with id {0}")]
    UnknownAppointment(AppointmentId),
    #[error("no appointment is being edited")]
    NotEditing,
    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

/// Working state of the appointments component.
///
/// `editing` is either unset or the id of a row present in `appointments`;
/// the transitions below keep it that way.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub appointments: Vec<Appointment>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub editing: Option<AppointmentId>,
    pub edit_form: EditForm,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            appointments: Vec::new(),
            loading: true,
            error: None,
            success: None,
            editing: None,
            edit_form: EditForm::default(),
        }
    }
}

impl ViewState {
    pub fn find(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|appt| appt.id == id)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
        self.cancel_edit();
    }

    pub fn finish_load(&mut self, result: Result<Vec<Appointment>, String>) {
        match result {
            Ok(appointments) => self.appointments = appointments,
            Err(message) => {
                self.appointments.clear();
                self.error = Some(message);
            }
        }
        self.loading = false;
    }

    /// Any edit in progress on another row is dropped without warning.
    pub fn start_edit(&mut self, id: AppointmentId) -> Result<(), ViewError> {
        let appt = self.find(id).ok_or(ViewError::UnknownAppointment(id))?;
        self.edit_form = EditForm::from_appointment(appt);
        self.editing = Some(id);
        Ok(())
    }

    pub fn change_field(&mut self, field: EditField, value: &str) -> Result<(), ViewError> {
        if self.editing.is_none() {
            return Err(ViewError::NotEditing);
        }
        self.edit_form.set(field, value)?;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.edit_form = EditForm::default();
    }

    /// Drops one row. Returns false when it was not cached.
    pub fn remove(&mut self, id: AppointmentId) -> bool {
        let before = self.appointments.len();
        self.appointments.retain(|appt| appt.id != id);
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        self.appointments.len() != before
    }

    pub fn apply_edit(&mut self, id: AppointmentId, form: &EditForm) {
        if let Some(appt) = self.appointments.iter_mut().find(|appt| appt.id == id) {
            form.merge_into(appt);
        }
        if self.editing == Some(id) {
            self.cancel_edit();
        }
    }
}
