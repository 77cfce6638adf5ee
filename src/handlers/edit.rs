use tracing::{error, info};

use crate::api::AppointmentsApi;
use crate::confirm::Confirm;
use crate::handlers::{AppointmentsView, Outcome};
use crate::models::{AppointmentId, EditField, MutationOutcome, MutationReply};
use crate::view::ViewError;

pub const UPDATED_MESSAGE: &str = "Appointment updated successfully.";
pub const UPDATE_FAILED_MESSAGE: &str = "Update failed";

impl<A: AppointmentsApi, C: Confirm> AppointmentsView<A, C> {
    /// Opens the edit form for one row, abandoning any other open form.
    pub fn start_edit(&mut self, id: AppointmentId) -> Result<(), ViewError> {
        self.state().start_edit(id)
    }

    pub fn change_field(&mut self, field: EditField, value: &str) -> Result<(), ViewError> {
        self.state().change_field(field, value)
    }

    pub fn cancel_edit(&mut self) {
        self.state().cancel_edit();
    }

    /// Submits the open form. On failure the form stays open for a retry.
    pub async fn save_edit(&mut self) -> Result<Outcome, ViewError> {
        let (id, form) = {
            let state = self.state();
            let id = state.editing.ok_or(ViewError::NotEditing)?;
            (id, state.edit_form.clone())
        };

        let outcome = match self
            .api
            .update_appointment(id, &form)
            .await
            .map(MutationReply::outcome)
        {
            Ok(MutationOutcome::Succeeded(message)) => {
                info!("updated appointment {}", id);
                self.state().apply_edit(id, &form);
                self.succeed(message.unwrap_or_else(|| UPDATED_MESSAGE.to_string()));
                Outcome::Succeeded
            }
            Ok(MutationOutcome::Failed(message)) => {
                error!("backend refused to update appointment {}: {:?}", id, message);
                self.fail(message.unwrap_or_else(|| UPDATE_FAILED_MESSAGE.to_string()));
                Outcome::Failed
            }
            Err(e) => {
                error!("failed to update appointment {}: {}", id, e);
                self.fail(e.to_string());
                Outcome::Failed
            }
        };

        Ok(outcome)
    }
}
