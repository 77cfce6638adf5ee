use tracing::{error, info};

use crate::api::AppointmentsApi;
use crate::confirm::{Confirm, DELETE_PROMPT};
use crate::handlers::{AppointmentsView, Outcome};
use crate::models::{AppointmentId, MutationOutcome, MutationReply};

pub const DELETED_MESSAGE: &str = "Appointment deleted successfully.";
pub const DELETE_FAILED_MESSAGE: &str = "Delete failed";

impl<A: AppointmentsApi, C: Confirm> AppointmentsView<A, C> {
    /// Removes one appointment after the user confirms. Declining is a no-op
    /// that sends nothing.
    pub async fn delete(&mut self, id: AppointmentId) -> Outcome {
        if !self.confirm.confirm(DELETE_PROMPT) {
            return Outcome::Declined;
        }

        match self
            .api
            .delete_appointment(id)
            .await
            .map(MutationReply::outcome)
        {
            Ok(MutationOutcome::Succeeded(message)) => {
                info!("deleted appointment {}", id);
                self.state().remove(id);
                self.succeed(message.unwrap_or_else(|| DELETED_MESSAGE.to_string()));
                Outcome::Succeeded
            }
            Ok(MutationOutcome::Failed(message)) => {
                error!("backend refused to delete appointment {}: {:?}", id, message);
                self.fail(message.unwrap_or_else(|| DELETE_FAILED_MESSAGE.to_string()));
                Outcome::Failed
            }
            Err(e) => {
                error!("failed to delete appointment {}: {}", id, e);
                self.fail(e.to_string());
                Outcome::Failed
            }
        }
    }
}
