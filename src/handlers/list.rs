use tracing::{error, info};

use crate::api::AppointmentsApi;
use crate::confirm::Confirm;
use crate::handlers::AppointmentsView;

impl<A: AppointmentsApi, C: Confirm> AppointmentsView<A, C> {
    /// Initial fetch. No retry, no pagination.
    pub async fn mount(&mut self) {
        self.load().await;
    }

    /// Fetches the list again from scratch, dropping any error and edit form.
    pub async fn reload(&mut self) {
        self.state().begin_load();
        self.load().await;
    }

    async fn load(&mut self) {
        let result = match self.api.list_appointments().await {
            Ok(appointments) => {
                info!("loaded {} appointments", appointments.len());
                Ok(appointments)
            }
            Err(e) => {
                error!("failed to load appointments: {}", e);
                Err(e.to_string())
            }
        };

        self.state().finish_load(result);
    }
}
