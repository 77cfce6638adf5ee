use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use tracing::{info, warn};

use crate::api::{ApiError, AppointmentsApi};
use crate::config::{Config, ConfigError};
use crate::models::{Appointment, AppointmentId, Doctor, EditForm, MutationReply};

/// `AppointmentsApi` over HTTP. Requests carry no timeout; a hung backend
/// leaves the caller waiting.
#[derive(Debug, Clone)]
pub struct HttpAppointmentsApi {
    client: Client,
    config: Config,
}

impl HttpAppointmentsApi {
    pub fn new(config: Config) -> Self {
        HttpAppointmentsApi {
            client: Client::new(),
            config,
        }
    }

    // Mutation replies are decoded whatever the status code says
    async fn read_reply(response: Response) -> Result<MutationReply, ApiError> {
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("{} answered {}, decoding body anyway", url, status);
        }

        Ok(MutationReply::decode(&body))
    }
}

#[async_trait]
impl AppointmentsApi for HttpAppointmentsApi {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        let url = self.config.endpoint("appointments/list")?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::from_status(response.status()));
        }

        let body = response.text().await?;
        let appointments: Vec<Appointment> = serde_json::from_str(&body)?;
        info!("fetched {} appointments", appointments.len());
        Ok(appointments)
    }

    async fn delete_appointment(&self, id: AppointmentId) -> Result<MutationReply, ApiError> {
        let url = self.config.endpoint(&format!("appointments/{}", id))?;
        let response = self.client.delete(url).send().await?;
        Self::read_reply(response).await
    }

    async fn update_appointment(
        &self,
        id: AppointmentId,
        form: &EditForm,
    ) -> Result<MutationReply, ApiError> {
        let url = self.config.endpoint(&format!("appointments/{}", id))?;
        let body = serde_json::to_vec(form)?;
        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;
        Self::read_reply(response).await
    }

    async fn doctors_by_department(&self, department: &str) -> Result<Vec<Doctor>, ApiError> {
        let mut url = self.config.endpoint("doctors/department/")?;
        url.path_segments_mut()
            .map_err(|_| ConfigError::NotABase(self.config.api_url().to_string()))?
            .pop_if_empty()
            .push(department);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::from_status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
