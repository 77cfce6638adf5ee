//! The appointments component: shared view state plus the handlers that move
//! it between loading, listing, deleting and editing.

pub mod delete;
pub mod edit;
pub mod list;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::{ApiError, AppointmentsApi};
use crate::confirm::Confirm;
use crate::models::Doctor;
use crate::view::{Rendered, SuccessNotice, ViewState, render};

/// How a user-triggered mutation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Declined,
    Succeeded,
    Failed,
}

pub struct AppointmentsView<A, C> {
    api: A,
    confirm: C,
    state: Arc<Mutex<ViewState>>,
    notice: SuccessNotice,
}

impl<A: AppointmentsApi, C: Confirm> AppointmentsView<A, C> {
    pub fn new(api: A, confirm: C) -> Self {
        AppointmentsView {
            api,
            confirm,
            state: Arc::new(Mutex::new(ViewState::default())),
            notice: SuccessNotice::new(),
        }
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        // the state stays consistent even if a holder panicked
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fail(&self, message: String) {
        self.state().error = Some(message);
    }

    fn succeed(&mut self, message: String) {
        self.state().error = None;
        self.notice.flash(&self.state, message);
    }

    pub fn render(&self) -> Rendered {
        render(&self.state())
    }

    pub fn snapshot(&self) -> ViewState {
        self.state().clone()
    }

    pub async fn doctors_by_department(&self, department: &str) -> Result<Vec<Doctor>, ApiError> {
        self.api.doctors_by_department(department).await
    }
}
