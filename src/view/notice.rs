use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::view::ViewState;

pub const SUCCESS_TTL: Duration = Duration::from_millis(2000);

/// Owns the pending auto-clear of the success banner. At most one clear is
/// scheduled; it is aborted when replaced or when the notice is dropped.
#[derive(Debug, Default)]
pub struct SuccessNotice {
    pending: Option<JoinHandle<()>>,
}

impl SuccessNotice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` now and clears it `SUCCESS_TTL` later.
    pub fn flash(&mut self, state: &Arc<Mutex<ViewState>>, message: String) {
        state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .success = Some(message);

        self.cancel();

        let state = Arc::clone(state);
        self.pending = Some(tokio::spawn(async move {
            sleep(SUCCESS_TTL).await;
            state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .success = None;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SuccessNotice {
    fn drop(&mut self) {
        self.cancel();
    }
}
