//! Form session service.
//!
//! Owns the form state and drives submissions through the [`FilterApi`]
//! port. Adapters never touch [`FormState`] directly; they dispatch events
//! or call [`FormSession::submit`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::form::{FormEvent, FormState};
use crate::ports::FilterApi;

/// An interactive filter session over a [`FilterApi`] implementation.
pub struct FormSession {
    state: FormState,
    api: Arc<dyn FilterApi>,
    next_seq: u64,
}

impl FormSession {
    /// Create a session with default (untouched) form state.
    pub fn new(api: Arc<dyn FilterApi>) -> Self {
        Self {
            state: FormState::default(),
            api,
            next_seq: 0,
        }
    }

    /// The current form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Dispatch a field event (storage handle, RAM toggle, selects).
    pub fn update(&mut self, event: FormEvent) {
        self.state.apply(event);
    }

    /// Submit the current filter.
    ///
    /// Exactly one request is issued. Any failure collapses to an empty
    /// result list; the cause is logged but not surfaced, matching the
    /// flat error model of the form.
    pub async fn submit(&mut self) {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.state.apply(FormEvent::SubmitStarted { seq });

        let payload = self.state.filter.to_payload();
        debug!(?payload, seq, "submitting filter");

        match self.api.filter_servers(&payload).await {
            Ok(records) => {
                debug!(count = records.len(), seq, "filter results received");
                self.state.apply(FormEvent::SubmitSucceeded { seq, records });
            }
            Err(err) => {
                warn!(%err, seq, "filter request failed");
                self.state.apply(FormEvent::SubmitFailed { seq });
            }
        }
    }
}
