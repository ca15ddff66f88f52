//! Form state and its reducer.
//!
//! The interactive form is a single state record updated by pure transitions
//! keyed by event type. Field events come from user input; submit events are
//! produced by [`crate::session::FormSession`] around the network call.

use crate::catalog::DiskType;
use crate::filter::FilterState;
use crate::record::ServerRecord;

/// Events that drive the filter form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Move the lower storage handle to the given mark index.
    SetStorageLo(usize),
    /// Move the upper storage handle to the given mark index.
    SetStorageHi(usize),
    /// Toggle a RAM size in or out of the selection.
    ToggleRam(String),
    /// Replace the disk type; `None` resets to unset.
    SetDiskType(Option<DiskType>),
    /// Replace the location; `None` resets to unset.
    SetLocation(Option<String>),
    /// A submission started; `seq` identifies the request.
    SubmitStarted { seq: u64 },
    /// A submission resolved with records.
    SubmitSucceeded { seq: u64, records: Vec<ServerRecord> },
    /// A submission failed in any way (transport, status, parse).
    SubmitFailed { seq: u64 },
}

/// The complete state of the filter form.
///
/// Created with defaults, mutated only through [`FormState::apply`], and
/// discarded with the session. Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Current filter selections.
    pub filter: FilterState,
    /// Last fetched result list, in backend order.
    pub results: Vec<ServerRecord>,
    /// Whether a submission is outstanding.
    pub loading: bool,
    /// Sequence number of the most recent submission.
    ///
    /// Completion events with an older sequence are stale (a newer submission
    /// superseded them) and are dropped, so the last *submission* wins rather
    /// than the last *response*.
    latest_seq: u64,
}

impl FormState {
    /// Apply one event to the state.
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::SetStorageLo(index) => self.filter.storage.set_lo(index),
            FormEvent::SetStorageHi(index) => self.filter.storage.set_hi(index),
            FormEvent::ToggleRam(value) => self.filter.toggle_ram(&value),
            FormEvent::SetDiskType(disk) => self.filter.hdd = disk,
            FormEvent::SetLocation(location) => self.filter.location = location,
            FormEvent::SubmitStarted { seq } => {
                self.latest_seq = seq;
                self.loading = true;
            }
            FormEvent::SubmitSucceeded { seq, records } => {
                if seq == self.latest_seq {
                    self.results = records;
                    self.loading = false;
                }
            }
            FormEvent::SubmitFailed { seq } => {
                if seq == self.latest_seq {
                    self.results.clear();
                    self.loading = false;
                }
            }
        }
    }
}
