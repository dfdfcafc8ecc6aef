/*!
 * Process Types
 * Input records and lifecycle state for simulated processes
 */

use crate::core::errors::MlqError;
use crate::core::types::{MlqResult, Priority, QueueId, Tick};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Process lifecycle state
///
/// Running is not a held state: a dispatch runs one whole slice atomically,
/// so a process goes straight from Ready back to Ready or to Finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Arrival time not reached yet, or not admitted yet
    NotArrived,
    /// Present in exactly one ready queue
    Ready(QueueId),
    /// Remaining time reached zero; removed from every queue
    Finished,
}

impl ProcessState {
    #[inline]
    #[must_use]
    pub const fn is_queued(&self) -> bool {
        matches!(self, ProcessState::Ready(_))
    }
}

/// One workload record: `name;burst_time;arrival_time;queue_id;priority`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub name: String,
    pub burst_time: Tick,
    pub arrival_time: Tick,
    pub queue: QueueId,
    pub priority: Priority,
}

impl ProcessSpec {
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        burst_time: Tick,
        arrival_time: Tick,
        queue: QueueId,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.into(),
            burst_time,
            arrival_time,
            queue,
            priority,
        }
    }
}

/// Load-time policy: non-empty, unique names and positive burst times
pub fn validate_workload(specs: &[ProcessSpec]) -> MlqResult<()> {
    if specs.is_empty() {
        return Err(MlqError::EmptyWorkload);
    }

    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if spec.name.trim().is_empty() {
            return Err(MlqError::malformed(0, "process name must not be empty"));
        }
        if spec.burst_time == 0 {
            return Err(MlqError::InvalidWorkload(format!(
                "process {} has a zero burst time",
                spec.name
            )));
        }
        if !seen.insert(spec.name.as_str()) {
            return Err(MlqError::InvalidWorkload(format!(
                "duplicate process name {}",
                spec.name
            )));
        }
    }
    Ok(())
}
