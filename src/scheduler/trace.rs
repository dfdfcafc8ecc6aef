/*!
 * Execution Trace
 * Events recorded by the clock loop, in non-decreasing time order
 */

use crate::core::types::{QueueId, Tick};
use serde::{Deserialize, Serialize};

/// One trace event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A process ran from `start` to `end`
    Slice {
        start: Tick,
        end: Tick,
        process: String,
        queue: QueueId,
        label: String,
        remaining: Tick,
    },
    /// A process reached zero remaining time at `at`
    Completed { at: Tick, process: String },
    /// Nothing was ready during `[from, to)`; consecutive idle ticks share one event
    Idle { from: Tick, to: Tick },
}

impl TraceEvent {
    /// CPU time consumed by this event
    #[inline]
    pub fn elapsed(&self) -> Tick {
        match self {
            TraceEvent::Slice { start, end, .. } => end - start,
            _ => 0,
        }
    }

    /// Time the event begins
    pub fn time(&self) -> Tick {
        match self {
            TraceEvent::Slice { start, .. } => *start,
            TraceEvent::Completed { at, .. } => *at,
            TraceEvent::Idle { from, .. } => *from,
        }
    }

    /// Name of the process involved, if any
    pub fn process(&self) -> Option<&str> {
        match self {
            TraceEvent::Slice { process, .. } | TraceEvent::Completed { process, .. } => {
                Some(process)
            }
            TraceEvent::Idle { .. } => None,
        }
    }
}
