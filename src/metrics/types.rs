/*!
 * Metrics Types
 * Structured results handed to renderers and writers
 */

use crate::core::types::{Priority, QueueId, Tick};
use crate::scheduler::{SimulationStats, TraceEvent};
use serde::{Deserialize, Serialize};

/// Final metrics of one finished process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMetrics {
    pub name: String,
    pub burst_time: Tick,
    pub arrival_time: Tick,
    pub queue: QueueId,
    pub priority: Priority,
    pub waiting_time: Tick,
    pub completion_time: Tick,
    pub response_time: Tick,
    pub turnaround_time: Tick,
}

/// Arithmetic means across all processes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Averages {
    pub waiting_time: f64,
    pub completion_time: f64,
    pub response_time: f64,
    pub turnaround_time: f64,
}

/// Everything a finished simulation produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    /// Slice, completion and idle events in time order
    pub trace: Vec<TraceEvent>,
    /// Per-process metrics sorted by ascending completion time
    pub processes: Vec<ProcessMetrics>,
    pub averages: Averages,
    pub stats: SimulationStats,
}

impl SimulationReport {
    /// Look up a process row by name
    pub fn process(&self, name: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.name == name)
    }

    /// Total CPU time consumed by all slices in the trace
    pub fn busy_time(&self) -> Tick {
        self.trace.iter().map(TraceEvent::elapsed).sum()
    }
}
