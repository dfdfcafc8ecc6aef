/*!
 * Simulation Statistics
 * Counters collected by the dispatcher while the clock loop runs
 */

use crate::core::types::Tick;
use serde::{Deserialize, Serialize};

/// Scheduler-level counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationStats {
    /// Slices dispatched
    pub dispatches: u64,
    /// Dispatches of a different process than the previous slice
    pub context_switches: u64,
    /// Round-robin quantum expiries that rotated a process to its queue tail
    pub rotations: u64,
    /// Steps where nothing was ready
    pub idle_ticks: u64,
    pub completed: usize,
    pub busy_time: Tick,
    /// Simulated time when the last process finished
    pub final_time: Tick,
    /// busy_time / final_time, 0.0 for an empty timeline
    pub cpu_utilization: f64,
}

impl SimulationStats {
    pub(super) fn record_dispatch(&mut self, elapsed: Tick, switched: bool) {
        self.dispatches += 1;
        self.busy_time += elapsed;
        if switched {
            self.context_switches += 1;
        }
    }

    pub(super) fn finalize(&mut self, final_time: Tick) {
        self.final_time = final_time;
        self.cpu_utilization = if final_time == 0 {
            0.0
        } else {
            self.busy_time as f64 / final_time as f64
        };
    }
}
