/*!
 * Metrics Module
 * Per-process WT/CT/RT/TAT and workload averages
 */

mod calculator;
mod types;

pub use calculator::{compute_averages, compute_metrics};
pub use types::{Averages, ProcessMetrics, SimulationReport};
