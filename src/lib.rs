/*!
 * MLQ Scheduler Library
 * Multilevel queue CPU scheduling simulation exposed as a library
 *
 * Queue 1 is Round Robin (quantum 3), Queue 2 is Round Robin (quantum 5) and
 * Queue 3 is FCFS. Queues are strictly prioritized; within a queue the
 * highest static priority runs first.
 */

pub mod core;
pub mod io;
pub mod metrics;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::{MlqError, MlqResult, Priority, QueueId, Tick};
pub use io::{load_workload, parse_workload, write_results};
pub use metrics::{Averages, ProcessMetrics, SimulationReport};
pub use monitoring::{init_tracing, init_tracing_with};
pub use process::{ProcessRecord, ProcessSpec, ProcessState};
pub use scheduler::{
    simulate, Discipline, MlqScheduler, QueueConfig, SchedulerConfig, SimulationStats,
    StepOutcome, TimeQuantum, TraceEvent,
};
