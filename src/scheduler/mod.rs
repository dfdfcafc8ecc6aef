/*!
 * Multilevel Queue Scheduler
 * Three strictly prioritized ready queues driven by a discrete clock loop
 */

use crate::core::limits::QUEUE_LEVELS;
use crate::core::types::{MlqResult, QueueId, Tick};
use crate::process::{validate_workload, ProcessRecord, ProcessSpec};
use tracing::info;

mod admission;
mod operations;
mod queue;
mod stats;
mod trace;
pub mod types;

use queue::ReadyQueue;

pub use operations::{simulate, StepOutcome};
pub use stats::SimulationStats;
pub use trace::TraceEvent;
pub use types::{Discipline, QueueConfig, SchedulerConfig, TimeQuantum};

/// MLQ scheduler over a fixed process set
///
/// Owns the process table, the three ready queues and the simulated clock.
/// Queue 1 always starves Queue 2 and Queue 3 while it is non-empty.
pub struct MlqScheduler {
    processes: Vec<ProcessRecord>,
    queues: [ReadyQueue; QUEUE_LEVELS],
    time: Tick,
    trace: Vec<TraceEvent>,
    stats: SimulationStats,
    last_dispatched: Option<usize>,
}

impl MlqScheduler {
    /// Create scheduler with the default RR(3) / RR(5) / FCFS levels
    pub fn new(specs: Vec<ProcessSpec>) -> MlqResult<Self> {
        Self::with_config(specs, &SchedulerConfig::default())
    }

    /// Create scheduler with custom queue levels
    pub fn with_config(specs: Vec<ProcessSpec>, config: &SchedulerConfig) -> MlqResult<Self> {
        validate_workload(&specs)?;

        let queues = QueueId::ALL.map(|id| {
            let level = config.level(id);
            ReadyQueue::new(id, level.discipline, level.label_for(id))
        });

        info!(
            processes = specs.len(),
            q1 = queues[0].label(),
            q2 = queues[1].label(),
            q3 = queues[2].label(),
            "MLQ scheduler initialized"
        );

        Ok(Self {
            processes: specs.into_iter().map(ProcessRecord::new).collect(),
            queues,
            time: 0,
            trace: Vec::new(),
            stats: SimulationStats::default(),
            last_dispatched: None,
        })
    }

    /// Current simulated time
    #[inline]
    pub fn time(&self) -> Tick {
        self.time
    }

    /// All process records in input order
    #[inline]
    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    /// Trace recorded so far
    #[inline]
    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    #[inline]
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Names currently waiting in `queue`, head first
    pub fn queued(&self, queue: QueueId) -> Vec<&str> {
        self.queues[queue.index()]
            .iter()
            .map(|idx| self.processes[idx].name())
            .collect()
    }

    /// Number of ready processes across all levels
    pub fn ready_len(&self) -> usize {
        self.queues.iter().map(ReadyQueue::len).sum()
    }

    /// True once every process has finished
    pub fn is_complete(&self) -> bool {
        self.processes.iter().all(ProcessRecord::is_finished)
    }
}
