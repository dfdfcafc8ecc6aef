/*!
 * Dispatcher Operations
 * Single clock steps, the run-to-completion loop and report assembly
 */

use super::trace::TraceEvent;
use super::types::SchedulerConfig;
use super::MlqScheduler;
use crate::core::errors::MlqError;
use crate::core::limits::IDLE_TICK;
use crate::core::types::{MlqResult, QueueId, Tick};
use crate::metrics::{compute_averages, compute_metrics, SimulationReport};
use crate::process::{ProcessSpec, ProcessState};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace};

/// What one clock step did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    /// One slice ran on the CPU
    Dispatched {
        process: String,
        queue: QueueId,
        start: Tick,
        end: Tick,
        finished: bool,
    },
    /// Nothing was ready; time advanced by one tick
    Idle { at: Tick },
    /// Every process had already finished
    Complete,
}

impl MlqScheduler {
    /// Advance the simulation by one step
    ///
    /// Runs admission, then dispatches the head of the highest non-empty
    /// queue for one slice. Returns `Complete` without side effects once all
    /// processes are finished.
    pub fn step(&mut self) -> MlqResult<StepOutcome> {
        if self.is_complete() {
            return Ok(StepOutcome::Complete);
        }

        self.admit()?;

        let (level, idx) = match self
            .queues
            .iter()
            .enumerate()
            .find_map(|(level, q)| q.head().map(|idx| (level, idx)))
        {
            Some(selected) => selected,
            None => return self.idle(),
        };

        let queue_id = self.queues[level].id();
        let quantum = self.queues[level].quantum();
        let start = self.time;

        let record = &mut self.processes[idx];
        let elapsed = record.run(start, quantum)?;
        let end = start + elapsed;
        let finished = record.is_finished();
        let name = record.name().to_string();
        let remaining = record.remaining_time();

        self.trace.push(TraceEvent::Slice {
            start,
            end,
            process: name.clone(),
            queue: queue_id,
            label: self.queues[level].label().to_string(),
            remaining,
        });
        self.stats
            .record_dispatch(elapsed, self.last_dispatched != Some(idx));
        self.last_dispatched = Some(idx);
        self.advance_to(end)?;

        debug!(
            process = %name,
            queue = queue_id.get(),
            start,
            end,
            remaining,
            "Slice dispatched"
        );

        if finished {
            self.queues[level].pop_front();
            self.processes[idx].set_state(ProcessState::Finished);
            self.stats.completed += 1;
            self.trace.push(TraceEvent::Completed {
                at: end,
                process: name.clone(),
            });
            debug!(process = %name, at = end, "Process finished");
        } else if quantum.is_none() {
            error!(process = %name, queue = queue_id.get(), "Run-to-completion slice left work behind");
            return Err(MlqError::InvariantViolation(format!(
                "process {} dispatched from {} did not finish ({} ticks remaining)",
                name,
                self.queues[level].label(),
                remaining
            )));
        } else {
            self.queues[level].rotate();
            self.stats.rotations += 1;
        }

        Ok(StepOutcome::Dispatched {
            process: name,
            queue: queue_id,
            start,
            end,
            finished,
        })
    }

    /// Drive the clock loop until every process finished, then compute metrics
    #[instrument(skip(self), fields(processes = self.processes.len()))]
    pub fn run(&mut self) -> MlqResult<SimulationReport> {
        info!("Starting MLQ simulation");

        while self.step()? != StepOutcome::Complete {}

        self.stats.finalize(self.time);
        let processes = compute_metrics(&mut self.processes)?;
        let averages = compute_averages(&processes)?;

        info!(
            final_time = self.time,
            dispatches = self.stats.dispatches,
            idle_ticks = self.stats.idle_ticks,
            "Simulation complete"
        );

        Ok(SimulationReport {
            trace: self.trace.clone(),
            processes,
            averages,
            stats: self.stats.clone(),
        })
    }

    fn idle(&mut self) -> MlqResult<StepOutcome> {
        let at = self.time;
        trace!(time = at, "No process ready");

        let to = at + IDLE_TICK;
        let extended = match self.trace.last_mut() {
            Some(TraceEvent::Idle { to: end, .. }) if *end == at => {
                *end = to;
                true
            }
            _ => false,
        };
        if !extended {
            self.trace.push(TraceEvent::Idle { from: at, to });
        }
        self.stats.idle_ticks += 1;
        self.advance_to(to)?;
        Ok(StepOutcome::Idle { at })
    }

    /// Move the clock forward; it never runs backwards
    fn advance_to(&mut self, time: Tick) -> MlqResult<()> {
        if time < self.time {
            error!(from = self.time, to = time, "Simulated time decreased");
            return Err(MlqError::InvariantViolation(format!(
                "simulated time moved backwards from {} to {}",
                self.time, time
            )));
        }
        self.time = time;
        Ok(())
    }
}

/// Build and run a simulation in one call
pub fn simulate(specs: Vec<ProcessSpec>, config: &SchedulerConfig) -> MlqResult<SimulationReport> {
    MlqScheduler::with_config(specs, config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, bt: Tick, at: Tick, queue: QueueId, pr: i64) -> ProcessSpec {
        ProcessSpec::new(name, bt, at, queue, pr)
    }

    #[test]
    fn test_step_idle_until_arrival() {
        let mut scheduler = MlqScheduler::new(vec![spec("A", 2, 2, QueueId::Q3, 0)]).unwrap();

        assert_eq!(scheduler.step().unwrap(), StepOutcome::Idle { at: 0 });
        assert_eq!(scheduler.step().unwrap(), StepOutcome::Idle { at: 1 });
        assert_eq!(
            scheduler.step().unwrap(),
            StepOutcome::Dispatched {
                process: "A".into(),
                queue: QueueId::Q3,
                start: 2,
                end: 4,
                finished: true,
            }
        );
        assert_eq!(scheduler.step().unwrap(), StepOutcome::Complete);
        assert_eq!(scheduler.time(), 4);
        assert_eq!(scheduler.stats().idle_ticks, 2);
        assert_eq!(scheduler.trace()[0], TraceEvent::Idle { from: 0, to: 2 });
    }

    #[test]
    fn test_idle_gaps_are_merged() {
        let mut scheduler = MlqScheduler::new(vec![
            spec("A", 1, 3, QueueId::Q1, 0),
            spec("B", 2, 6, QueueId::Q2, 0),
        ])
        .unwrap();

        let report = scheduler.run().unwrap();
        assert_eq!(report.trace.len(), 6);
        assert_eq!(report.trace[0], TraceEvent::Idle { from: 0, to: 3 });
        assert_eq!(report.trace[3], TraceEvent::Idle { from: 4, to: 6 });
        assert_eq!(report.stats.idle_ticks, 5);
    }

    #[test]
    fn test_round_robin_rotation() {
        let mut scheduler = MlqScheduler::new(vec![
            spec("P1", 4, 0, QueueId::Q1, 0),
            spec("P2", 2, 0, QueueId::Q1, 0),
        ])
        .unwrap();

        scheduler.step().unwrap();
        assert_eq!(scheduler.queued(QueueId::Q1), vec!["P2", "P1"]);
        assert_eq!(scheduler.stats().rotations, 1);

        scheduler.step().unwrap();
        assert_eq!(scheduler.queued(QueueId::Q1), vec!["P1"]);
        assert_eq!(
            scheduler.processes()[1].state(),
            ProcessState::Finished
        );
    }

    #[test]
    fn test_higher_queue_wins() {
        let mut scheduler = MlqScheduler::new(vec![
            spec("low", 2, 0, QueueId::Q3, 9),
            spec("mid", 2, 0, QueueId::Q2, 0),
            spec("high", 2, 0, QueueId::Q1, -5),
        ])
        .unwrap();

        let first = scheduler.step().unwrap();
        assert!(matches!(first, StepOutcome::Dispatched { ref process, .. } if process == "high"));
        let second = scheduler.step().unwrap();
        assert!(matches!(second, StepOutcome::Dispatched { ref process, .. } if process == "mid"));
    }

    #[test]
    fn test_run_reports_in_completion_order() {
        let mut scheduler = MlqScheduler::new(vec![
            spec("P1", 4, 0, QueueId::Q1, 0),
            spec("P2", 2, 0, QueueId::Q1, 0),
        ])
        .unwrap();

        let report = scheduler.run().unwrap();
        let names: Vec<_> = report.processes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["P2", "P1"]);
        assert_eq!(report.stats.final_time, 6);
        assert_eq!(report.stats.completed, 2);
        assert_eq!(report.stats.cpu_utilization, 1.0);
    }
}
