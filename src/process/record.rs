/*!
 * Process Record
 * Mutable per-process execution state and derived metrics
 */

use super::types::{ProcessSpec, ProcessState};
use crate::core::errors::MlqError;
use crate::core::types::{MlqResult, Priority, QueueId, Tick};
use crate::metrics::ProcessMetrics;

/// One simulated job
///
/// Created once at load time and retained after it finishes so it can be
/// reported. Only the dispatcher mutates it.
#[derive(Debug, Clone)]
pub struct ProcessRecord {
    spec: ProcessSpec,
    remaining_time: Tick,
    first_run_time: Option<Tick>,
    completion_time: Option<Tick>,
    state: ProcessState,
    metrics: Option<ProcessMetrics>,
}

impl ProcessRecord {
    pub fn new(spec: ProcessSpec) -> Self {
        Self {
            remaining_time: spec.burst_time,
            spec,
            first_run_time: None,
            completion_time: None,
            state: ProcessState::NotArrived,
            metrics: None,
        }
    }

    /// Execute one slice starting at `current_time`
    ///
    /// `quantum == None` runs to completion. Returns the elapsed time.
    pub fn run(&mut self, current_time: Tick, quantum: Option<Tick>) -> MlqResult<Tick> {
        if self.is_finished() {
            return Err(MlqError::Precondition(format!(
                "process {} dispatched after it finished",
                self.spec.name
            )));
        }

        if current_time < self.spec.arrival_time {
            return Err(MlqError::InvariantViolation(format!(
                "process {} dispatched at {} before its arrival at {}",
                self.spec.name, current_time, self.spec.arrival_time
            )));
        }

        if self.first_run_time.is_none() {
            self.first_run_time = Some(current_time);
        }

        let elapsed = match quantum {
            None => self.remaining_time,
            Some(q) => q.min(self.remaining_time),
        };
        self.remaining_time -= elapsed;

        if self.remaining_time == 0 {
            self.completion_time = Some(current_time + elapsed);
        }

        Ok(elapsed)
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Derive TAT, WT and RT; only valid once the process finished
    pub fn compute_metrics(&mut self) -> MlqResult<&ProcessMetrics> {
        let (completion, first_run) = match (self.completion_time, self.first_run_time) {
            (Some(ct), Some(first)) if self.is_finished() => (ct, first),
            _ => {
                return Err(MlqError::Precondition(format!(
                    "metrics requested for unfinished process {} ({} ticks remaining)",
                    self.spec.name, self.remaining_time
                )))
            }
        };

        let span_error = |what: &str| {
            MlqError::InvariantViolation(format!(
                "process {} has {} before its arrival at {}",
                self.spec.name, what, self.spec.arrival_time
            ))
        };
        let turnaround_time = completion
            .checked_sub(self.spec.arrival_time)
            .ok_or_else(|| span_error("completion time"))?;
        let response_time = first_run
            .checked_sub(self.spec.arrival_time)
            .ok_or_else(|| span_error("first run time"))?;
        let waiting_time = turnaround_time
            .checked_sub(self.spec.burst_time)
            .ok_or_else(|| {
                MlqError::InvariantViolation(format!(
                    "process {} completed faster than its burst time",
                    self.spec.name
                ))
            })?;

        Ok(self.metrics.insert(ProcessMetrics {
            name: self.spec.name.clone(),
            burst_time: self.spec.burst_time,
            arrival_time: self.spec.arrival_time,
            queue: self.spec.queue,
            priority: self.spec.priority,
            waiting_time,
            completion_time: completion,
            response_time,
            turnaround_time,
        }))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    #[inline]
    pub fn spec(&self) -> &ProcessSpec {
        &self.spec
    }

    #[inline]
    pub fn burst_time(&self) -> Tick {
        self.spec.burst_time
    }

    #[inline]
    pub fn arrival_time(&self) -> Tick {
        self.spec.arrival_time
    }

    #[inline]
    pub fn queue(&self) -> QueueId {
        self.spec.queue
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.spec.priority
    }

    #[inline]
    pub fn remaining_time(&self) -> Tick {
        self.remaining_time
    }

    #[inline]
    pub fn first_run_time(&self) -> Option<Tick> {
        self.first_run_time
    }

    #[inline]
    pub fn completion_time(&self) -> Option<Tick> {
        self.completion_time
    }

    #[inline]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: ProcessState) {
        self.state = state;
    }

    /// Metrics, if `compute_metrics` already ran
    #[inline]
    pub fn metrics(&self) -> Option<&ProcessMetrics> {
        self.metrics.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(bt: Tick, at: Tick) -> ProcessRecord {
        ProcessRecord::new(ProcessSpec::new("P1", bt, at, QueueId::Q1, 0))
    }

    #[test]
    fn test_run_with_quantum() {
        let mut p = record(5, 0);
        assert_eq!(p.run(0, Some(3)).unwrap(), 3);
        assert_eq!(p.remaining_time(), 2);
        assert_eq!(p.first_run_time(), Some(0));
        assert_eq!(p.completion_time(), None);

        assert_eq!(p.run(7, Some(3)).unwrap(), 2);
        assert!(p.is_finished());
        assert_eq!(p.first_run_time(), Some(0));
        assert_eq!(p.completion_time(), Some(9));
    }

    #[test]
    fn test_run_without_quantum_completes() {
        let mut p = record(10, 2);
        assert_eq!(p.run(4, None).unwrap(), 10);
        assert_eq!(p.completion_time(), Some(14));
    }

    #[test]
    fn test_run_after_finish_rejected() {
        let mut p = record(1, 0);
        p.run(0, None).unwrap();
        assert!(matches!(p.run(1, None), Err(MlqError::Precondition(_))));
    }

    #[test]
    fn test_run_before_arrival_rejected() {
        let mut p = ProcessRecord::new(ProcessSpec::new("P", 2, 5, QueueId::Q3, 0));
        assert!(matches!(
            p.run(0, None),
            Err(MlqError::InvariantViolation(_))
        ));
        assert_eq!(p.remaining_time(), 2);
        assert_eq!(p.first_run_time(), None);
        assert!(matches!(p.compute_metrics(), Err(MlqError::Precondition(_))));

        assert_eq!(p.run(5, None).unwrap(), 2);
        let m = p.compute_metrics().unwrap();
        assert_eq!((m.turnaround_time, m.response_time, m.waiting_time), (2, 0, 0));
    }

    #[test]
    fn test_metrics_require_finished() {
        let mut p = record(4, 0);
        assert!(matches!(p.compute_metrics(), Err(MlqError::Precondition(_))));
        assert!(p.metrics().is_none());

        p.run(0, Some(3)).unwrap();
        assert!(p.compute_metrics().is_err());

        p.run(5, Some(3)).unwrap();
        let m = p.compute_metrics().unwrap().clone();
        assert_eq!(m.completion_time, 6);
        assert_eq!(m.turnaround_time, 6);
        assert_eq!(m.waiting_time, 2);
        assert_eq!(m.response_time, 0);
        assert_eq!(p.metrics(), Some(&m));
    }
}
