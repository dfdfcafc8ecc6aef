/*!
 * Queue Admission
 * Moves arrived, unfinished, unqueued processes into their static queue
 */

use super::MlqScheduler;
use crate::core::errors::MlqError;
use crate::core::types::MlqResult;
use crate::process::ProcessState;
use tracing::{debug, error};

impl MlqScheduler {
    /// Admit arrivals at the current time, then re-sort every queue
    ///
    /// Ordering is rebuilt from scratch on each pass, so a late arrival with
    /// a higher priority overtakes processes already waiting in its queue.
    pub(super) fn admit(&mut self) -> MlqResult<usize> {
        let now = self.time;
        let mut admitted = 0;

        for (idx, record) in self.processes.iter_mut().enumerate() {
            if record.arrival_time() > now || record.is_finished() {
                continue;
            }

            match record.state() {
                ProcessState::NotArrived => {
                    let queue = record.queue();
                    self.queues[queue.index()].push_back(idx);
                    record.set_state(ProcessState::Ready(queue));
                    admitted += 1;

                    debug!(
                        time = now,
                        process = record.name(),
                        queue = queue.get(),
                        priority = record.priority(),
                        "Process admitted"
                    );
                }
                ProcessState::Ready(_) => {}
                ProcessState::Finished => {
                    error!(process = record.name(), "Finished process has remaining time");
                    return Err(MlqError::InvariantViolation(format!(
                        "process {} marked finished with {} ticks remaining",
                        record.name(),
                        record.remaining_time()
                    )));
                }
            }
        }

        for queue in self.queues.iter_mut() {
            queue.sort_by_priority(&self.processes);
        }

        self.check_membership()?;
        Ok(admitted)
    }

    /// Every queued index sits in exactly one queue, matching its state flag
    fn check_membership(&self) -> MlqResult<()> {
        let mut seen = vec![false; self.processes.len()];

        for queue in &self.queues {
            for idx in queue.iter() {
                let record = &self.processes[idx];
                if seen[idx] || record.state() != ProcessState::Ready(queue.id()) {
                    error!(process = record.name(), queue = queue.id().get(), "Queue membership corrupted");
                    return Err(MlqError::InvariantViolation(format!(
                        "process {} present in more than one queue or in the wrong queue",
                        record.name()
                    )));
                }
                seen[idx] = true;
            }
        }

        Ok(())
    }
}
