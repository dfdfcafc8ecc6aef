/*!
 * Ready Queue
 * One level of the multilevel queue, holding indices into the process table
 */

use super::types::Discipline;
use crate::core::types::{QueueId, Tick};
use crate::process::ProcessRecord;
use std::cmp::Reverse;
use std::collections::VecDeque;

/// Ordered ready queue of one level
///
/// Entries are indices into the scheduler's process table; the queue never
/// owns process lifetime.
#[derive(Debug, Clone)]
pub(super) struct ReadyQueue {
    id: QueueId,
    discipline: Discipline,
    label: String,
    entries: VecDeque<usize>,
}

impl ReadyQueue {
    pub fn new(id: QueueId, discipline: Discipline, label: String) -> Self {
        Self {
            id,
            discipline,
            label,
            entries: VecDeque::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> QueueId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn quantum(&self) -> Option<Tick> {
        self.discipline.quantum()
    }

    #[inline]
    pub fn head(&self) -> Option<usize> {
        self.entries.front().copied()
    }

    pub fn push_back(&mut self, idx: usize) {
        self.entries.push_back(idx);
    }

    pub fn pop_front(&mut self) -> Option<usize> {
        self.entries.pop_front()
    }

    /// Move the head to the tail (round-robin rotation)
    pub fn rotate(&mut self) {
        if let Some(idx) = self.entries.pop_front() {
            self.entries.push_back(idx);
        }
    }

    /// Re-sort every entry by descending priority
    ///
    /// Stable, so equal priorities keep their current relative order.
    pub fn sort_by_priority(&mut self, records: &[ProcessRecord]) {
        self.entries
            .make_contiguous()
            .sort_by_key(|&idx| Reverse(records[idx].priority()));
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSpec;

    fn records(priorities: &[i64]) -> Vec<ProcessRecord> {
        priorities
            .iter()
            .enumerate()
            .map(|(i, &pr)| ProcessRecord::new(ProcessSpec::new(format!("P{}", i), 1, 0, QueueId::Q1, pr)))
            .collect()
    }

    #[test]
    fn test_sort_is_stable_and_descending() {
        let records = records(&[1, 5, 1, 5, 3]);
        let mut queue = ReadyQueue::new(QueueId::Q1, Discipline::Fcfs, "q".into());
        for idx in 0..records.len() {
            queue.push_back(idx);
        }

        queue.sort_by_priority(&records);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![1, 3, 4, 0, 2]);
    }

    #[test]
    fn test_rotate() {
        let mut queue = ReadyQueue::new(QueueId::Q2, Discipline::Fcfs, "q".into());
        queue.rotate();
        assert!(queue.is_empty());

        queue.push_back(7);
        queue.push_back(8);
        queue.rotate();
        assert_eq!(queue.head(), Some(8));
        assert_eq!(queue.len(), 2);
    }
}
