/*!
 * Metrics Calculator
 * Runs once the dispatcher loop has finished every process
 */

use super::types::{Averages, ProcessMetrics};
use crate::core::errors::MlqError;
use crate::core::types::MlqResult;
use crate::process::ProcessRecord;

/// Compute metrics for every record, returned sorted by ascending CT
///
/// The sort is stable so ties keep input order.
pub fn compute_metrics(records: &mut [ProcessRecord]) -> MlqResult<Vec<ProcessMetrics>> {
    if records.is_empty() {
        return Err(MlqError::EmptyWorkload);
    }

    let mut table = records
        .iter_mut()
        .map(|record| record.compute_metrics().cloned())
        .collect::<MlqResult<Vec<_>>>()?;

    table.sort_by_key(|m| m.completion_time);
    Ok(table)
}

/// Mean WT, CT, RT and TAT; an empty table is an `EmptyWorkload` error
pub fn compute_averages(table: &[ProcessMetrics]) -> MlqResult<Averages> {
    if table.is_empty() {
        return Err(MlqError::EmptyWorkload);
    }

    let n = table.len() as f64;
    let mean = |f: fn(&ProcessMetrics) -> u64| table.iter().map(f).sum::<u64>() as f64 / n;

    Ok(Averages {
        waiting_time: mean(|m| m.waiting_time),
        completion_time: mean(|m| m.completion_time),
        response_time: mean(|m| m.response_time),
        turnaround_time: mean(|m| m.turnaround_time),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::QueueId;
    use crate::process::ProcessSpec;

    fn finished(name: &str, bt: u64, at: u64, start: u64) -> ProcessRecord {
        let mut record = ProcessRecord::new(ProcessSpec::new(name, bt, at, QueueId::Q3, 0));
        record.run(start, None).unwrap();
        record
    }

    #[test]
    fn test_empty_workload() {
        assert_eq!(compute_metrics(&mut []), Err(MlqError::EmptyWorkload));
        assert_eq!(compute_averages(&[]), Err(MlqError::EmptyWorkload));
    }

    #[test]
    fn test_sorted_by_completion_time() {
        let mut records = vec![finished("A", 4, 0, 3), finished("B", 3, 0, 0)];
        let table = compute_metrics(&mut records).unwrap();
        assert_eq!(table[0].name, "B");
        assert_eq!(table[1].name, "A");
        assert_eq!(table[1].waiting_time, 3);
    }

    #[test]
    fn test_unfinished_process_rejected() {
        let mut records = vec![ProcessRecord::new(ProcessSpec::new("A", 4, 0, QueueId::Q1, 0))];
        assert!(matches!(
            compute_metrics(&mut records),
            Err(MlqError::Precondition(_))
        ));
    }

    #[test]
    fn test_averages() {
        let mut records = vec![finished("A", 2, 0, 0), finished("B", 4, 1, 2)];
        let table = compute_metrics(&mut records).unwrap();
        let avg = compute_averages(&table).unwrap();
        // A: CT=2 TAT=2 WT=0 RT=0; B: CT=6 TAT=5 WT=1 RT=1
        assert_eq!(avg.completion_time, 4.0);
        assert_eq!(avg.turnaround_time, 3.5);
        assert_eq!(avg.waiting_time, 0.5);
        assert_eq!(avg.response_time, 0.5);
    }
}
