/*!
 * Report Rendering
 * Text views of a finished simulation and the results file writer
 */

use crate::core::errors::MlqError;
use crate::core::types::MlqResult;
use crate::metrics::{Averages, SimulationReport};
use crate::scheduler::TraceEvent;
use std::path::{Path, PathBuf};
use tracing::info;

const RULE_WIDTH: usize = 80;

/// One line per trace event
pub fn render_trace(events: &[TraceEvent]) -> String {
    events.iter().map(|event| trace_line(event) + "\n").collect()
}

fn trace_line(event: &TraceEvent) -> String {
    match event {
        TraceEvent::Slice {
            start,
            end,
            process,
            label,
            remaining,
            ..
        } => format!(
            "t={:2}->{:2}: [{}] {} (remaining {})",
            start, end, process, label, remaining
        ),
        TraceEvent::Completed { process, .. } => format!("      -> [{}] finished", process),
        TraceEvent::Idle { from, to } => format!("t={:2}->{:2}: idle", from, to),
    }
}

/// Fixed-width results table sorted by completion time, with averages
pub fn render_table(report: &SimulationReport) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = format!(
        "{:<6} {:<4} {:<4} {:<6} {:<4} {:<5} {:<5} {:<5} {:<5}\n",
        "Proc", "BT", "AT", "Queue", "Pr", "WT", "CT", "RT", "TAT"
    );
    out.push_str(&rule);
    out.push('\n');

    for m in &report.processes {
        out.push_str(&format!(
            "{:<6} {:<4} {:<4} {:<6} {:<4} {:<5} {:<5} {:<5} {:<5}\n",
            m.name,
            m.burst_time,
            m.arrival_time,
            m.queue,
            m.priority,
            m.waiting_time,
            m.completion_time,
            m.response_time,
            m.turnaround_time
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    let a = &report.averages;
    out.push_str(&format!(
        "AVERAGES: WT={:.1}  CT={:.1}  RT={:.1}  TAT={:.1}\n",
        a.waiting_time, a.completion_time, a.response_time, a.turnaround_time
    ));
    out
}

/// Contents of the `;`-delimited results file
pub fn render_results(file_label: &str, report: &SimulationReport) -> String {
    let mut out = format!("# file: {}\n# label; BT; AT; Q; Pr; WT; CT; RT; TAT\n", file_label);
    for m in &report.processes {
        out.push_str(&format!(
            "{};{};{};{};{};{};{};{};{}\n",
            m.name,
            m.burst_time,
            m.arrival_time,
            m.queue,
            m.priority,
            m.waiting_time,
            m.completion_time,
            m.response_time,
            m.turnaround_time
        ));
    }
    out.push_str(&averages_line(&report.averages));
    out.push('\n');
    out
}

fn averages_line(a: &Averages) -> String {
    format!(
        "WT={:.1}; CT={:.1}; RT={:.1}; TAT={:.1};",
        a.waiting_time, a.completion_time, a.response_time, a.turnaround_time
    )
}

/// Write the results file to `path`
pub fn write_results(path: impl AsRef<Path>, report: &SimulationReport) -> MlqResult<()> {
    let path = path.as_ref();
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    std::fs::write(path, render_results(&label, report))
        .map_err(|e| MlqError::Io(format!("{}: {}", path.display(), e)))?;

    info!(path = %path.display(), rows = report.processes.len(), "Results written");
    Ok(())
}

/// `input.txt` -> `input_output.txt`; other names get `_output.txt` appended
pub fn default_output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref().to_string_lossy();
    match input.strip_suffix(".txt") {
        Some(stem) => PathBuf::from(format!("{}_output.txt", stem)),
        None => PathBuf::from(format!("{}_output.txt", input)),
    }
}
