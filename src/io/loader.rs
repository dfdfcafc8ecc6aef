/*!
 * Workload Loader
 * Parses `name;burst_time;arrival_time;queue_id;priority` records
 */

use crate::core::errors::MlqError;
use crate::core::limits::{COMMENT_PREFIX, RECORD_DELIMITER, RECORD_FIELDS};
use crate::core::types::{MlqResult, QueueId};
use crate::process::{validate_workload, ProcessSpec};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Read and parse a workload file
pub fn load_workload(path: impl AsRef<Path>) -> MlqResult<Vec<ProcessSpec>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| MlqError::Io(format!("{}: {}", path.display(), e)))?;

    let specs = parse_workload(&contents)?;
    info!(path = %path.display(), processes = specs.len(), "Workload loaded");
    Ok(specs)
}

/// Parse workload text; blank lines and `#` comments are skipped
///
/// The whole input is rejected on the first malformed record.
pub fn parse_workload(input: &str) -> MlqResult<Vec<ProcessSpec>> {
    let mut specs = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let spec = parse_record(idx + 1, line)?;
        debug!(line = idx + 1, process = %spec.name, "Parsed record");
        specs.push(spec);
    }

    validate_workload(&specs)?;
    Ok(specs)
}

fn parse_record(line_no: usize, line: &str) -> MlqResult<ProcessSpec> {
    let fields: Vec<&str> = line.split(RECORD_DELIMITER).map(str::trim).collect();
    if fields.len() != RECORD_FIELDS {
        return Err(MlqError::malformed(
            line_no,
            format!("expected {} fields, found {}", RECORD_FIELDS, fields.len()),
        ));
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(MlqError::malformed(line_no, "process name is empty"));
    }

    let queue_raw: i64 = parse_field(line_no, "queue_id", fields[3])?;
    let queue = u8::try_from(queue_raw)
        .ok()
        .and_then(QueueId::new)
        .ok_or_else(|| {
            MlqError::malformed(line_no, format!("queue_id {} is not one of 1, 2, 3", queue_raw))
        })?;

    Ok(ProcessSpec {
        name: name.to_string(),
        burst_time: parse_field(line_no, "burst_time", fields[1])?,
        arrival_time: parse_field(line_no, "arrival_time", fields[2])?,
        queue,
        priority: parse_field(line_no, "priority", fields[4])?,
    })
}

fn parse_field<T: FromStr>(line_no: usize, field: &str, raw: &str) -> MlqResult<T> {
    raw.parse().map_err(|_| {
        MlqError::malformed(line_no, format!("{} '{}' is not a valid integer", field, raw))
    })
}
