/*!
 * Process Module
 * Simulated job records and their scheduling state
 */

pub mod record;
pub mod types;

pub use record::ProcessRecord;
pub use types::{validate_workload, ProcessSpec, ProcessState};
