/*!
 * Workload I/O
 * Text loader for process records and renderers/writers for results
 */

pub mod loader;
pub mod report;

pub use loader::{load_workload, parse_workload};
pub use report::{default_output_path, render_results, render_table, render_trace, write_results};
