/*!
 * Monitoring Module
 * Structured logging setup
 */

mod tracer;

pub use tracer::{init_tracing, init_tracing_with};
