/*!
 * Simulator Limits and Defaults
 *
 * Fixed shape of the multilevel queue and the default dispatch parameters.
 */

/// Number of queue levels (Queue 1 > Queue 2 > Queue 3)
pub const QUEUE_LEVELS: usize = 3;

/// Round-robin quantum of Queue 1
pub const DEFAULT_Q1_QUANTUM: u64 = 3;

/// Round-robin quantum of Queue 2
pub const DEFAULT_Q2_QUANTUM: u64 = 5;

/// Time advanced per idle step when nothing is ready
pub const IDLE_TICK: u64 = 1;

/// Number of fields in one workload record: name;BT;AT;queue;priority
pub const RECORD_FIELDS: usize = 5;

/// Workload record delimiter
pub const RECORD_DELIMITER: char = ';';

/// Prefix marking a comment line in workload files
pub const COMMENT_PREFIX: char = '#';

/// Environment variable enabling JSON log output
pub const TRACE_JSON_ENV: &str = "MLQ_TRACE_JSON";

/// Environment variables overriding the round-robin quanta
pub const Q1_QUANTUM_ENV: &str = "MLQ_Q1_QUANTUM";
pub const Q2_QUANTUM_ENV: &str = "MLQ_Q2_QUANTUM";
