//! # Workload Input
//!
//! This crate stages tasks on their way into the simulation: it parses
//! workload text into task templates, keeps them sorted by arrival tick,
//! and hands each template to the driver on the tick it matures.
//!
//! ## Philosophy
//!
//! The scheduler core never sees raw input. Malformed lines are rejected
//! here, with line numbers, before a single tick is simulated; the core can
//! then assume every admitted task is well-formed.
//!
//! ## Format
//!
//! Workloads are line-based, one task per line:
//!
//! ```text
//! # id  arrival_tick  cpu_request
//! 1     0             2.0
//! 2     3             1.5
//! ```
//!
//! Fields are whitespace separated. Blank lines and `#` comments are
//! skipped. Ids must be unique; cpu requests must be positive and may be
//! fractional.

pub mod event_queue;
pub mod fingerprint;
pub mod parser;
pub mod spec;

pub use event_queue::EventQueue;
pub use fingerprint::workload_fingerprint;
pub use parser::{load_workload, parse_workload, WorkloadError};
pub use spec::TaskSpec;
