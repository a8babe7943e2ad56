//! # Simulation Driver
//!
//! This crate drives a full simulation run: it admits workload templates
//! into the ready queue tick by tick, advances the scheduler, streams the
//! trace, and assembles the final run report.
//!
//! ## Philosophy
//!
//! - **Driver owns I/O**: The scheduler core never prints
//! - **No ambient globals**: All run state lives in [`SimulationRuntime`]
//! - **Deterministic mode is the only mode**: Same workload + same config
//!   => same trace and same report, every run
//! - **Trace and diagnostics are separate streams**: The trace is the
//!   product; log entries are side-channel diagnostics
//!
//! ## Responsibilities
//!
//! The driver:
//! - Validates configuration before the core ever runs
//! - Admits every template due on a tick, in input order
//! - Calls the scheduler exactly once per tick
//! - Streams one trace record per tick to a [`TraceSink`]
//! - Collects per-task completion statistics into a [`RunReport`]
//!
//! ## Non-Responsibilities
//!
//! The driver does NOT:
//! - Make scheduling decisions
//! - Tolerate scheduler invariant violations (they abort the run)
//! - Persist any state across runs

pub mod report;
pub mod runtime;
pub mod trace;

pub use report::{RunReport, TaskCompletion};
pub use runtime::{RuntimeConfig, RuntimeError, SimulationRuntime, DEFAULT_HORIZON_TICKS};
pub use trace::{format_event, MemoryTraceSink, TextTraceSink, TraceSink};
