//! # Simulated Round-Robin Scheduler
//!
//! This crate provides the core of the simulator: a preemptive round-robin
//! scheduler with an explicit dispatch (context-switch) phase, advanced one
//! discrete tick at a time.
//!
//! ## Philosophy
//!
//! - **Determinism first**: Same tasks + same config => same trace, tick for
//!   tick. No clocks, no threads, no hidden yields.
//! - **One event per tick**: Every call to [`Scheduler::advance`] emits
//!   exactly one [`TraceEvent`], making the trace a total order over
//!   simulated time.
//! - **Mechanism, not policy**: FIFO rotation is the only policy. No
//!   priorities, no fairness compensation, no I/O modeling.
//! - **Correctness over performance**: Queue operations on the per-tick hot
//!   path are O(1); everything else aims for clarity.
//!
//! ## Design
//!
//! - [`Task`] carries per-task CPU accounting: an externally assigned id,
//!   arrival tick, requested CPU ticks (possibly fractional), and consumed
//!   CPU ticks.
//! - [`ReadyQueue`] is the ordered set of admitted, unfinished tasks.
//! - [`Scheduler`] owns the Idle / Dispatching / Running state machine and
//!   the dispatch and quantum counters. It is the sole mutator of the queue
//!   and of task accounting.
//!
//! The dispatch phase models fixed context-switch latency. It is never
//! skipped: every transition out of Idle pays the full dispatch delay, even
//! when the next task was already waiting at the head of the queue.

pub mod events;
pub mod ready_queue;
pub mod scheduler;
pub mod task;

pub use events::TraceEvent;
pub use ready_queue::{QueueError, ReadyQueue};
pub use scheduler::{ConfigError, Scheduler, SchedulerConfig, SchedulerFault, SchedulerStatus};
pub use task::Task;
