//! Per-task CPU accounting

use core_types::TaskId;
use serde::{Deserialize, Serialize};

/// A simulated task admitted to the ready queue
///
/// The id, arrival tick, and requested CPU amount are fixed at creation.
/// Only the consumed CPU amount changes, and only through
/// [`record_execution_tick`](Task::record_execution_tick), called by the
/// scheduler once per execution tick.
///
/// Invariant: `cpu_consumed <= cpu_requested + 1.0`. A task is removed on
/// the tick after its consumption first exceeds its request, so it reads at
/// most one unit over before removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    arrival_tick: u64,
    cpu_requested: f64,
    cpu_consumed: f64,
}

impl Task {
    /// Creates a task with zero consumed CPU
    pub fn new(id: TaskId, arrival_tick: u64, cpu_requested: f64) -> Self {
        Self {
            id,
            arrival_tick,
            cpu_requested,
            cpu_consumed: 0.0,
        }
    }

    /// Returns the task id
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the tick at which the task entered the ready queue
    pub fn arrival_tick(&self) -> u64 {
        self.arrival_tick
    }

    /// Returns the requested CPU amount in ticks
    pub fn cpu_requested(&self) -> f64 {
        self.cpu_requested
    }

    /// Returns the CPU amount consumed so far
    pub fn cpu_consumed(&self) -> f64 {
        self.cpu_consumed
    }

    /// Records one tick of execution
    ///
    /// # Panics
    ///
    /// In debug builds, panics if called on a task that has already
    /// completed. The scheduler removes completed tasks before they can run
    /// again.
    pub fn record_execution_tick(&mut self) {
        debug_assert!(
            !self.has_completed(),
            "execution tick recorded for completed {}",
            self.id
        );
        self.cpu_consumed += 1.0;
    }

    /// Returns true once consumption strictly exceeds the request
    ///
    /// The comparison is a strict `>` against the post-increment consumed
    /// value. A task requesting 2.0 ticks is not complete at consumed 2.0;
    /// it completes once consumed reaches 3.0.
    pub fn has_completed(&self) -> bool {
        self.cpu_consumed > self.cpu_requested
    }

    /// Wait time at the given completion tick
    ///
    /// `wait = completion_tick - arrival_tick - cpu_requested`
    pub fn wait_time(&self, completion_tick: u64) -> f64 {
        completion_tick as f64 - self.arrival_tick as f64 - self.cpu_requested
    }

    /// Turnaround time at the given completion tick
    ///
    /// `turnaround = completion_tick - arrival_tick`
    pub fn turnaround_ticks(&self, completion_tick: u64) -> u64 {
        completion_tick - self.arrival_tick
    }
}
