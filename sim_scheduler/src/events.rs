//! Trace events emitted by the scheduler
//!
//! One event per simulated tick. Events carry everything the trace
//! formatter and the run report need, so neither has to reach back into
//! scheduler state.

use core_types::TaskId;
use serde::{Deserialize, Serialize};

/// Scheduler decision for one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraceEvent {
    /// No task was available to run
    Idle { tick: u64 },
    /// A waiting task was selected; the dispatch phase begins
    DispatchStarted { tick: u64, task_id: TaskId },
    /// The dispatch phase is still paying context-switch latency
    Dispatching { tick: u64, task_id: TaskId },
    /// The head task executed for one tick
    TaskRan {
        tick: u64,
        task_id: TaskId,
        cpu_requested: f64,
        cpu_consumed: f64,
    },
    /// The head task's quantum expired and it rotated to the queue tail
    QuantumExpired {
        tick: u64,
        task_id: TaskId,
        cpu_requested: f64,
        cpu_consumed: f64,
    },
    /// The head task completed and left the queue
    TaskExited {
        tick: u64,
        task_id: TaskId,
        cpu_requested: f64,
        cpu_consumed: f64,
        wait_time: f64,
        turnaround_ticks: u64,
    },
}

impl TraceEvent {
    /// The tick this event was emitted on
    pub fn tick(&self) -> u64 {
        match *self {
            TraceEvent::Idle { tick }
            | TraceEvent::DispatchStarted { tick, .. }
            | TraceEvent::Dispatching { tick, .. }
            | TraceEvent::TaskRan { tick, .. }
            | TraceEvent::QuantumExpired { tick, .. }
            | TraceEvent::TaskExited { tick, .. } => tick,
        }
    }

    /// The task this event concerns, if any
    pub fn task_id(&self) -> Option<TaskId> {
        match *self {
            TraceEvent::Idle { .. } => None,
            TraceEvent::DispatchStarted { task_id, .. }
            | TraceEvent::Dispatching { task_id, .. }
            | TraceEvent::TaskRan { task_id, .. }
            | TraceEvent::QuantumExpired { task_id, .. }
            | TraceEvent::TaskExited { task_id, .. } => Some(task_id),
        }
    }

    /// True for the events that record one tick of execution
    pub fn is_execution(&self) -> bool {
        matches!(self, TraceEvent::TaskRan { .. })
    }
}
