//! The Idle / Dispatching / Running state machine
//!
//! The scheduler is advanced exactly once per simulated tick, after the
//! driver has admitted that tick's arrivals. Each advance inspects the
//! queue head and the current state, updates the dispatch or quantum
//! counter, may mutate the queue (rotate on expiry, remove on completion),
//! and emits one [`TraceEvent`].

use crate::events::TraceEvent;
use crate::ready_queue::ReadyQueue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Quantum length must be at least one tick
    #[error("quantum length must be positive")]
    ZeroQuantum,

    /// Dispatch length must be at least one tick
    #[error("dispatch length must be positive")]
    ZeroDispatch,
}

/// Fatal internal-consistency fault
///
/// The state machine must never be in Dispatching or Running with an empty
/// queue. Hitting this is a logic defect in the simulator, not a condition
/// to recover from; the run aborts with the diagnostic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerFault {
    #[error("scheduler was {status:?} at tick {tick} with an empty ready queue")]
    EmptyQueue { status: SchedulerStatus, tick: u64 },
}

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulerStatus {
    /// No task holds the CPU
    Idle,
    /// Context-switch latency is being paid for the head task
    Dispatching,
    /// The head task holds the CPU inside a quantum
    Running,
}

/// Scheduler configuration, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Maximum consecutive execution ticks before mandatory rotation
    pub quantum_ticks: u64,
    /// Context-switch latency in ticks, paid on every dispatch
    pub dispatch_ticks: u64,
}

impl SchedulerConfig {
    /// Creates a validated configuration
    pub fn new(quantum_ticks: u64, dispatch_ticks: u64) -> Result<Self, ConfigError> {
        if quantum_ticks == 0 {
            return Err(ConfigError::ZeroQuantum);
        }
        if dispatch_ticks == 0 {
            return Err(ConfigError::ZeroDispatch);
        }
        Ok(Self {
            quantum_ticks,
            dispatch_ticks,
        })
    }
}

/// Preemptive round-robin scheduler with explicit dispatch overhead
///
/// One instance per simulation run. Holds no tasks itself; it reads and
/// mutates the [`ReadyQueue`] passed to [`advance`](Scheduler::advance).
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: SchedulerConfig,
    status: SchedulerStatus,
    /// Ticks already spent in the current dispatch phase
    dispatch_elapsed: u64,
    /// Execution ticks already spent in the current quantum
    quantum_elapsed: u64,
}

impl Scheduler {
    /// Creates a scheduler in the Idle state
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            status: SchedulerStatus::Idle,
            dispatch_elapsed: 0,
            quantum_elapsed: 0,
        }
    }

    /// Returns the configuration
    pub fn config(&self) -> SchedulerConfig {
        self.config
    }

    /// Returns the current state
    pub fn status(&self) -> SchedulerStatus {
        self.status
    }

    /// Advances the scheduler by one tick
    ///
    /// Must be called exactly once per simulated tick, after arrivals for
    /// that tick have been admitted into `ready`. Emits the tick's single
    /// trace event.
    ///
    /// There is no "already dispatched" shortcut: when a quantum expires or
    /// a task exits, the scheduler drops to Idle, and the next task pays the
    /// full dispatch delay even if it was already waiting at the head.
    pub fn advance(
        &mut self,
        tick: u64,
        ready: &mut ReadyQueue,
    ) -> Result<TraceEvent, SchedulerFault> {
        match self.status {
            SchedulerStatus::Idle => match ready.peek_front() {
                None => Ok(TraceEvent::Idle { tick }),
                Some(task) => {
                    let task_id = task.id();
                    self.status = SchedulerStatus::Dispatching;
                    Ok(TraceEvent::DispatchStarted { tick, task_id })
                }
            },
            SchedulerStatus::Dispatching => {
                let task = ready.front_mut().ok_or(SchedulerFault::EmptyQueue {
                    status: SchedulerStatus::Dispatching,
                    tick,
                })?;
                if self.dispatch_elapsed < self.config.dispatch_ticks - 1 {
                    self.dispatch_elapsed += 1;
                    Ok(TraceEvent::Dispatching {
                        tick,
                        task_id: task.id(),
                    })
                } else {
                    // dispatch_elapsed == dispatch_ticks - 1: the switch
                    // completes and the task gets its first execution tick
                    self.dispatch_elapsed = 0;
                    task.record_execution_tick();
                    self.status = SchedulerStatus::Running;
                    Ok(TraceEvent::TaskRan {
                        tick,
                        task_id: task.id(),
                        cpu_requested: task.cpu_requested(),
                        cpu_consumed: task.cpu_consumed(),
                    })
                }
            }
            SchedulerStatus::Running => {
                let head_completed = {
                    let head = ready.peek_front().ok_or(SchedulerFault::EmptyQueue {
                        status: SchedulerStatus::Running,
                        tick,
                    })?;
                    head.has_completed()
                };

                if head_completed {
                    let task = ready.remove_front().ok_or(SchedulerFault::EmptyQueue {
                        status: SchedulerStatus::Running,
                        tick,
                    })?;
                    self.quantum_elapsed = 0;
                    self.status = SchedulerStatus::Idle;
                    Ok(TraceEvent::TaskExited {
                        tick,
                        task_id: task.id(),
                        cpu_requested: task.cpu_requested(),
                        cpu_consumed: task.cpu_consumed(),
                        wait_time: task.wait_time(tick),
                        turnaround_ticks: task.turnaround_ticks(tick),
                    })
                } else if self.quantum_elapsed == self.config.quantum_ticks - 1 {
                    let (task_id, cpu_requested, cpu_consumed) = ready
                        .peek_front()
                        .map(|t| (t.id(), t.cpu_requested(), t.cpu_consumed()))
                        .ok_or(SchedulerFault::EmptyQueue {
                            status: SchedulerStatus::Running,
                            tick,
                        })?;
                    ready.rotate_front_to_back();
                    self.quantum_elapsed = 0;
                    self.status = SchedulerStatus::Idle;
                    Ok(TraceEvent::QuantumExpired {
                        tick,
                        task_id,
                        cpu_requested,
                        cpu_consumed,
                    })
                } else {
                    self.quantum_elapsed += 1;
                    let task = ready.front_mut().ok_or(SchedulerFault::EmptyQueue {
                        status: SchedulerStatus::Running,
                        tick,
                    })?;
                    task.record_execution_tick();
                    Ok(TraceEvent::TaskRan {
                        tick,
                        task_id: task.id(),
                        cpu_requested: task.cpu_requested(),
                        cpu_consumed: task.cpu_consumed(),
                    })
                }
            }
        }
    }
}
