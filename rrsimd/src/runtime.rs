//! The simulation run loop
//!
//! All run state lives in one explicit context struct. Each tick: admit the
//! templates that matured, advance the scheduler once, stream the event,
//! collect completion statistics.

use crate::report::{RunReport, TaskCompletion};
use crate::trace::TraceSink;
use core_types::RunId;
use sim_logger::{LogBuffer, LogEntry, LogLevel};
use sim_scheduler::{
    ConfigError, QueueError, ReadyQueue, Scheduler, SchedulerConfig, SchedulerFault, Task,
    TraceEvent,
};
use std::io;
use thiserror::Error;
use workload::{workload_fingerprint, EventQueue, TaskSpec};

/// Tick horizon used when the caller does not override it
pub const DEFAULT_HORIZON_TICKS: u64 = 30;

/// Runtime error types
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Horizon 0 means unbounded, which only terminates with idle exit
    #[error("an unbounded horizon requires exit-on-idle")]
    UnboundedHorizon,

    /// The workload admitted a task id that was already queued
    #[error("admission error: {0}")]
    Admission(#[from] QueueError),

    /// Internal invariant violation; aborts the run
    #[error("internal fault: {0}")]
    Fault(#[from] SchedulerFault),

    #[error("trace output failed: {0}")]
    TraceIo(#[from] io::Error),
}

/// Run configuration
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Maximum consecutive execution ticks per quantum
    pub quantum_ticks: u64,
    /// Context-switch latency in ticks
    pub dispatch_ticks: u64,
    /// Tick horizon; 0 means unbounded (requires `exit_on_idle`)
    pub horizon_ticks: u64,
    /// Stop once both the event queue and the ready queue are empty
    pub exit_on_idle: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            quantum_ticks: 1,
            dispatch_ticks: 1,
            horizon_ticks: DEFAULT_HORIZON_TICKS,
            exit_on_idle: false,
        }
    }
}

/// One simulation run
///
/// Owns the tick counter, the staging queue, the ready queue, the
/// scheduler, the diagnostic log, and the collected completions. Create,
/// call [`run`](SimulationRuntime::run) once, read the report.
pub struct SimulationRuntime {
    scheduler: Scheduler,
    events: EventQueue,
    ready: ReadyQueue,
    tick: u64,
    horizon_ticks: u64,
    exit_on_idle: bool,
    fingerprint: String,
    log: LogBuffer,
    completions: Vec<TaskCompletion>,
}

impl SimulationRuntime {
    /// Creates a run over the given workload
    ///
    /// Validates configuration before anything else; no partial run happens
    /// on a bad config.
    pub fn new(config: RuntimeConfig, mut specs: Vec<TaskSpec>) -> Result<Self, RuntimeError> {
        let scheduler_config = SchedulerConfig::new(config.quantum_ticks, config.dispatch_ticks)?;
        if config.horizon_ticks == 0 && !config.exit_on_idle {
            return Err(RuntimeError::UnboundedHorizon);
        }

        specs.sort_by_key(|spec| spec.arrival_tick);
        let fingerprint = workload_fingerprint(&specs);

        let mut log = LogBuffer::new();
        log.push(
            LogEntry::new(LogLevel::Info, "run configured")
                .with_field("quantum", config.quantum_ticks.to_string())
                .with_field("dispatch", config.dispatch_ticks.to_string())
                .with_field("horizon", config.horizon_ticks.to_string())
                .with_field("templates", specs.len().to_string()),
        );

        Ok(Self {
            scheduler: Scheduler::new(scheduler_config),
            events: EventQueue::from_specs(specs),
            ready: ReadyQueue::new(),
            tick: 0,
            horizon_ticks: config.horizon_ticks,
            exit_on_idle: config.exit_on_idle,
            fingerprint,
            log,
            completions: Vec::new(),
        })
    }

    /// Runs the simulation to its end and returns the report
    ///
    /// Advances one tick at a time until the horizon is reached or, with
    /// idle exit enabled, until both queues drain. Every tick emits exactly
    /// one event into `sink`.
    pub fn run(&mut self, sink: &mut dyn TraceSink) -> Result<RunReport, RuntimeError> {
        loop {
            if self.exit_on_idle && self.events.is_empty() && self.ready.is_empty() {
                self.log.push(
                    LogEntry::new(LogLevel::Info, "workload drained").with_tick(self.tick),
                );
                break;
            }
            if self.horizon_ticks > 0 && self.tick >= self.horizon_ticks {
                self.log.push(
                    LogEntry::new(LogLevel::Info, "horizon reached").with_tick(self.tick),
                );
                break;
            }

            self.admit_due_tasks()?;
            let event = self.scheduler.advance(self.tick, &mut self.ready)?;
            self.record_completion(&event);
            sink.record(&event)?;
            self.tick += 1;
        }

        Ok(self.build_report())
    }

    /// Returns the diagnostic log collected so far
    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    /// Returns the current tick
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    fn admit_due_tasks(&mut self) -> Result<(), RuntimeError> {
        for spec in self.events.pop_due(self.tick) {
            self.ready
                .append(Task::new(spec.id, spec.arrival_tick, spec.cpu_request))?;
            self.log.push(
                LogEntry::new(LogLevel::Debug, "task admitted")
                    .with_tick(self.tick)
                    .with_field("task", spec.id.as_raw().to_string())
                    .with_field("request", format!("{:.2}", spec.cpu_request)),
            );
        }
        Ok(())
    }

    fn record_completion(&mut self, event: &TraceEvent) {
        if let TraceEvent::TaskExited {
            tick,
            task_id,
            cpu_requested,
            cpu_consumed,
            wait_time,
            turnaround_ticks,
        } = *event
        {
            self.completions.push(TaskCompletion {
                task_id,
                arrival_tick: tick - turnaround_ticks,
                cpu_requested,
                cpu_consumed,
                completion_tick: tick,
                wait_time,
                turnaround_ticks,
            });
            self.log.push(
                LogEntry::new(LogLevel::Info, "task exited")
                    .with_tick(tick)
                    .with_field("task", task_id.as_raw().to_string())
                    .with_field("wait", format!("{:.2}", wait_time))
                    .with_field("turnaround", turnaround_ticks.to_string()),
            );
        }
    }

    fn build_report(&self) -> RunReport {
        RunReport {
            run_id: RunId::new(),
            workload_fingerprint: self.fingerprint.clone(),
            quantum_ticks: self.scheduler.config().quantum_ticks,
            dispatch_ticks: self.scheduler.config().dispatch_ticks,
            ticks_simulated: self.tick,
            completed: self.completions.clone(),
            unfinished: self.ready.iter().map(|t| t.id()).collect(),
            unadmitted: self.events.iter().map(|s| s.id).collect(),
        }
    }
}
