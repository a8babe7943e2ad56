//! Scenario Test Utilities
//!
//! Shared helpers for end-to-end simulation tests.
//!
//! ## Test Philosophy
//!
//! - **Whole-loop coverage**: Scenarios run the real driver loop, not the
//!   scheduler in isolation
//! - **Exact traces**: Expected traces are written out tick by tick; a
//!   drifted event is a failure, not noise
//! - **Determinism**: Every helper is a pure function of its arguments

use core_types::TaskId;
use rrsimd::{MemoryTraceSink, RunReport, RuntimeConfig, SimulationRuntime};
use sim_scheduler::TraceEvent;
use workload::TaskSpec;

/// Builds templates from `(id, arrival, request)` triples
pub fn specs(tasks: &[(u32, u64, f64)]) -> Vec<TaskSpec> {
    tasks
        .iter()
        .map(|&(id, arrival, request)| TaskSpec::new(TaskId::from_raw(id), arrival, request))
        .collect()
}

/// Runs a scenario to a fixed horizon and returns the trace and report
pub fn run_to_horizon(
    quantum: u64,
    dispatch: u64,
    horizon: u64,
    tasks: &[(u32, u64, f64)],
) -> (Vec<TraceEvent>, RunReport) {
    let config = RuntimeConfig {
        quantum_ticks: quantum,
        dispatch_ticks: dispatch,
        horizon_ticks: horizon,
        exit_on_idle: false,
    };
    run_with(config, tasks)
}

/// Runs a scenario until both queues drain
pub fn run_to_drain(
    quantum: u64,
    dispatch: u64,
    tasks: &[(u32, u64, f64)],
) -> (Vec<TraceEvent>, RunReport) {
    let config = RuntimeConfig {
        quantum_ticks: quantum,
        dispatch_ticks: dispatch,
        horizon_ticks: 0,
        exit_on_idle: true,
    };
    run_with(config, tasks)
}

fn run_with(config: RuntimeConfig, tasks: &[(u32, u64, f64)]) -> (Vec<TraceEvent>, RunReport) {
    let mut runtime =
        SimulationRuntime::new(config, specs(tasks)).expect("scenario config must be valid");
    let mut sink = MemoryTraceSink::new();
    let report = runtime.run(&mut sink).expect("scenario run must not fault");
    (sink.events().to_vec(), report)
}

/// The task ids of the execution ticks, in trace order
pub fn execution_order(events: &[TraceEvent]) -> Vec<TaskId> {
    events
        .iter()
        .filter(|e| e.is_execution())
        .filter_map(|e| e.task_id())
        .collect()
}
