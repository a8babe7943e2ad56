//! Task templates awaiting admission

use core_types::TaskId;
use serde::{Deserialize, Serialize};

/// A parsed task template, not yet admitted to the ready queue
///
/// Templates are inert data: the driver turns one into a live task on the
/// tick its arrival time is reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Externally assigned task id
    pub id: TaskId,
    /// Tick at which the task enters the ready queue
    pub arrival_tick: u64,
    /// Requested CPU ticks, positive and possibly fractional
    pub cpu_request: f64,
}

impl TaskSpec {
    /// Creates a template
    pub fn new(id: TaskId, arrival_tick: u64, cpu_request: f64) -> Self {
        Self {
            id,
            arrival_tick,
            cpu_request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_serde_round_trip() {
        let spec = TaskSpec::new(TaskId::from_raw(2), 5, 1.5);
        let json = serde_json::to_string(&spec).unwrap();
        let back: TaskSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }
}
