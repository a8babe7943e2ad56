//! Unique identifiers for simulator entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a simulated task
///
/// Task ids are assigned externally by the workload input and stay stable
/// for the task's whole lifetime. They are never generated inside the
/// simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u32);

impl TaskId {
    /// Creates a task ID from its externally assigned raw value
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value
    pub fn as_raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// Unique identifier for a single simulation run
///
/// Run ids label reports so that independent runs over the same workload can
/// be told apart. They carry no scheduling meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    /// Creates a new random run ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a run ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Run({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_round_trip() {
        let id = TaskId::from_raw(42);
        assert_eq!(id.as_raw(), 42);
    }

    #[test]
    fn test_task_id_equality_is_by_value() {
        assert_eq!(TaskId::from_raw(7), TaskId::from_raw(7));
        assert_ne!(TaskId::from_raw(7), TaskId::from_raw(8));
    }

    #[test]
    fn test_task_id_ordering() {
        assert!(TaskId::from_raw(1) < TaskId::from_raw(2));
    }

    #[test]
    fn test_task_id_display() {
        let display = format!("{}", TaskId::from_raw(3));
        assert_eq!(display, "Task(3)");
    }

    #[test]
    fn test_task_id_serde_round_trip() {
        let id = TaskId::from_raw(99);
        let json = serde_json::to_string(&id).unwrap();
        let back: TaskId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_run_id_creation() {
        let id1 = RunId::new();
        let id2 = RunId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_run_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = RunId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn test_run_id_display() {
        let id = RunId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("Run("));
    }
}
