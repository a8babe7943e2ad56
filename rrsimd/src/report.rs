//! Run report
//!
//! Per-task completion statistics plus enough run metadata (config echo,
//! workload fingerprint, run id) to reproduce and compare runs.

use core_types::{RunId, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Statistics for one completed task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCompletion {
    pub task_id: TaskId,
    pub arrival_tick: u64,
    pub cpu_requested: f64,
    pub cpu_consumed: f64,
    pub completion_tick: u64,
    /// `completion_tick - arrival_tick - cpu_requested`
    pub wait_time: f64,
    /// `completion_tick - arrival_tick`
    pub turnaround_ticks: u64,
}

/// Summary of a finished simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Label for this run; carries no scheduling meaning
    pub run_id: RunId,
    /// Sha-256 digest of the arrival-sorted workload
    pub workload_fingerprint: String,
    pub quantum_ticks: u64,
    pub dispatch_ticks: u64,
    /// Ticks actually simulated before the run terminated
    pub ticks_simulated: u64,
    /// Completed tasks in completion order
    pub completed: Vec<TaskCompletion>,
    /// Tasks still in the ready queue when the horizon ended
    pub unfinished: Vec<TaskId>,
    /// Templates whose arrival tick was never reached
    pub unadmitted: Vec<TaskId>,
}

impl RunReport {
    /// Mean wait time over completed tasks, if any completed
    pub fn average_wait_time(&self) -> Option<f64> {
        if self.completed.is_empty() {
            return None;
        }
        let total: f64 = self.completed.iter().map(|c| c.wait_time).sum();
        Some(total / self.completed.len() as f64)
    }

    /// Mean turnaround over completed tasks, if any completed
    pub fn average_turnaround_ticks(&self) -> Option<f64> {
        if self.completed.is_empty() {
            return None;
        }
        let total: f64 = self
            .completed
            .iter()
            .map(|c| c.turnaround_ticks as f64)
            .sum();
        Some(total / self.completed.len() as f64)
    }

    /// Renders the report as plain text
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "run:         {}", self.run_id);
        let _ = writeln!(out, "workload:    {}", self.workload_fingerprint);
        let _ = writeln!(
            out,
            "config:      quantum={} dispatch={}",
            self.quantum_ticks, self.dispatch_ticks
        );
        let _ = writeln!(out, "simulated:   {} ticks", self.ticks_simulated);
        let _ = writeln!(out, "completed:   {} tasks", self.completed.len());
        for c in &self.completed {
            let _ = writeln!(
                out,
                "  {}: arrival={} req={:.2} used={:.2} exit={} w={:.2} ta={}",
                c.task_id,
                c.arrival_tick,
                c.cpu_requested,
                c.cpu_consumed,
                c.completion_tick,
                c.wait_time,
                c.turnaround_ticks
            );
        }
        if let (Some(wait), Some(turnaround)) =
            (self.average_wait_time(), self.average_turnaround_ticks())
        {
            let _ = writeln!(out, "avg wait:    {:.2}", wait);
            let _ = writeln!(out, "avg ta:      {:.2}", turnaround);
        }
        if !self.unfinished.is_empty() {
            let ids: Vec<String> = self.unfinished.iter().map(|id| id.to_string()).collect();
            let _ = writeln!(out, "unfinished:  {}", ids.join(", "));
        }
        if !self.unadmitted.is_empty() {
            let ids: Vec<String> = self.unadmitted.iter().map(|id| id.to_string()).collect();
            let _ = writeln!(out, "unadmitted:  {}", ids.join(", "));
        }
        out
    }

    /// Renders the report as pretty-printed JSON
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(id: u32, wait: f64, turnaround: u64) -> TaskCompletion {
        TaskCompletion {
            task_id: TaskId::from_raw(id),
            arrival_tick: 0,
            cpu_requested: 2.0,
            cpu_consumed: 3.0,
            completion_tick: turnaround,
            wait_time: wait,
            turnaround_ticks: turnaround,
        }
    }

    fn report(completed: Vec<TaskCompletion>) -> RunReport {
        RunReport {
            run_id: RunId::new(),
            workload_fingerprint: "abc".to_string(),
            quantum_ticks: 2,
            dispatch_ticks: 1,
            ticks_simulated: 30,
            completed,
            unfinished: Vec::new(),
            unadmitted: Vec::new(),
        }
    }

    #[test]
    fn test_averages_absent_without_completions() {
        let r = report(Vec::new());
        assert_eq!(r.average_wait_time(), None);
        assert_eq!(r.average_turnaround_ticks(), None);
    }

    #[test]
    fn test_averages_over_completions() {
        let r = report(vec![completion(1, 4.0, 6), completion(2, 6.0, 8)]);
        assert_eq!(r.average_wait_time(), Some(5.0));
        assert_eq!(r.average_turnaround_ticks(), Some(7.0));
    }

    #[test]
    fn test_text_rendering_lists_completions() {
        let r = report(vec![completion(1, 4.0, 6)]);
        let text = r.render_text();
        assert!(text.contains("completed:   1 tasks"));
        assert!(text.contains("Task(1)"));
        assert!(text.contains("w=4.00"));
    }

    #[test]
    fn test_json_rendering_round_trips() {
        let r = report(vec![completion(1, 4.0, 6)]);
        let json = r.render_json().unwrap();
        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.completed, r.completed);
        assert_eq!(back.run_id, r.run_id);
    }
}
