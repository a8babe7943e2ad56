//! Line-based workload parsing
//!
//! Every error carries the 1-based line number it was found on, so a bad
//! workload file can be fixed without guesswork.

use crate::spec::TaskSpec;
use core_types::TaskId;
use std::collections::HashSet;
use std::io::{self, BufRead};
use thiserror::Error;

/// Workload parsing error types
#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("failed to read workload: {0}")]
    Io(#[from] io::Error),

    #[error("parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("duplicate task id {id} at line {line}")]
    DuplicateTaskId { line: usize, id: TaskId },

    #[error("non-positive cpu request for {id} at line {line}")]
    NonPositiveRequest { line: usize, id: TaskId },
}

/// Loads a workload from a reader
///
/// Skips blank lines and `#` comments. Returns the templates stable-sorted
/// by arrival tick, so templates sharing an arrival tick keep their input
/// order.
pub fn load_workload<R: BufRead>(reader: R) -> Result<Vec<TaskSpec>, WorkloadError> {
    let mut specs = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let spec = parse_task_line(trimmed, line_no)?;
        if !seen_ids.insert(spec.id) {
            return Err(WorkloadError::DuplicateTaskId {
                line: line_no,
                id: spec.id,
            });
        }
        specs.push(spec);
    }

    specs.sort_by_key(|spec| spec.arrival_tick);
    Ok(specs)
}

/// Loads a workload from in-memory text
pub fn parse_workload(text: &str) -> Result<Vec<TaskSpec>, WorkloadError> {
    load_workload(text.as_bytes())
}

fn parse_task_line(line: &str, line_no: usize) -> Result<TaskSpec, WorkloadError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(WorkloadError::ParseError {
            line: line_no,
            message: format!("expected 3 fields, found {}", fields.len()),
        });
    }

    let id: u32 = fields[0].parse().map_err(|_| WorkloadError::ParseError {
        line: line_no,
        message: format!("invalid task id: {}", fields[0]),
    })?;
    let arrival_tick: u64 = fields[1].parse().map_err(|_| WorkloadError::ParseError {
        line: line_no,
        message: format!("invalid arrival tick: {}", fields[1]),
    })?;
    let cpu_request: f64 = fields[2].parse().map_err(|_| WorkloadError::ParseError {
        line: line_no,
        message: format!("invalid cpu request: {}", fields[2]),
    })?;

    let id = TaskId::from_raw(id);
    if !cpu_request.is_finite() || cpu_request <= 0.0 {
        return Err(WorkloadError::NonPositiveRequest { line: line_no, id });
    }

    Ok(TaskSpec {
        id,
        arrival_tick,
        cpu_request,
    })
}
