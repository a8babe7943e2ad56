//! # Simulation Logger
//!
//! This crate implements structured diagnostic logging for the simulator.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style. The
//! trace is the simulator's real output; log entries are side-channel
//! diagnostics (configuration, admissions, completions) and never interleave
//! with the trace stream. Entries accumulate in a deterministic in-memory
//! buffer that the driver renders on request.

use std::fmt;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{}", label)
    }
}

/// A structured log entry
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Simulated tick the entry refers to (if any)
    pub tick: Option<u64>,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            tick: None,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the simulated tick
    pub fn with_tick(mut self, tick: u64) -> Self {
        self.tick = Some(tick);
        self
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(tick) = self.tick {
            write!(f, " tick={}", tick)?;
        }
        write!(f, " {}", self.message)?;
        for (key, value) in &self.fields {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

/// Deterministic in-memory collection of log entries
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    entries: Vec<LogEntry>,
}

impl LogBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Returns the collected entries in insertion order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Returns the entries at or above a level
    pub fn at_least(&self, level: LogLevel) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.level >= level)
    }

    /// Number of collected entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries have been collected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
