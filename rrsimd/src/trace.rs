//! Trace output
//!
//! One line per simulated tick, in strict tick order. Sinks are the seam
//! between the deterministic core and the outside world: the text sink
//! renders to any writer, the memory sink keeps events for inspection.

use sim_scheduler::TraceEvent;
use std::io::{self, Write};

/// Consumer of per-tick trace events
pub trait TraceSink {
    /// Records the single event for a tick
    fn record(&mut self, event: &TraceEvent) -> io::Result<()>;
}

/// Renders a trace event as one text line
///
/// Every line starts with the zero-padded tick. Exit lines carry the wait
/// and turnaround amounts.
pub fn format_event(event: &TraceEvent) -> String {
    match *event {
        TraceEvent::Idle { tick } => format!("[{:05}] IDLE", tick),
        TraceEvent::DispatchStarted { tick, task_id } | TraceEvent::Dispatching { tick, task_id } => {
            format!("[{:05}] DISPATCHING id={:05}", tick, task_id.as_raw())
        }
        TraceEvent::TaskRan {
            tick,
            task_id,
            cpu_requested,
            cpu_consumed,
        } => format!(
            "[{:05}] RUNNING id={:05} req={:.2} used={:.2}",
            tick,
            task_id.as_raw(),
            cpu_requested,
            cpu_consumed
        ),
        TraceEvent::QuantumExpired {
            tick,
            task_id,
            cpu_requested,
            cpu_consumed,
        } => format!(
            "[{:05}] EXPIRED id={:05} req={:.2} used={:.2}",
            tick,
            task_id.as_raw(),
            cpu_requested,
            cpu_consumed
        ),
        TraceEvent::TaskExited {
            tick,
            task_id,
            wait_time,
            turnaround_ticks,
            ..
        } => format!(
            "[{:05}] EXIT id={:05} w={:.2} ta={:.2}",
            tick,
            task_id.as_raw(),
            wait_time,
            turnaround_ticks as f64
        ),
    }
}

/// Sink that renders events as text lines to a writer
pub struct TextTraceSink<W: Write> {
    out: W,
}

impl<W: Write> TextTraceSink<W> {
    /// Creates a sink over a writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the inner writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TraceSink for TextTraceSink<W> {
    fn record(&mut self, event: &TraceEvent) -> io::Result<()> {
        writeln!(self.out, "{}", format_event(event))
    }
}

/// Sink that collects events in memory
///
/// Used by tests and by anything that wants to inspect the trace after the
/// run instead of streaming it.
#[derive(Debug, Clone, Default)]
pub struct MemoryTraceSink {
    events: Vec<TraceEvent>,
}

impl MemoryTraceSink {
    /// Creates an empty sink
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in tick order
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }
}

impl TraceSink for MemoryTraceSink {
    fn record(&mut self, event: &TraceEvent) -> io::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::TaskId;

    #[test]
    fn test_idle_line() {
        assert_eq!(format_event(&TraceEvent::Idle { tick: 0 }), "[00000] IDLE");
    }

    #[test]
    fn test_dispatch_lines_share_a_label() {
        let id = TaskId::from_raw(1);
        assert_eq!(
            format_event(&TraceEvent::DispatchStarted { tick: 3, task_id: id }),
            "[00003] DISPATCHING id=00001"
        );
        assert_eq!(
            format_event(&TraceEvent::Dispatching { tick: 4, task_id: id }),
            "[00004] DISPATCHING id=00001"
        );
    }

    #[test]
    fn test_running_line_carries_amounts() {
        let line = format_event(&TraceEvent::TaskRan {
            tick: 12,
            task_id: TaskId::from_raw(1),
            cpu_requested: 2.5,
            cpu_consumed: 1.0,
        });
        assert_eq!(line, "[00012] RUNNING id=00001 req=2.50 used=1.00");
    }

    #[test]
    fn test_exit_line_carries_wait_and_turnaround() {
        let line = format_event(&TraceEvent::TaskExited {
            tick: 6,
            task_id: TaskId::from_raw(1),
            cpu_requested: 2.0,
            cpu_consumed: 3.0,
            wait_time: 4.0,
            turnaround_ticks: 6,
        });
        assert_eq!(line, "[00006] EXIT id=00001 w=4.00 ta=6.00");
    }

    #[test]
    fn test_text_sink_writes_one_line_per_event() {
        let mut sink = TextTraceSink::new(Vec::new());
        sink.record(&TraceEvent::Idle { tick: 0 }).unwrap();
        sink.record(&TraceEvent::Idle { tick: 1 }).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[00000] IDLE\n[00001] IDLE\n");
    }

    #[test]
    fn test_memory_sink_keeps_events_in_order() {
        let mut sink = MemoryTraceSink::new();
        sink.record(&TraceEvent::Idle { tick: 0 }).unwrap();
        sink.record(&TraceEvent::Idle { tick: 1 }).unwrap();
        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.events()[1].tick(), 1);
    }
}
