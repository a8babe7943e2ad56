//! Arrival-ordered staging queue
//!
//! Holds parsed task templates until their arrival tick is reached. Strictly
//! a collaborator of the driver loop; the scheduler core never touches it.

use crate::spec::TaskSpec;
use std::collections::VecDeque;

/// Queue of task templates ordered by arrival tick
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: VecDeque<TaskSpec>,
}

impl EventQueue {
    /// Builds a queue from templates
    ///
    /// Templates are stable-sorted by arrival tick, so two tasks arriving
    /// on the same tick are admitted in input order.
    pub fn from_specs(mut specs: Vec<TaskSpec>) -> Self {
        specs.sort_by_key(|spec| spec.arrival_tick);
        Self {
            pending: specs.into(),
        }
    }

    /// Removes and returns every template due at or before `tick`
    ///
    /// All tasks arriving on a tick are admitted on that tick, in input
    /// order.
    pub fn pop_due(&mut self, tick: u64) -> Vec<TaskSpec> {
        let mut due = Vec::new();
        while let Some(front) = self.pending.front() {
            if front.arrival_tick > tick {
                break;
            }
            if let Some(spec) = self.pending.pop_front() {
                due.push(spec);
            }
        }
        due
    }

    /// Arrival tick of the next pending template
    pub fn peek_next_arrival(&self) -> Option<u64> {
        self.pending.front().map(|spec| spec.arrival_tick)
    }

    /// Iterates the pending templates in arrival order
    pub fn iter(&self) -> impl Iterator<Item = &TaskSpec> {
        self.pending.iter()
    }

    /// Number of pending templates
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when no templates remain
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::TaskId;

    fn spec(id: u32, arrival: u64) -> TaskSpec {
        TaskSpec::new(TaskId::from_raw(id), arrival, 1.0)
    }

    #[test]
    fn test_empty_queue_has_no_arrivals() {
        let mut queue = EventQueue::from_specs(Vec::new());
        assert!(queue.is_empty());
        assert!(queue.pop_due(0).is_empty());
        assert_eq!(queue.peek_next_arrival(), None);
    }

    #[test]
    fn test_pop_due_returns_only_matured_templates() {
        let mut queue = EventQueue::from_specs(vec![spec(1, 0), spec(2, 3)]);

        let due = queue.pop_due(0);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, TaskId::from_raw(1));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek_next_arrival(), Some(3));
    }

    #[test]
    fn test_all_same_tick_arrivals_pop_together_in_input_order() {
        let mut queue = EventQueue::from_specs(vec![spec(5, 2), spec(3, 2), spec(9, 2)]);

        assert!(queue.pop_due(1).is_empty());
        let due = queue.pop_due(2);
        let ids: Vec<u32> = due.iter().map(|s| s.id.as_raw()).collect();
        assert_eq!(ids, vec![5, 3, 9]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_unsorted_specs_are_ordered_by_arrival() {
        let mut queue = EventQueue::from_specs(vec![spec(1, 7), spec(2, 0), spec(3, 4)]);
        assert_eq!(queue.peek_next_arrival(), Some(0));

        let due = queue.pop_due(4);
        let ids: Vec<u32> = due.iter().map(|s| s.id.as_raw()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_pop_due_catches_up_past_arrivals() {
        // a tick skipped by the caller must not strand templates
        let mut queue = EventQueue::from_specs(vec![spec(1, 1), spec(2, 2)]);
        let due = queue.pop_due(5);
        assert_eq!(due.len(), 2);
    }
}
