//! Injectable task id generation strategies.
//!
//! Id uniqueness is a property of the strategy handed to the action
//! constructors, not an implicit assumption about wall clocks. Tests and
//! the demo use [`SequentialIds`] for determinism; [`ClockIds`] keeps the
//! time-derived flavor of ids while staying collision-free for calls made
//! within the same millisecond.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::tasks::TaskId;

/// Source of fresh task ids.
///
/// Implementations must never return the same id twice from one value.
pub trait IdSource {
    /// Produce the next fresh id.
    fn next_id(&mut self) -> TaskId;
}

/// Counter-backed ids: 1, 2, 3, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    issued: u64,
}

impl SequentialIds {
    /// Start counting from `first - 1`, so the first id issued is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            issued: first.saturating_sub(1),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        self.issued += 1;
        TaskId::new(self.issued)
    }
}

/// Clock-backed ids: milliseconds since the Unix epoch, bumped by one
/// whenever the clock has not advanced past the last issued id.
///
/// Monotonically increasing even across clock steps backwards.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: u64,
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> TaskId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0);
        self.last = if now > self.last { now } else { self.last + 1 };
        TaskId::new(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up_from_one() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), TaskId::new(1));
        assert_eq!(ids.next_id(), TaskId::new(2));
        assert_eq!(ids.next_id(), TaskId::new(3));
    }

    #[test]
    fn sequential_ids_honor_starting_point() {
        let mut ids = SequentialIds::starting_at(100);
        assert_eq!(ids.next_id(), TaskId::new(100));
        assert_eq!(ids.next_id(), TaskId::new(101));
    }

    #[test]
    fn clock_ids_are_strictly_increasing() {
        let mut ids = ClockIds::default();
        let mut previous = ids.next_id();
        // Same-millisecond calls must still produce distinct ids
        for _ in 0..1000 {
            let next = ids.next_id();
            assert!(next > previous);
            previous = next;
        }
    }
}
