//! Base trait for actions (requested state changes).

use std::fmt;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User intent (add a record, change a filter)
/// - System events (timers, external updates)
///
/// Actions are processed by reducers to produce new states. `Debug` is
/// required so dispatch can trace-log every action it handles.
pub trait Action: fmt::Debug + Send + 'static {}
