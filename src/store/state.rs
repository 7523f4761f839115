//! Base trait for application state.

/// Marker trait for state objects held by a store.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to derive any view)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` supplies the initial state at store construction and lets
/// dispatch move the current state out of its slot without cloning.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
