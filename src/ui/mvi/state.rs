//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// A state value is everything the view needs to render, nothing more:
/// - Immutable (transitions clone into new values)
/// - Comparable (PartialEq for change detection)
/// - Default is the state before any intent arrived
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
