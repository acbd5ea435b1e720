//! Base trait for state values in the MVI architecture.

/// Marker trait for state objects held by a [`super::Store`].
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` is the zero state a store starts from when no explicit seed
/// is given.
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}
