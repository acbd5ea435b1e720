//! Base trait for intents (user/system actions) in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button presses, key presses)
/// - System events (timers, background results)
///
/// Intents are processed by reducers to produce new states. A feature's
/// intent enumeration is closed: anything outside it is unrepresentable.
pub trait Intent: Send + 'static {}
