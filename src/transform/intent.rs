use crate::mvi::Intent;

/// The four transform actions, payload-free.
///
/// The enumeration is closed: there is no catch-all member and no "no
/// action" sentinel, so an out-of-domain action cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformIntent {
    RotateLeft,
    RotateRight,
    IncreaseOpacity,
    DecreaseOpacity,
}

impl Intent for TransformIntent {}
