//! State for the picture transform.

use crate::mvi::StoreState;

/// Degrees applied by a single rotate intent.
pub const ROTATION_STEP_DEGREES: f64 = 10.0;

/// Opacity applied by a single opacity intent.
pub const ALPHA_STEP: f64 = 0.1;

/// Immutable snapshot of the picture transform.
///
/// `rotation_degrees` is cumulative and unbounded: no wraparound at 360,
/// negative values are fine. `alpha` always stays within `[0.0, 1.0]`;
/// the bounds saturate rather than error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub rotation_degrees: f64,
    pub alpha: f64,
}

impl Default for TransformState {
    /// Zero state: upright and fully opaque.
    fn default() -> Self {
        Self {
            rotation_degrees: 0.0,
            alpha: 1.0,
        }
    }
}

impl StoreState for TransformState {}

impl TransformState {
    /// One step clockwise. Alpha is untouched.
    pub fn rotate_right(self) -> Self {
        Self {
            rotation_degrees: self.rotation_degrees + ROTATION_STEP_DEGREES,
            ..self
        }
    }

    /// One step counter-clockwise. Alpha is untouched.
    pub fn rotate_left(self) -> Self {
        Self {
            rotation_degrees: self.rotation_degrees - ROTATION_STEP_DEGREES,
            ..self
        }
    }

    /// One opacity step up, saturating at fully opaque.
    pub fn increase_alpha(self) -> Self {
        Self {
            alpha: snap_to_step(self.alpha + ALPHA_STEP).min(1.0),
            ..self
        }
    }

    /// One opacity step down, saturating at fully transparent.
    pub fn decrease_alpha(self) -> Self {
        Self {
            alpha: snap_to_step(self.alpha - ALPHA_STEP).max(0.0),
            ..self
        }
    }

    /// Rotation as a fraction of a full turn, the unit the renderer
    /// consumes.
    pub fn turns(&self) -> f64 {
        self.rotation_degrees / 360.0
    }
}

/// Repeated 0.1 additions drift off the decimal grid in binary floating
/// point; alpha has to reach 0.0 and 1.0 exactly after whole numbers of
/// steps, so every step lands back on the grid before clamping.
fn snap_to_step(alpha: f64) -> f64 {
    (alpha * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_state_is_upright_and_opaque() {
        let state = TransformState::default();
        assert_eq!(state.rotation_degrees, 0.0);
        assert_eq!(state.alpha, 1.0);
    }

    #[test]
    fn rotations_are_inverse() {
        let state = TransformState {
            rotation_degrees: 40.0,
            alpha: 0.7,
        };
        let back = state.rotate_left().rotate_right();
        assert_eq!(back.rotation_degrees, state.rotation_degrees);
    }

    #[test]
    fn rotation_is_unbounded() {
        let mut state = TransformState::default();
        for _ in 0..40 {
            state = state.rotate_right();
        }
        assert_eq!(state.rotation_degrees, 400.0);

        for _ in 0..80 {
            state = state.rotate_left();
        }
        assert_eq!(state.rotation_degrees, -400.0);
    }

    #[test]
    fn rotation_leaves_alpha_alone() {
        let state = TransformState {
            rotation_degrees: 0.0,
            alpha: 0.4,
        };
        assert_eq!(state.rotate_right().alpha, 0.4);
        assert_eq!(state.rotate_left().alpha, 0.4);
    }

    #[test]
    fn increase_alpha_saturates_at_one() {
        let state = TransformState::default();
        assert_eq!(state.increase_alpha().alpha, 1.0);
    }

    #[test]
    fn decrease_alpha_saturates_at_zero() {
        let state = TransformState {
            rotation_degrees: 0.0,
            alpha: 0.0,
        };
        assert_eq!(state.decrease_alpha().alpha, 0.0);
    }

    #[test]
    fn alpha_steps_stay_on_the_decimal_grid() {
        let mut state = TransformState::default();
        for _ in 0..10 {
            state = state.decrease_alpha();
        }
        assert_eq!(state.alpha, 0.0);

        for _ in 0..10 {
            state = state.increase_alpha();
        }
        assert_eq!(state.alpha, 1.0);
    }

    #[test]
    fn opacity_leaves_rotation_alone() {
        let state = TransformState {
            rotation_degrees: -30.0,
            alpha: 0.5,
        };
        assert_eq!(state.increase_alpha().rotation_degrees, -30.0);
        assert_eq!(state.decrease_alpha().rotation_degrees, -30.0);
    }

    #[test]
    fn turns_divides_by_full_circle() {
        let state = TransformState {
            rotation_degrees: 90.0,
            alpha: 1.0,
        };
        assert_eq!(state.turns(), 0.25);
        assert_eq!(TransformState::default().turns(), 0.0);
    }
}
