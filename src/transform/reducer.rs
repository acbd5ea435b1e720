//! Reducer for the picture transform.

use crate::mvi::Reducer;

use super::intent::TransformIntent;
use super::state::TransformState;

/// Maps each transform intent onto its state derivation.
///
/// Pure function. The match is exhaustive with no default arm: adding an
/// intent fails compilation until every reducer handles it.
pub struct TransformReducer;

impl Reducer for TransformReducer {
    type State = TransformState;
    type Intent = TransformIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TransformIntent::RotateLeft => state.rotate_left(),
            TransformIntent::RotateRight => state.rotate_right(),
            TransformIntent::IncreaseOpacity => state.increase_alpha(),
            TransformIntent::DecreaseOpacity => state.decrease_alpha(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_left_subtracts_a_step() {
        let new = TransformReducer::reduce(TransformState::default(), TransformIntent::RotateLeft);
        assert_eq!(new.rotation_degrees, -10.0);
        assert_eq!(new.alpha, 1.0);
    }

    #[test]
    fn rotate_right_adds_a_step() {
        let new = TransformReducer::reduce(TransformState::default(), TransformIntent::RotateRight);
        assert_eq!(new.rotation_degrees, 10.0);
        assert_eq!(new.alpha, 1.0);
    }

    #[test]
    fn increase_opacity_steps_alpha_up() {
        let state = TransformState {
            rotation_degrees: 20.0,
            alpha: 0.5,
        };
        let new = TransformReducer::reduce(state, TransformIntent::IncreaseOpacity);
        assert_eq!(new.alpha, 0.6);
        assert_eq!(new.rotation_degrees, 20.0);
    }

    #[test]
    fn decrease_opacity_steps_alpha_down() {
        let state = TransformState {
            rotation_degrees: 20.0,
            alpha: 0.5,
        };
        let new = TransformReducer::reduce(state, TransformIntent::DecreaseOpacity);
        assert_eq!(new.alpha, 0.4);
        assert_eq!(new.rotation_degrees, 20.0);
    }

    #[test]
    fn reduced_state_is_a_new_value() {
        let state = TransformState::default();
        let new = TransformReducer::reduce(state, TransformIntent::RotateRight);
        assert_ne!(new, state);
        assert_eq!(state, TransformState::default());
    }
}
