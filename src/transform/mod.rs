//! Picture transform feature: state, intents, reducer.

mod intent;
mod reducer;
mod state;

pub use intent::TransformIntent;
pub use reducer::TransformReducer;
pub use state::{TransformState, ALPHA_STEP, ROTATION_STEP_DEGREES};
