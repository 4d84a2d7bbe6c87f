//! Operating-state machine
//!
//! The device is always in exactly one operating state. Every committed
//! transition asks the player to show the animation bound to the new state.

pub mod machine;
pub mod status;

pub use machine::{
    validate_transition, AnimationSink, OperatingState, StateMachine, TransitionError,
};
pub use status::target_for_status;
