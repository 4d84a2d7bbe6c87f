//! Board-agnostic core logic for the Emote status display
//!
//! This crate contains all display logic that does not depend on a
//! specific panel or timer implementation:
//!
//! - Collaborator traits (bitmap panel, periodic timer)
//! - Frame store with the named animation catalog
//! - Animation player driven by a periodic tick
//! - Operating-state machine selecting the animation to play
//! - Display facade mapping host status strings to states
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

// This must go first so the logging macros are visible to every module
#[macro_use]
mod fmt;

pub mod animation;
pub mod config;
pub mod display;
pub mod player;
pub mod runtime;
pub mod state;
pub mod traits;

pub use animation::{Animation, Frame, FrameStore};
pub use display::EmojiDisplay;
pub use player::Player;
pub use state::{OperatingState, StateMachine};

#[cfg(test)]
mod testing;
