//! Animation player
//!
//! Plays at most one animation at a time. A periodic timer drives
//! [`Player::tick`], which advances the frame cursor and draws the current
//! frame centered on the panel.

pub mod cursor;
pub mod engine;

pub use cursor::{Advance, PlaybackCursor};
pub use engine::{Player, PlayerError};
