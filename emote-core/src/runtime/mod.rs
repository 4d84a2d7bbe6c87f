//! Timer runtime
//!
//! [`SignalTimer`] turns the player's timer calls into [`TimerCommand`]s
//! posted to an embassy `Signal`. With the `embassy` feature,
//! [`run_player_timer`] services those commands with a `Ticker` and calls
//! [`crate::Player::tick`] on every period.

pub mod signal;
#[cfg(feature = "embassy")]
pub mod ticker;

pub use signal::{SignalTimer, SignalTimerFactory, TimerCommand};
#[cfg(feature = "embassy")]
pub use ticker::run_player_timer;
