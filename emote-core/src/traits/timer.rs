//! Periodic timer traits
//!
//! The timer collaborator only schedules; whoever services the timer calls
//! [`crate::Player::tick`] on every expiry.

/// Timer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// The timer could not be created
    CreateFailed,
    /// The timer could not be (re)armed
    StartFailed,
}

/// A periodic timer handle
pub trait PeriodicTimer {
    /// Arm (or re-arm) the timer to fire every `interval_us` microseconds
    fn start_periodic(&mut self, interval_us: u64) -> Result<(), TimerError>;

    /// Stop the timer. Stopping an idle timer is a no-op.
    fn stop(&mut self);

    /// Release the timer. Called once, when the owner is dropped.
    fn destroy(&mut self) {
        self.stop();
    }
}

/// Creates periodic timers
pub trait TimerFactory {
    /// Timer handle type
    type Timer: PeriodicTimer;

    /// Create a new, stopped periodic timer
    fn create_periodic(&mut self) -> Result<Self::Timer, TimerError>;
}
