//! Signal-backed periodic timer

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

use crate::traits::{PeriodicTimer, TimerError, TimerFactory};

/// Command for the task servicing the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerCommand {
    /// Tick every `interval_us` microseconds, restarting the period
    Start { interval_us: u64 },
    /// Stop ticking until the next `Start`
    Stop,
    /// Release the timer task
    Destroy,
}

/// Periodic timer that forwards to a timer task
///
/// Only the latest command is kept, so a `Stop` immediately followed by a
/// `Start` reaches the task as the `Start`.
pub struct SignalTimer<'a, M: RawMutex> {
    commands: &'a Signal<M, TimerCommand>,
}

impl<M: RawMutex> PeriodicTimer for SignalTimer<'_, M> {
    fn start_periodic(&mut self, interval_us: u64) -> Result<(), TimerError> {
        if interval_us == 0 {
            return Err(TimerError::StartFailed);
        }
        self.commands.signal(TimerCommand::Start { interval_us });
        Ok(())
    }

    fn stop(&mut self) {
        self.commands.signal(TimerCommand::Stop);
    }

    fn destroy(&mut self) {
        self.commands.signal(TimerCommand::Destroy);
    }
}

/// Hands out the single timer bound to a command signal
pub struct SignalTimerFactory<'a, M: RawMutex> {
    commands: &'a Signal<M, TimerCommand>,
    taken: bool,
}

impl<'a, M: RawMutex> SignalTimerFactory<'a, M> {
    pub fn new(commands: &'a Signal<M, TimerCommand>) -> Self {
        Self {
            commands,
            taken: false,
        }
    }
}

impl<'a, M: RawMutex> TimerFactory for SignalTimerFactory<'a, M> {
    type Timer = SignalTimer<'a, M>;

    fn create_periodic(&mut self) -> Result<SignalTimer<'a, M>, TimerError> {
        // One task services one signal
        if self.taken {
            return Err(TimerError::CreateFailed);
        }
        self.taken = true;
        Ok(SignalTimer {
            commands: self.commands,
        })
    }
}
