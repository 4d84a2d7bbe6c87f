//! Player implementation
//!
//! All mutable playback state sits behind one blocking mutex. The timer
//! context calls [`Player::tick`] and the application calls the other entry
//! points; each holds the lock for its whole read-modify-write.

use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::cursor::{Advance, PlaybackCursor};
use crate::animation::{Animation, Frame};
use crate::config::PlayerConfig;
use crate::traits::{BitmapPanel, PanelError, PeriodicTimer, TimerError, TimerFactory};

/// Player errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerError {
    /// Timer creation failed at construction; playback is unavailable
    Uninitialized,
    /// Animation has no frames
    InvalidAnimation,
    /// Timer could not be armed
    Timer(TimerError),
    /// Panel rejected a direct draw
    Draw(PanelError),
}

struct PlayerState<P, T> {
    panel: P,
    /// `None` when timer creation failed
    timer: Option<T>,
    animation: Animation,
    cursor: PlaybackCursor,
    config: PlayerConfig,
    /// All-zero full-panel buffer
    blank: Vec<u8>,
}

/// Bitmap animation player
///
/// Shared by reference between the timer context and the application, so
/// every operation takes `&self`.
pub struct Player<M: RawMutex, P: BitmapPanel, T: PeriodicTimer> {
    state: Mutex<M, RefCell<PlayerState<P, T>>>,
}

impl<M: RawMutex, P: BitmapPanel, T: PeriodicTimer> Player<M, P, T> {
    /// Create a player drawing to `panel`
    ///
    /// If `timers` cannot create a timer the player stays uninitialized for
    /// its whole lifetime and every playback call reports
    /// [`PlayerError::Uninitialized`].
    pub fn new<F>(panel: P, timers: &mut F, config: PlayerConfig) -> Self
    where
        F: TimerFactory<Timer = T>,
    {
        let timer = match timers.create_periodic() {
            Ok(timer) => {
                info!("Player initialized");
                Some(timer)
            }
            Err(e) => {
                error!("Failed to create animation timer: {}", e);
                None
            }
        };

        Self {
            state: Mutex::new(RefCell::new(PlayerState {
                panel,
                timer,
                animation: Animation::invalid(),
                cursor: PlaybackCursor::default(),
                config,
                blank: vec![0; config.buffer_len()],
            })),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut PlayerState<P, T>) -> R) -> R {
        self.state.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Start playing `animation` from its first frame
    ///
    /// Preempts whatever is playing. Invalid animations are refused and
    /// leave the current playback untouched.
    pub fn play(&self, animation: Animation) -> Result<(), PlayerError> {
        self.with_state(|state| state.play(animation))
    }

    /// Halt playback. Idempotent.
    pub fn stop(&self) -> Result<(), PlayerError> {
        self.with_state(|state| {
            let timer = state.timer.as_mut().ok_or(PlayerError::Uninitialized)?;
            timer.stop();
            if state.cursor.is_playing {
                info!("Animation stopped");
            }
            state.cursor.is_playing = false;
            Ok(())
        })
    }

    /// Stop playback and draw `bitmap` once at the panel origin
    ///
    /// An empty bitmap is ignored.
    pub fn set_static_image(
        &self,
        bitmap: &[u8],
        width: u16,
        height: u16,
    ) -> Result<(), PlayerError> {
        self.with_state(|state| {
            let timer = state.timer.as_mut().ok_or(PlayerError::Uninitialized)?;
            if bitmap.is_empty() {
                return Ok(());
            }
            timer.stop();
            state.cursor.is_playing = false;
            state
                .panel
                .draw_bitmap(0, 0, width as i32, height as i32, bitmap)
                .map_err(|e| {
                    warn!("Static image draw failed: {}", e);
                    PlayerError::Draw(e)
                })
        })
    }

    /// Blank the whole panel
    ///
    /// Playback is not stopped; a running animation draws its next frame
    /// over the cleared screen.
    pub fn clear_screen(&self) -> Result<(), PlayerError> {
        self.with_state(|state| {
            if state.timer.is_none() {
                return Err(PlayerError::Uninitialized);
            }
            let width = state.config.panel_width as i32;
            let height = state.config.panel_height as i32;
            state
                .panel
                .draw_bitmap(0, 0, width, height, &state.blank)
                .map_err(|e| {
                    warn!("Clear screen failed: {}", e);
                    PlayerError::Draw(e)
                })
        })
    }

    /// Timer callback: advance and draw as the timing policy dictates
    ///
    /// `now_ms` is a monotonic timestamp in milliseconds.
    pub fn tick(&self, now_ms: u64) {
        self.with_state(|state| state.tick(now_ms));
    }

    pub fn is_initialized(&self) -> bool {
        self.with_state(|state| state.timer.is_some())
    }

    pub fn is_playing(&self) -> bool {
        self.with_state(|state| state.cursor.is_playing)
    }

    pub fn current_frame(&self) -> u8 {
        self.with_state(|state| state.cursor.current_frame)
    }

    pub fn uses_custom_duration(&self) -> bool {
        self.with_state(|state| state.cursor.use_custom_duration)
    }

    /// Copy of the playback cursor
    pub fn snapshot(&self) -> PlaybackCursor {
        self.with_state(|state| state.cursor)
    }

    pub fn config(&self) -> PlayerConfig {
        self.with_state(|state| state.config)
    }

    /// Run `f` with exclusive access to the panel
    pub fn with_panel<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        self.with_state(|state| f(&mut state.panel))
    }
}

impl<M: RawMutex, P: BitmapPanel, T: PeriodicTimer> Drop for Player<M, P, T> {
    fn drop(&mut self) {
        self.with_state(|state| {
            if let Some(timer) = state.timer.as_mut() {
                timer.destroy();
            }
        });
    }
}

impl<P: BitmapPanel, T: PeriodicTimer> PlayerState<P, T> {
    fn play(&mut self, animation: Animation) -> Result<(), PlayerError> {
        // Reported once, when timer creation failed
        let Some(timer) = self.timer.as_mut() else {
            return Err(PlayerError::Uninitialized);
        };
        if !animation.is_valid() {
            warn!("Refusing to play an animation without frames");
            return Err(PlayerError::InvalidAnimation);
        }

        timer.stop();

        let custom = animation.has_custom_durations(self.config.default_frame_duration_ms);
        let interval_us = animation.timer_interval_us();
        self.animation = animation;
        self.cursor = PlaybackCursor::start(custom);

        if let Err(e) = timer.start_periodic(interval_us) {
            error!("Failed to start animation timer: {}", e);
            self.cursor.is_playing = false;
            return Err(PlayerError::Timer(e));
        }

        info!(
            "Animation started: {} frames, {} fps, custom duration: {}",
            self.animation.frame_count(),
            self.animation.fps(),
            custom
        );
        Ok(())
    }

    fn tick(&mut self, now_ms: u64) {
        // A stop may have raced with this tick
        if !self.cursor.is_playing || !self.animation.is_valid() {
            return;
        }

        let Some(elapsed) = self.cursor.elapsed_ms(now_ms) else {
            // First tick of the session always shows frame 0
            self.cursor.frame_start_ms = Some(now_ms);
            self.draw_current();
            return;
        };

        if elapsed < self.frame_threshold_ms() {
            return;
        }

        let count = self.animation.frame_count();
        match self.cursor.advance(count, self.animation.repeat()) {
            Advance::Finished => {
                if let Some(timer) = self.timer.as_mut() {
                    timer.stop();
                }
                debug!("Animation finished on frame {}", self.cursor.current_frame);
            }
            Advance::Next | Advance::Wrapped => {
                self.cursor.frame_start_ms = Some(now_ms);
                self.draw_current();
            }
        }
    }

    fn frame_threshold_ms(&self) -> u64 {
        if self.cursor.use_custom_duration {
            self.animation
                .frame(self.cursor.current_frame)
                .map_or(0, |f| f.duration_ms as u64)
        } else {
            self.animation.frame_interval_ms()
        }
    }

    fn draw_current(&mut self) {
        let Some(frame) = self.animation.frame(self.cursor.current_frame) else {
            return;
        };
        let (x, y) = centered(&self.config, frame);
        let result = self.panel.draw_bitmap(
            x,
            y,
            x + frame.width as i32,
            y + frame.height as i32,
            frame.bitmap,
        );
        if let Err(e) = result {
            warn!("Frame {} draw failed: {}", self.cursor.current_frame, e);
        }
    }
}

/// Top-left corner that centers `frame` on the panel
///
/// Oversized frames get negative offsets; the panel decides what to do.
fn centered(config: &PlayerConfig, frame: &Frame) -> (i32, i32) {
    let x = (config.panel_width as i32 - frame.width as i32) / 2;
    let y = (config.panel_height as i32 - frame.height as i32) / 2;
    (x, y)
}
