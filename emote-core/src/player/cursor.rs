//! Playback cursor

/// Outcome of moving the cursor one frame forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advance {
    /// Moved to the next frame
    Next,
    /// Passed the last frame and wrapped to frame 0
    Wrapped,
    /// Passed the last frame of a non-repeating animation
    Finished,
}

/// Position and timing state of the current playback session
///
/// `current_frame` is always a valid index while `is_playing` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackCursor {
    /// Index of the frame on screen
    pub current_frame: u8,
    /// Whether ticks still advance the animation
    pub is_playing: bool,
    /// When the current frame was drawn; `None` until the first tick
    pub frame_start_ms: Option<u64>,
    /// Per-frame durations govern timing instead of the frame rate
    pub use_custom_duration: bool,
}

impl PlaybackCursor {
    /// Cursor for a fresh playback session
    pub const fn start(use_custom_duration: bool) -> Self {
        Self {
            current_frame: 0,
            is_playing: true,
            frame_start_ms: None,
            use_custom_duration,
        }
    }

    /// Move one frame forward in an animation of `frame_count` frames
    ///
    /// A finished cursor stays on the last frame and stops playing.
    pub fn advance(&mut self, frame_count: u8, repeat: bool) -> Advance {
        let next = self.current_frame as u16 + 1;
        if next < frame_count as u16 {
            self.current_frame = next as u8;
            Advance::Next
        } else if repeat {
            self.current_frame = 0;
            Advance::Wrapped
        } else {
            self.is_playing = false;
            Advance::Finished
        }
    }

    /// Milliseconds the current frame has been on screen
    pub fn elapsed_ms(&self, now_ms: u64) -> Option<u64> {
        self.frame_start_ms.map(|start| now_ms.saturating_sub(start))
    }
}
