//! Frame and animation types
//!
//! Bitmaps are compiled-in constants, so frames only borrow them. An
//! [`Animation`] owns its frame list and is cloned whenever it changes hands.

use alloc::vec::Vec;

use crate::config::DEFAULT_FRAME_DURATION_MS;

/// Maximum frames in one animation (frame indices are `u8`)
pub const MAX_FRAMES: usize = u8::MAX as usize;

/// Playback rate used when an asset does not choose one
pub const DEFAULT_FPS: u32 = 10;

/// One bitmap and how long it stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// 1-bit pixel data, SSD1306 page order
    pub bitmap: &'static [u8],
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Display duration in milliseconds
    pub duration_ms: u32,
}

impl Frame {
    /// Create a frame with the default duration
    pub const fn new(bitmap: &'static [u8], width: u16, height: u16) -> Self {
        Self {
            bitmap,
            width,
            height,
            duration_ms: DEFAULT_FRAME_DURATION_MS,
        }
    }

    /// Override the display duration
    pub const fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Frame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Frame[{}x{}, {}ms, {} bytes]",
            self.width,
            self.height,
            self.duration_ms,
            self.bitmap.len()
        );
    }
}

/// Errors building an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationError {
    /// More than [`MAX_FRAMES`] frames
    TooManyFrames,
    /// Frame rate of zero
    ZeroFps,
}

/// An ordered sequence of frames with its playback policy
///
/// An animation without frames is invalid; the store hands one out for
/// unknown names and the player refuses to play it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    frames: Vec<Frame>,
    repeat: bool,
    fps: u32,
}

impl Default for Animation {
    fn default() -> Self {
        Self::invalid()
    }
}

impl Animation {
    /// Create an animation from its frames
    pub fn new(frames: Vec<Frame>, repeat: bool, fps: u32) -> Result<Self, AnimationError> {
        if frames.len() > MAX_FRAMES {
            return Err(AnimationError::TooManyFrames);
        }
        if fps == 0 {
            return Err(AnimationError::ZeroFps);
        }
        Ok(Self {
            frames,
            repeat,
            fps,
        })
    }

    /// Create a one-frame animation
    pub fn single(frame: Frame, repeat: bool, fps: u32) -> Result<Self, AnimationError> {
        Self::new(alloc::vec![frame], repeat, fps)
    }

    /// The empty animation
    pub const fn invalid() -> Self {
        Self {
            frames: Vec::new(),
            repeat: true,
            fps: DEFAULT_FPS,
        }
    }

    /// Check if this animation can be played
    pub fn is_valid(&self) -> bool {
        !self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, index: u8) -> Option<&Frame> {
        self.frames.get(index as usize)
    }

    /// Number of frames (never more than [`MAX_FRAMES`])
    pub fn frame_count(&self) -> u8 {
        self.frames.len() as u8
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Uniform per-frame duration derived from the frame rate
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / self.fps as u64
    }

    /// Timer period used while this animation plays
    pub fn timer_interval_us(&self) -> u64 {
        (1_000_000 / self.fps as u64).max(1)
    }

    /// Check if any frame deviates from `default_ms`
    pub fn has_custom_durations(&self, default_ms: u32) -> bool {
        self.frames.iter().any(|f| f.duration_ms != default_ms)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Animation {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Animation[{} frames, {} fps, repeat: {}]",
            self.frame_count(),
            self.fps,
            self.repeat
        );
    }
}
