//! Frame store
//!
//! Static name to animation registry. Populated once at startup, before
//! anything is played, and read-only afterwards.

use alloc::vec::Vec as FrameVec;
use heapless::Vec;

use super::frame::{Animation, AnimationError, Frame};

/// Maximum animations in the catalog
pub const MAX_ANIMATIONS: usize = 16;

/// Frames in the startup animation
pub const STARTUP_FRAMES: usize = 23;
/// Frames in the idle animation
pub const IDLE_FRAMES: usize = 26;
/// Frames in the listening animation
pub const LISTENING_FRAMES: usize = 26;
/// Frames in the speaking animation
pub const SPEAKING_FRAMES: usize = 27;
/// Playback rate of the state animations
pub const STATE_ANIMATION_FPS: u32 = 30;

/// Catalog errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CatalogError {
    /// Already holds [`MAX_ANIMATIONS`] entries
    Full,
    /// Frames could not form an animation
    Animation(AnimationError),
}

impl From<AnimationError> for CatalogError {
    fn from(e: AnimationError) -> Self {
        CatalogError::Animation(e)
    }
}

/// Bitmaps for the animations bound to operating states
///
/// All frames share one size. The bitmaps themselves are compiled-in
/// assets owned by the board.
#[derive(Debug, Clone, Copy)]
pub struct StateAssets<'a> {
    pub width: u16,
    pub height: u16,
    /// Played as `"startup/circular"` in the System state
    pub startup: &'a [&'static [u8]; STARTUP_FRAMES],
    /// Played as `"particle"` in the Idle state
    pub idle: &'a [&'static [u8]; IDLE_FRAMES],
    /// Played as `"line"` in the Listening state
    pub listening: &'a [&'static [u8]; LISTENING_FRAMES],
    /// Played as `"lotus"` in the Speaking state
    pub speaking: &'a [&'static [u8]; SPEAKING_FRAMES],
}

impl StateAssets<'_> {
    /// Name, bitmaps and per-frame duration of each state animation
    fn sequences(&self) -> [(&'static str, &[&'static [u8]], u32); 4] {
        [
            ("startup/circular", self.startup.as_slice(), 150),
            ("particle", self.idle.as_slice(), 200),
            ("line", self.listening.as_slice(), 200),
            ("lotus", self.speaking.as_slice(), 200),
        ]
    }
}

#[derive(Debug, Clone)]
struct Entry {
    name: &'static str,
    animation: Animation,
}

/// Named animation catalog
#[derive(Debug, Clone, Default)]
pub struct FrameStore {
    entries: Vec<Entry, MAX_ANIMATIONS>,
}

impl FrameStore {
    /// Create an empty store
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a store holding the four state animations
    pub fn with_state_animations(assets: &StateAssets<'_>) -> Result<Self, CatalogError> {
        let mut store = Self::new();
        store.register_state_animations(assets)?;
        Ok(store)
    }

    /// Register the animations the operating states play
    ///
    /// Each repeats at [`STATE_ANIMATION_FPS`]. Startup frames hold for
    /// 150 ms and the others for 200 ms.
    pub fn register_state_animations(
        &mut self,
        assets: &StateAssets<'_>,
    ) -> Result<(), CatalogError> {
        for (name, bitmaps, duration_ms) in assets.sequences() {
            let frames: FrameVec<Frame> = bitmaps
                .iter()
                .map(|&bitmap| {
                    Frame::new(bitmap, assets.width, assets.height)
                        .with_duration(duration_ms)
                })
                .collect();
            let animation = Animation::new(frames, true, STATE_ANIMATION_FPS)?;
            self.register(name, animation)?;
        }
        debug!("Registered {} state animations", assets.sequences().len());
        Ok(())
    }

    /// Register `animation` under `name`, replacing any previous entry
    pub fn register(
        &mut self,
        name: &'static str,
        animation: Animation,
    ) -> Result<(), CatalogError> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.animation = animation;
            return Ok(());
        }
        self.entries
            .push(Entry { name, animation })
            .map_err(|_| CatalogError::Full)
    }

    /// Look up an animation by name
    ///
    /// Unknown names yield [`Animation::invalid`]; callers check
    /// [`Animation::is_valid`].
    pub fn get(&self, name: &str) -> Animation {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.animation.clone())
            .unwrap_or_else(Animation::invalid)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Registered names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
