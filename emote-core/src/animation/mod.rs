//! Bitmap animations and the named catalog they are played from

pub mod catalog;
pub mod frame;

pub use catalog::{
    CatalogError, FrameStore, StateAssets, IDLE_FRAMES, LISTENING_FRAMES, MAX_ANIMATIONS,
    SPEAKING_FRAMES, STARTUP_FRAMES, STATE_ANIMATION_FPS,
};
pub use frame::{Animation, AnimationError, Frame, DEFAULT_FPS, MAX_FRAMES};
