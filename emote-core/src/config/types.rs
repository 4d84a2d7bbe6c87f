//! Configuration type definitions

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of a host status string
pub const MAX_STATUS_LEN: usize = 32;

/// Native panel width in pixels
pub const PANEL_WIDTH: u16 = 128;

/// Native panel height in pixels
pub const PANEL_HEIGHT: u16 = 64;

/// Frame duration assumed when an asset does not set one
pub const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// Player configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerConfig {
    /// Panel width in pixels
    pub panel_width: u16,
    /// Panel height in pixels
    pub panel_height: u16,
    /// Frames with any other duration switch the player to per-frame timing
    pub default_frame_duration_ms: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,
            default_frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
        }
    }
}

impl PlayerConfig {
    /// Size of a full-panel page-ordered bitmap in bytes
    ///
    /// Each 8-row page takes one byte per column, so a partial last page
    /// still costs a full byte per column.
    pub fn buffer_len(&self) -> usize {
        self.panel_width as usize * (self.panel_height as usize).div_ceil(8)
    }
}

/// Status strings reported by the host application
///
/// Hosts localize these, so they are configuration rather than constants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatusTokens {
    pub listening: String<MAX_STATUS_LEN>,
    pub standby: String<MAX_STATUS_LEN>,
    pub speaking: String<MAX_STATUS_LEN>,
    pub connecting: String<MAX_STATUS_LEN>,
}

impl Default for StatusTokens {
    fn default() -> Self {
        Self {
            listening: label("listening"),
            standby: label("standby"),
            speaking: label("speaking"),
            connecting: label("connecting"),
        }
    }
}

/// Build a status string, truncating anything past [`MAX_STATUS_LEN`]
pub fn label(text: &str) -> String<MAX_STATUS_LEN> {
    let mut s = String::new();
    for c in text.chars() {
        if s.push(c).is_err() {
            break;
        }
    }
    s
}
