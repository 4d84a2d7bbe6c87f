//! Configuration types
//!
//! Defaults match the 128x64 SSD1306 boards the display ships on.

pub mod types;

pub use types::*;
