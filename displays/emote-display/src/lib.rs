//! Monochrome framebuffer panel for Emote displays
//!
//! This crate provides:
//! - `Framebuffer`, an in-memory 128x64 1-bit panel implementing
//!   `emote_core::traits::BitmapPanel`
//! - Helpers for the SSD1306 page-ordered bitmap format the assets use
//!
//! # Bitmap format
//!
//! Bitmaps are stored the way SSD1306-class controllers consume them: the
//! image is cut into 8-pixel-tall pages, each page is `width` bytes, and bit
//! `n` of a byte is row `page * 8 + n` of that column.

#![no_std]

pub mod bitmap;
pub mod framebuffer;

pub use bitmap::{page_bitmap_len, page_pixel};
pub use framebuffer::{Framebuffer, HEIGHT, PAGES, WIDTH};
