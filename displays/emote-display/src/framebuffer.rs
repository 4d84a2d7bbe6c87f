//! In-memory framebuffer panel
//!
//! Same page layout as an SSD1306 GDDRAM, so a transport only has to copy
//! pages out.

use emote_core::traits::{BitmapPanel, PanelError};

use crate::bitmap::{page_bitmap_len, page_pixel};

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
pub const PAGES: usize = HEIGHT / 8;

/// 128x64 1-bit framebuffer
#[derive(Clone)]
pub struct Framebuffer {
    /// 1 bit per pixel, organized as pages
    buffer: [[u8; WIDTH]; PAGES],
    /// Successful draws since creation
    draws: u32,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a blank framebuffer
    pub const fn new() -> Self {
        Self {
            buffer: [[0; WIDTH]; PAGES],
            draws: 0,
        }
    }

    /// Blank every pixel
    pub fn clear(&mut self) {
        self.buffer = [[0; WIDTH]; PAGES];
    }

    /// Read a pixel; out-of-range pixels read as off
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buffer[y / 8][x] & (1 << (y % 8)) != 0
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        let mask = 1 << (y % 8);
        if on {
            self.buffer[y / 8][x] |= mask;
        } else {
            self.buffer[y / 8][x] &= !mask;
        }
    }

    /// Number of lit pixels
    pub fn lit_pixels(&self) -> u32 {
        self.buffer
            .iter()
            .flatten()
            .map(|byte| byte.count_ones())
            .sum()
    }

    /// Raw page data
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.buffer.get(page)
    }

    /// Successful draws since creation
    pub fn draw_count(&self) -> u32 {
        self.draws
    }
}

impl BitmapPanel for Framebuffer {
    fn draw_bitmap(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        data: &[u8],
    ) -> Result<(), PanelError> {
        if x0 < 0 || y0 < 0 || x1 < x0 || y1 < y0 || x1 > WIDTH as i32 || y1 > HEIGHT as i32 {
            return Err(PanelError::OutOfBounds);
        }

        let (x0, y0) = (x0 as usize, y0 as usize);
        let width = x1 as usize - x0;
        let height = y1 as usize - y0;
        if data.len() < page_bitmap_len(width, height) {
            return Err(PanelError::SizeMismatch);
        }

        for y in 0..height {
            for x in 0..width {
                self.set_pixel(x0 + x, y0 + y, page_pixel(data, width, x, y));
            }
        }
        self.draws += 1;
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Framebuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Framebuffer[{} lit, {} draws]",
            self.lit_pixels(),
            self.draws
        );
    }
}
