//! Page-ordered bitmap helpers

/// Bytes needed for a `width` x `height` page-ordered bitmap
pub const fn page_bitmap_len(width: usize, height: usize) -> usize {
    width * height.div_ceil(8)
}

/// Read pixel `(x, y)` of a page-ordered bitmap `width` pixels wide
///
/// Pixels past the end of `data` read as off.
pub fn page_pixel(data: &[u8], width: usize, x: usize, y: usize) -> bool {
    data.get((y / 8) * width + x)
        .is_some_and(|byte| byte & (1 << (y % 8)) != 0)
}
