//! Bitmap panel trait for monochrome displays

/// Errors that can occur while drawing to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Rectangle falls (partly) outside the panel
    OutOfBounds,
    /// Pixel data is shorter than the rectangle requires
    SizeMismatch,
    /// Transport to the panel failed
    Communication,
}

/// Trait for a 1-bit panel that accepts whole bitmaps
///
/// The panel owns the exact rectangle semantics. Coordinates are signed so
/// that a caller centering an oversized bitmap can pass a negative origin
/// and let the panel reject it.
pub trait BitmapPanel {
    /// Draw `data` into the rectangle `[x0, x1) x [y0, y1)`
    fn draw_bitmap(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, data: &[u8])
        -> Result<(), PanelError>;
}

impl<T: BitmapPanel + ?Sized> BitmapPanel for &mut T {
    fn draw_bitmap(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        data: &[u8],
    ) -> Result<(), PanelError> {
        (**self).draw_bitmap(x0, y0, x1, y1, data)
    }
}
