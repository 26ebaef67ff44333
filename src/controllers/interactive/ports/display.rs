use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_rect::Placement;

/// Where finished and previewed frames go. Called only from the interactive
/// thread.
pub trait DisplayPort {
    /// Shows `buffer`. `None` means the full buffer at identity; otherwise
    /// `placement.src` of the buffer is stretched onto `placement.dst` and
    /// the rest of the viewport is black.
    fn present(&mut self, buffer: &PixelBuffer, placement: Option<Placement>);

    fn set_title(&mut self, title: &str);
}
