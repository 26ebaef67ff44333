//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_rect::Placement;

const OPAQUE_BLACK: [u8; 4] = [0, 0, 0, 255];

#[inline]
fn xrgb_pixel_to_rgba(pixel: u32, dst: &mut [u8]) {
    dst[0] = (pixel >> 16) as u8;
    dst[1] = (pixel >> 8) as u8;
    dst[2] = pixel as u8;
    dst[3] = 255;
}

/// Copies `0x00RRGGBB` pixels to RGBA bytes, setting alpha to 255.
///
/// # Panics
/// Panics if `dst.len()` is not `src.len() * 4`.
pub fn xrgb_to_rgba(src: &[u32], dst: &mut [u8]) {
    assert_eq!(
        dst.len(),
        src.len() * 4,
        "dst length {} does not match expected {}",
        dst.len(),
        src.len() * 4
    );

    for (&pixel, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        xrgb_pixel_to_rgba(pixel, dst_pixel);
    }
}

/// For each destination pixel along one axis, the source index sampled at its
/// centre, or `None` outside the destination span.
fn axis_samples(
    len: usize,
    src_start: f64,
    src_len: f64,
    dst_start: f64,
    dst_len: f64,
    src_max: usize,
) -> Vec<Option<usize>> {
    (0..len)
        .map(|i| {
            let centre = i as f64 + 0.5;
            if centre < dst_start || centre >= dst_start + dst_len {
                return None;
            }
            let source = src_start + (centre - dst_start) / dst_len * src_len;
            Some((source.max(0.0) as usize).min(src_max))
        })
        .collect()
}

/// Writes `buffer` into the RGBA frame `dst` at `placement`: `src` of the
/// buffer is stretched onto `dst` with nearest-neighbour sampling and every
/// other pixel is black. `None` is a straight copy.
///
/// # Panics
/// Panics if `dst` does not hold exactly one RGBA pixel per buffer pixel.
pub fn blit_placement(buffer: &PixelBuffer, placement: Option<Placement>, dst: &mut [u8]) {
    let viewport = buffer.viewport();
    let Some(placement) = placement.filter(|p| !p.is_identity(viewport)) else {
        xrgb_to_rgba(buffer.pixels(), dst);
        return;
    };

    assert_eq!(
        dst.len(),
        viewport.pixel_count() * 4,
        "dst length {} does not match expected {}",
        dst.len(),
        viewport.pixel_count() * 4
    );

    let width = viewport.width() as usize;
    let height = viewport.height() as usize;
    let Placement { src, dst: target } = placement;
    let columns = axis_samples(width, src.x, src.width, target.x, target.width, width - 1);
    let rows = axis_samples(height, src.y, src.height, target.y, target.height, height - 1);

    for (row, dst_row) in rows.iter().zip(dst.chunks_exact_mut(width * 4)) {
        for (column, dst_pixel) in columns.iter().zip(dst_row.chunks_exact_mut(4)) {
            match (row, column) {
                (Some(sy), Some(sx)) => {
                    xrgb_pixel_to_rgba(buffer.pixels()[sy * width + sx], dst_pixel);
                }
                _ => dst_pixel.copy_from_slice(&OPAQUE_BLACK),
            }
        }
    }
}
