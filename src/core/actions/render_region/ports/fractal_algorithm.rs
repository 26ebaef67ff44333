use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// A per-pixel intensity function over a fixed viewport.
///
/// Implementations must be pure: the renderers evaluate pixels in any order
/// and on any thread.
pub trait FractalAlgorithm: Sync {
    fn viewport(&self) -> Viewport;
    fn compute(&self, pixel: Point) -> u8;
}
