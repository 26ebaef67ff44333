use crate::core::actions::render_region::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Iteration cap; also the value returned for points that never escape.
pub const MAX_ITERATIONS: u8 = 255;

const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Escape-time of `c`: the number of `z ← z² + c` steps (from `z = 0`) before
/// `|z|² > 4`, capped at [`MAX_ITERATIONS`].
///
/// Everything is f64 for the whole pass; mixing widths shifts the image at
/// deep zoom.
#[must_use]
pub fn escape_time(c: Complex) -> u8 {
    let mut z = Complex::ZERO;

    for iteration in 0..MAX_ITERATIONS {
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            return iteration;
        }
        z = z.square() + c;
    }

    MAX_ITERATIONS
}

#[inline]
#[must_use]
pub fn evaluate(pixel: Point, viewport: Viewport, region: &PlaneRegion) -> u8 {
    escape_time(region.point_at(pixel, viewport))
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    region: PlaneRegion,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, region: PlaneRegion) -> Self {
        Self { viewport, region }
    }

    #[must_use]
    pub fn region(&self) -> PlaneRegion {
        self.region
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn compute(&self, pixel: Point) -> u8 {
        evaluate(pixel, self.viewport, &self.region)
    }
}
