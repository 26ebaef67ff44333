use rayon::prelude::*;

use crate::core::actions::render_region::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{PixelBuffer, grayscale};
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderRegionError {
    ViewportMismatch { algorithm: Viewport, buffer: Viewport },
}

impl fmt::Display for RenderRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewportMismatch { algorithm, buffer } => {
                write!(
                    f,
                    "algorithm viewport {}x{} does not match buffer viewport {}x{}",
                    algorithm.width(),
                    algorithm.height(),
                    buffer.width(),
                    buffer.height()
                )
            }
        }
    }
}

impl Error for RenderRegionError {}

fn check_viewports<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    target: &PixelBuffer,
) -> Result<(), RenderRegionError> {
    if algorithm.viewport() != target.viewport() {
        return Err(RenderRegionError::ViewportMismatch {
            algorithm: algorithm.viewport(),
            buffer: target.viewport(),
        });
    }

    Ok(())
}

fn render_row<Alg: FractalAlgorithm>(algorithm: &Alg, y: usize, row: &mut [u32]) {
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = grayscale(algorithm.compute(Point {
            x: x as i32,
            y: y as i32,
        }));
    }
}

fn fill_rows_parallel<Alg: FractalAlgorithm>(algorithm: &Alg, target: &mut PixelBuffer) {
    let width = target.viewport().width() as usize;

    target
        .pixels_mut()
        .par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, row)| render_row(algorithm, y, row));
}

/// Overwrites every pixel of `target` on the calling thread.
///
/// Reference implementation for [`render_region_parallel`]; both must produce
/// byte-identical buffers.
pub fn render_region_serial<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    target: &mut PixelBuffer,
) -> Result<(), RenderRegionError> {
    check_viewports(algorithm, target)?;
    let width = target.viewport().width() as usize;

    for (y, row) in target.pixels_mut().chunks_exact_mut(width).enumerate() {
        render_row(algorithm, y, row);
    }

    Ok(())
}

/// Overwrites every pixel of `target`, fanning rows out over rayon's pool.
///
/// Rows are independent, so the work-stealing order never shows in the
/// output. Returns only once every row is written.
pub fn render_region_parallel<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    target: &mut PixelBuffer,
) -> Result<(), RenderRegionError> {
    check_viewports(algorithm, target)?;
    fill_rows_parallel(algorithm, target);

    Ok(())
}

/// Renders the Mandelbrot set for `region` into `target`, sized by the
/// target's own viewport.
pub fn render_mandelbrot(region: &PlaneRegion, target: &mut PixelBuffer) {
    let algorithm = MandelbrotAlgorithm::new(target.viewport(), *region);
    fill_rows_parallel(&algorithm, target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::algorithm::evaluate;

    struct StubGradientAlgorithm {
        viewport: Viewport,
    }

    impl FractalAlgorithm for StubGradientAlgorithm {
        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn compute(&self, pixel: Point) -> u8 {
            (pixel.x * 7 + pixel.y * 13) as u8
        }
    }

    fn seahorse_valley() -> PlaneRegion {
        PlaneRegion::new(-0.80, -0.70, 0.05, 0.15).unwrap()
    }

    #[test]
    fn test_parallel_matches_serial_for_stub() {
        let viewport = Viewport::new(31, 17).unwrap();
        let algorithm = StubGradientAlgorithm { viewport };
        let mut serial = PixelBuffer::new(viewport).unwrap();
        let mut parallel = PixelBuffer::new(viewport).unwrap();

        render_region_serial(&algorithm, &mut serial).unwrap();
        render_region_parallel(&algorithm, &mut parallel).unwrap();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_parallel_matches_serial_for_mandelbrot() {
        let viewport = Viewport::new(64, 48).unwrap();
        let algorithm = MandelbrotAlgorithm::new(viewport, seahorse_valley());
        let mut serial = PixelBuffer::new(viewport).unwrap();
        let mut parallel = PixelBuffer::new(viewport).unwrap();

        render_region_serial(&algorithm, &mut serial).unwrap();
        render_region_parallel(&algorithm, &mut parallel).unwrap();

        assert_eq!(serial.pixels(), parallel.pixels());
    }

    #[test]
    fn test_render_mandelbrot_is_idempotent_across_buffers() {
        let viewport = Viewport::new(40, 40).unwrap();
        let mut first = PixelBuffer::new(viewport).unwrap();
        let mut second = PixelBuffer::from_data(viewport, vec![0xdead_beef; 1600]).unwrap();

        render_mandelbrot(&seahorse_valley(), &mut first);
        render_mandelbrot(&seahorse_valley(), &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_mandelbrot_writes_grayscale_of_evaluator() {
        let viewport = Viewport::new(600, 600).unwrap();
        let region = PlaneRegion::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let mut buffer = PixelBuffer::new(viewport).unwrap();

        render_mandelbrot(&region, &mut buffer);

        assert_eq!(buffer.pixel(Point::new(300, 300)), Some(grayscale(255)));
        for point in [Point::new(0, 0), Point::new(599, 0), Point::new(17, 431)] {
            assert_eq!(
                buffer.pixel(point),
                Some(grayscale(evaluate(point, viewport, &region)))
            );
        }
    }

    #[test]
    fn test_render_mandelbrot_matches_serial_render() {
        let viewport = Viewport::new(23, 29).unwrap();
        let algorithm = MandelbrotAlgorithm::new(viewport, seahorse_valley());
        let mut serial = PixelBuffer::new(viewport).unwrap();
        let mut convenience = PixelBuffer::new(viewport).unwrap();

        render_region_serial(&algorithm, &mut serial).unwrap();
        render_mandelbrot(&seahorse_valley(), &mut convenience);

        assert_eq!(serial, convenience);
    }

    #[test]
    fn test_viewport_mismatch_is_rejected_without_writing() {
        let algorithm = StubGradientAlgorithm {
            viewport: Viewport::new(4, 4).unwrap(),
        };
        let mut target = PixelBuffer::new(Viewport::new(5, 4).unwrap()).unwrap();

        let serial = render_region_serial(&algorithm, &mut target);
        let parallel = render_region_parallel(&algorithm, &mut target);

        assert!(matches!(serial, Err(RenderRegionError::ViewportMismatch { .. })));
        assert!(matches!(parallel, Err(RenderRegionError::ViewportMismatch { .. })));
        assert!(target.pixels().iter().all(|&p| p == 0));
    }
}
