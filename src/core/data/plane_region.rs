use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneRegionError {
    InvalidBounds {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
}

impl fmt::Display for PlaneRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            } => {
                write!(
                    f,
                    "plane region needs xmin < xmax and ymin < ymax: x [{}, {}], y [{}, {}]",
                    xmin, xmax, ymin, ymax
                )
            }
        }
    }
}

impl Error for PlaneRegionError {}

/// The rectangle of the complex plane currently mapped onto the viewport.
///
/// Copy-only and immutable once built: render jobs capture a region by value,
/// so a later gesture can never change the region a running job reads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRegion {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

/// The square `[-1, 1] x [-1, 1]`.
impl Default for PlaneRegion {
    fn default() -> Self {
        Self {
            xmin: -1.0,
            xmax: 1.0,
            ymin: -1.0,
            ymax: 1.0,
        }
    }
}

impl PlaneRegion {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, PlaneRegionError> {
        // written so NaN bounds fail too
        if !(xmin < xmax && ymin < ymax) {
            return Err(PlaneRegionError::InvalidBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Maps a pixel to the plane as `x / w * (xmax - xmin) + xmin`.
    ///
    /// Pixels outside the viewport are extrapolated rather than rejected; the
    /// anchor of a gesture may sit on the window edge.
    #[must_use]
    pub fn point_at(&self, pixel: Point, viewport: Viewport) -> Complex {
        let real = f64::from(pixel.x) / f64::from(viewport.width()) * self.width() + self.xmin;
        let imag = f64::from(pixel.y) / f64::from(viewport.height()) * self.height() + self.ymin;

        Complex { real, imag }
    }

    /// Scales the region by `factor` about the plane point under `anchor`.
    ///
    /// `factor < 1` zooms in. Fails once f64 precision collapses the bounds.
    pub fn zoomed(
        &self,
        factor: f64,
        anchor: Point,
        viewport: Viewport,
    ) -> Result<Self, PlaneRegionError> {
        let p = self.point_at(anchor, viewport);

        Self::new(
            p.real - factor * (p.real - self.xmin),
            p.real - factor * (p.real - self.xmax),
            p.imag - factor * (p.imag - self.ymin),
            p.imag - factor * (p.imag - self.ymax),
        )
    }

    /// How many times narrower this region is than `initial`.
    #[must_use]
    pub fn magnification_from(&self, initial: &PlaneRegion) -> f64 {
        initial.width() / self.width()
    }
}
