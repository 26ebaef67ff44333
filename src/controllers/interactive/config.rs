use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::zoom::settings::ZoomSettings;
use std::error::Error;
use std::fmt;
use std::time::Duration;

pub const MIN_FRAME_BUFFERS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub initial_region: PlaneRegion,
    pub frame_buffers: usize,
    pub zoom: ZoomSettings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Mandelbrot-Zoom".to_string(),
            width: 600,
            height: 600,
            initial_region: PlaneRegion::default(),
            frame_buffers: 3,
            zoom: ZoomSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Viewport(ViewportError),
    TooFewBuffers { requested: usize },
    ZoomInStep(f64),
    ZoomOutStep(f64),
    TickInterval(Duration),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::TooFewBuffers { requested } => write!(
                f,
                "at least {} frame buffers are needed, got {}",
                MIN_FRAME_BUFFERS, requested
            ),
            Self::ZoomInStep(step) => {
                write!(f, "zoom-in step must lie strictly between 0 and 1, got {}", step)
            }
            Self::ZoomOutStep(step) => {
                write!(f, "zoom-out step must be greater than 1, got {}", step)
            }
            Self::TickInterval(interval) => {
                write!(f, "tick interval must be non-zero, got {:?}", interval)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<Viewport, ConfigError> {
        let viewport = Viewport::new(self.width, self.height)?;

        if self.frame_buffers < MIN_FRAME_BUFFERS {
            return Err(ConfigError::TooFewBuffers {
                requested: self.frame_buffers,
            });
        }

        let zoom_in = self.zoom.zoom_in_step;
        if !(zoom_in > 0.0 && zoom_in < 1.0) {
            return Err(ConfigError::ZoomInStep(zoom_in));
        }

        let zoom_out = self.zoom.zoom_out_step;
        if !(zoom_out > 1.0 && zoom_out.is_finite()) {
            return Err(ConfigError::ZoomOutStep(zoom_out));
        }

        if self.zoom.tick_interval.is_zero() {
            return Err(ConfigError::TickInterval(self.zoom.tick_interval));
        }

        Ok(viewport)
    }
}
