use log::debug;

use crate::controllers::interactive::config::MIN_FRAME_BUFFERS;
use crate::controllers::interactive::data::render_job::{JobId, RenderedFrame};
use crate::core::actions::render_region::render_region::render_mandelbrot;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameStoreError {
    TooFewBuffers { requested: usize },
    Buffer(PixelBufferError),
}

impl fmt::Display for FrameStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewBuffers { requested } => write!(
                f,
                "frame store needs at least {} buffers, got {}",
                MIN_FRAME_BUFFERS, requested
            ),
            Self::Buffer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for FrameStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Buffer(err) => Some(err),
            Self::TooFewBuffers { .. } => None,
        }
    }
}

impl From<PixelBufferError> for FrameStoreError {
    fn from(err: PixelBufferError) -> Self {
        Self::Buffer(err)
    }
}

/// A buffer together with the region and job it shows.
#[derive(Debug)]
pub struct Frame {
    pub buffer: PixelBuffer,
    pub region: PlaneRegion,
    pub job: JobId,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The finished frame is now live; `previous` went back to scratch.
    Promoted { previous: JobId },
    /// The finished frame was not newer than `live` and was recycled.
    Stale { live: JobId },
}

/// Owns every frame buffer. Exactly one is live; the rest are scratch and
/// leave the store by value while the worker writes them, so the live
/// buffer is never reachable from another thread.
#[derive(Debug)]
pub struct FrameStore {
    viewport: Viewport,
    live: Frame,
    scratch: Vec<PixelBuffer>,
}

impl FrameStore {
    /// Allocates `buffer_count` buffers and renders `initial_region` into the
    /// live one before returning.
    pub fn new(
        viewport: Viewport,
        buffer_count: usize,
        initial_region: PlaneRegion,
    ) -> Result<Self, FrameStoreError> {
        if buffer_count < MIN_FRAME_BUFFERS {
            return Err(FrameStoreError::TooFewBuffers {
                requested: buffer_count,
            });
        }

        let mut live = PixelBuffer::new(viewport)?;
        let scratch = (1..buffer_count)
            .map(|_| PixelBuffer::new(viewport))
            .collect::<Result<Vec<_>, _>>()?;

        render_mandelbrot(&initial_region, &mut live);

        Ok(Self {
            viewport,
            live: Frame {
                buffer: live,
                region: initial_region,
                job: JobId::INITIAL,
            },
            scratch,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn current(&self) -> &Frame {
        &self.live
    }

    #[must_use]
    pub fn scratch_available(&self) -> usize {
        self.scratch.len()
    }

    pub fn checkout_scratch(&mut self) -> Option<PixelBuffer> {
        self.scratch.pop()
    }

    pub fn recycle(&mut self, buffer: PixelBuffer) {
        debug_assert_eq!(buffer.viewport(), self.viewport);
        self.scratch.push(buffer);
    }

    /// Promotes `rendered` when it is newer than the live frame. Otherwise
    /// its buffer is recycled and the live frame is left alone, so replaying
    /// a completion is harmless.
    pub fn swap(&mut self, rendered: RenderedFrame) -> SwapOutcome {
        if rendered.job.id <= self.live.job {
            debug!(
                "frame {} is not newer than live frame {}, recycling",
                rendered.job.id, self.live.job
            );
            self.recycle(rendered.buffer);
            return SwapOutcome::Stale {
                live: self.live.job,
            };
        }

        let previous = std::mem::replace(
            &mut self.live,
            Frame {
                buffer: rendered.buffer,
                region: rendered.job.region,
                job: rendered.job.id,
            },
        );
        debug!("frame {} is live, {} demoted", self.live.job, previous.job);
        self.recycle(previous.buffer);

        SwapOutcome::Promoted {
            previous: previous.job,
        }
    }
}
