use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::plane_region::PlaneRegion;
use std::fmt;
use std::time::Duration;

/// Monotonically increasing tag of a render job. Larger is newer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(pub u64);

impl JobId {
    /// The synchronous startup render.
    pub const INITIAL: JobId = JobId(0);

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A region snapshot to render. Captured by value at submission.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderJob {
    pub id: JobId,
    pub region: PlaneRegion,
}

/// A finished render. Hands ownership of the scratch buffer back.
#[derive(Debug)]
pub struct RenderedFrame {
    pub job: RenderJob,
    pub buffer: PixelBuffer,
    pub duration: Duration,
}
