use log::{debug, warn};

use crate::controllers::interactive::data::render_job::{JobId, RenderJob, RenderedFrame};
use crate::controllers::interactive::events::ViewerEvent;
use crate::controllers::interactive::ports::event_sink::EventSink;
use crate::core::actions::render_region::render_region::render_mandelbrot;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::plane_region::PlaneRegion;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

pub const WORKER_THREAD_NAME: &str = "render-worker";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WorkerState {
    Idle,
    Rendering,
}

/// Depth-1 queue with overwrite semantics: only the most recent unstarted
/// job is kept.
#[derive(Debug, Default)]
pub struct JobSlot {
    pending: Option<(RenderJob, PixelBuffer)>,
}

impl JobSlot {
    /// Stores `job`, handing back whatever unstarted job it replaced.
    pub fn put(
        &mut self,
        job: RenderJob,
        target: PixelBuffer,
    ) -> Option<(RenderJob, PixelBuffer)> {
        self.pending.replace((job, target))
    }

    pub fn take(&mut self) -> Option<(RenderJob, PixelBuffer)> {
        self.pending.take()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

/// Result of [`RenderWorker::submit`].
#[derive(Debug)]
pub struct Submission {
    pub job: RenderJob,
    /// The unstarted job this submission overwrote, with its buffer.
    pub superseded: Option<(RenderJob, PixelBuffer)>,
}

struct SharedState {
    next_job: AtomicU64,
    last_completed: AtomicU64,
    rendering: AtomicBool,
    slot: Mutex<JobSlot>,
    wake: Condvar,
    shutdown: AtomicBool,
    sink: Arc<dyn EventSink>,
}

impl SharedState {
    fn lock_slot(&self) -> MutexGuard<'_, JobSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The single background thread that recomputes exact frames.
///
/// A job that has started always runs to completion; a newer submission
/// only replaces a job still waiting in the slot.
pub struct RenderWorker {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn spawn(sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let shared = Arc::new(SharedState {
            next_job: AtomicU64::new(JobId::INITIAL.value()),
            last_completed: AtomicU64::new(JobId::INITIAL.value()),
            rendering: AtomicBool::new(false),
            slot: Mutex::new(JobSlot::default()),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            sink,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || Self::worker_loop(&worker_shared))?;

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    /// Queues a render of `region` into `target` and returns immediately.
    pub fn submit(&self, region: PlaneRegion, target: PixelBuffer) -> Submission {
        let id = JobId(self.shared.next_job.fetch_add(1, Ordering::SeqCst) + 1);
        let job = RenderJob { id, region };

        let superseded = self.shared.lock_slot().put(job, target);
        self.shared.wake.notify_one();

        match &superseded {
            Some((old, _)) => debug!("job {} submitted, superseding {}", id, old.id),
            None => debug!("job {} submitted", id),
        }

        Submission { job, superseded }
    }

    #[must_use]
    pub fn state(&self) -> WorkerState {
        if self.shared.rendering.load(Ordering::Acquire) {
            WorkerState::Rendering
        } else {
            WorkerState::Idle
        }
    }

    #[must_use]
    pub fn last_completed(&self) -> JobId {
        JobId(self.shared.last_completed.load(Ordering::Acquire))
    }

    /// Stops the thread after any in-flight render and joins it. A job still
    /// waiting in the slot is dropped.
    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        {
            // wake under the lock so the store above cannot race the wait
            let _guard = self.shared.lock_slot();
            self.shared.wake.notify_one();
        }

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn worker_loop(shared: &SharedState) {
        loop {
            let (job, mut buffer) = {
                let mut guard = shared.lock_slot();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(next) = guard.take() {
                        shared.rendering.store(true, Ordering::Release);
                        break next;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let start = Instant::now();
            render_mandelbrot(&job.region, &mut buffer);
            let duration = start.elapsed();

            shared.rendering.store(false, Ordering::Release);
            shared
                .last_completed
                .store(job.id.value(), Ordering::Release);
            debug!("job {} rendered in {:?}", job.id, duration);

            let posted = shared.sink.post(ViewerEvent::RenderComplete(RenderedFrame {
                job,
                buffer,
                duration,
            }));

            if posted.is_err() {
                warn!("event stream closed, render worker exiting");
                return;
            }
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
