use log::{debug, info};

use crate::controllers::interactive::animation::{AnimationPhase, ReleaseOutcome, ZoomAnimator};
use crate::controllers::interactive::config::ViewerConfig;
use crate::controllers::interactive::data::render_job::{JobId, RenderedFrame};
use crate::controllers::interactive::errors::ViewerError;
use crate::controllers::interactive::events::ViewerEvent;
use crate::controllers::interactive::frame_store::{FrameStore, SwapOutcome};
use crate::controllers::interactive::ports::display::DisplayPort;
use crate::controllers::interactive::ports::event_sink::EventSink;
use crate::controllers::interactive::ports::timer::TimerPort;
use crate::controllers::interactive::worker::{RenderWorker, WorkerState};
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::preview::placement_between;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Snapshot of the viewer for overlays and tests.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewerStatus {
    pub view_region: PlaneRegion,
    pub live_region: PlaneRegion,
    pub live_job: JobId,
    pub latest_job: JobId,
    pub deferred_region: Option<PlaneRegion>,
    pub magnification: f64,
    pub factor: f64,
    pub animating: bool,
    pub worker: WorkerState,
    pub last_render: Option<Duration>,
}

/// Owns every piece of viewer state and reacts to one ordered event stream.
///
/// All methods run on the interactive thread and none of them wait on the
/// render worker.
pub struct Coordinator<D: DisplayPort, T: TimerPort> {
    config: ViewerConfig,
    viewport: Viewport,
    frames: FrameStore,
    worker: RenderWorker,
    animator: ZoomAnimator,
    display: D,
    timer: T,
    cursor: Point,
    latest_job: JobId,
    deferred: Option<PlaneRegion>,
    last_render: Option<Duration>,
}

impl<D: DisplayPort, T: TimerPort> Coordinator<D, T> {
    /// Renders the initial region synchronously, starts the worker and shows
    /// the first frame.
    pub fn new(
        config: ViewerConfig,
        display: D,
        timer: T,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, ViewerError> {
        let viewport = config.validate()?;

        let start = Instant::now();
        let frames = FrameStore::new(viewport, config.frame_buffers, config.initial_region)?;
        let initial_render = start.elapsed();
        info!(
            "{}x{} viewport, {} frame buffers, initial render took {:?}",
            viewport.width(),
            viewport.height(),
            config.frame_buffers,
            initial_render
        );

        let worker = RenderWorker::spawn(sink).map_err(ViewerError::WorkerSpawn)?;
        let animator = ZoomAnimator::new(viewport, config.initial_region, config.zoom);

        let mut coordinator = Self {
            config,
            viewport,
            frames,
            worker,
            animator,
            display,
            timer,
            cursor: viewport.center(),
            latest_job: JobId::INITIAL,
            deferred: None,
            last_render: Some(initial_render),
        };
        coordinator.present_view();
        coordinator.update_title();

        Ok(coordinator)
    }

    pub fn handle(&mut self, event: ViewerEvent) -> Flow {
        match event {
            ViewerEvent::PointerMove { x, y } => {
                self.cursor = Point::new(x, y);
            }
            ViewerEvent::ButtonDown { button, x, y } => {
                self.cursor = Point::new(x, y);
                if let Some(direction) = button.zoom_direction() {
                    self.animator.press(direction, self.cursor, &mut self.timer);
                }
            }
            ViewerEvent::ButtonUp { button } => {
                if let Some(direction) = button.zoom_direction() {
                    let outcome = self.animator.release(direction, &mut self.timer);
                    self.on_release(outcome);
                }
            }
            ViewerEvent::Tick { timer } => {
                if self.animator.tick(timer).is_some() {
                    self.present_view();
                    self.update_title();
                }
            }
            ViewerEvent::RenderComplete(rendered) => self.on_render_complete(rendered),
            ViewerEvent::Quit => {
                self.shutdown();
                return Flow::Exit;
            }
        }

        Flow::Continue
    }

    /// Handles events until `Quit` or until every sender is gone.
    pub fn run(&mut self, events: mpsc::Receiver<ViewerEvent>) {
        while let Ok(event) = events.recv() {
            if self.handle(event) == Flow::Exit {
                return;
            }
        }

        debug!("event stream closed");
        self.shutdown();
    }

    #[must_use]
    pub fn status(&self) -> ViewerStatus {
        let live = self.frames.current();
        let view_region = self.animator.view_region();

        ViewerStatus {
            view_region,
            live_region: live.region,
            live_job: live.job,
            latest_job: self.latest_job,
            deferred_region: self.deferred,
            magnification: view_region.magnification_from(&self.config.initial_region),
            factor: self.animator.factor(),
            animating: self.animator.is_animating(),
            worker: self.worker.state(),
            last_render: self.last_render,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Redraws the current view, e.g. after the window was exposed.
    pub fn refresh(&mut self) {
        self.present_view();
    }

    fn on_release(&mut self, outcome: ReleaseOutcome) {
        match outcome {
            ReleaseOutcome::Finished(region) => {
                self.request_render(region);
                self.present_view();
                self.update_title();
            }
            ReleaseOutcome::DirectionFlip(_) => self.update_title(),
            ReleaseOutcome::Unchanged | ReleaseOutcome::Ignored => {}
        }
    }

    fn request_render(&mut self, region: PlaneRegion) {
        let Some(target) = self.frames.checkout_scratch() else {
            if self.deferred.replace(region).is_some() {
                debug!("deferred region replaced");
            } else {
                debug!("no scratch buffer free, deferring render");
            }
            return;
        };

        let submission = self.worker.submit(region, target);
        self.latest_job = submission.job.id;

        if let Some((_, buffer)) = submission.superseded {
            self.frames.recycle(buffer);
        }
    }

    fn on_render_complete(&mut self, rendered: RenderedFrame) {
        self.last_render = Some(rendered.duration);

        if rendered.job.id < self.latest_job {
            debug!(
                "discarding job {}, job {} is newer",
                rendered.job.id, self.latest_job
            );
            self.frames.recycle(rendered.buffer);
        } else if let SwapOutcome::Promoted { .. } = self.frames.swap(rendered) {
            self.animator.render_completed();
        }

        if let Some(region) = self.deferred.take() {
            self.request_render(region);
        }

        self.present_view();
        self.update_title();
    }

    fn present_view(&mut self) {
        let live = self.frames.current();
        let placement = placement_between(&live.region, &self.animator.view_region(), self.viewport);

        self.display.present(&live.buffer, placement);
    }

    fn update_title(&mut self) {
        let magnification = self
            .animator
            .view_region()
            .magnification_from(&self.config.initial_region);

        self.display
            .set_title(&format!("{} - Zoom : {:.2}", self.config.title, magnification));
    }

    fn shutdown(&mut self) {
        if let AnimationPhase::Animating { timer } = self.animator.phase() {
            self.timer.cancel(timer);
        }
        self.worker.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::events::Button;
    use crate::controllers::interactive::ports::timer::TimerId;
    use crate::controllers::interactive::test_support::{ManualTimer, RecordingDisplay};
    use crate::core::actions::render_region::render_region::render_mandelbrot;
    use crate::core::data::pixel_buffer::PixelBuffer;

    const TIMEOUT: Duration = Duration::from_secs(5);

    type TestCoordinator = Coordinator<RecordingDisplay, ManualTimer>;

    fn config(frame_buffers: usize) -> ViewerConfig {
        ViewerConfig {
            width: 24,
            height: 24,
            frame_buffers,
            ..ViewerConfig::default()
        }
    }

    fn start(frame_buffers: usize) -> (TestCoordinator, mpsc::Receiver<ViewerEvent>) {
        let _ = env_logger::builder().is_test(true).try_init();
        let (sender, receiver) = mpsc::channel();
        let coordinator = Coordinator::new(
            config(frame_buffers),
            RecordingDisplay::default(),
            ManualTimer::default(),
            Arc::new(sender),
        )
        .unwrap();
        (coordinator, receiver)
    }

    fn next_completion(receiver: &mpsc::Receiver<ViewerEvent>) -> ViewerEvent {
        let event = receiver.recv_timeout(TIMEOUT).unwrap();
        assert!(matches!(event, ViewerEvent::RenderComplete(_)));
        event
    }

    fn completion_job(event: &ViewerEvent) -> JobId {
        match event {
            ViewerEvent::RenderComplete(frame) => frame.job.id,
            other => panic!("unexpected event {:?}", other),
        }
    }

    /// Press, tick `ticks` times on the newest timer, release.
    fn gesture(coordinator: &mut TestCoordinator, button: Button, ticks: usize) {
        coordinator.handle(ViewerEvent::ButtonDown { button, x: 6, y: 18 });
        let timer = current_timer(coordinator);
        for _ in 0..ticks {
            coordinator.handle(ViewerEvent::Tick { timer });
        }
        coordinator.handle(ViewerEvent::ButtonUp { button });
    }

    fn current_timer(coordinator: &TestCoordinator) -> TimerId {
        match coordinator.animator.phase() {
            AnimationPhase::Animating { timer } => timer,
            AnimationPhase::Idle => panic!("not animating"),
        }
    }

    fn rendered(region: &PlaneRegion) -> Vec<u32> {
        let mut buffer = PixelBuffer::new(Viewport::new(24, 24).unwrap()).unwrap();
        render_mandelbrot(region, &mut buffer);
        buffer.pixels().to_vec()
    }

    #[test]
    fn test_new_presents_initial_frame_and_title() {
        let (coordinator, _receiver) = start(3);
        let display = coordinator.display();

        assert_eq!(display.presented.len(), 1);
        assert_eq!(display.last().placement, None);
        assert_eq!(display.last().pixels, rendered(&PlaneRegion::default()));
        assert_eq!(display.titles, vec!["Mandelbrot-Zoom - Zoom : 1.00"]);
        assert_eq!(coordinator.status().live_job, JobId::INITIAL);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let (sender, _receiver) = mpsc::channel();
        let result = Coordinator::new(
            config(1),
            RecordingDisplay::default(),
            ManualTimer::default(),
            Arc::new(sender),
        );

        assert!(matches!(result, Err(ViewerError::Config(_))));
    }

    #[test]
    fn test_ticks_present_previews_of_live_buffer() {
        let (mut coordinator, _receiver) = start(3);
        coordinator.handle(ViewerEvent::ButtonDown {
            button: Button::Left,
            x: 6,
            y: 18,
        });

        let timer = current_timer(&coordinator);
        for _ in 0..3 {
            coordinator.handle(ViewerEvent::Tick { timer });
        }

        let display = coordinator.display();
        let preview = display.last();
        assert_eq!(display.presented.len(), 4);
        assert_eq!(preview.pixels, rendered(&PlaneRegion::default()));
        let placement = preview.placement.unwrap();
        assert_eq!(placement.dst.width, 24.0);
        assert!((placement.src.width - 24.0 * 0.97_f64.powi(3)).abs() < 1e-9);
        assert_eq!(display.titles.last().unwrap(), "Mandelbrot-Zoom - Zoom : 1.10");
        assert!(coordinator.status().animating);
    }

    #[test]
    fn test_release_renders_committed_region_and_hands_off() {
        let (mut coordinator, receiver) = start(3);
        gesture(&mut coordinator, Button::Left, 4);
        let committed = coordinator.status().view_region;
        assert_eq!(coordinator.status().latest_job, JobId(1));

        coordinator.handle(next_completion(&receiver));

        let status = coordinator.status();
        assert_eq!(status.live_job, JobId(1));
        assert_eq!(status.live_region, committed);
        assert_eq!(status.factor, 1.0);
        assert!(!status.animating);
        assert!(status.magnification > 1.0);
        let display = coordinator.display();
        assert_eq!(display.last().placement, None);
        assert_eq!(display.last().pixels, rendered(&committed));
    }

    #[test]
    fn test_release_before_first_tick_issues_no_job() {
        let (mut coordinator, receiver) = start(3);

        gesture(&mut coordinator, Button::Right, 0);

        assert_eq!(coordinator.status().latest_job, JobId::INITIAL);
        assert!(receiver.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn test_stale_tick_after_repress_is_ignored() {
        let (mut coordinator, _receiver) = start(3);
        gesture(&mut coordinator, Button::Left, 0);
        coordinator.handle(ViewerEvent::ButtonDown {
            button: Button::Left,
            x: 1,
            y: 1,
        });
        let presented = coordinator.display().presented.len();

        coordinator.handle(ViewerEvent::Tick { timer: TimerId(1) });
        assert_eq!(coordinator.display().presented.len(), presented);
        assert_eq!(coordinator.status().factor, 1.0);

        coordinator.handle(ViewerEvent::Tick { timer: TimerId(2) });
        assert_eq!(coordinator.display().presented.len(), presented + 1);
        assert_eq!(coordinator.status().factor, 0.97);
    }

    #[test]
    fn test_older_completion_is_discarded() {
        let (mut coordinator, receiver) = start(3);
        gesture(&mut coordinator, Button::Left, 2);
        gesture(&mut coordinator, Button::Left, 2);
        let latest = coordinator.status().latest_job;
        let final_region = coordinator.status().view_region;
        assert_eq!(latest, JobId(2));

        loop {
            let event = next_completion(&receiver);
            let job = completion_job(&event);
            coordinator.handle(event);
            if job == latest {
                break;
            }
            // job 1 finished first and must not become live
            assert_eq!(coordinator.status().live_job, JobId::INITIAL);
        }

        assert_eq!(coordinator.status().live_job, latest);
        assert_eq!(coordinator.status().live_region, final_region);
        assert_eq!(coordinator.display().last().pixels, rendered(&final_region));
    }

    #[test]
    fn test_render_is_deferred_without_free_scratch_buffer() {
        let (mut coordinator, receiver) = start(2);
        gesture(&mut coordinator, Button::Left, 2);
        gesture(&mut coordinator, Button::Right, 3);
        let final_region = coordinator.status().view_region;

        assert_eq!(coordinator.status().latest_job, JobId(1));
        assert_eq!(coordinator.status().deferred_region, Some(final_region));

        coordinator.handle(next_completion(&receiver));
        assert_eq!(coordinator.status().live_job, JobId(1));
        assert_eq!(coordinator.status().latest_job, JobId(2));
        assert_eq!(coordinator.status().deferred_region, None);
        // still previewing the deferred region from the job 1 frame
        assert!(coordinator.display().last().placement.is_some());

        coordinator.handle(next_completion(&receiver));
        assert_eq!(coordinator.status().live_job, JobId(2));
        assert_eq!(coordinator.status().live_region, final_region);
        assert_eq!(coordinator.display().last().placement, None);
    }

    #[test]
    fn test_completion_during_new_gesture_keeps_animating() {
        let (mut coordinator, receiver) = start(3);
        gesture(&mut coordinator, Button::Left, 2);
        coordinator.handle(ViewerEvent::ButtonDown {
            button: Button::Left,
            x: 3,
            y: 3,
        });
        let timer = current_timer(&coordinator);
        coordinator.handle(ViewerEvent::Tick { timer });

        coordinator.handle(next_completion(&receiver));

        let status = coordinator.status();
        assert_eq!(status.live_job, JobId(1));
        assert!(status.animating);
        assert_eq!(status.factor, 0.97);
        assert!(coordinator.display().last().placement.is_some());
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let (mut coordinator, _receiver) = start(3);

        coordinator.handle(ViewerEvent::ButtonDown {
            button: Button::Middle,
            x: 2,
            y: 2,
        });
        coordinator.handle(ViewerEvent::ButtonDown {
            button: Button::Other(8),
            x: 2,
            y: 2,
        });

        assert!(!coordinator.status().animating);
    }

    #[test]
    fn test_press_anchors_at_press_position() {
        let (mut coordinator, _receiver) = start(3);
        coordinator.handle(ViewerEvent::PointerMove { x: 20, y: 20 });
        coordinator.handle(ViewerEvent::ButtonDown {
            button: Button::Left,
            x: 4,
            y: 5,
        });

        let state = coordinator.animator.zoom_state().unwrap();
        assert_eq!(state.anchor, Point::new(4, 5));
    }

    #[test]
    fn test_quit_exits_and_cancels_running_timer() {
        let (mut coordinator, _receiver) = start(3);
        coordinator.handle(ViewerEvent::ButtonDown {
            button: Button::Right,
            x: 1,
            y: 1,
        });

        assert_eq!(coordinator.handle(ViewerEvent::Quit), Flow::Exit);
        assert!(coordinator.timer.active().is_empty());
    }

    #[test]
    fn test_run_stops_on_quit() {
        let (mut coordinator, _worker_events) = start(3);
        let (sender, receiver) = mpsc::channel();
        sender.send(ViewerEvent::PointerMove { x: 1, y: 1 }).unwrap();
        sender.send(ViewerEvent::Quit).unwrap();
        sender.send(ViewerEvent::PointerMove { x: 2, y: 2 }).unwrap();

        coordinator.run(receiver);

        assert_eq!(coordinator.cursor, Point::new(1, 1));
    }
}
