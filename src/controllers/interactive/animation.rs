use log::{debug, trace, warn};

use crate::controllers::interactive::ports::timer::{TimerId, TimerPort};
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::direction::ZoomDirection;
use crate::core::zoom::settings::ZoomSettings;
use crate::core::zoom::state::ZoomState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Animating { timer: TimerId },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    Started,
    Flipped,
    Ignored,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// The gesture ended; render this region.
    Finished(PlaneRegion),
    /// The gesture ended before any tick; nothing to render.
    Unchanged,
    /// Another button is still held and now drives the direction.
    DirectionFlip(ZoomDirection),
    Ignored,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
struct HeldButtons {
    zoom_in: bool,
    zoom_out: bool,
}

impl HeldButtons {
    fn get(&self, direction: ZoomDirection) -> bool {
        match direction {
            ZoomDirection::In => self.zoom_in,
            ZoomDirection::Out => self.zoom_out,
        }
    }

    fn set(&mut self, direction: ZoomDirection, held: bool) {
        match direction {
            ZoomDirection::In => self.zoom_in = held,
            ZoomDirection::Out => self.zoom_out = held,
        }
    }
}

/// Tick-driven zoom state machine.
///
/// An episode starts on the first press, scales the view on every tick of its
/// own timer and commits a region on release. The accumulated factor stays
/// visible until the matching render completes.
#[derive(Debug)]
pub struct ZoomAnimator {
    settings: ZoomSettings,
    viewport: Viewport,
    phase: AnimationPhase,
    held: HeldButtons,
    committed: PlaneRegion,
    base: PlaneRegion,
    view: PlaneRegion,
    state: Option<ZoomState>,
}

impl ZoomAnimator {
    #[must_use]
    pub fn new(viewport: Viewport, initial_region: PlaneRegion, settings: ZoomSettings) -> Self {
        Self {
            settings,
            viewport,
            phase: AnimationPhase::Idle,
            held: HeldButtons::default(),
            committed: initial_region,
            base: initial_region,
            view: initial_region,
            state: None,
        }
    }

    pub fn press<T: TimerPort + ?Sized>(
        &mut self,
        direction: ZoomDirection,
        anchor: Point,
        timer: &mut T,
    ) -> PressOutcome {
        if self.held.get(direction) {
            return PressOutcome::Ignored;
        }
        self.held.set(direction, true);

        match self.phase {
            AnimationPhase::Idle => {
                let id = timer.start_periodic(self.settings.tick_interval);
                self.phase = AnimationPhase::Animating { timer: id };
                self.base = self.committed;
                self.view = self.committed;
                self.state = Some(ZoomState::start(direction, anchor, &self.settings));
                debug!("zoom {:?} started at ({}, {}) on {}", direction, anchor.x, anchor.y, id);
                PressOutcome::Started
            }
            AnimationPhase::Animating { .. } => {
                self.steer(direction);
                PressOutcome::Flipped
            }
        }
    }

    /// Advances the episode when `timer` is its own; anything else is a
    /// leftover tick and is dropped.
    pub fn tick(&mut self, timer: TimerId) -> Option<ZoomState> {
        let (AnimationPhase::Animating { timer: current }, Some(state)) = (self.phase, self.state)
        else {
            trace!("stale tick from {} while idle", timer);
            return None;
        };

        if current != timer {
            trace!("stale tick from {}, animating on {}", timer, current);
            return None;
        }

        let next = state.step();
        match next.apply(&self.base, self.viewport) {
            Ok(region) => {
                self.state = Some(next);
                self.view = region;
                trace!("tick: factor {}", next.factor);
            }
            Err(err) => warn!("zoom held at precision floor: {}", err),
        }

        self.state
    }

    pub fn release<T: TimerPort + ?Sized>(
        &mut self,
        direction: ZoomDirection,
        timer: &mut T,
    ) -> ReleaseOutcome {
        if !self.held.get(direction) {
            return ReleaseOutcome::Ignored;
        }
        self.held.set(direction, false);

        let AnimationPhase::Animating { timer: id } = self.phase else {
            return ReleaseOutcome::Ignored;
        };

        let other = direction.opposite();
        if self.held.get(other) {
            self.steer(other);
            return ReleaseOutcome::DirectionFlip(other);
        }

        timer.cancel(id);
        self.phase = AnimationPhase::Idle;

        if self.state.is_none_or(|state| state.is_identity()) {
            debug!("zoom released before any tick");
            self.state = None;
            return ReleaseOutcome::Unchanged;
        }

        self.committed = self.view;
        debug!("zoom finished, committing {:?}", self.committed);
        ReleaseOutcome::Finished(self.committed)
    }

    /// Ends a finished episode. Has no effect while a newer gesture runs.
    pub fn render_completed(&mut self) {
        if self.phase == AnimationPhase::Idle {
            self.state = None;
        }
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, AnimationPhase::Animating { .. })
    }

    #[must_use]
    pub fn zoom_state(&self) -> Option<ZoomState> {
        self.state
    }

    #[must_use]
    pub fn factor(&self) -> f64 {
        self.state.map_or(1.0, |state| state.factor)
    }

    #[must_use]
    pub fn committed_region(&self) -> PlaneRegion {
        self.committed
    }

    /// The region the user should currently be looking at.
    #[must_use]
    pub fn view_region(&self) -> PlaneRegion {
        self.view
    }

    fn steer(&mut self, direction: ZoomDirection) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        if state.direction != direction {
            *state = state.flip(&self.settings);
            debug!("zoom direction now {:?}", direction);
        }
    }
}
