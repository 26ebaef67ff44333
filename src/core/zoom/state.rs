use crate::core::data::plane_region::{PlaneRegion, PlaneRegionError};
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::zoom::direction::ZoomDirection;
use crate::core::zoom::settings::ZoomSettings;

/// Progress of one zoom episode. `factor` is the accumulated scale relative
/// to the region the episode started from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomState {
    pub direction: ZoomDirection,
    pub factor: f64,
    pub step_multiplier: f64,
    pub anchor: Point,
}

impl ZoomState {
    #[must_use]
    pub fn start(direction: ZoomDirection, anchor: Point, settings: &ZoomSettings) -> Self {
        Self {
            direction,
            factor: 1.0,
            step_multiplier: direction.step_for(settings),
            anchor,
        }
    }

    /// The state one tick later.
    #[must_use]
    pub fn step(&self) -> Self {
        Self {
            factor: self.factor * self.step_multiplier,
            ..*self
        }
    }

    /// Reverses the direction, keeping anchor and accumulated factor.
    #[must_use]
    pub fn flip(&self, settings: &ZoomSettings) -> Self {
        let direction = self.direction.opposite();

        Self {
            direction,
            step_multiplier: direction.step_for(settings),
            ..*self
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.factor == 1.0
    }

    pub fn apply(
        &self,
        base: &PlaneRegion,
        viewport: Viewport,
    ) -> Result<PlaneRegion, PlaneRegionError> {
        base.zoomed(self.factor, self.anchor, viewport)
    }
}
