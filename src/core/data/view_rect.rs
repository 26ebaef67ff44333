use crate::core::data::viewport::Viewport;

/// A rectangle in viewport pixel space. Fractional, since the affine preview
/// lands between pixels; adapters round when they sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewRect {
    #[must_use]
    pub fn full(viewport: Viewport) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: f64::from(viewport.width()),
            height: f64::from(viewport.height()),
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[must_use]
    pub fn intersect(&self, other: &ViewRect) -> Option<ViewRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let rect = ViewRect {
            x,
            y,
            width: self.right().min(other.right()) - x,
            height: self.bottom().min(other.bottom()) - y,
        };

        (!rect.is_empty()).then_some(rect)
    }
}

/// A source/destination pair: the `src` part of the live buffer is stretched
/// onto `dst` in the viewport, everything else is left black.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub src: ViewRect,
    pub dst: ViewRect,
}

impl Placement {
    #[must_use]
    pub fn identity(viewport: Viewport) -> Self {
        Self {
            src: ViewRect::full(viewport),
            dst: ViewRect::full(viewport),
        }
    }

    #[must_use]
    pub fn is_identity(&self, viewport: Viewport) -> bool {
        *self == Self::identity(viewport)
    }
}
