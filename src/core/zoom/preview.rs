//! Affine preview of the live buffer while an exact render is pending.
//!
//! The live buffer always covers the whole viewport for its own region, so
//! showing a different region is a pure rectangle-to-rectangle mapping.

use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::view_rect::{Placement, ViewRect};
use crate::core::data::viewport::Viewport;

/// Where the full live buffer lands once the view has been scaled by
/// `factor` about `anchor`: `x = ax - ax/f`, `w = W/f`.
///
/// Not clipped; for `factor < 1` the rectangle spills past the viewport.
#[must_use]
pub fn scaled_destination(viewport: Viewport, anchor: Point, factor: f64) -> ViewRect {
    let ax = f64::from(anchor.x);
    let ay = f64::from(anchor.y);

    ViewRect {
        x: ax - ax / factor,
        y: ay - ay / factor,
        width: f64::from(viewport.width()) / factor,
        height: f64::from(viewport.height()) / factor,
    }
}

/// Maps the buffer rendered for `live` onto the viewport showing `view`.
///
/// The destination is clipped to the viewport and the source shrunk to
/// match. Returns `None` when the mapping is the identity. When the regions
/// do not overlap at all the unclipped pair is returned and nothing of it
/// is visible.
#[must_use]
pub fn placement_between(
    live: &PlaneRegion,
    view: &PlaneRegion,
    viewport: Viewport,
) -> Option<Placement> {
    if live == view {
        return None;
    }

    let full = ViewRect::full(viewport);
    let dst = ViewRect {
        x: (live.xmin() - view.xmin()) / view.width() * full.width,
        y: (live.ymin() - view.ymin()) / view.height() * full.height,
        width: live.width() / view.width() * full.width,
        height: live.height() / view.height() * full.height,
    };

    let Some(visible) = dst.intersect(&full) else {
        return Some(Placement { src: full, dst });
    };

    let scale_x = full.width / dst.width;
    let scale_y = full.height / dst.height;
    let placement = Placement {
        src: ViewRect {
            x: (visible.x - dst.x) * scale_x,
            y: (visible.y - dst.y) * scale_y,
            width: visible.width * scale_x,
            height: visible.height * scale_y,
        },
        dst: visible,
    };

    (!placement.is_identity(viewport)).then_some(placement)
}
