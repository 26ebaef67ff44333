use crate::controllers::interactive::data::render_job::RenderedFrame;
use crate::controllers::interactive::ports::timer::TimerId;
use crate::core::zoom::direction::ZoomDirection;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Middle,
    Other(u16),
}

impl Button {
    /// Left zooms in, right zooms out, everything else is ignored.
    #[must_use]
    pub fn zoom_direction(self) -> Option<ZoomDirection> {
        match self {
            Self::Left => Some(ZoomDirection::In),
            Self::Right => Some(ZoomDirection::Out),
            Self::Middle | Self::Other(_) => None,
        }
    }
}

/// Everything the interactive thread reacts to, in one totally ordered
/// stream.
#[derive(Debug)]
pub enum ViewerEvent {
    PointerMove { x: i32, y: i32 },
    ButtonDown { button: Button, x: i32, y: i32 },
    ButtonUp { button: Button },
    Quit,
    Tick { timer: TimerId },
    RenderComplete(RenderedFrame),
}
