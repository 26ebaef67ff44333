use crate::controllers::interactive::events::{Button, ViewerEvent};
use crate::core::data::point::Point;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// X11 numbering for the side buttons.
const BACK_BUTTON: u16 = 8;
const FORWARD_BUTTON: u16 = 9;

#[must_use]
pub fn button_from(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
        MouseButton::Back => Button::Other(BACK_BUTTON),
        MouseButton::Forward => Button::Other(FORWARD_BUTTON),
        MouseButton::Other(id) => Button::Other(id),
    }
}

/// Turns winit window events into viewer events. winit reports button
/// presses without a position, so the last cursor position is tracked here.
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: Point,
}

impl InputTranslator {
    /// `consumed_by_ui` drops presses aimed at the overlay. Releases always
    /// pass through so a held zoom can never get stuck.
    pub fn translate(&mut self, event: &WindowEvent, consumed_by_ui: bool) -> Option<ViewerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as i32, position.y as i32);
                Some(ViewerEvent::PointerMove {
                    x: self.cursor.x,
                    y: self.cursor.y,
                })
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } if !consumed_by_ui => Some(ViewerEvent::ButtonDown {
                button: button_from(*button),
                x: self.cursor.x,
                y: self.cursor.y,
            }),
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button,
                ..
            } => Some(ViewerEvent::ButtonUp {
                button: button_from(*button),
            }),
            _ => None,
        }
    }
}
