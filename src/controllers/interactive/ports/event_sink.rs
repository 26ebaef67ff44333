use crate::controllers::interactive::events::ViewerEvent;
use std::error::Error;
use std::fmt;
use std::sync::mpsc;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EventStreamClosed;

impl fmt::Display for EventStreamClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "viewer event stream is closed")
    }
}

impl Error for EventStreamClosed {}

/// Posts events into the interactive thread's ordered stream. Used by the
/// render worker and timers from their own threads.
pub trait EventSink: Send + Sync {
    fn post(&self, event: ViewerEvent) -> Result<(), EventStreamClosed>;
}

impl EventSink for mpsc::Sender<ViewerEvent> {
    fn post(&self, event: ViewerEvent) -> Result<(), EventStreamClosed> {
        self.send(event).map_err(|_| EventStreamClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::events::Button;

    #[test]
    fn test_sender_posts_in_order() {
        let (sender, receiver) = mpsc::channel();

        sender.post(ViewerEvent::PointerMove { x: 1, y: 2 }).unwrap();
        sender.post(ViewerEvent::ButtonUp { button: Button::Left }).unwrap();

        assert!(matches!(
            receiver.recv().unwrap(),
            ViewerEvent::PointerMove { x: 1, y: 2 }
        ));
        assert!(matches!(
            receiver.recv().unwrap(),
            ViewerEvent::ButtonUp { button: Button::Left }
        ));
    }

    #[test]
    fn test_post_after_receiver_dropped_fails() {
        let (sender, receiver) = mpsc::channel();
        drop(receiver);

        assert_eq!(sender.post(ViewerEvent::Quit), Err(EventStreamClosed));
    }
}
