use crate::controllers::interactive::events::ViewerEvent;
use crate::controllers::interactive::ports::event_sink::{EventSink, EventStreamClosed};
use std::sync::{Mutex, PoisonError};
use winit::event_loop::EventLoopProxy;

/// Posts viewer events into the winit event loop as user events.
pub struct ProxySink {
    proxy: Mutex<EventLoopProxy<ViewerEvent>>,
}

impl ProxySink {
    pub fn new(proxy: EventLoopProxy<ViewerEvent>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }
}

impl EventSink for ProxySink {
    fn post(&self, event: ViewerEvent) -> Result<(), EventStreamClosed> {
        self.proxy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .send_event(event)
            .map_err(|_| EventStreamClosed)
    }
}
