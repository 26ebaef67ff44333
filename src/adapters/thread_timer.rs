use log::warn;

use crate::controllers::interactive::events::ViewerEvent;
use crate::controllers::interactive::ports::event_sink::EventSink;
use crate::controllers::interactive::ports::timer::{TimerId, TimerPort};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// [`TimerPort`] backed by one sleeping thread per running timer. Ticks are
/// posted through the sink like any other event.
pub struct ThreadTimer {
    sink: Arc<dyn EventSink>,
    next_id: u64,
    running: HashMap<TimerId, Arc<AtomicBool>>,
}

impl ThreadTimer {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            sink,
            next_id: 0,
            running: HashMap::new(),
        }
    }

    #[must_use]
    pub fn running(&self) -> usize {
        self.running.len()
    }
}

impl TimerPort for ThreadTimer {
    fn start_periodic(&mut self, interval: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let cancelled = Arc::new(AtomicBool::new(false));

        let thread_cancelled = Arc::clone(&cancelled);
        let sink = Arc::clone(&self.sink);
        let spawned = thread::Builder::new()
            .name(format!("zoom-timer-{}", id.0))
            .spawn(move || {
                loop {
                    thread::sleep(interval);
                    if thread_cancelled.load(Ordering::Acquire) {
                        return;
                    }
                    if sink.post(ViewerEvent::Tick { timer: id }).is_err() {
                        return;
                    }
                }
            });

        match spawned {
            Ok(_) => {
                self.running.insert(id, cancelled);
            }
            Err(err) => warn!("could not start {}: {}", id, err),
        }

        id
    }

    fn cancel(&mut self, timer: TimerId) {
        if let Some(cancelled) = self.running.remove(&timer) {
            cancelled.store(true, Ordering::Release);
        }
    }
}

impl Drop for ThreadTimer {
    fn drop(&mut self) {
        for (_, cancelled) in self.running.drain() {
            cancelled.store(true, Ordering::Release);
        }
    }
}
