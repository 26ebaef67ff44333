use std::fmt;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer {}", self.0)
    }
}

/// Periodic heartbeat source. Ticks are delivered as
/// `ViewerEvent::Tick { timer }` on the same stream as input, so a tick
/// from a cancelled timer may still arrive and must be ignored by id.
pub trait TimerPort {
    fn start_periodic(&mut self, interval: Duration) -> TimerId;

    fn cancel(&mut self, timer: TimerId);
}
