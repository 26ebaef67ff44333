//! Hand-written fakes for the interactive ports.

use crate::controllers::interactive::ports::display::DisplayPort;
use crate::controllers::interactive::ports::timer::{TimerId, TimerPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_rect::Placement;
use std::time::Duration;

/// Hands out sequential ids and never ticks on its own.
#[derive(Debug, Default)]
pub struct ManualTimer {
    next: u64,
    pub started: Vec<(TimerId, Duration)>,
    pub cancelled: Vec<TimerId>,
}

impl ManualTimer {
    #[must_use]
    pub fn active(&self) -> Vec<TimerId> {
        self.started
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| !self.cancelled.contains(id))
            .collect()
    }
}

impl TimerPort for ManualTimer {
    fn start_periodic(&mut self, interval: Duration) -> TimerId {
        self.next += 1;
        let id = TimerId(self.next);
        self.started.push((id, interval));
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.cancelled.push(timer);
    }
}

#[derive(Debug)]
pub struct Presented {
    pub pixels: Vec<u32>,
    pub placement: Option<Placement>,
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub presented: Vec<Presented>,
    pub titles: Vec<String>,
}

impl RecordingDisplay {
    pub fn last(&self) -> &Presented {
        self.presented.last().expect("nothing presented yet")
    }
}

impl DisplayPort for RecordingDisplay {
    fn present(&mut self, buffer: &PixelBuffer, placement: Option<Placement>) {
        self.presented.push(Presented {
            pixels: buffer.pixels().to_vec(),
            placement,
        });
    }

    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }
}
