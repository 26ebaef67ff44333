use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    pub zoom_in_step: f64,
    pub zoom_out_step: f64,
    pub tick_interval: Duration,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            zoom_in_step: 0.97,
            zoom_out_step: 1.03,
            tick_interval: Duration::from_millis(30),
        }
    }
}
