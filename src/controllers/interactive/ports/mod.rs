pub mod display;
pub mod event_sink;
pub mod timer;
