//! Interactive zoom viewer.
//!
//! The coordinator consumes one ordered stream of [`ViewerEvent`]s: input,
//! timer ticks and render completions. It previews zooms by scaling the live
//! frame while a single background worker recomputes the exact image.
//!
//! # Architecture
//!
//! - **Input**: [`ViewerEvent`]s posted through an [`EventSink`]
//! - **Output**: the [`DisplayPort`] trait for showing frames
//! - **Core**: rendering and zoom math from `core/`

pub mod animation;
pub mod config;
pub mod coordinator;
pub mod data;
pub mod errors;
pub mod events;
pub mod frame_store;
pub mod ports;
#[cfg(test)]
pub(crate) mod test_support;
pub mod worker;

pub use config::ViewerConfig;
pub use coordinator::{Coordinator, Flow, ViewerStatus};
pub use errors::ViewerError;
pub use events::{Button, ViewerEvent};
pub use ports::display::DisplayPort;
pub use ports::event_sink::{EventSink, EventStreamClosed};
pub use ports::timer::{TimerId, TimerPort};
