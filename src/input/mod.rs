//! Input adapters for the zoom viewer.
//!
//! Adapters receive input from a windowing system and translate it into
//! viewer events.

#[cfg(feature = "gui")]
pub mod gui;
