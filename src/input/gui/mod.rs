//! GUI input adapter for the zoom viewer.
//!
//! A winit window with a `pixels` framebuffer and an egui status overlay.

mod app;
pub mod commands;
mod hud;
mod translate;
