pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use controllers::interactive::{
    Button, Coordinator, DisplayPort, EventSink, EventStreamClosed, Flow, TimerId, TimerPort,
    ViewerConfig, ViewerError, ViewerEvent, ViewerStatus,
};
pub use crate::core::actions::render_region::render_region::{
    render_mandelbrot, render_region_parallel, render_region_serial,
};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::plane_region::PlaneRegion;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::{GuiError, RunGuiCommand};
