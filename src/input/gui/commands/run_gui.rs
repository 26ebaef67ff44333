use log::info;

use crate::adapters::thread_timer::ThreadTimer;
use crate::controllers::interactive::config::ViewerConfig;
use crate::controllers::interactive::coordinator::Coordinator;
use crate::controllers::interactive::errors::ViewerError;
use crate::controllers::interactive::events::ViewerEvent;
use crate::controllers::interactive::ports::event_sink::EventSink;
use crate::input::gui::app::GuiApp;
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::presenters::pixels::proxy_sink::ProxySink;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

#[derive(Debug)]
pub enum GuiError {
    Viewer(ViewerError),
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewer(err) => write!(f, "{}", err),
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "could not create window: {}", err),
            Self::Surface(err) => write!(f, "could not create pixel surface: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewer(err) => Some(err),
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl From<ViewerError> for GuiError {
    fn from(err: ViewerError) -> Self {
        Self::Viewer(err)
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

pub struct RunGuiCommand {
    config: ViewerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(self) -> Result<(), GuiError> {
        let viewport = self.config.validate().map_err(ViewerError::from)?;

        let event_loop = EventLoopBuilder::<ViewerEvent>::with_user_event().build()?;
        let sink: Arc<dyn EventSink> = Arc::new(ProxySink::new(event_loop.create_proxy()));

        // frame buffers are sized once, so the window keeps its size
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.config.title.as_str())
                .with_inner_size(PhysicalSize::new(viewport.width(), viewport.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, viewport)?;
        let timer = ThreadTimer::new(Arc::clone(&sink));
        let coordinator = Coordinator::new(self.config, presenter, timer, sink)?;
        info!("window open");

        GuiApp::new(window, &event_loop, coordinator).run(event_loop)?;

        Ok(())
    }
}
