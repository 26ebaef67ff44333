use log::error;

use crate::adapters::thread_timer::ThreadTimer;
use crate::controllers::interactive::coordinator::{Coordinator, Flow};
use crate::controllers::interactive::events::ViewerEvent;
use crate::input::gui::hud;
use crate::input::gui::translate::InputTranslator;
use crate::presenters::pixels::presenter::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::error::EventLoopError;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::window::Window;

pub struct GuiApp {
    window: &'static Window,
    coordinator: Coordinator<PixelsPresenter, ThreadTimer>,
    translator: InputTranslator,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<ViewerEvent>,
        coordinator: Coordinator<PixelsPresenter, ThreadTimer>,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            coordinator,
            translator: InputTranslator::default(),
            egui_ctx,
            egui_state,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<ViewerEvent>) -> Result<(), EventLoopError> {
        event_loop.run(move |event, elwt| match event {
            Event::UserEvent(viewer_event) => self.dispatch(viewer_event, elwt),
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == self.window.id() => self.handle_window_event(event, elwt),
            _ => {}
        })
    }

    fn dispatch(&mut self, event: ViewerEvent, elwt: &EventLoopWindowTarget<ViewerEvent>) {
        if self.coordinator.handle(event) == Flow::Exit {
            elwt.exit();
        }
    }

    fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<ViewerEvent>,
    ) {
        let response = self.egui_state.on_window_event(self.window, event);

        match event {
            WindowEvent::CloseRequested => self.dispatch(ViewerEvent::Quit, elwt),
            WindowEvent::RedrawRequested => self.redraw(elwt),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                self.window.request_redraw();
            }
            _ => {
                if let Some(viewer_event) = self.translator.translate(event, response.consumed) {
                    self.dispatch(viewer_event, elwt);
                }
                if response.repaint {
                    self.window.request_redraw();
                }
            }
        }
    }

    fn redraw(&mut self, elwt: &EventLoopWindowTarget<ViewerEvent>) {
        let status = self.coordinator.status();
        let raw_input = self.egui_state.take_egui_input(self.window);
        let egui::FullOutput {
            platform_output,
            textures_delta,
            shapes,
            ..
        } = self
            .egui_ctx
            .run(raw_input, |ctx| hud::show_status(ctx, &status));

        self.egui_state
            .handle_platform_output(self.window, platform_output);

        let rendered = self
            .coordinator
            .display_mut()
            .render(shapes, textures_delta, &self.egui_ctx);

        if let Err(err) = rendered {
            error!("render error: {}", err);
            self.dispatch(ViewerEvent::Quit, elwt);
        }
    }
}
