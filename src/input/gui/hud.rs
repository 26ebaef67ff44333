use crate::controllers::interactive::coordinator::ViewerStatus;
use crate::controllers::interactive::worker::WorkerState;

pub fn show_status(ctx: &egui::Context, status: &ViewerStatus) {
    egui::Window::new("Zoom")
        .default_pos([10.0, 10.0])
        .default_size([260.0, 200.0])
        .show(ctx, |ui| {
            ui.label("Hold left to zoom in, right to zoom out.");
            ui.separator();

            let view = status.view_region;
            ui.label(format!("Real: [{:.6}, {:.6}]", view.xmin(), view.xmax()));
            ui.label(format!("Imag: [{:.6}, {:.6}]", view.ymin(), view.ymax()));
            ui.label(format!("Magnification: {:.2}", status.magnification));
            if status.animating {
                ui.label(format!("Zooming, factor {:.4}", status.factor));
            }

            ui.separator();
            ui.label(format!(
                "Live job: {}  latest: {}",
                status.live_job, status.latest_job
            ));
            if status.deferred_region.is_some() {
                ui.label("Render waiting for a free buffer");
            }
            let worker = match status.worker {
                WorkerState::Idle => "idle",
                WorkerState::Rendering => "rendering",
            };
            ui.label(format!("Worker: {}", worker));
            if let Some(duration) = status.last_render {
                ui.label(format!("Last render: {} ms", duration.as_millis()));
            }
        });
}
