use eframe::egui;
use irrasman::app::{IrrasApp, native_options};

fn main() -> eframe::Result {
    env_logger::init();

    eframe::run_native(
        "Irrasman",
        native_options(),
        Box::new(|cc| {
            // White canvas: the calculated total curve is drawn in black.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(IrrasApp::default()))
        }),
    )
}
