use eframe::egui;

use crate::scene::PlotScene;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation: interactive viewer
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct IrrasApp {
    pub state: AppState,
}

impl eframe::App for IrrasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: loaded files ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Right side panel: plotting options ----
        egui::SidePanel::right("options_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let state = &mut self.state;
            match &state.scene {
                Some(scene) => plot::scene_plot(ui, scene, &mut state.reset_view),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.heading("Open a file to view spectra  (File → Open…)");
                    });
                }
            }
        });
    }
}

// ---------------------------------------------------------------------------
// eframe App implementation: static plot window of the CLI
// ---------------------------------------------------------------------------

pub struct ViewerApp {
    scene: PlotScene,
    reset_view: bool,
}

impl ViewerApp {
    pub fn new(scene: PlotScene) -> Self {
        Self {
            scene,
            reset_view: true,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scene_plot(ui, &self.scene, &mut self.reset_view);
        });
    }
}

/// Window options shared by both binaries.
pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    }
}
