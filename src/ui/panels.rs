use eframe::egui::{self, Color32, RichText, ScrollArea, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Right side panel – plotting options
// ---------------------------------------------------------------------------

/// Render the plotting options panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            section(ui, "General plotting options");
            egui::Grid::new("general_opts")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    field(ui, "x Min.", &mut state.form.x_min);
                    field(ui, "x Max.", &mut state.form.x_max);
                });

            section(ui, "Exp. spectrum parameters");
            egui::Grid::new("exp_opts")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    field(ui, "Baseline Shift", &mut state.form.baseline_shift);
                });

            section(ui, "Calc. spectrum parameters");
            egui::Grid::new("calc_opts")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    field(ui, "Linewidth", &mut state.form.linewidth);
                    field(ui, "Scale factor", &mut state.form.scale_factor);
                    field(ui, "# of Points", &mut state.form.npoints);
                });

            ui.horizontal(|ui: &mut Ui| {
                let c = &mut state.form.components;
                ui.checkbox(&mut c.x, "x");
                ui.checkbox(&mut c.y, "y");
                ui.checkbox(&mut c.z, "z");
                ui.checkbox(&mut c.total, "Total");
            });

            ui.add_space(8.0);
            ui.horizontal(|ui: &mut Ui| {
                ui.checkbox(&mut state.form.invert_x, "Invert x-axis");
                ui.checkbox(&mut state.form.invert_y, "Invert y-axis");
            });

            ui.add_space(12.0);
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Clear Exp").clicked() {
                    state.clear_experimental();
                }
                if ui.button("Clear Calc").clicked() {
                    state.clear_calculated();
                }
            });

            ui.add_space(12.0);
            ui.vertical_centered(|ui: &mut Ui| {
                if ui.button(RichText::new("Draw").strong()).clicked() {
                    let result = state.redraw();
                    report(state, result);
                }
            });

            if state.show_sticks {
                ui.add_space(12.0);
                stick_table(ui, state);
            }
        });
}

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(title).strong());
    ui.separator();
}

fn field(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(TextEdit::singleline(value).desired_width(90.0));
    ui.end_row();
}

/// Table of the loaded transitions (unscaled wavenumbers).
fn stick_table(ui: &mut Ui, state: &AppState) {
    section(ui, "IR transitions");
    let Some(calc) = &state.calculated else {
        ui.label("No ORCA output loaded.");
        return;
    };
    let sticks = calc.spectrum.transitions();

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto())
        .columns(Column::remainder(), 5)
        .header(18.0, |mut header| {
            for title in ["Mode", "cm⁻¹", "T²", "TX²", "TY²", "TZ²"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(16.0, sticks.len(), |mut row| {
                let t = sticks[row.index()];
                row.col(|ui| {
                    ui.label(t.mode.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", t.wavenumber));
                });
                for v in [t.t_sq, t.x, t.y, t.z] {
                    row.col(|ui| {
                        ui.label(format!("{v:.2e}"));
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open exp file…").clicked() {
                open_experimental_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open calc file…").clicked() {
                open_calculated_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .selectable_label(state.show_sticks, "Transitions")
            .clicked()
        {
            state.show_sticks = !state.show_sticks;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom status bar
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(state.experimental_status());
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui: &mut Ui| {
                ui.label(state.calculated_status());
            },
        );
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_experimental_dialog(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Open experimental spectra")
        .pick_files();

    if let Some(paths) = files {
        let result = state.load_experimental_files(&paths);
        report(state, result);
    }
}

pub fn open_calculated_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open ORCA output")
        .add_filter("ORCA output", &["out", "log"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        let result = state.load_calculated_file(&path);
        report(state, result);
    }
}

/// Surface a failed action: log it, keep it in the top bar, and pop up a
/// modal error dialog.
fn report(state: &mut AppState, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("{e:#}");
        state.status_message = Some(format!("Error: {e:#}"));
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Error")
            .set_description(format!("{e:#}"))
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
