use eframe::egui::Ui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotBounds, PlotPoints};

use crate::scene::PlotScene;

// ---------------------------------------------------------------------------
// Spectral plot (central panel)
// ---------------------------------------------------------------------------

/// Render a scene. With `reset_view` set the view snaps to the configured
/// x window and the data's y extent, and the flag is cleared.
///
/// egui_plot has no reversed axes, so an inverted axis is drawn by negating
/// the coordinates and printing the ticks with the sign flipped back.
pub fn scene_plot(ui: &mut Ui, scene: &PlotScene, reset_view: &mut bool) {
    let sx = if scene.invert_x { -1.0 } else { 1.0 };
    let sy = if scene.invert_y { -1.0 } else { 1.0 };

    Plot::new("ir_plot")
        .legend(Legend::default())
        .x_axis_label("Wavenumber")
        .y_axis_label("Intensity / a.u.")
        .x_axis_formatter(move |mark, _range| format_tick(mark, sx))
        .y_axis_formatter(move |mark, _range| format_tick(mark, sy))
        .label_formatter(move |name, value| {
            let (x, y) = (value.x * sx, value.y * sy);
            if name.is_empty() {
                format!("{x:.1}\n{y:.3}")
            } else {
                format!("{name}\n{x:.1}\n{y:.3}")
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if *reset_view {
                let (y_lo, y_hi) = scene.y_range();
                let (x0, x1) = ordered(scene.x_min * sx, scene.x_max * sx);
                let (y0, y1) = ordered(y_lo * sy, y_hi * sy);
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x0, y0], [x1, y1]));
                *reset_view = false;
            }

            for curve in &scene.curves {
                let points: PlotPoints = curve
                    .points
                    .iter()
                    .map(|p| [p[0] * sx, p[1] * sy])
                    .collect();

                let mut line = Line::new(points)
                    .name(&curve.name)
                    .color(curve.color)
                    .width(curve.width);
                if curve.fill {
                    line = line.fill(0.0);
                }
                plot_ui.line(line);
            }
        });
}

fn format_tick(mark: GridMark, sign: f64) -> String {
    let value = mark.value * sign;
    let decimals = (-mark.step_size.log10()).ceil().clamp(0.0, 6.0) as usize;
    // Avoid "-0".
    if value == 0.0 {
        return format!("{:.decimals$}", 0.0);
    }
    format!("{value:.decimals$}")
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
