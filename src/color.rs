use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Component;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
///
/// Experimental traces are coloured from this palette, one hue per file.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Start at orange so a single trace does not clash with the red y-pol curve.
            let hue = 30.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixed colours of the calculated curves
// ---------------------------------------------------------------------------

pub fn component_color(component: Component) -> Color32 {
    match component {
        Component::X => Color32::from_rgb(0, 0, 255),
        Component::Y => Color32::from_rgb(255, 0, 0),
        Component::Z => Color32::from_rgb(191, 191, 0),
        Component::Total => Color32::BLACK,
    }
}
