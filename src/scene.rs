use eframe::egui::Color32;

use crate::color::{component_color, generate_palette};
use crate::config::PlotConfig;
use crate::data::broaden::{broaden, max_value, normalize};
use crate::data::model::{CalculatedSpectrum, Component, ExperimentalSpectrum};
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Curves
// ---------------------------------------------------------------------------

/// Where a curve comes from; used to clear one dataset's curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveOrigin {
    Experimental,
    Calculated(Component),
}

/// One line of the plot, in data coordinates.
#[derive(Debug, Clone)]
pub struct Curve {
    /// Legend label.
    pub name: String,
    pub origin: CurveOrigin,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    pub width: f32,
    /// Shade between the curve and y = 0.
    pub fill: bool,
}

// ---------------------------------------------------------------------------
// PlotScene – everything one redraw puts on the canvas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PlotScene {
    pub curves: Vec<Curve>,
    pub x_min: f64,
    pub x_max: f64,
    pub invert_x: bool,
    pub invert_y: bool,
}

impl PlotScene {
    /// Compute all curves for the given data.
    ///
    /// Experimental traces are normalized to their maximum and then shifted
    /// by `config.baseline_shift`. The calculated total curve is normalized;
    /// x/y/z components are divided by the total's maximum so their relative
    /// size is preserved.
    pub fn build(
        calculated: Option<&CalculatedSpectrum>,
        experimental: &[(&str, &ExperimentalSpectrum)],
        config: &PlotConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut curves = Vec::new();

        let palette = generate_palette(experimental.len());
        for (&(label, spectrum), color) in experimental.iter().zip(palette) {
            let y = normalize(spectrum.y());
            let points = spectrum
                .x()
                .iter()
                .zip(&y)
                .map(|(&xi, &yi)| [xi, yi + config.baseline_shift])
                .collect();
            curves.push(Curve {
                name: label.to_string(),
                origin: CurveOrigin::Experimental,
                points,
                color,
                width: 2.0,
                fill: false,
            });
        }

        if let Some(calc) = calculated {
            curves.extend(calculated_curves(calc, config));
        }

        Ok(Self {
            curves,
            x_min: config.x_min,
            x_max: config.x_max,
            invert_x: config.invert_x,
            invert_y: config.invert_y,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn remove_experimental(&mut self) {
        self.curves
            .retain(|c| c.origin != CurveOrigin::Experimental);
    }

    pub fn remove_calculated(&mut self) {
        self.curves
            .retain(|c| !matches!(c.origin, CurveOrigin::Calculated(_)));
    }

    /// Vertical extent of the visible part of all curves, padded by 5 %.
    pub fn y_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .curves
            .iter()
            .flat_map(|c| c.points.iter())
            .filter(|p| p[0] >= self.x_min && p[0] <= self.x_max)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[1]), hi.max(p[1]))
            });
        if !lo.is_finite() || !hi.is_finite() {
            return (0.0, 1.0);
        }
        let pad = ((hi - lo) * 0.05).max(1e-3);
        (lo - pad, hi + pad)
    }
}

fn calculated_curves(calc: &CalculatedSpectrum, config: &PlotConfig) -> Vec<Curve> {
    let grid = config.grid();
    let centers = calc.scaled(config.scale_factor).wavenumbers();
    let lw = config.linewidth;

    let total = broaden(&grid, &centers, &calc.intensities(Component::Total), lw);
    let norm_factor = max_value(&total);
    log::debug!(
        "broadened {} sticks onto {} points (max {norm_factor:.4e})",
        calc.len(),
        grid.len()
    );

    let mut curves = Vec::new();

    if config.components.total {
        curves.push(Curve {
            name: Component::Total.to_string(),
            origin: CurveOrigin::Calculated(Component::Total),
            points: zip_points(&grid, &normalize(&total)),
            color: component_color(Component::Total),
            width: 2.0,
            fill: false,
        });
    }

    for component in [Component::X, Component::Y, Component::Z] {
        if !config.components.enabled(component) {
            continue;
        }
        let y: Vec<f64> = broaden(&grid, &centers, &calc.intensities(component), lw)
            .into_iter()
            .map(|v| v / norm_factor)
            .collect();
        curves.push(Curve {
            name: component.to_string(),
            origin: CurveOrigin::Calculated(component),
            points: zip_points(&grid, &y),
            color: component_color(component),
            width: 1.0,
            fill: config.fill_components,
        });
    }

    curves
}

fn zip_points(x: &[f64], y: &[f64]) -> Vec<[f64; 2]> {
    x.iter().zip(y).map(|(&xi, &yi)| [xi, yi]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Components;
    use crate::data::model::Transition;

    fn calc() -> CalculatedSpectrum {
        CalculatedSpectrum::new(vec![
            Transition { mode: 6, wavenumber: 1000.0, t_sq: 2.0, x: 1.5, y: 0.5, z: 0.0 },
            Transition { mode: 7, wavenumber: 3000.0, t_sq: 1.0, x: 0.0, y: 0.0, z: 1.0 },
        ])
        .unwrap()
    }

    fn exp() -> ExperimentalSpectrum {
        ExperimentalSpectrum::from_pairs([(900.0, 1.0), (1000.0, 4.0), (1100.0, 2.0)])
    }

    fn all_components() -> PlotConfig {
        PlotConfig {
            components: Components { x: true, y: true, z: true, total: true },
            npoints: Some(2001),
            ..PlotConfig::default()
        }
    }

    fn curve(scene: &PlotScene, origin: CurveOrigin) -> &Curve {
        scene.curves.iter().find(|c| c.origin == origin).unwrap()
    }

    #[test]
    fn total_is_normalized_and_components_share_its_scale() {
        let scene = PlotScene::build(Some(&calc()), &[], &all_components()).unwrap();
        assert_eq!(scene.curves.len(), 4);

        let peak = |c: &Curve| c.points.iter().map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max);
        let total = curve(&scene, CurveOrigin::Calculated(Component::Total));
        assert!((peak(total) - 1.0).abs() < 1e-12);

        // x carries 1.5 / 2.0 of the strongest stick.
        let x = curve(&scene, CurveOrigin::Calculated(Component::X));
        assert!((peak(x) - 0.75).abs() < 1e-9);
        assert!(x.fill);
        assert!(!total.fill);
    }

    #[test]
    fn scale_factor_moves_the_peak() {
        let cfg = PlotConfig { scale_factor: 0.5, ..all_components() };
        let scene = PlotScene::build(Some(&calc()), &[], &cfg).unwrap();
        let total = curve(&scene, CurveOrigin::Calculated(Component::Total));
        let top = total
            .points
            .iter()
            .max_by(|a, b| a[1].total_cmp(&b[1]))
            .unwrap();
        assert!((top[0] - 500.0).abs() < 2.0);
    }

    #[test]
    fn experimental_is_normalized_then_shifted() {
        let cfg = PlotConfig { baseline_shift: 0.5, ..PlotConfig::default() };
        let e = exp();
        let scene = PlotScene::build(None, &[("run1.dat", &e)], &cfg).unwrap();
        assert_eq!(scene.curves.len(), 1);
        let ys: Vec<f64> = scene.curves[0].points.iter().map(|p| p[1]).collect();
        assert_eq!(ys, vec![0.75, 1.5, 1.0]);
        assert_eq!(scene.curves[0].name, "run1.dat");
    }

    #[test]
    fn disabled_components_are_not_drawn() {
        let scene = PlotScene::build(Some(&calc()), &[], &PlotConfig::default()).unwrap();
        assert_eq!(scene.curves.len(), 1);
        assert_eq!(scene.curves[0].origin, CurveOrigin::Calculated(Component::Total));
    }

    #[test]
    fn removing_one_dataset_keeps_the_other() {
        let e = exp();
        let mut scene = PlotScene::build(Some(&calc()), &[("a", &e), ("b", &e)], &all_components()).unwrap();
        assert_eq!(scene.curves.len(), 6);

        scene.remove_experimental();
        assert_eq!(scene.curves.len(), 4);
        assert!(scene.curves.iter().all(|c| c.origin != CurveOrigin::Experimental));

        scene.remove_calculated();
        assert!(scene.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = PlotConfig { linewidth: -1.0, ..PlotConfig::default() };
        assert!(PlotScene::build(Some(&calc()), &[], &cfg).is_err());
    }

    #[test]
    fn y_range_pads_visible_points() {
        let scene = PlotScene::build(Some(&calc()), &[], &PlotConfig::default()).unwrap();
        let (lo, hi) = scene.y_range();
        assert!(lo < 0.0 && hi > 1.0);
    }
}
