use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::{Components, PlotConfig};
use crate::data::loader::{load_calculated, load_experimental};
use crate::data::model::{CalculatedSpectrum, ExperimentalSpectrum};
use crate::error::ConfigError;
use crate::scene::PlotScene;

// ---------------------------------------------------------------------------
// Loaded files
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LoadedExperimental {
    pub path: PathBuf,
    pub spectrum: ExperimentalSpectrum,
}

#[derive(Debug, Clone)]
pub struct LoadedCalculated {
    pub path: PathBuf,
    /// Unscaled; the scale factor is applied at draw time.
    pub spectrum: CalculatedSpectrum,
}

/// File name for legends and the status bar.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ---------------------------------------------------------------------------
// Form fields as typed by the user
// ---------------------------------------------------------------------------

/// Editable plotting options. Text fields stay strings until the next redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotForm {
    pub x_min: String,
    pub x_max: String,
    pub baseline_shift: String,
    pub linewidth: String,
    pub scale_factor: String,
    /// Empty means automatic.
    pub npoints: String,
    pub components: Components,
    pub invert_x: bool,
    pub invert_y: bool,
}

impl Default for PlotForm {
    fn default() -> Self {
        Self {
            x_min: "500".into(),
            x_max: "4000".into(),
            baseline_shift: "0.00".into(),
            linewidth: "15".into(),
            scale_factor: "1.00".into(),
            npoints: String::new(),
            components: Components::default(),
            invert_x: true,
            invert_y: false,
        }
    }
}

impl PlotForm {
    /// Parse all fields into a [`PlotConfig`].
    pub fn to_config(&self) -> Result<PlotConfig, ConfigError> {
        let npoints = match self.npoints.trim() {
            "" => None,
            s => Some(s.parse::<usize>().map_err(|_| ConfigError::InvalidField {
                field: "# of Points",
                value: self.npoints.clone(),
            })?),
        };

        Ok(PlotConfig {
            x_min: parse_field("x Min.", &self.x_min)?,
            x_max: parse_field("x Max.", &self.x_max)?,
            linewidth: parse_field("Linewidth", &self.linewidth)?,
            npoints,
            baseline_shift: parse_field("Baseline Shift", &self.baseline_shift)?,
            scale_factor: parse_field("Scale factor", &self.scale_factor)?,
            components: self.components,
            invert_x: self.invert_x,
            invert_y: self.invert_y,
            fill_components: true,
        })
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidField {
            field,
            value: value.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Experimental traces, in the order they were picked.
    pub experimental: Vec<LoadedExperimental>,

    /// Calculated stick spectrum (None until the user loads an ORCA output).
    pub calculated: Option<LoadedCalculated>,

    pub form: PlotForm,

    /// Curves of the last redraw.
    pub scene: Option<PlotScene>,

    /// Set after every redraw so the plot snaps to the configured window.
    pub reset_view: bool,

    /// Show the stick table in the side panel.
    pub show_sticks: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            experimental: Vec::new(),
            calculated: None,
            form: PlotForm::default(),
            scene: None,
            reset_view: false,
            show_sticks: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Replace the experimental traces with the given files and redraw.
    ///
    /// All files are parsed before anything is replaced, so a bad file
    /// leaves the previous traces untouched.
    pub fn load_experimental_files(&mut self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let loaded = paths
            .iter()
            .map(|path| {
                load_experimental(path, 0.0)
                    .map(|spectrum| LoadedExperimental {
                        path: path.clone(),
                        spectrum,
                    })
                    .with_context(|| format!("Invalid experimental file: {}", display_name(path)))
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Loaded {} experimental spectra ({} points total)",
            loaded.len(),
            loaded.iter().map(|l| l.spectrum.len()).sum::<usize>()
        );
        self.experimental = loaded;
        self.redraw()
    }

    /// Replace the calculated spectrum and redraw.
    pub fn load_calculated_file(&mut self, path: &Path) -> Result<()> {
        let spectrum = load_calculated(path, 1.0).context("Invalid ORCA output file")?;
        log::info!(
            "Loaded {} IR transitions from {}",
            spectrum.len(),
            path.display()
        );
        self.calculated = Some(LoadedCalculated {
            path: path.to_path_buf(),
            spectrum,
        });
        self.redraw()
    }

    /// Rebuild the scene from the loaded data and the current form.
    pub fn redraw(&mut self) -> Result<()> {
        if self.experimental.is_empty() && self.calculated.is_none() {
            bail!("No file loaded for plotting");
        }
        let config = self.form.to_config()?;

        let traces: Vec<(String, &ExperimentalSpectrum)> = self
            .experimental
            .iter()
            .map(|l| (display_name(&l.path), &l.spectrum))
            .collect();
        let traces: Vec<(&str, &ExperimentalSpectrum)> =
            traces.iter().map(|(name, s)| (name.as_str(), *s)).collect();

        let scene = PlotScene::build(
            self.calculated.as_ref().map(|c| &c.spectrum),
            &traces,
            &config,
        )?;
        log::debug!("redraw: {} curves", scene.curves.len());

        self.scene = Some(scene);
        self.reset_view = true;
        self.status_message = None;
        Ok(())
    }

    /// Forget the experimental traces and remove their curves.
    pub fn clear_experimental(&mut self) {
        if self.experimental.is_empty() {
            return;
        }
        self.experimental.clear();
        if let Some(scene) = &mut self.scene {
            scene.remove_experimental();
        }
        self.drop_empty_scene();
    }

    /// Forget the calculated spectrum and remove its curves.
    pub fn clear_calculated(&mut self) {
        if self.calculated.take().is_none() {
            return;
        }
        if let Some(scene) = &mut self.scene {
            scene.remove_calculated();
        }
        self.drop_empty_scene();
    }

    fn drop_empty_scene(&mut self) {
        if self.experimental.is_empty() && self.calculated.is_none() {
            self.scene = None;
        }
    }

    /// Left status bar text.
    pub fn experimental_status(&self) -> String {
        let names: Vec<String> = self
            .experimental
            .iter()
            .map(|l| display_name(&l.path))
            .collect();
        match names.len() {
            0 => "No experimental spectrum loaded".to_string(),
            1 => format!("Experimental spectrum '{}' loaded", names[0]),
            _ => format!("Experimental spectra '{}' loaded", names.join("', '")),
        }
    }

    /// Right status bar text.
    pub fn calculated_status(&self) -> String {
        match &self.calculated {
            Some(c) => format!("ORCA output '{}' loaded", display_name(&c.path)),
            None => "No ORCA output loaded".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_matches_default_config() {
        let cfg = PlotForm::default().to_config().unwrap();
        assert_eq!(cfg, PlotConfig::default());
    }

    #[test]
    fn form_reports_offending_field() {
        let form = PlotForm {
            linewidth: "wide".into(),
            ..PlotForm::default()
        };
        assert_eq!(
            form.to_config(),
            Err(ConfigError::InvalidField {
                field: "Linewidth",
                value: "wide".into()
            })
        );

        let form = PlotForm {
            npoints: "12.5".into(),
            ..PlotForm::default()
        };
        assert!(matches!(
            form.to_config(),
            Err(ConfigError::InvalidField { field: "# of Points", .. })
        ));
    }

    #[test]
    fn redraw_without_data_fails() {
        let mut state = AppState::default();
        let err = state.redraw().unwrap_err();
        assert_eq!(err.to_string(), "No file loaded for plotting");
        assert!(state.scene.is_none());
    }

    #[test]
    fn status_texts_without_data() {
        let state = AppState::default();
        assert_eq!(state.experimental_status(), "No experimental spectrum loaded");
        assert_eq!(state.calculated_status(), "No ORCA output loaded");
    }

    #[test]
    fn display_name_strips_directories() {
        assert_eq!(display_name(Path::new("/data/run/sample.dat")), "sample.dat");
    }
}
