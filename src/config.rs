use crate::data::broaden::linspace;
use crate::data::model::Component;
use crate::error::ConfigError;

/// Upper bound on the evaluation grid size.
pub const MAX_POINTS: usize = 1_000_000;

// ---------------------------------------------------------------------------
// Plot configuration
// ---------------------------------------------------------------------------

/// Which calculated curves are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Components {
    pub x: bool,
    pub y: bool,
    pub z: bool,
    pub total: bool,
}

impl Default for Components {
    fn default() -> Self {
        Self {
            x: false,
            y: false,
            z: false,
            total: true,
        }
    }
}

impl Components {
    pub fn enabled(&self, component: Component) -> bool {
        match component {
            Component::X => self.x,
            Component::Y => self.y,
            Component::Z => self.z,
            Component::Total => self.total,
        }
    }
}

/// All scalar options controlling one plot, shared by CLI and GUI.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub x_min: f64,
    pub x_max: f64,
    /// Gaussian width used for broadening, in cm⁻¹.
    pub linewidth: f64,
    /// Grid size. `None` picks one point every 4 cm⁻¹.
    pub npoints: Option<usize>,
    /// Added to normalized experimental traces.
    pub baseline_shift: f64,
    /// Multiplies calculated wavenumbers before broadening.
    pub scale_factor: f64,
    pub components: Components,
    pub invert_x: bool,
    pub invert_y: bool,
    /// Shade the area under the x/y/z component curves.
    pub fill_components: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_min: 500.0,
            x_max: 4000.0,
            linewidth: 15.0,
            npoints: None,
            baseline_shift: 0.0,
            scale_factor: 1.0,
            components: Components::default(),
            invert_x: true,
            invert_y: false,
            fill_components: true,
        }
    }
}

impl PlotConfig {
    /// Number of grid points actually used.
    pub fn resolved_points(&self) -> usize {
        self.npoints
            .unwrap_or_else(|| ((self.x_max - self.x_min) / 4.0).max(0.0) as usize)
    }

    /// Check every option; the first offending one is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("x Min.", self.x_min),
            ("x Max.", self.x_max),
            ("Linewidth", self.linewidth),
            ("Baseline Shift", self.baseline_shift),
            ("Scale factor", self.scale_factor),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }
        if self.x_min >= self.x_max {
            return Err(ConfigError::EmptyRange {
                min: self.x_min,
                max: self.x_max,
            });
        }
        if self.linewidth <= 0.0 {
            return Err(ConfigError::Linewidth(self.linewidth));
        }
        if self.scale_factor <= 0.0 {
            return Err(ConfigError::ScaleFactor(self.scale_factor));
        }
        let n = self.resolved_points();
        if n < 2 {
            return Err(ConfigError::TooFewPoints(n));
        }
        if n > MAX_POINTS {
            return Err(ConfigError::TooManyPoints(n));
        }
        Ok(())
    }

    /// Evaluation grid for the broadened curves.
    pub fn grid(&self) -> Vec<f64> {
        linspace(self.x_min, self.x_max, self.resolved_points())
    }
}
