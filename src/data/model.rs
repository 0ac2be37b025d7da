use std::fmt;

// ---------------------------------------------------------------------------
// Component – which column of the stick spectrum to broaden
// ---------------------------------------------------------------------------

/// Polarization component of a calculated IR transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    X,
    Y,
    Z,
    /// Total transition strength T².
    Total,
}

impl Component {
    pub const ALL: [Component; 4] = [Component::X, Component::Y, Component::Z, Component::Total];
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::X => write!(f, "x-pol. Calc. Spectrum"),
            Component::Y => write!(f, "y-pol. Calc. Spectrum"),
            Component::Z => write!(f, "z-pol. Calc. Spectrum"),
            Component::Total => write!(f, "Total Calc. Spectrum"),
        }
    }
}

// ---------------------------------------------------------------------------
// Transition – one stick of the calculated spectrum
// ---------------------------------------------------------------------------

/// One IR-active vibrational mode as printed in the `IR SPECTRUM` block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Mode index (the number before the colon).
    pub mode: usize,
    /// Wavenumber in cm⁻¹, scale factor already applied.
    pub wavenumber: f64,
    /// Total transition strength T².
    pub t_sq: f64,
    /// TX².
    pub x: f64,
    /// TY².
    pub y: f64,
    /// TZ².
    pub z: f64,
}

impl Transition {
    pub fn intensity(&self, component: Component) -> f64 {
        match component {
            Component::X => self.x,
            Component::Y => self.y,
            Component::Z => self.z,
            Component::Total => self.t_sq,
        }
    }
}

// ---------------------------------------------------------------------------
// CalculatedSpectrum – the full stick spectrum
// ---------------------------------------------------------------------------

/// Stick spectrum parsed from an ORCA output. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedSpectrum {
    transitions: Vec<Transition>,
}

impl CalculatedSpectrum {
    /// Returns `None` for an empty transition list.
    pub fn new(transitions: Vec<Transition>) -> Option<Self> {
        if transitions.is_empty() {
            None
        } else {
            Some(Self { transitions })
        }
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn wavenumbers(&self) -> Vec<f64> {
        self.transitions.iter().map(|t| t.wavenumber).collect()
    }

    pub fn intensities(&self, component: Component) -> Vec<f64> {
        self.transitions
            .iter()
            .map(|t| t.intensity(component))
            .collect()
    }

    /// Copy with every wavenumber multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let transitions = self
            .transitions
            .iter()
            .map(|t| Transition {
                wavenumber: t.wavenumber * factor,
                ..*t
            })
            .collect();
        Self { transitions }
    }
}

// ---------------------------------------------------------------------------
// ExperimentalSpectrum – a measured (x, y) trace
// ---------------------------------------------------------------------------

/// A measured spectrum read from a column file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentalSpectrum {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl ExperimentalSpectrum {
    /// Builds a spectrum from (x, y) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (x, y) = pairs.into_iter().unzip();
        Self { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Copy with `offset` added to every intensity.
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.iter().map(|v| v + offset).collect(),
        }
    }
}
