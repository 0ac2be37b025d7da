use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::config::{Components, PlotConfig};
use crate::data::loader::{load_calculated, load_experimental};
use crate::data::model::ExperimentalSpectrum;
use crate::error::{FileKind, SpectrumError};
use crate::scene::PlotScene;

/// Single-dash multi-letter flags and the long options they stand for.
const LEGACY_FLAGS: [(&str, &str); 5] = [
    ("-lw", "--linewidth"),
    ("-x0", "--xmin"),
    ("-x1", "--xmax"),
    ("-bs", "--baselineshift"),
    ("-sf", "--scalefactor"),
];

const EXPERIMENTAL_LABEL: &str = "Experimental Spectrum";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "irras",
    version,
    about = "Plot the calculated IR spectrum of an ORCA output, optionally against an experimental one.",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Name of the ORCA output file
    #[arg(short = 'o', long = "outfile", value_name = "PATH")]
    pub outfile: Option<PathBuf>,

    /// Name of the file containing the experimental spectrum
    #[arg(short = 'e', long = "expfile", value_name = "PATH")]
    pub expfile: Option<PathBuf>,

    /// Linewidth used for broadening (-lw)
    #[arg(long = "linewidth", value_name = "FLOAT", default_value_t = 15.0)]
    pub linewidth: f64,

    /// Minimum x value for plotting (-x0)
    #[arg(long = "xmin", value_name = "FLOAT", default_value_t = 500.0)]
    pub x_min: f64,

    /// Maximum x value for plotting (-x1)
    #[arg(long = "xmax", value_name = "FLOAT", default_value_t = 4000.0)]
    pub x_max: f64,

    /// Number of points used for plotting
    #[arg(short = 'n', long = "npoints", value_name = "INT", default_value_t = 1024)]
    pub npoints: usize,

    /// Absolute baseline shift of the experimental spectrum (-bs)
    #[arg(long = "baselineshift", value_name = "FLOAT")]
    pub baseline_shift: Option<f64>,

    /// Scaling factor for the calculated wavenumbers (-sf)
    #[arg(long = "scalefactor", value_name = "FLOAT")]
    pub scale_factor: Option<f64>,

    /// Plot x-polarized component of spectrum
    #[arg(short = 'x', long = "plotx")]
    pub plot_x: bool,

    /// Plot y-polarized component of spectrum
    #[arg(short = 'y', long = "ploty")]
    pub plot_y: bool,

    /// Plot z-polarized component of spectrum
    #[arg(short = 'z', long = "plotz")]
    pub plot_z: bool,

    /// Do NOT plot the total IR spectrum (plotted by default)
    #[arg(short = 't', long = "plottotal", action = ArgAction::SetFalse)]
    pub plot_total: bool,
}

/// Rewrite `-lw 10`, `-x0=400`, `-lw10` etc. into their long forms so clap, which
/// only knows single-letter short flags, can parse them. Everything after
/// `--` is left alone.
pub fn expand_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                passthrough = true;
                return arg;
            }
            let (flag, value) = match s.split_once('=') {
                Some((f, v)) => (f, Some(v)),
                None => (s, None),
            };
            if let Some((_, long)) = LEGACY_FLAGS.iter().find(|(short, _)| *short == flag) {
                return match value {
                    Some(v) => OsString::from(format!("{long}={v}")),
                    None => OsString::from(*long),
                };
            }
            // Value glued to the flag: `-lw10`, `-x0400`, `-bs-0.1`.
            LEGACY_FLAGS
                .iter()
                .find_map(|(short, long)| {
                    let rest = s.strip_prefix(short)?;
                    rest.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.')
                        .then(|| OsString::from(format!("{long}={rest}")))
                })
                .unwrap_or(arg)
        })
        .collect()
}

impl Cli {
    /// Parse the process arguments, exiting with clap's message on error.
    pub fn from_env() -> Self {
        Self::parse_from(expand_legacy_flags(std::env::args_os()))
    }

    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(expand_legacy_flags(args))
    }

    /// Options as given on the command line.
    pub fn plot_config(&self) -> PlotConfig {
        PlotConfig {
            x_min: self.x_min,
            x_max: self.x_max,
            linewidth: self.linewidth,
            npoints: Some(self.npoints),
            baseline_shift: self.baseline_shift.unwrap_or(0.0),
            scale_factor: self.scale_factor.unwrap_or(1.0),
            components: Components {
                x: self.plot_x,
                y: self.plot_y,
                z: self.plot_z,
                total: self.plot_total,
            },
            invert_x: true,
            invert_y: false,
            fill_components: false,
        }
    }

    /// Load the input files and compute the curves to show.
    ///
    /// Unlike the GUI, the scale factor and the baseline shift are applied
    /// while parsing, so the experimental trace is normalized after shifting.
    pub fn build_scene(&self) -> Result<PlotScene> {
        let config = self.plot_config();
        config.validate()?;

        let outfile = self
            .outfile
            .as_deref()
            .ok_or(SpectrumError::MissingPath(FileKind::Orca))?;
        let calculated = load_calculated(outfile, config.scale_factor)?;
        log::info!(
            "{}: {} IR transitions",
            outfile.display(),
            calculated.len()
        );

        let experimental = match &self.expfile {
            Some(path) => {
                let spectrum = load_experimental(path, config.baseline_shift)?;
                log::info!("{}: {} points", path.display(), spectrum.len());
                Some(spectrum)
            }
            None => None,
        };
        let traces: Vec<(&str, &ExperimentalSpectrum)> = experimental
            .iter()
            .map(|s| (EXPERIMENTAL_LABEL, s))
            .collect();

        let scene_config = PlotConfig {
            scale_factor: 1.0,
            baseline_shift: 0.0,
            ..config
        };
        Ok(PlotScene::build(Some(&calculated), &traces, &scene_config)?)
    }
}
