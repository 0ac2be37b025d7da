use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Parsing / IO errors
// ---------------------------------------------------------------------------

/// Which input a failing path belongs to. Only used for messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Orca,
    Experimental,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Orca => write!(f, "ORCA output"),
            FileKind::Experimental => write!(f, "experimental spectrum"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SpectrumError {
    #[error("no {0} file was given")]
    MissingPath(FileKind),

    #[error("{kind} file not found: {}", path.display())]
    NotFound { kind: FileKind, path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ORCA output file: no IR transitions found")]
    NoTransitions,

    #[error("line {line}: expected 8 fields in IR transition, found {found}")]
    ShortTransition { line: usize, found: usize },

    #[error("line {line}: expected at least two columns")]
    TooFewColumns { line: usize },

    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },

    #[error("no numeric data rows found")]
    NoData,

    #[error("CSV row {line}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Plot option errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field}: '{value}' is not a valid number")]
    InvalidField { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("x Min. ({min}) must be smaller than x Max. ({max})")]
    EmptyRange { min: f64, max: f64 },

    #[error("linewidth must be positive, got {0}")]
    Linewidth(f64),

    #[error("scale factor must be positive, got {0}")]
    ScaleFactor(f64),

    #[error("at least two points are needed, got {0}")]
    TooFewPoints(usize),

    #[error("at most {max} points are supported, got {0}", max = crate::config::MAX_POINTS)]
    TooManyPoints(usize),
}
