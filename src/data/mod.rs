/// Data layer: core types, parsing, and broadening.
///
/// Architecture:
/// ```text
///  ORCA .out            exp .dat / .txt / .csv
///        │                     │
///        ▼                     ▼
///   ┌──────────────────────────────┐
///   │            loader            │  parse text → spectra
///   └──────────────────────────────┘
///        │                     │
///        ▼                     ▼
///   CalculatedSpectrum   ExperimentalSpectrum
///        │
///        ▼
///   ┌──────────┐
///   │ broaden  │  sticks → Gaussian curve on a grid, normalize
///   └──────────┘
/// ```

pub mod broaden;
pub mod loader;
pub mod model;
