//! Synthetic IR spectra from ORCA output, overlaid on experimental traces.
//!
//! The library holds everything both front ends share: parsing
//! ([`data::loader`]), Gaussian broadening ([`data::broaden`]), plot options
//! ([`config`]), curve building ([`scene`]) and the egui application
//! ([`app`], [`state`], [`ui`]).

pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod scene;
pub mod state;
pub mod ui;
