use std::process::ExitCode;

use anyhow::{Result, anyhow};
use eframe::egui;
use irrasman::app::{ViewerApp, native_options};
use irrasman::cli::Cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::from_env();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("Error! {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let scene = cli.build_scene()?;

    eframe::run_native(
        "irras – IR spectrum",
        native_options(),
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(ViewerApp::new(scene)))
        }),
    )
    .map_err(|e| anyhow!("failed to open the plot window: {e}"))
}
