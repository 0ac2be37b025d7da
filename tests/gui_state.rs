use std::fs;
use std::path::{Path, PathBuf};

use irrasman::data::model::Component;
use irrasman::scene::CurveOrigin;
use irrasman::state::AppState;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn loaded_state() -> AppState {
    let mut state = AppState::default();
    state
        .load_experimental_files(&[fixture("h2co_exp.txt"), fixture("h2co_exp.txt")])
        .expect("experimental fixtures should load");
    state
        .load_calculated_file(&fixture("h2co_orca.out"))
        .expect("ORCA fixture should load");
    state
}

fn origins(state: &AppState) -> Vec<CurveOrigin> {
    state
        .scene
        .as_ref()
        .map(|s| s.curves.iter().map(|c| c.origin).collect())
        .unwrap_or_default()
}

#[test]
fn loading_draws_immediately() {
    let state = loaded_state();
    assert!(state.reset_view);
    assert_eq!(
        origins(&state),
        vec![
            CurveOrigin::Experimental,
            CurveOrigin::Experimental,
            CurveOrigin::Calculated(Component::Total),
        ]
    );
    assert_eq!(
        state.experimental_status(),
        "Experimental spectra 'h2co_exp.txt', 'h2co_exp.txt' loaded"
    );
    assert_eq!(state.calculated_status(), "ORCA output 'h2co_orca.out' loaded");
}

#[test]
fn bad_file_keeps_previous_state() {
    let temp = TempDir::new().unwrap();
    let bad = temp.path().join("broken.dat");
    fs::write(&bad, "header\n1000 abc\n").unwrap();

    let mut state = loaded_state();
    let err = state
        .load_experimental_files(&[fixture("h2co_exp.txt"), bad])
        .unwrap_err();
    assert!(format!("{err:#}").starts_with("Invalid experimental file: broken.dat"));
    assert_eq!(state.experimental.len(), 2);

    let err = state.load_calculated_file(&fixture("no_ir.out")).unwrap_err();
    assert!(format!("{err:#}").starts_with("Invalid ORCA output file"));
    assert!(state.calculated.is_some());
}

#[test]
fn clearing_removes_only_that_dataset() {
    let mut state = loaded_state();

    state.clear_experimental();
    assert_eq!(origins(&state), vec![CurveOrigin::Calculated(Component::Total)]);
    assert_eq!(state.experimental_status(), "No experimental spectrum loaded");

    state.clear_calculated();
    assert!(state.scene.is_none());
    assert_eq!(state.calculated_status(), "No ORCA output loaded");
    assert!(state.redraw().is_err());
}

#[test]
fn clearing_calculated_keeps_experimental_curves() {
    let mut state = loaded_state();
    state.clear_calculated();
    assert_eq!(
        origins(&state),
        vec![CurveOrigin::Experimental, CurveOrigin::Experimental]
    );
}

#[test]
fn redraw_uses_form_values() {
    let mut state = loaded_state();
    state.form.components.x = true;
    state.form.components.total = false;
    state.form.npoints = "100".into();
    state.form.x_min = "1000".into();
    state.form.x_max = "2000".into();
    state.redraw().unwrap();

    let scene = state.scene.as_ref().unwrap();
    let calc: Vec<_> = scene
        .curves
        .iter()
        .filter(|c| c.origin != CurveOrigin::Experimental)
        .collect();
    assert_eq!(calc.len(), 1);
    assert_eq!(calc[0].origin, CurveOrigin::Calculated(Component::X));
    assert_eq!(calc[0].points.len(), 100);
    assert_eq!(calc[0].points[0][0], 1000.0);
    assert_eq!((scene.x_min, scene.x_max), (1000.0, 2000.0));
}

#[test]
fn invalid_form_leaves_previous_scene() {
    let mut state = loaded_state();
    state.form.linewidth = "-3".into();
    let err = state.redraw().unwrap_err();
    assert_eq!(err.to_string(), "linewidth must be positive, got -3");
    assert_eq!(origins(&state).len(), 3);
}

#[test]
fn huge_x_max_is_an_error_not_a_crash() {
    let mut state = loaded_state();
    state.form.x_max = "1e20".into();
    let err = state.redraw().unwrap_err();
    assert!(err.to_string().starts_with("at most 1000000 points are supported"));
    assert_eq!(origins(&state).len(), 3);

    state.form.x_max = "4000".into();
    state.form.npoints = "100000000000".into();
    assert!(state.redraw().is_err());
    assert_eq!(origins(&state).len(), 3);
}
