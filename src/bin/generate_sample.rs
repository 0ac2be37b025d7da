use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use irrasman::data::broaden::{broaden, linspace};

/// (wavenumber, T², TX, TY, TZ) of a made-up molecule.
const MODES: [(f64, f64, f64, f64, f64); 8] = [
    (612.40, 0.000412, 0.001203, -0.020233, 0.000021),
    (1041.87, 0.001583, 0.039614, 0.000152, -0.002011),
    (1265.02, 0.000745, -0.000324, 0.027284, 0.000150),
    (1503.66, 0.000301, 0.000022, -0.000914, 0.017324),
    (1778.31, 0.006912, 0.083112, -0.000421, 0.000007),
    (2954.15, 0.001266, 0.000131, 0.035579, -0.000113),
    (3041.92, 0.000892, -0.029861, 0.000083, 0.001442),
    (3612.55, 0.002214, 0.000412, 0.000197, -0.047051),
];

/// Applied to the calculated modes to fake the "measured" trace.
const EXPERIMENT_SCALE: f64 = 0.965;

/// 64-bit linear congruential generator; plenty for baseline noise.
struct Lcg(u64);

impl Lcg {
    fn uniform(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn normal(&mut self, sigma: f64) -> f64 {
        let r = (-2.0 * self.uniform().max(f64::MIN_POSITIVE).ln()).sqrt();
        sigma * r * (std::f64::consts::TAU * self.uniform()).cos()
    }
}

fn orca_output() -> String {
    let mut out = String::new();
    out.push_str("                                 *****************\n");
    out.push_str("                                 * O   R   C   A *\n");
    out.push_str("                                 *****************\n\n");
    out.push_str("-----------\nIR SPECTRUM\n-----------\n\n");
    out.push_str(" Mode   freq       eps      Int      T**2         TX        TY        TZ\n");
    out.push_str("       cm**-1   L/(mol*cm) km/mol    a.u.\n");
    out.push_str("----------------------------------------------------------------------------\n");
    for (i, &(wn, t_sq, tx, ty, tz)) in MODES.iter().enumerate() {
        // eps and Int are not read back; keep them roughly proportional to T².
        let eps = t_sq * 5.26;
        let int = t_sq * 26_580.0;
        let _ = writeln!(
            out,
            "{:>3}:  {wn:>8.2}   {eps:.6}  {int:>6.2}  {t_sq:.6}  ({tx:>9.6} {ty:>9.6} {tz:>9.6})",
            i + 6
        );
    }
    out.push_str("\n* The epsilon (eps) is given for a Dirac delta lineshape.\n");
    out.push_str("** The dipole moment derivative (T) already includes vibrational overlap.\n");
    out
}

fn experimental_trace(rng: &mut Lcg) -> String {
    let grid = linspace(400.0, 4000.0, 1801);
    let centers: Vec<f64> = MODES.iter().map(|m| m.0 * EXPERIMENT_SCALE).collect();
    let amplitudes: Vec<f64> = MODES.iter().map(|m| m.1).collect();
    let signal = broaden(&grid, &centers, &amplitudes, 12.0);

    let mut out = String::from("Wavenumber (cm-1)\tAbsorbance\n");
    for (x, y) in grid.iter().zip(signal) {
        let _ = writeln!(out, "{x:.2}\t{:.6e}", y + rng.normal(5e-5));
    }
    out
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut rng = Lcg(42);

    let orca_path = dir.join("sample_orca.out");
    std::fs::write(&orca_path, orca_output())
        .with_context(|| format!("writing {}", orca_path.display()))?;

    let exp_path = dir.join("sample_exp.dat");
    std::fs::write(&exp_path, experimental_trace(&mut rng))
        .with_context(|| format!("writing {}", exp_path.display()))?;

    println!(
        "Wrote {} modes to {} and a noisy trace to {}",
        MODES.len(),
        orca_path.display(),
        exp_path.display()
    );
    Ok(())
}
