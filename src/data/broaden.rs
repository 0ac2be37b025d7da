// ---------------------------------------------------------------------------
// Gaussian broadening of stick spectra
// ---------------------------------------------------------------------------

/// Sticks further away than `WINDOW * linewidth` from a grid point are skipped.
pub const WINDOW: f64 = 4.0;

/// Unnormalized Gaussian with amplitude `amp`, centre `cen` and width `sigma`.
#[inline]
pub fn gaussian(x: f64, amp: f64, cen: f64, sigma: f64) -> f64 {
    amp * (-(x - cen).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Broaden a stick spectrum onto `grid`.
///
/// Every grid point receives the sum of the Gaussians of all sticks whose
/// centre lies strictly within `WINDOW * linewidth`. `centers` and
/// `amplitudes` are zipped, so extra entries in the longer slice are ignored.
pub fn broaden(grid: &[f64], centers: &[f64], amplitudes: &[f64], linewidth: f64) -> Vec<f64> {
    let cutoff = WINDOW * linewidth;
    grid.iter()
        .map(|&x| {
            centers
                .iter()
                .zip(amplitudes)
                .filter(|(cen, _)| (x - **cen).abs() < cutoff)
                .map(|(&cen, &amp)| gaussian(x, amp, cen, linewidth))
                .sum()
        })
        .collect()
}

/// Divide every value by the maximum of `y`.
///
/// An all-zero input yields NaN, a negative maximum flips signs; callers
/// that care must check beforehand.
pub fn normalize(y: &[f64]) -> Vec<f64> {
    let max = max_value(y);
    y.iter().map(|v| v / max).collect()
}

/// Largest value of `y`, `-inf` when empty.
pub fn max_value(y: &[f64]) -> f64 {
    y.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}

/// `n` evenly spaced samples from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}
