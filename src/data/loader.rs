use std::io::ErrorKind;
use std::path::Path;

use crate::error::{FileKind, SpectrumError};

use super::model::{CalculatedSpectrum, ExperimentalSpectrum, Transition};

type Result<T> = std::result::Result<T, SpectrumError>;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the stick spectrum from an ORCA output file.
///
/// Wavenumbers are multiplied by `scale_factor` (use `1.0` for raw values).
pub fn load_calculated(path: &Path, scale_factor: f64) -> Result<CalculatedSpectrum> {
    let text = read_text(path, FileKind::Orca)?;
    parse_orca_ir(&text, scale_factor)
}

/// Load an experimental spectrum from a column file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` – comma separated, read through the `csv` crate
/// * anything else – whitespace (or `;`) separated columns
///
/// Leading non-numeric lines are treated as a header and skipped in both
/// cases. `baseline_shift` is added to every intensity.
pub fn load_experimental(path: &Path, baseline_shift: f64) -> Result<ExperimentalSpectrum> {
    let text = read_text(path, FileKind::Experimental)?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => parse_csv(&text, baseline_shift),
        _ => parse_columns(&text, baseline_shift),
    }
}

fn read_text(path: &Path, kind: FileKind) -> Result<String> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(SpectrumError::NotFound {
            kind,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(SpectrumError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ---------------------------------------------------------------------------
// ORCA IR SPECTRUM block
// ---------------------------------------------------------------------------

/// Parse the `IR SPECTRUM` block of an ORCA output.
///
/// Expected layout (ORCA 5):
///
/// ```text
/// -----------
/// IR SPECTRUM
/// -----------
///
///  Mode   freq       eps      Int      T**2         TX        TY        TZ
///        cm**-1   L/(mol*cm) km/mol    a.u.
/// ----------------------------------------------------------------------------
///   6:   1641.29   0.012765   64.51  0.002427  ( 0.049237  0.001063 -0.000208)
///
/// * The epsilon (eps) is given for a Dirac delta lineshape.
/// ```
///
/// Parsing is switched on by a line containing `IR SPECTRUM` and off by the
/// next line starting with `*`. Within the block every `<index>:` line is a
/// transition; TX, TY and TZ are squared.
pub fn parse_orca_ir(text: &str, scale_factor: f64) -> Result<CalculatedSpectrum> {
    let mut transitions = Vec::new();
    let mut in_block = false;

    for (i, line) in text.lines().enumerate() {
        if line.contains("IR SPECTRUM") {
            in_block = true;
        }
        if line.starts_with('*') {
            in_block = false;
        }
        if !in_block {
            continue;
        }
        let Some(mode) = mode_index(line) else {
            continue;
        };
        transitions.push(parse_transition(line, i + 1, mode, scale_factor)?);
    }

    CalculatedSpectrum::new(transitions).ok_or(SpectrumError::NoTransitions)
}

/// `"  12:  ..."` → `Some(12)`.
fn mode_index(line: &str) -> Option<usize> {
    let rest = line.trim_start();
    let end = rest.find(|c: char| !c.is_ascii_digit())?;
    if end == 0 || !rest[end..].starts_with(':') {
        return None;
    }
    rest[..end].parse().ok()
}

fn parse_transition(line: &str, line_no: usize, mode: usize, scale_factor: f64) -> Result<Transition> {
    let cleaned = line.replace(['(', ')'], "");
    let fields: Vec<&str> = cleaned.split_whitespace().collect();
    if fields.len() < 8 {
        return Err(SpectrumError::ShortTransition {
            line: line_no,
            found: fields.len(),
        });
    }

    let field = |idx: usize| parse_number(fields[idx], line_no);

    Ok(Transition {
        mode,
        wavenumber: field(1)? * scale_factor,
        t_sq: field(4)?,
        x: field(5)?.powi(2),
        y: field(6)?.powi(2),
        z: field(7)?.powi(2),
    })
}

// ---------------------------------------------------------------------------
// Column files
// ---------------------------------------------------------------------------

/// Parse a whitespace separated column file; the first two columns are x, y.
///
/// Cells may also be separated by `,` or `;`. Blank lines and `#` comments
/// after the header are ignored.
pub fn parse_columns(text: &str, baseline_shift: f64) -> Result<ExperimentalSpectrum> {
    let skip = header_len(text);
    let mut pairs = Vec::new();

    for (i, line) in text.lines().enumerate().skip(skip) {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut cells = line
            .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .filter(|c| !c.is_empty());
        let (Some(x), Some(y)) = (cells.next(), cells.next()) else {
            return Err(SpectrumError::TooFewColumns { line: line_no });
        };

        pairs.push((
            parse_number(x, line_no)?,
            parse_number(y, line_no)? + baseline_shift,
        ));
    }

    if pairs.is_empty() {
        return Err(SpectrumError::NoData);
    }
    Ok(ExperimentalSpectrum::from_pairs(pairs))
}

/// CSV variant of [`parse_columns`]: rows may carry any number of extra
/// columns, only the first two are used.
fn parse_csv(text: &str, baseline_shift: f64) -> Result<ExperimentalSpectrum> {
    let skip = header_len(text);
    let body: String = text
        .lines()
        .skip(skip)
        .map(|l| format!("{l}\n"))
        .collect();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(body.as_bytes());

    let mut pairs = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|source| SpectrumError::Csv {
            line: skip + row_no + 1,
            source,
        })?;
        let line_no = skip
            + record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(row_no + 1);

        let (Some(x), Some(y)) = (record.get(0), record.get(1)) else {
            return Err(SpectrumError::TooFewColumns { line: line_no });
        };
        if x.is_empty() && y.is_empty() {
            continue;
        }

        pairs.push((
            parse_number(x, line_no)?,
            parse_number(y, line_no)? + baseline_shift,
        ));
    }

    if pairs.is_empty() {
        return Err(SpectrumError::NoData);
    }
    Ok(ExperimentalSpectrum::from_pairs(pairs))
}

/// Number of leading lines that do not start with a digit.
fn header_len(text: &str) -> usize {
    text.lines()
        .take_while(|l| !l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .count()
}

fn parse_number(token: &str, line: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|_| SpectrumError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Component;

    const ORCA_SNIPPET: &str = "\
-----------------------
VIBRATIONAL FREQUENCIES
-----------------------
   0:         0.00 cm**-1
   6:      1641.29 cm**-1

-----------
IR SPECTRUM
-----------

 Mode   freq       eps      Int      T**2         TX        TY        TZ
       cm**-1   L/(mol*cm) km/mol    a.u.
----------------------------------------------------------------------------
  6:   1641.29   0.012765   64.51  0.002427  ( 0.049237  0.001063 -0.000208)
  7:   3800.13   0.001183    5.98  0.000097  (-0.000283 -0.009855 -0.000001)
  8:   3906.57   0.009211   46.55  0.000736  ( 0.000007  0.000163  0.027126)

* The epsilon (eps) is given for a Dirac delta lineshape.
  9:   9999.00   0.000000    0.00  0.000000  ( 1.000000  1.000000  1.000000)
";

    #[test]
    fn parses_ir_block_only() {
        let spec = parse_orca_ir(ORCA_SNIPPET, 1.0).unwrap();
        assert_eq!(spec.len(), 3);
        assert_eq!(spec.wavenumbers(), vec![1641.29, 3800.13, 3906.57]);
        assert_eq!(spec.intensities(Component::Total), vec![0.002427, 0.000097, 0.000736]);
        assert_eq!(spec.transitions()[0].mode, 6);
    }

    #[test]
    fn squares_polarization_components() {
        let spec = parse_orca_ir(ORCA_SNIPPET, 1.0).unwrap();
        let t = spec.transitions()[1];
        assert_eq!(t.x, (-0.000283f64).powi(2));
        assert_eq!(t.y, (-0.009855f64).powi(2));
        assert_eq!(t.z, (-0.000001f64).powi(2));
    }

    #[test]
    fn scale_factor_multiplies_wavenumbers() {
        let raw = parse_orca_ir(ORCA_SNIPPET, 1.0).unwrap();
        let doubled = parse_orca_ir(ORCA_SNIPPET, 2.0).unwrap();
        for (a, b) in raw.wavenumbers().iter().zip(doubled.wavenumbers()) {
            assert_eq!(b, a * 2.0);
        }
    }

    #[test]
    fn missing_ir_block_is_an_error() {
        let text = "   6:      1641.29 cm**-1\n   7:   3800.13   0.001183    5.98  0.000097  (1 2 3)\n";
        assert!(matches!(parse_orca_ir(text, 1.0), Err(SpectrumError::NoTransitions)));
    }

    #[test]
    fn truncated_transition_reports_line() {
        let text = "IR SPECTRUM\n  6:   1641.29   0.012765\n";
        match parse_orca_ir(text, 1.0) {
            Err(SpectrumError::ShortTransition { line, found }) => {
                assert_eq!(line, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_wavenumber_reports_line() {
        let text = "IR SPECTRUM\n  6:   abc   0.01  1.0  0.002  ( 0.1 0.2 0.3)\n";
        match parse_orca_ir(text, 1.0) {
            Err(SpectrumError::InvalidNumber { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_polarization_reports_line() {
        let text = "IR SPECTRUM\n  6:   1641.29   0.01  1.0  0.002  ( 0.1 0.2 0.3)\n  7:   3800.13   0.01  1.0  0.002  ( 0.1 0.2 x)\n";
        assert!(matches!(
            parse_orca_ir(text, 1.0),
            Err(SpectrumError::InvalidNumber { line: 3, ref token }) if token == "x"
        ));
    }

    #[test]
    fn mode_index_requires_colon() {
        assert_eq!(mode_index("  12:  1.0"), Some(12));
        assert_eq!(mode_index("12 1.0"), None);
        assert_eq!(mode_index(":12"), None);
        assert_eq!(mode_index("1234"), None);
    }

    #[test]
    fn columns_skip_header_and_shift() {
        let text = "Wavenumber Absorbance\n(cm-1) (a.u.)\n1000 0.1\n1001\t0.2  9.9\n\n1002;0.3\n";
        let spec = parse_columns(text, 0.5).unwrap();
        assert_eq!(spec.x(), &[1000.0, 1001.0, 1002.0]);
        let unshifted = parse_columns(text, 0.0).unwrap();
        assert_eq!(unshifted.y(), &[0.1, 0.2, 0.3]);
        for (a, b) in unshifted.y().iter().zip(spec.y()) {
            assert_eq!(*b, a + 0.5);
        }
    }

    #[test]
    fn columns_reject_garbage() {
        let err = parse_columns("title\n1000 0.1\n1001 abc\n", 0.0).unwrap_err();
        assert!(matches!(err, SpectrumError::InvalidNumber { line: 3, .. }));

        let err = parse_columns("1000 0.1\n1001\n", 0.0).unwrap_err();
        assert!(matches!(err, SpectrumError::TooFewColumns { line: 2 }));

        assert!(matches!(parse_columns("only a header\n", 0.0), Err(SpectrumError::NoData)));
    }

    #[test]
    fn csv_reads_first_two_columns() {
        let text = "x,y,comment\n1000,0.1,a\n1001, 0.2 ,b,extra\n";
        let spec = parse_csv(text, 0.0).unwrap();
        assert_eq!(spec.x(), &[1000.0, 1001.0]);
        assert_eq!(spec.y(), &[0.1, 0.2]);
    }

    #[test]
    fn csv_reports_bad_cell_line() {
        let err = parse_csv("x,y\n1000,0.1\n1001,nope\n", 0.0).unwrap_err();
        assert!(matches!(err, SpectrumError::InvalidNumber { line: 3, .. }));
    }
}
