use super::csv_error;
use crate::error::{EngineError, Result};
use std::fs::File;
use std::path::Path;
use texttools_core::CorpusDiff;

const DIFF_PRECISION: usize = 6;

/// Write a corpus diff: words on the first line, differences on the second
///
/// An empty diff produces an empty file.
pub fn write_diff(path: &Path, diff: &CorpusDiff) -> Result<()> {
    if diff.is_empty() {
        File::create(path).map_err(|e| EngineError::io(path, e))?;
        return Ok(());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    writer
        .write_record(diff.entries.iter().map(|e| e.word.as_str()))
        .map_err(|e| csv_error(path, e))?;
    writer
        .write_record(
            diff.entries
                .iter()
                .map(|e| format_general(e.difference, DIFF_PRECISION)),
        )
        .map_err(|e| csv_error(path, e))?;
    writer.flush().map_err(|e| EngineError::io(path, e))
}

/// Format like C's `%.{precision}g`: significant digits, trailing zeros
/// removed, exponent notation for very small or large magnitudes
pub fn format_general(value: f64, precision: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.max(1);

    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texttools_core::DiffEntry;

    #[test]
    fn test_format_general() {
        assert_eq!(format_general(0.142857142, 6), "0.142857");
        assert_eq!(format_general(0.5, 6), "0.5");
        assert_eq!(format_general(0.25, 6), "0.25");
        assert_eq!(format_general(0.0001234567, 6), "0.000123457");
        assert_eq!(format_general(0.00001, 6), "1e-05");
        assert_eq!(format_general(0.0000123456789, 6), "1.23457e-05");
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(123.0, 6), "123");
        assert_eq!(format_general(0.0, 6), "0");
    }

    #[test]
    fn test_diff_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a_corpusdiff.csv");
        let diff = CorpusDiff {
            entries: vec![
                DiffEntry {
                    word: "sonne".to_string(),
                    difference: 0.25,
                },
                DiffEntry {
                    word: "über".to_string(),
                    difference: 1.0 / 30.0,
                },
            ],
        };

        write_diff(&path, &diff).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "sonne,über\n0.25,0.0333333\n"
        );
    }

    #[test]
    fn test_empty_diff_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a_corpusdiff.csv");
        write_diff(&path, &CorpusDiff::default()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
