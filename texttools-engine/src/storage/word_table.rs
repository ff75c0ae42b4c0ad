use super::csv_error;
use crate::error::{EngineError, Result};
use crate::header::AnalysisHeader;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use texttools_core::precision::round_digits;
use texttools_core::{FrequencyTable, WordCounts};

/// Write a word-frequency table
///
/// Layout: labelled header rows, an empty line, then one `Word`, one
/// `Count` and one `Frequency` row with the words ranked by count.
pub fn write_word_table(
    path: &Path,
    header: &AnalysisHeader,
    table: &FrequencyTable,
) -> Result<()> {
    let file = File::create(path).map_err(|e| EngineError::io(path, e))?;
    let mut out = BufWriter::new(file);

    {
        let mut writer = table_writer(&mut out);
        for (label, value) in header.csv_rows() {
            writer
                .write_record([label, value])
                .map_err(|e| csv_error(path, e))?;
        }
        writer.flush().map_err(|e| EngineError::io(path, e))?;
    }
    out.write_all(b"\n").map_err(|e| EngineError::io(path, e))?;

    let ranked = table.ranked();
    let words = std::iter::once("Word".to_string()).chain(ranked.iter().map(|(w, _)| w.to_string()));
    let counts = std::iter::once("Count".to_string())
        .chain(ranked.iter().map(|(_, f)| f.count.to_string()));
    let frequencies = std::iter::once("Frequency".to_string())
        .chain(ranked.iter().map(|(_, f)| format_frequency(f.frequency)));

    {
        let mut writer = table_writer(&mut out);
        writer.write_record(words).map_err(|e| csv_error(path, e))?;
        writer.write_record(counts).map_err(|e| csv_error(path, e))?;
        writer
            .write_record(frequencies)
            .map_err(|e| csv_error(path, e))?;
        writer.flush().map_err(|e| EngineError::io(path, e))?;
    }
    out.flush().map_err(|e| EngineError::io(path, e))
}

fn table_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out)
}

/// Rounded to five digits, always with a decimal point
fn format_frequency(frequency: f64) -> String {
    let rounded = round_digits(frequency);
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        rounded.to_string()
    }
}

/// Read the `Word` and `Count` rows of a word-frequency table
///
/// The stored `Frequency` row is ignored; callers recompute frequencies
/// from the counts.
pub fn read_word_counts(path: &Path) -> Result<WordCounts> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let mut words: Option<Vec<String>> = None;
    let mut counts: Option<Vec<String>> = None;
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let mut fields = record.iter();
        match fields.next() {
            Some("Word") => words = Some(fields.map(str::to_string).collect()),
            Some("Count") => counts = Some(fields.map(str::to_string).collect()),
            _ => {}
        }
    }

    let words = words.ok_or_else(|| EngineError::parse(path, "no Word row"))?;
    let counts = counts.ok_or_else(|| EngineError::parse(path, "no Count row"))?;
    if words.len() != counts.len() {
        return Err(EngineError::parse(
            path,
            format!("{} words but {} counts", words.len(), counts.len()),
        ));
    }

    let mut table = WordCounts::with_capacity(words.len());
    for (word, count) in words.into_iter().zip(counts) {
        let count: u64 = count
            .trim()
            .parse()
            .map_err(|_| EngineError::parse(path, format!("invalid count {count:?} for {word:?}")))?;
        *table.entry(word).or_insert(0) += count;
    }
    Ok(table)
}
