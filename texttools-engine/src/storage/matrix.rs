use super::json_error;
use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use texttools_core::CorpusMatrix;

/// Write a corpus matrix as JSON
pub fn write_matrix(path: &Path, matrix: &CorpusMatrix, pretty: bool) -> Result<()> {
    let file = File::create(path).map_err(|e| EngineError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, matrix)
    } else {
        serde_json::to_writer(&mut writer, matrix)
    }
    .map_err(|e| json_error(path, e))?;
    writer.flush().map_err(|e| EngineError::io(path, e))
}

/// Read a corpus matrix
pub fn read_matrix(path: &Path) -> Result<CorpusMatrix> {
    let file = File::open(path).map_err(|e| EngineError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| json_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use texttools_core::WordCounts;

    #[test]
    fn test_matrix_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_corpus_matrix.json");
        let counts: WordCounts = [("haus", 1), ("die", 3)]
            .into_iter()
            .map(|(w, c)| (w.to_string(), c))
            .collect();
        let matrix = CorpusMatrix::from_counts("texts", counts).unwrap();

        write_matrix(&path, &matrix, true).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["meta"]["total_count"], 4);
        assert_eq!(value["words"][0][0], "die");
        assert_eq!(value["words"][0][1], 3);
        assert_eq!(value["words"][0][2], 0.75);

        assert_eq!(read_matrix(&path).unwrap(), matrix);
    }

    #[test]
    fn test_invalid_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_corpus_matrix.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(read_matrix(&path), Err(EngineError::Parse { .. })));
    }
}
