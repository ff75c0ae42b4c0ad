use super::json_error;
use crate::error::{EngineError, Result};
use crate::header::AnalysisHeader;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use texttools_core::Document;

/// Contents of a `_metadata.json` file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataFile {
    /// Header describing the analyzed source
    #[serde(rename = "_meta")]
    pub meta: AnalysisHeader,
    /// The analyzed document tree
    #[serde(flatten)]
    pub document: Document,
}

#[derive(Serialize)]
struct MetadataRef<'a> {
    #[serde(rename = "_meta")]
    meta: &'a AnalysisHeader,
    #[serde(flatten)]
    document: &'a Document,
}

#[derive(Deserialize)]
struct HeaderOnly {
    #[serde(rename = "_meta")]
    meta: AnalysisHeader,
}

/// Write a metadata file
pub fn write_metadata(
    path: &Path,
    header: &AnalysisHeader,
    document: &Document,
    pretty: bool,
) -> Result<()> {
    let file = File::create(path).map_err(|e| EngineError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let contents = MetadataRef {
        meta: header,
        document,
    };
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &contents)
    } else {
        serde_json::to_writer(&mut writer, &contents)
    }
    .map_err(|e| json_error(path, e))?;
    writer.flush().map_err(|e| EngineError::io(path, e))
}

/// Read a complete metadata file
pub fn read_metadata(path: &Path) -> Result<MetadataFile> {
    let file = File::open(path).map_err(|e| EngineError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| json_error(path, e))
}

/// Read only the `_meta` header of a metadata file
pub fn read_header(path: &Path) -> Result<AnalysisHeader> {
    let file = File::open(path).map_err(|e| EngineError::io(path, e))?;
    let header: HeaderOnly =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| json_error(path, e))?;
    Ok(header.meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint_bytes;
    use crate::header::ANALYZE_VERSION;
    use texttools_core::{analyze_document, Sentence, Word};

    fn analyzed() -> Document {
        let mut document = Document::new(vec![Sentence::new(
            "Die Sonne scheint.",
            vec![
                Word::monosyllable("Die"),
                Word::new("Sonne", vec!["Son".into(), "ne".into()]),
                Word::monosyllable("scheint"),
            ],
        )]);
        analyze_document(&mut document).unwrap();
        document
    }

    #[test]
    fn test_written_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a_metadata.json");
        let header = AnalysisHeader::for_file(
            Path::new("a.txt"),
            fingerprint_bytes(b"Die Sonne scheint."),
            ANALYZE_VERSION,
            "de_DE",
        );

        write_metadata(&path, &header, &analyzed(), true).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["_meta"]["Filename"], "a.txt");
        assert_eq!(value["wordCount"], 3);
        assert_eq!(value["sentences"][0]["words"][1]["syllables"][1], "ne");
        assert!(value["readingEase"].is_array());
    }

    #[test]
    fn test_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a_metadata.json");
        let header = AnalysisHeader::for_folder(dir.path());
        let document = analyzed();

        write_metadata(&path, &header, &document, false).unwrap();

        let file = read_metadata(&path).unwrap();
        assert_eq!(file.meta, header);
        assert_eq!(file.document.word_count, document.word_count);
        assert_eq!(read_header(&path).unwrap(), header);
    }

    #[test]
    fn test_missing_meta_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a_metadata.json");
        std::fs::write(&path, r#"{"sentences": []}"#).unwrap();

        assert!(matches!(read_header(&path), Err(EngineError::Parse { .. })));
    }
}
