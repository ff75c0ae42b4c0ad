//! File fingerprints used to detect changed sources

use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use texttools_core::checksum::format_crc32;

const BUFFER_SIZE: usize = 64 * 1024;

/// Fast checksum and cryptographic digest of a file's bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    /// CRC32, upper-case hex without padding
    pub crc32: String,
    /// MD5, lower-case hex
    pub md5: String,
}

/// Fingerprint a file in a single streaming pass
pub fn fingerprint(path: &Path) -> Result<Fingerprint> {
    let file = File::open(path).map_err(|e| EngineError::io(path, e))?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);
    let mut crc = crc32fast::Hasher::new();
    let mut md5 = md5::Context::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let read = reader
            .read(&mut buffer)
            .map_err(|e| EngineError::io(path, e))?;
        if read == 0 {
            break;
        }
        crc.update(&buffer[..read]);
        md5.consume(&buffer[..read]);
    }

    Ok(Fingerprint {
        crc32: format_crc32(crc.finalize()),
        md5: format!("{:x}", md5.compute()),
    })
}

/// Fingerprint an in-memory buffer
pub fn fingerprint_bytes(bytes: &[u8]) -> Fingerprint {
    Fingerprint {
        crc32: format_crc32(crc32fast::hash(bytes)),
        md5: format!("{:x}", md5::compute(bytes)),
    }
}
