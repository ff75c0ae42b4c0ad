//! CRC32 identities for sentences and words

/// Format a CRC32 value the way result files store it: upper-case hex,
/// no leading zeros.
pub fn format_crc32(value: u32) -> String {
    format!("{value:X}")
}

/// CRC32 checksum of the UTF-8 bytes of `text`.
pub fn crc32_hex(text: &str) -> String {
    format_crc32(crc32fast::hash(text.as_bytes()))
}
