use std::fs;
use std::io;
use std::path::Path;

/// Decode bytes as UTF-8, dropping invalid sequences instead of failing
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        decoded.push_str(chunk.valid());
    }
    decoded
}

/// Read a file with [`decode_lossy`]
pub fn read_lossy(path: impl AsRef<Path>) -> io::Result<String> {
    fs::read(path).map(|bytes| decode_lossy(&bytes))
}

/// Number of newline-separated segments; empty content is one line
pub fn line_count(content: &str) -> usize {
    content.split('\n').count()
}

/// First `max` characters of `text`
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// 1-based line of a byte offset
pub(crate) fn line_number_at(content: &str, byte_offset: usize) -> usize {
    content.as_bytes()[..byte_offset]
        .iter()
        .filter(|b| **b == b'\n')
        .count()
        + 1
}
