//! Sentinel scanning over loadable code.
//!
//! The fixture's store helpers use their patterns as immediates, so a healthy
//! binary shows each surviving pattern as a little-endian 4-byte run inside
//! an executable segment.

use serde::Serialize;

use crate::elf::FixtureImage;

/// One occurrence of a sentinel pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternHit {
    pub vaddr: u64,
    pub pattern: u32,
}

/// Scans `data` for any of `patterns` at every byte offset, little-endian.
pub fn scan_bytes(data: &[u8], base: u64, patterns: &[u32]) -> Vec<PatternHit> {
    let mut hits = Vec::new();
    for (offset, window) in data.windows(4).enumerate() {
        let value = u32::from_le_bytes([window[0], window[1], window[2], window[3]]);
        if patterns.contains(&value) {
            hits.push(PatternHit {
                vaddr: base + offset as u64,
                pattern: value,
            });
        }
    }
    hits
}

/// Scans every executable load segment of the image.
pub fn scan_image(image: &FixtureImage, patterns: &[u32]) -> Vec<PatternHit> {
    let mut hits = Vec::new();
    for segment in image.segments.iter().filter(|s| s.executable) {
        hits.extend(scan_bytes(segment.data, segment.vaddr, patterns));
    }
    hits
}
