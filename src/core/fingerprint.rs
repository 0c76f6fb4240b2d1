// File: src/core/fingerprint.rs
use crate::core::types::Fingerprint;

/// Dedup key for a message: MD5 over the canonical form. A cheap duplicate
/// filter, not a security primitive.
pub fn fingerprint(text: &str) -> Fingerprint {
    let digest = md5::compute(canonical_form(text).as_bytes());
    Fingerprint(digest.0)
}

/// Only ASCII letters, spaces and newlines survive, uppercased. Punctuation
/// and digits never affect the key.
fn canonical_form(text: &str) -> String {
    text.chars()
        .filter(|&c| c.is_ascii_alphabetic() || c == ' ' || c == '\n')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
