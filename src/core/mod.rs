// File: src/core/mod.rs

pub mod dictionary;
pub mod engine;
pub mod fingerprint;
pub mod haiku;
pub mod syllables;
pub mod trie;
pub mod types;
