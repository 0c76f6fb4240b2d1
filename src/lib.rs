// src/lib.rs

pub mod core;

pub use crate::core::dictionary::{Dictionary, DictionaryError};
pub use crate::core::engine::HaikuEngine;
pub use crate::core::fingerprint::fingerprint;
pub use crate::core::types::{Diagnostic, Fingerprint, HaikuVerdict, HAIKU_PATTERN};
