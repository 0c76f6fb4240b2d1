// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The syllable pattern every haiku is checked against.
pub const HAIKU_PATTERN: [u32; 3] = [5, 7, 5];

/// Outcome of evaluating one message. Constructed per call, never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaikuVerdict {
    Accepted,
    Rejected { reasons: Vec<Diagnostic> },
}

impl HaikuVerdict {
    pub fn is_haiku(&self) -> bool {
        matches!(self, HaikuVerdict::Accepted)
    }
}

/// One reason a message was rejected. `Display` gives the wording the chat
/// collaborator relays to users; the data stays structured for anyone who
/// wants to render it differently.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Diagnostic {
    #[error("This doesn't seem to me like a traditional haiku; it doesn't have three lines.")]
    WrongLineCount { found: usize },

    #[error("I don't know the words: {}", .words.join(", "))]
    UnknownWords { words: Vec<String> },

    #[error(
        "I counted a syllable structure of {}/{}/{}, but I expected {}/{}/{}",
        .actual[0], .actual[1], .actual[2], .expected[0], .expected[1], .expected[2]
    )]
    PatternMismatch { actual: [u32; 3], expected: [u32; 3] },
}

/// Opaque 16-byte content hash used as a dedup key. Compared, never decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub [u8; 16]);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
