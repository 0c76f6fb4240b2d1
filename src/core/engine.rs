// File: src/core/engine.rs
use crate::core::dictionary::{self, Dictionary, DictionaryError};
use crate::core::fingerprint;
use crate::core::haiku::HaikuEvaluator;
use crate::core::syllables::SyllableCounter;
use crate::core::trie::Trie;
use crate::core::types::{Fingerprint, HaikuVerdict};
use std::path::Path;

/// Default word list compiled into the binary.
const BUILTIN_WORD_LIST: &str = include_str!("../../data/english-syllables.txt");

/// Owns the dictionary and trie built once at startup and exposes the
/// public operations. Everything here is immutable after construction, so a
/// shared reference is safe across threads with no coordination.
pub struct HaikuEngine {
    dictionary: Dictionary,
    trie: Trie,
}

impl HaikuEngine {
    /// Builds the engine from the embedded word list.
    pub fn builtin() -> Result<Self, DictionaryError> {
        Self::from_word_list(BUILTIN_WORD_LIST)
    }

    /// Builds the engine from word-list text, one `WORD count [count...]`
    /// entry per line. Any malformed count is fatal; callers are expected
    /// to abort startup rather than run with a partial dictionary.
    pub fn from_word_list(source: &str) -> Result<Self, DictionaryError> {
        let (dictionary, trie) = dictionary::build(source)?;
        Ok(Self { dictionary, trie })
    }

    pub fn from_file(path: &Path) -> Result<Self, DictionaryError> {
        let (dictionary, trie) = dictionary::build_from_file(path)?;
        Ok(Self { dictionary, trie })
    }

    /// Primary entry point: full structural evaluation of one message.
    pub fn evaluate(&self, text: &str) -> HaikuVerdict {
        HaikuEvaluator::new(self.counter()).evaluate(text)
    }

    /// Per-token syllable counting, exposed for tooling and tests.
    pub fn count_syllables(&self, token: &str) -> Option<u32> {
        self.counter().count(token)
    }

    /// Dedup key the storage collaborator uses after an accepted verdict.
    pub fn fingerprint(&self, text: &str) -> Fingerprint {
        fingerprint::fingerprint(text)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    fn counter(&self) -> SyllableCounter<'_> {
        SyllableCounter::new(&self.dictionary, &self.trie)
    }
}
