// File: src/core/dictionary.rs
use crate::core::trie::Trie;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Fatal word-list construction failures. The resource is trusted, not user
/// input; a partial dictionary would corrupt every downstream syllable
/// decision, so callers abort startup instead of degrading.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse syllable count {token:?} on line {line}")]
    InvalidCount { line: usize, token: String },
}

/// Immutable mapping from canonical word to its attested syllable counts,
/// one per pronunciation variant in source order. Absence means "unknown",
/// never "zero syllables".
#[derive(Debug, Default)]
pub struct Dictionary {
    counts: HashMap<String, Vec<u32>>,
}

impl Dictionary {
    pub fn lookup(&self, word: &str) -> Option<&[u32]> {
        self.counts.get(word).map(Vec::as_slice)
    }

    /// First attested count, the one every downstream decision uses.
    pub fn first_count(&self, word: &str) -> Option<u32> {
        self.lookup(word).and_then(|counts| counts.first().copied())
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    pub fn words(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.counts
            .iter()
            .map(|(word, counts)| (word.as_str(), counts.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Parses word-list text and builds the dictionary and trie in one pass.
/// Format: one entry per line, `WORD count [count...]`, whitespace
/// separated. Lines without counts are skipped.
pub fn build(source: &str) -> Result<(Dictionary, Trie), DictionaryError> {
    let mut counts: HashMap<String, Vec<u32>> = HashMap::new();
    let mut trie = Trie::new();

    for (idx, line) in source.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let word = match tokens.next() {
            Some(word) => word,
            None => continue,
        };
        let mut parsed = Vec::new();
        for token in tokens {
            let count: u32 = token
                .parse()
                .map_err(|_| DictionaryError::InvalidCount {
                    line: idx + 1,
                    token: token.to_string(),
                })?;
            parsed.push(count);
        }
        if parsed.is_empty() {
            continue;
        }
        trie.insert(word);
        counts.insert(word.to_string(), parsed);
    }

    let dictionary = Dictionary { counts };
    info!(words = dictionary.len(), "loaded syllable dictionary");
    Ok((dictionary, trie))
}

pub fn build_from_file(path: &Path) -> Result<(Dictionary, Trie), DictionaryError> {
    let source = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.display().to_string(),
        source,
    })?;
    build(&source)
}
