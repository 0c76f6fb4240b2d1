// --- File: src/core/trie.rs

const ALPHABET: usize = 26;

/// Maps an uppercase ASCII letter to its child slot. Any other byte has no
/// transition at all.
fn slot(byte: u8) -> Option<usize> {
    let idx = byte.wrapping_sub(b'A');
    if (idx as usize) < ALPHABET {
        Some(idx as usize)
    } else {
        None
    }
}

/// One node of the 26-way prefix tree. A node reached by consuming the
/// letters of word W has `is_word == true` iff W is a dictionary word.
#[derive(Debug, Default)]
pub struct TrieNode {
    is_word: bool,
    children: [Option<Box<TrieNode>>; ALPHABET],
}

impl TrieNode {
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    pub fn child(&self, byte: u8) -> Option<&TrieNode> {
        slot(byte).and_then(|idx| self.children[idx].as_deref())
    }

    /// True iff walking `suffix` from this node lands on a complete word.
    pub fn has_prefix(&self, suffix: &str) -> bool {
        let mut node = self;
        for &byte in suffix.as_bytes() {
            node = match node.child(byte) {
                Some(next) => next,
                None => return false,
            };
        }
        node.is_word
    }
}

/// Immutable prefix tree over canonical word letters. Built once alongside
/// the dictionary, then only read.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a canonical word. Only A-Z bytes carry transitions; the first
    /// non-letter byte ends the insertion without marking a word, so an
    /// entry like DON'T is indexed only up to its DON prefix.
    pub(crate) fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for &byte in word.as_bytes() {
            let idx = match slot(byte) {
                Some(idx) => idx,
                None => return,
            };
            node = &mut **node.children[idx].get_or_insert_with(Box::default);
        }
        node.is_word = true;
    }

    pub fn has_prefix(&self, word: &str) -> bool {
        self.root.has_prefix(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_inserted_words_and_rejects_prefixes() {
        let mut trie = Trie::new();
        trie.insert("HAIKU");
        trie.insert("HAT");

        assert!(trie.has_prefix("HAIKU"));
        assert!(trie.has_prefix("HAT"));
        assert!(!trie.has_prefix("HA"));
        assert!(!trie.has_prefix("HAIKUS"));
        assert!(!trie.has_prefix(""));
    }

    #[test]
    fn child_walk_matches_word_letters() {
        let mut trie = Trie::new();
        trie.insert("GO");

        let g = trie.root().child(b'G').unwrap();
        assert!(!g.is_word());
        let o = g.child(b'O').unwrap();
        assert!(o.is_word());
        assert!(o.child(b'X').is_none());
    }

    // Known quirk: apostrophes have no trie edge, so DON'T stops indexing at
    // DON and never marks a word there.
    #[test]
    fn apostrophe_truncates_insertion_without_marking_a_word() {
        let mut trie = Trie::new();
        trie.insert("DON'T");

        assert!(!trie.has_prefix("DON"));
        assert!(!trie.has_prefix("DON'T"));
        let path = trie
            .root()
            .child(b'D')
            .and_then(|n| n.child(b'O'))
            .and_then(|n| n.child(b'N'));
        let n = path.expect("DON path should exist");
        assert!(!n.is_word());
        assert!(n.child(b'\'').is_none());
    }

    #[test]
    fn non_letter_bytes_have_no_transitions() {
        let mut trie = Trie::new();
        trie.insert("A");
        assert!(trie.root().child(b'a').is_none());
        assert!(trie.root().child(b'0').is_none());
        assert!(trie.root().child(b' ').is_none());
    }
}
