//! `dictionary` — prefix tree used to answer "is this a word?" and "can anything
//! still start like this?" while the grid search walks paths.
//!
//! Words are expected to be normalized (lowercase) by the caller; see
//! [`crate::word_list`] for the loader that does that.
//!
//! # Empty string
//! - Inserting `""` is a no-op: the root never becomes terminal.
//! - `has_word("")` is therefore always `false`.
//! - `has_prefix("")` is always `true` (every string starts with the empty string,
//!   and the root always exists).
//!
//! # Example
//! ```
//! use paroliamo::dictionary::Dictionary;
//!
//! let dict: Dictionary = ["casa", "cane"].into_iter().collect();
//! assert!(dict.has_word("casa"));
//! assert!(dict.has_prefix("ca"));
//! assert!(!dict.has_word("ca"));
//! ```

use std::collections::HashMap;

/// One node of the tree: children keyed by character plus the terminal marker.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    /// True iff the path from the root to this node spells an inserted word.
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Follow every character of `s` starting at this node.
    ///
    /// Returns `None` as soon as a character has no child, i.e. when no inserted
    /// word continues with `s` from here.
    #[must_use]
    pub fn descend(&self, s: &str) -> Option<&TrieNode> {
        s.chars().try_fold(self, |node, ch| node.children.get(&ch))
    }
}

/// Prefix dictionary (a trie). Nodes are created on insertion and never removed.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    root: TrieNode,
    num_words: usize,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word`, creating intermediate nodes as needed. Idempotent.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if !node.is_word {
            node.is_word = true;
            self.num_words += 1;
        }
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn has_word(&self, word: &str) -> bool {
        self.root.descend(word).is_some_and(TrieNode::is_word)
    }

    /// True iff some inserted word starts with `prefix` (including `prefix` itself).
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.root.descend(prefix).is_some()
    }

    /// The root node, for callers that walk the tree incrementally.
    #[must_use]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words inserted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.num_words
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        dict.extend(iter);
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_word_after_insert() {
        let dict: Dictionary = ["casa", "cane", "gatto"].into_iter().collect();
        assert!(dict.has_word("casa"));
        assert!(dict.has_word("cane"));
        assert!(dict.has_word("gatto"));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_every_prefix_is_a_prefix() {
        let dict: Dictionary = ["albero"].into_iter().collect();
        for end in 0..="albero".len() {
            assert!(dict.has_prefix(&"albero"[..end]), "prefix {:?}", &"albero"[..end]);
        }
    }

    #[test]
    fn test_prefix_only_is_not_a_word() {
        let dict: Dictionary = ["casa"].into_iter().collect();
        assert!(!dict.has_word("cas"));
        assert!(!dict.has_word("c"));
        assert!(dict.has_prefix("cas"));
    }

    #[test]
    fn test_never_inserted_is_absent() {
        let dict: Dictionary = ["casa"].into_iter().collect();
        assert!(!dict.has_word("case"));
        assert!(!dict.has_word("casale"));
        assert!(!dict.has_prefix("cb"));
        assert!(!dict.has_prefix("casale"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut dict = Dictionary::new();
        dict.insert("mare");
        dict.insert("mare");
        assert_eq!(dict.len(), 1);
        assert!(dict.has_word("mare"));
    }

    #[test]
    fn test_word_that_is_prefix_of_another() {
        let dict: Dictionary = ["sole", "soleggiato"].into_iter().collect();
        assert!(dict.has_word("sole"));
        assert!(dict.has_word("soleggiato"));
        assert!(!dict.has_word("soleg"));
        assert!(dict.has_prefix("soleg"));
    }

    #[test]
    fn test_empty_word_insert_is_noop() {
        let mut dict = Dictionary::new();
        dict.insert("");
        assert!(dict.is_empty());
        assert!(!dict.has_word(""));
        assert!(dict.has_prefix(""));
    }

    #[test]
    fn test_empty_dictionary_lookups() {
        let dict = Dictionary::new();
        assert!(!dict.has_word("a"));
        assert!(!dict.has_prefix("a"));
        assert!(!dict.has_word(""));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_non_ascii_letters() {
        let dict: Dictionary = ["città", "perché"].into_iter().collect();
        assert!(dict.has_word("città"));
        assert!(dict.has_prefix("citt"));
        assert!(!dict.has_word("citta"));
    }

    #[test]
    fn test_descend_from_node() {
        let dict: Dictionary = ["cielo"].into_iter().collect();
        let node = dict.root().descend("ci").expect("prefix exists");
        assert!(!node.is_word());
        assert!(node.descend("elo").is_some_and(TrieNode::is_word));
        assert!(node.descend("x").is_none());
    }
}
