//! `word_list` — load the dictionary word list that feeds a [`Dictionary`].
//!
//! The format is one word per line (`\n` or `\r\n`). Parsing lives in
//! [`WordList::parse_from_str`], which never touches the filesystem and so also
//! works in WebAssembly builds where the text comes from a JavaScript `fetch()`.
//! [`WordList::load_from_path`] is a native-only convenience on top of it.
//!
//! Parsing rules:
//! - surrounding whitespace is trimmed and every word is lowercased,
//! - blank lines and words shorter than `min_len` characters are skipped,
//! - duplicates are removed and the list is sorted alphabetically.

use crate::dictionary::Dictionary;
use crate::letters::normalize;

/// A processed, ready-to-insert word list.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Lowercase words, deduplicated and sorted.
    pub entries: Vec<String>,
}

impl WordList {
    /// Parse newline-delimited words from an in-memory string.
    ///
    /// `min_len` counts characters, not bytes; pass `1` to keep everything.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_len: usize) -> WordList {
        let mut entries: Vec<String> = contents
            .lines()
            .map(normalize)
            .filter(|word| !word.is_empty() && word.chars().count() >= min_len)
            .collect();

        // dedup() only drops adjacent repeats
        entries.sort();
        entries.dedup();

        WordList { entries }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        min_len: usize,
    ) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;

        let word_list = Self::parse_from_str(&data, min_len);
        log::info!("Loaded {} words from {}", word_list.len(), path_ref.display());
        Ok(word_list)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a fresh [`Dictionary`] holding every word.
    #[must_use]
    pub fn to_dictionary(&self) -> Dictionary {
        self.entries.iter().collect()
    }
}
