//! The word-search solver: every dictionary word traceable through the grid.
//!
//! A word is traceable when some path of adjacent cells spells it without
//! visiting any cell twice. Adjacency is 8-way by default and 4-way when
//! [`SearchOptions::diagonals`] is off.
//!
//! # Error Handling
//!
//! The solver uses [`SearchError`] with one variant:
//!
//! - S001: `Grid` (The letters could not be turned into a square grid (wraps [`GridError`]))
//!
//! # Examples
//!
//! ```
//! use paroliamo::dictionary::Dictionary;
//! use paroliamo::solver::{self, SearchOptions};
//!
//! let dict: Dictionary = ["casa"].into_iter().collect();
//! let result = solver::search(&[vec!["c", "a"], vec!["s", "a"]], &dict, &SearchOptions::default())?;
//!
//! assert_eq!(result.words(), vec!["casa"]);
//! assert_eq!(result.results[0].path, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
//! # Ok::<(), paroliamo::solver::SearchError>(())
//! ```

use std::cmp::Reverse;
use std::collections::HashSet;

use instant::Instant;
use log::debug;
use serde::Serialize;

use crate::dictionary::{Dictionary, TrieNode};
use crate::errors::GridError;
use crate::grid::{Coord, Grid, LetterSource};

/// Default minimum length of a reported word.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Row-major neighbor offsets: NW, N, NE, W, E, SW, S, SE, in the order the
/// search tries them.
const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const ORTHOGONAL_DIRECTIONS: [(isize, isize); 4] = [
    (-1, 0),
    (0, -1), (0, 1),
    (1, 0),
];

/// Recognized search options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Words with fewer characters than this are not reported.
    pub min_word_len: usize,
    /// 8-way neighbors when true, 4-way (orthogonal only) when false.
    pub diagonals: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { min_word_len: DEFAULT_MIN_WORD_LEN, diagonals: true }
    }
}

impl SearchOptions {
    fn directions(&self) -> &'static [(isize, isize)] {
        if self.diagonals {
            &ALL_DIRECTIONS
        } else {
            &ORTHOGONAL_DIRECTIONS
        }
    }
}

/// One found word with the witness path that spells it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Coord>,
}

/// Every found word, sorted by descending length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub results: Vec<FoundWord>,
}

impl SearchResult {
    /// Just the words, in result order.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.word.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl IntoIterator for SearchResult {
    type Item = FoundWord;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Unified error type for a search call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The letters handed to the search did not form a valid square grid.
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}

impl SearchError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::Grid(_) => "S001",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SearchError::Grid(_) => "Grid validation failed",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SearchError::Grid(_) => "The letters could not be turned into a square grid. This wraps an underlying GridError (see Grid Errors section for specific error codes). No search work is done and no partial results are returned.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SearchError::Grid(_) => None, // GridError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SearchError::Grid(ge) => format!("{}\n  caused by: {}", self.code(), ge.display_detailed()),
        }
    }
}

/// True iff `a` and `b` are distinct neighbors under the given adjacency.
#[must_use]
pub fn is_adjacent(a: Coord, b: Coord, diagonals: bool) -> bool {
    let dr = a.0.abs_diff(b.0);
    let dc = a.1.abs_diff(b.1);
    if diagonals {
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    } else {
        dr + dc == 1
    }
}

/// The cell one step from `(row, col)` in direction `(dr, dc)`, if inside an n x n grid.
fn neighbor((row, col): Coord, (dr, dc): (isize, isize), n: usize) -> Option<Coord> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < n && c < n).then_some((r, c))
}

/// Read-only inputs shared by every step of one search.
struct SearchCtx<'a> {
    grid: &'a Grid,
    min_word_len: usize,
    directions: &'static [(isize, isize)],
}

/// Working state owned by one search call.
struct SearchState {
    /// Cells on the active path, row-major.
    visited: Vec<bool>,
    path: Vec<Coord>,
    current: String,
    found: HashSet<String>,
    results: Vec<FoundWord>,
}

/// Depth-first walk from `cell`, whose letter has not yet been appended.
///
/// `node` is the trie node for `state.current`; stepping it by the cell's
/// letter is the prefix check that prunes the walk. On return `visited`,
/// `path` and `current` are exactly as they were on entry.
fn dfs(ctx: &SearchCtx, state: &mut SearchState, node: &TrieNode, cell: Coord) {
    let letter = ctx.grid.letter(cell);
    let Some(next) = node.descend(letter) else {
        return; // no word starts like this
    };

    let prev_len = state.current.len();
    state.current.push_str(letter);

    if next.is_word()
        && state.current.chars().count() >= ctx.min_word_len
        && !state.found.contains(&state.current)
    {
        state.found.insert(state.current.clone());
        state.results.push(FoundWord { word: state.current.clone(), path: state.path.clone() });
    }

    let n = ctx.grid.size();
    for &dir in ctx.directions {
        let Some(nb) = neighbor(cell, dir, n) else {
            continue;
        };
        let idx = nb.0 * n + nb.1;
        if state.visited[idx] {
            continue;
        }

        state.visited[idx] = true;
        state.path.push(nb);
        dfs(ctx, state, next, nb);
        state.path.pop();
        state.visited[idx] = false;
    }

    state.current.truncate(prev_len);
}

/// Find every dictionary word traceable in `grid`.
///
/// Seeds are tried in row-major order and neighbors in NW, N, NE, W, E, SW, S,
/// SE order; the first path found for a word is the one kept. Results are
/// sorted by descending word length, ties keeping discovery order.
#[must_use]
pub fn find_words(grid: &Grid, dictionary: &Dictionary, options: &SearchOptions) -> SearchResult {
    let t_search = Instant::now();
    let n = grid.size();
    debug!(
        "searching {n}x{n} grid against {} words (min_word_len={}, diagonals={})",
        dictionary.len(),
        options.min_word_len,
        options.diagonals
    );

    let ctx = SearchCtx {
        grid,
        min_word_len: options.min_word_len,
        directions: options.directions(),
    };
    let mut state = SearchState {
        visited: vec![false; n * n],
        path: Vec::with_capacity(n * n),
        current: String::new(),
        found: HashSet::new(),
        results: Vec::new(),
    };

    for row in 0..n {
        for col in 0..n {
            let idx = row * n + col;
            state.visited[idx] = true;
            state.path.push((row, col));
            dfs(&ctx, &mut state, dictionary.root(), (row, col));
            state.path.pop();
            state.visited[idx] = false;

            debug_assert!(state.path.is_empty() && state.current.is_empty());
            debug_assert!(state.visited.iter().all(|v| !v), "visited state leaked across seeds");
        }
    }

    let mut results = state.results;
    // stable: equal lengths keep discovery order
    results.sort_by_key(|r| Reverse(r.word.chars().count()));

    // Postconditions
    debug_assert_eq!(
        results.iter().map(|r| &r.word).collect::<HashSet<_>>().len(),
        results.len(),
        "each word must be reported once"
    );
    debug_assert!(
        results.iter().all(|r| r.path.windows(2).all(|w| is_adjacent(w[0], w[1], options.diagonals))),
        "consecutive path cells must be adjacent"
    );

    debug!("found {} words in {:.3}s", results.len(), t_search.elapsed().as_secs_f64());
    SearchResult { results }
}

/// Export letters from `source`, validate them, then run [`find_words`].
///
/// # Errors
/// [`SearchError::Grid`] if the letters cannot be exported or do not form a
/// square grid; nothing is searched in that case.
pub fn find_words_in<L: LetterSource + ?Sized>(
    source: &L,
    dictionary: &Dictionary,
    options: &SearchOptions,
) -> Result<SearchResult, SearchError> {
    let grid = source.to_grid()?;
    Ok(find_words(&grid, dictionary, options))
}

/// Search rows of cell strings directly.
///
/// # Errors
/// [`SearchError::Grid`] if `rows` is not square or has a blank or multi-letter cell.
pub fn search<S: AsRef<str>>(
    rows: &[Vec<S>],
    dictionary: &Dictionary,
    options: &SearchOptions,
) -> Result<SearchResult, SearchError> {
    let grid = Grid::new(rows)?;
    Ok(find_words(&grid, dictionary, options))
}
