//! Error types for grid construction with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G004) for documentation lookup:
//!
//! - G001: `NotSquare` (A row's length differs from the number of rows)
//! - G002: `LetterExport` (The grid-to-letters adapter could not produce letters)
//! - G003: `EmptyCell` (A cell holds no letter)
//! - G004: `MultiLetterCell` (A cell holds more than one letter)
//!
//! # Examples
//!
//! ```
//! use paroliamo::errors::GridError;
//! use paroliamo::grid::Grid;
//!
//! match Grid::new(&[vec!["c", "a"], vec!["s"]]) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "G001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

/// Custom error type for grid validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid must be square: row {row} has {len} cells but the grid has {rows} rows")]
    NotSquare { rows: usize, row: usize, len: usize },

    #[error("Could not export letters from the grid: {reason}")]
    LetterExport { reason: String },

    #[error("Cell ({row}, {col}) has no letter")]
    EmptyCell { row: usize, col: usize },

    #[error("Cell ({row}, {col}) holds {len} letters; every cell must hold exactly one")]
    MultiLetterCell { row: usize, col: usize, len: usize },
}

impl From<GridError> for io::Error {
    fn from(ge: GridError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, ge.to_string())
    }
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::NotSquare { .. } => "G001",
            GridError::LetterExport { .. } => "G002",
            GridError::EmptyCell { .. } => "G003",
            GridError::MultiLetterCell { .. } => "G004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::NotSquare { .. } => "Grid is not square",
            GridError::LetterExport { .. } => "Letter export failed",
            GridError::EmptyCell { .. } => "Cell without a letter",
            GridError::MultiLetterCell { .. } => "Cell with several letters",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::NotSquare { .. } => "The search only accepts n x n grids. A grid whose rows do not all have exactly n cells (n being the number of rows) is rejected before any search work begins.",
            GridError::LetterExport { .. } => "The adapter that turns a board into a matrix of letters did not produce one, so there is nothing to search.",
            GridError::EmptyCell { .. } => "Every cell of the grid must carry a letter. A blank cell usually means the board was never filled in.",
            GridError::MultiLetterCell { .. } => "A path visits one cell per letter, so each cell must hold a single character after trimming. A cell such as 'qu' would let a word come out longer than its path.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::NotSquare { .. } => Some("Pass the same number of cells in every row as there are rows (e.g., 'ca,sa' for a 2x2 grid)"),
            GridError::EmptyCell { .. } => Some("Fill every cell before searching, or generate a fresh grid"),
            GridError::MultiLetterCell { .. } => Some("Put one letter in each cell (e.g., split 'ca' into 'c' and 'a')"),
            GridError::LetterExport { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
