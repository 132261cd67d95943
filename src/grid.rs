//! `grid` — the square letter grid a search runs over.
//!
//! A [`Grid`] is a validated, lowercased copy of whatever the caller holds; the
//! caller's own matrix is never touched. Anything that can hand out a matrix of
//! letters implements [`LetterSource`], so boards of [`Cell`]s, plain string
//! matrices and grids themselves can all be searched.

use std::fmt;
use std::str::FromStr;

use crate::errors::GridError;
use crate::letters::normalize;

/// A (row, col) coordinate, 0-based.
pub type Coord = (usize, usize);

/// Immutable n x n grid of normalized letters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<String>,
}

impl Grid {
    /// Build a grid from rows of cell strings, lowercasing every cell.
    ///
    /// # Errors
    ///
    /// - [`GridError::NotSquare`] if any row's length differs from the number of rows.
    /// - [`GridError::EmptyCell`] if a cell is blank after trimming.
    /// - [`GridError::MultiLetterCell`] if a cell holds more than one character after trimming.
    pub fn new<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Grid, GridError> {
        let size = rows.len();

        // Shape first, so no normalization work is done on a rejected grid.
        for (row, cells) in rows.iter().enumerate() {
            let len = cells.len();
            if len != size {
                return Err(GridError::NotSquare { rows: size, row, len });
            }
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, row_cells) in rows.iter().enumerate() {
            for (col, cell) in row_cells.iter().enumerate() {
                let letter = normalize(cell.as_ref());
                match letter.chars().count() {
                    0 => return Err(GridError::EmptyCell { row, col }),
                    1 => {}
                    len => return Err(GridError::MultiLetterCell { row, col, len }),
                }
                cells.push(letter);
            }
        }

        Ok(Grid { size, cells })
    }

    /// Build a grid from letters the caller already normalized, row-major.
    pub(crate) fn from_normalized(size: usize, cells: Vec<String>) -> Grid {
        debug_assert_eq!(cells.len(), size * size, "cell count must be size^2");
        debug_assert!(
            cells.iter().all(|c| c.chars().count() == 1 && *c == normalize(c)),
            "cells must be single normalized letters"
        );
        Grid { size, cells }
    }

    /// Number of rows (== number of columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The normalized letter at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[must_use]
    pub fn letter(&self, (row, col): Coord) -> &str {
        assert!(
            row < self.size && col < self.size,
            "({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        &self.cells[row * self.size + col]
    }

    /// Iterate over the rows as slices of letters.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        // chunks(0) panics, and an empty grid has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// A copy of this grid turned a quarter turn clockwise.
    ///
    /// Row `r` of the result is column `r` of `self`, read bottom to top.
    #[must_use]
    pub fn rotated_clockwise(&self) -> Grid {
        let n = self.size;
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..n {
            for row in (0..n).rev() {
                cells.push(self.cells[row * n + col].clone());
            }
        }
        Grid { size: n, cells }
    }

    /// Rotate clockwise `quarter_turns` times (taken modulo 4).
    #[must_use]
    pub fn rotated(&self, quarter_turns: usize) -> Grid {
        (0..quarter_turns % 4).fold(self.clone(), |g, _| g.rotated_clockwise())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line = row.iter().map(|c| c.to_uppercase()).collect::<Vec<_>>().join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parse a grid from comma-separated rows, one character per cell
/// (e.g. `"ca,sa"`).
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Grid::new::<String>(&[]);
        }
        let rows: Vec<Vec<String>> = trimmed
            .split(',')
            .map(|row| row.trim().chars().map(String::from).collect())
            .collect();
        Grid::new(&rows)
    }
}

/// One board cell as the game keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: String,
}

impl Cell {
    #[must_use]
    pub fn new(letter: impl Into<String>) -> Self {
        Cell { letter: letter.into() }
    }
}

/// Anything that can produce the matrix of letters a search needs.
pub trait LetterSource {
    /// Export the letters row by row.
    ///
    /// # Errors
    /// [`GridError::LetterExport`] if the source cannot produce letters.
    fn export_letters(&self) -> Result<Vec<Vec<String>>, GridError>;

    /// Export and validate in one step.
    ///
    /// # Errors
    /// Any error from [`LetterSource::export_letters`] or [`Grid::new`].
    fn to_grid(&self) -> Result<Grid, GridError> {
        Grid::new(&self.export_letters()?)
    }
}

impl LetterSource for Grid {
    fn export_letters(&self) -> Result<Vec<Vec<String>>, GridError> {
        Ok(self.rows().map(<[String]>::to_vec).collect())
    }

    fn to_grid(&self) -> Result<Grid, GridError> {
        Ok(self.clone())
    }
}

impl LetterSource for Vec<Vec<Cell>> {
    fn export_letters(&self) -> Result<Vec<Vec<String>>, GridError> {
        Ok(self
            .iter()
            .map(|row| row.iter().map(|cell| cell.letter.clone()).collect())
            .collect())
    }
}

impl LetterSource for Vec<Vec<String>> {
    fn export_letters(&self) -> Result<Vec<Vec<String>>, GridError> {
        Ok(self.clone())
    }
}

impl LetterSource for Vec<Vec<&str>> {
    fn export_letters(&self) -> Result<Vec<Vec<String>>, GridError> {
        Ok(self
            .iter()
            .map(|row| row.iter().map(|s| (*s).to_string()).collect())
            .collect())
    }
}

impl LetterSource for Vec<Vec<char>> {
    fn export_letters(&self) -> Result<Vec<Vec<String>>, GridError> {
        Ok(self
            .iter()
            .map(|row| row.iter().map(char::to_string).collect())
            .collect())
    }
}
