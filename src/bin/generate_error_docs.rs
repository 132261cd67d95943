//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text come straight from the
//! `code()`, `description()`, `details()` and `help()` methods of
//! `SearchError` and `GridError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use paroliamo::errors::GridError;
use paroliamo::solver::SearchError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::NotSquare { rows: 3, row: 1, len: 2 },
        GridError::LetterExport { reason: "row 0 is not a list of cells".to_string() },
        GridError::EmptyCell { row: 2, col: 0 },
        GridError::MultiLetterCell { row: 0, col: 1, len: 2 },
    ]
}

fn all_search_error_variants() -> Vec<SearchError> {
    vec![SearchError::Grid(GridError::NotSquare { rows: 2, row: 0, len: 3 })]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Search Errors (S001)](#search-errors)");
    println!("- [Grid Errors (G001–G004)](#grid-errors)\n");

    println!("## Search Errors\n");
    println!("Top-level errors from a search call. These wrap lower-level grid errors.\n");
    generate_error_docs!(all_search_error_variants());

    println!("## Grid Errors\n");
    println!("Errors raised while turning a board into a square grid of letters.\n");
    generate_error_docs!(all_grid_error_variants());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_variant_documented_once() {
        let grid_codes: HashSet<&str> = all_grid_error_variants().iter().map(GridError::code).collect();
        assert_eq!(grid_codes, HashSet::from(["G001", "G002", "G003", "G004"]));

        let search_codes: HashSet<&str> = all_search_error_variants().iter().map(SearchError::code).collect();
        assert_eq!(search_codes, HashSet::from(["S001"]));
    }
}
