//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of grid searches on *your* machine.
//! - Loads the word list once, then searches a fixed set of seeded grids
//!   several times each and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few words per case:     `cargo run --bin bench_local --release -- -p 5`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release`.
//! - Cases live in `get_cases()` below.
//! - One warm-up run per case is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use paroliamo::generator::{generate_grid, XorShiftRng};
use paroliamo::letters::ITALIAN_ALPHABET;
use paroliamo::solver::{self, SearchOptions};
use paroliamo::word_list::WordList;

/// Simple local benchmark runner: load word list once, time several grids.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/italiano.txt")
    )]
    word_list: String,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many words per case (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// One benchmark case: a seeded random grid plus search options.
#[derive(Clone)]
struct Case {
    size: usize,
    seed: u64,
    diagonals: bool,
}

impl Case {
    fn name(&self) -> String {
        format!(
            "{0}x{0} seed={1} {2}",
            self.size,
            self.seed,
            if self.diagonals { "8-way" } else { "4-way" }
        )
    }
}

/// Edit/add new cases here.
fn get_cases() -> Vec<Case> {
    vec![
        Case { size: 4, seed: 1, diagonals: true },
        Case { size: 5, seed: 1, diagonals: true },
        Case { size: 5, seed: 1, diagonals: false },
        Case { size: 5, seed: 2024, diagonals: true },
        Case { size: 6, seed: 7, diagonals: true },
        Case { size: 8, seed: 42, diagonals: true },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Load the word list once. This I/O is *not* included in per-case timing.
    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let dictionary = WordList::load_from_path(&cli.word_list, 1)?.to_dictionary();
    eprintln!("Loaded {} words in {:.3}s", dictionary.len(), t_load.elapsed().as_secs_f64());

    let cases = get_cases();
    let mut summary: Vec<(String, f64, usize)> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        let grid = generate_grid(case.size, ITALIAN_ALPHABET, &mut XorShiftRng::seed_from_u64(case.seed));
        let options = SearchOptions { diagonals: case.diagonals, ..SearchOptions::default() };
        eprintln!("\n[{:02}] {}", idx + 1, case.name());
        eprint!("{grid}");

        // warm-up
        let _warmup = solver::find_words(&grid, &dictionary, &options);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_words: Vec<String> = Vec::new();

        for rep in 0..cli.num_repeats {
            let t_search = Instant::now();
            let result = solver::find_words(black_box(&grid), &dictionary, &options);
            let search_secs = t_search.elapsed().as_secs_f64();

            times.push(search_secs);
            last_words = result.results.into_iter().map(|r| r.word).collect();

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} words)",
                rep + 1,
                cli.num_repeats,
                search_secs,
                last_words.len()
            );
        }

        let med = median(times);

        for word in last_words.iter().take(cli.print_limit) {
            println!("{word}");
        }

        eprintln!(
            "  → median {:.3}s over {} run(s); last run found {} {}",
            med,
            cli.num_repeats,
            last_words.len(),
            pluralizer(last_words.len(), "word", None)
        );

        summary.push((case.name(), med, last_words.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<24} | {:>10} | {:>7}", "case", "median (s)", "# words");
    eprintln!("{:-<24}-+-{:-<10}-+-{:-<7}", "", "", "");
    for (name, med, num_words) in &summary {
        eprintln!("{name:<24} | {med:>10.3} | {num_words:>7}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: &str, plural: Option<&str>) -> String {
    if count == 1 {
        singular.to_string()
    } else {
        plural.map_or_else(|| format!("{singular}s"), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "word", None), "words");
        assert_eq!(pluralizer(1, "word", None), "word");
        assert_eq!(pluralizer(2, "cell", Some("cells")), "cells");
        assert_eq!(pluralizer(1, "radius", Some("radii")), "radius");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }
}
