use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use paroliamo::generator::{generate_grid, XorShiftRng};
use paroliamo::grid::Grid;
use paroliamo::letters::ITALIAN_ALPHABET;
use paroliamo::solver::{self, SearchError, SearchOptions, DEFAULT_MIN_WORD_LEN};
use paroliamo::word_list::WordList;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Paroliamo word-search solver
#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/italiano.txt")
    )]
    word_list: String,

    /// Grid as comma-separated rows, e.g. "ca,sa" (random grid when omitted)
    #[arg(short, long)]
    grid: Option<String>,

    /// Side length of a generated grid
    #[arg(short = 'n', long, default_value_t = 5)]
    size: usize,

    /// Seed for a generated grid (clock-based when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Minimum length of a reported word
    #[arg(short, long, default_value_t = DEFAULT_MIN_WORD_LEN)]
    min_word_len: usize,

    /// Only orthogonal neighbors (no diagonal steps)
    #[arg(long)]
    no_diagonals: bool,

    /// Rotate the grid clockwise this many quarter turns before searching
    #[arg(short, long, default_value_t = 0)]
    rotations: usize,

    /// Maximum number of words to print (0 = all)
    #[arg(short, long, default_value_t = 0)]
    limit: usize,

    /// Print the witness path next to each word
    #[arg(long)]
    paths: bool,
}

/// Entry point of the Paroliamo CLI.
///
/// Delegates to [`try_main`], printing any error (with its code when it is a
/// [`SearchError`]) and exiting with code 1.
fn main() -> ExitCode {
    paroliamo::log::init_logger(paroliamo::log::debug_requested());

    if let Err(e) = try_main() {
        if let Some(search_err) = e.downcast_ref::<SearchError>() {
            eprintln!("Error: {}", search_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic:
/// 1. Load the word list into a dictionary.
/// 2. Parse or generate the grid, then rotate it.
/// 3. Search and print each word on stdout.
/// 4. Print timings and counts on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list, 1)?;
    let dictionary = word_list.to_dictionary();
    let load_secs = t_load.elapsed().as_secs_f64();

    let grid = match &cli.grid {
        Some(rows) => rows.parse::<Grid>().map_err(SearchError::from)?,
        None => {
            let mut rng = cli.seed.map_or_else(XorShiftRng::from_time, XorShiftRng::seed_from_u64);
            generate_grid(cli.size, ITALIAN_ALPHABET, &mut rng)
        }
    }
    .rotated(cli.rotations);
    eprint!("{grid}");

    let options = SearchOptions { min_word_len: cli.min_word_len, diagonals: !cli.no_diagonals };

    let t_search = Instant::now();
    let result = solver::find_words(&grid, &dictionary, &options);
    let search_secs = t_search.elapsed().as_secs_f64();

    let limit = if cli.limit == 0 { usize::MAX } else { cli.limit };
    for found in result.results.iter().take(limit) {
        if cli.paths {
            let path = found.path.iter().map(|(r, c)| format!("{r},{c}")).collect::<Vec<_>>().join(" ");
            println!("{}\t{path}", found.word.to_uppercase());
        } else {
            println!("{}", found.word.to_uppercase());
        }
    }

    eprintln!(
        "Loaded {} words in {:.3}s; searched in {:.3}s ({} found).",
        dictionary.len(),
        load_secs,
        search_secs,
        result.len()
    );

    Ok(())
}
