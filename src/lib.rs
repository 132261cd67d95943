// Reusable library API — visible to the CLI tools and the WASM build
pub mod chunked;
pub mod dictionary;
pub mod errors;
pub mod generator;
pub mod grid;
pub mod letters;
pub mod log;
pub mod solver;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use chunked::{chunked_word_search, AbortFlag, ChunkOptions, DeliveryStatus};
pub use dictionary::Dictionary;
pub use grid::{Coord, Grid, LetterSource};
pub use solver::{find_words, search, FoundWord, SearchError, SearchOptions, SearchResult};
pub use word_list::WordList;
