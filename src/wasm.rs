use crate::dictionary::Dictionary;
use crate::errors::GridError;
use crate::generator::{generate_grid, XorShiftRng};
use crate::letters::ITALIAN_ALPHABET;
use crate::log::init_logger;
use crate::solver::{find_words_in, SearchError, SearchOptions};
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G001", "S001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SearchError> for WasmError {
    fn from(e: SearchError) -> Self {
        // report the underlying grid problem, which carries the useful detail
        let SearchError::Grid(ge) = e;
        WasmError::from(ge)
    }
}

impl From<GridError> for WasmError {
    fn from(ge: GridError) -> Self {
        WasmError {
            code: ge.code().to_string(),
            message: ge.to_string(),
            description: ge.description().to_string(),
            details: ge.details().to_string(),
            help: ge.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(code: &str, what: &str, e: &serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Initialize panic reporting and logging.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// A dictionary built once per word-list load and reused for every round.
#[wasm_bindgen]
pub struct WasmDictionary {
    dictionary: Dictionary,
}

#[wasm_bindgen]
impl WasmDictionary {
    /// Build from newline-delimited word-list text.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> WasmDictionary {
        let word_list = WordList::parse_from_str(text, 1);
        log::info!("Dictionary built with {} words", word_list.len());
        WasmDictionary { dictionary: word_list.to_dictionary() }
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.dictionary.len()
    }

    /// JS entry: (grid: string[][], min_word_len: number, diagonals: boolean)
    /// returns `{ results: { word, path: [row, col][] }[] }`, longest words first.
    pub fn find_words(&self, grid: JsValue, min_word_len: usize, diagonals: bool) -> Result<JsValue, JsValue> {
        let rows: Vec<Vec<String>> = serde_wasm_bindgen::from_value(grid).map_err(|e| {
            JsValue::from(WasmError {
                code: "WASM001".to_string(),
                message: format!("grid must be string[][]: {e}"),
                description: "Invalid grid format".to_string(),
                details: "The grid parameter must be a JavaScript array of rows, each an array of single-letter strings.".to_string(),
                help: Some("Pass something like [['c', 'a'], ['s', 'a']]".to_string()),
            })
        })?;

        let options = SearchOptions { min_word_len, diagonals };
        let result = find_words_in(&rows, &self.dictionary, &options).map_err(WasmError::from)?;

        serde_wasm_bindgen::to_value(&result).map_err(|e| serialization_error("WASM002", "search result", &e))
    }
}

/// Generate a `size` x `size` grid of Italian-weighted letters from `seed`,
/// returned as `string[][]`.
#[wasm_bindgen]
pub fn generate_grid_wasm(size: usize, seed: u64) -> Result<JsValue, JsValue> {
    let grid = generate_grid(size, ITALIAN_ALPHABET, &mut XorShiftRng::seed_from_u64(seed));
    let rows: Vec<Vec<String>> = grid.rows().map(<[String]>::to_vec).collect();
    serde_wasm_bindgen::to_value(&rows).map_err(|e| serialization_error("WASM003", "grid", &e))
}

/// Generate a debug report users can paste when reporting an issue.
#[wasm_bindgen]
pub fn get_debug_info(
    grid_size: usize,
    error_message: &str,
    dictionary_size: usize,
    min_word_len: usize,
) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== PAROLIAMO DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Grid Size: {grid_size}x{grid_size}");
    let _ = writeln!(&mut report, "Dictionary Size: {dictionary_size}");
    let _ = writeln!(&mut report, "Min Word Length: {min_word_len}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
