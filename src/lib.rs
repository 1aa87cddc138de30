// Library interface for word-grid-solver
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod errors;
pub mod grid;
pub mod logging;
pub mod solver;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, WordSet, load_dictionary_from_file, load_dictionary_from_str};
pub use errors::GridError;
pub use grid::{Grid, Position, load_grid_from_file, parse_grid_from_str};
pub use solver::{DEFAULT_MAX_LENGTH, SearchConfig, WordSearch, search, search_with};
