#![recursion_limit = "512"]

//! Word-search puzzle generation.
//!
//! Words are sized into a square grid, hidden along rows, columns and the
//! down-right diagonal (crossing each other where they can), and the rest of
//! the grid is filled with random letters.
//!
//! ```
//! use wordsearch_gen::{Config, Puzzle, WordList};
//!
//! let words = WordList::new(["Radar", "Sonar", "Convoy"]);
//! let puzzle = Puzzle::generate(&words, &Config::default(), Some([0; 32])).unwrap();
//! assert_eq!(puzzle.placements().len(), 3);
//! ```

mod config;
mod error;
pub mod grid;
pub mod placer;
pub mod puzzle;
pub mod sizer;
pub mod wordlist;
pub mod words;

pub use config::{Config, DEFAULT_DENSITY_FACTOR, DEFAULT_MAX_ATTEMPTS, DEFAULT_REVERSE_PERCENT};
pub use error::{Error, Result};
pub use grid::{Cell, Grid, Orientation};
pub use placer::{Placement, Strategy, WordPlacer};
pub use puzzle::{parse_seed, OutputFormat, Puzzle};
pub use sizer::GridSizer;
pub use wordlist::WordList;
