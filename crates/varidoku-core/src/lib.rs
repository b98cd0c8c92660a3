//! Core data structures for variant sudoku boards.
//!
//! This crate provides the storage-level building blocks shared by every
//! board variant. It deliberately owns no game rules: legality checking
//! lives in `varidoku-game`, and this crate only knows how to store cell
//! values, enumerate candidate sets, and convert numbers to display
//! symbols.
//!
//! # Overview
//!
//! - [`grid`]: [`Grid`], a fixed-size square matrix of cell values with
//!   0 meaning "empty", plus the row/column/block membership scans the
//!   rule engine is built on.
//! - [`number_set`]: [`NumberSet`], a bitset of candidate numbers used
//!   for hint results.
//! - [`symbol`]: number ↔ display-symbol conversion for the lettered
//!   ("wordoku") rendering, with a Latin and a Greek alphabet.
//!
//! # Examples
//!
//! ```
//! use varidoku_core::{Alphabet, Grid, number_to_symbol};
//!
//! let mut grid = Grid::new(9, false)?;
//! grid.place(0, 0, 5);
//!
//! assert_eq!(grid.value(0, 0), 5);
//! assert!(grid.row_contains(0, 5));
//! assert_eq!(number_to_symbol(5, grid.side(), Alphabet::Latin), 'E');
//! # Ok::<(), varidoku_core::GridError>(())
//! ```

pub mod grid;
pub mod number_set;
pub mod symbol;

pub use self::{
    grid::{Grid, GridError},
    number_set::NumberSet,
    symbol::{Alphabet, INVALID_NUMBER, INVALID_SYMBOL, number_to_symbol, symbol_to_number},
};
