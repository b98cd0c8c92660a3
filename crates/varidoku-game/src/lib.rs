//! Rule engines and board variants for validating sudoku moves.
//!
//! Every variant is a thin state struct over a [`Grid`] implementing the
//! [`Board`] capability set — `check`, `hint`, `finished` — with the three
//! universal constraints (row, column, block uniqueness) shared through
//! [`rules`] and variant-specific behavior layered per implementation
//! instead of through inheritance.
//!
//! - [`ClassicBoard`]: the base rules plus puzzle-bank loading by code.
//! - [`KillerBoard`]: adds colored-region sum constraints and a display
//!   palette; the region-sum rule outranks the base three.
//! - [`DuidokuBoard`]: the adversarial two-player variant with a
//!   randomized opponent move and deadlock-aware finished detection.
//!
//! Move legality is reported through [`MoveOutcome`], never through
//! errors: a rejected move is an ordinary result the caller branches on,
//! and the grid mutates only when the outcome is [`MoveOutcome::Placed`].
//!
//! # Examples
//!
//! ```
//! use varidoku_game::{Board, ClassicBoard, MoveOutcome};
//!
//! let mut board = ClassicBoard::new(9, false)?;
//! assert_eq!(board.check(0, 0, 1), MoveOutcome::Placed);
//! assert_eq!(board.check(0, 1, 1), MoveOutcome::RowConflict);
//! assert!(!board.hint(0, 1).contains(1));
//! # Ok::<(), varidoku_game::SetupError>(())
//! ```
//!
//! [`Grid`]: varidoku_core::Grid

pub mod board;
pub mod classic;
pub mod duidoku;
pub mod killer;
pub mod outcome;
pub mod palette;
pub mod rules;

pub use self::{
    board::Board,
    classic::{ClassicBoard, IdentityError, LoadError, PuzzleIdentity, SetupError},
    duidoku::{DuidokuBoard, PcMove},
    killer::{KillerBoard, RegionMap},
    outcome::MoveOutcome,
    palette::{ColorPalette, PaletteError, Rgb},
};
