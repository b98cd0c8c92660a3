//! Puzzle-bank access for variant sudoku boards.
//!
//! A puzzle bank is a plain-text stream of records, each identified by a
//! 1-based decimal code. This crate scans a bank for one record, validates
//! it, and hands the result to the game crate as a parsed puzzle value —
//! the boards never touch the text format themselves.
//!
//! - [`puzzle`]: the classic and killer record formats, parsed into
//!   [`ClassicPuzzle`] / [`KillerPuzzle`] with a typed, recoverable
//!   [`BankError`]. A malformed record degrades one load, never the
//!   process, and never touches previously loaded state.
//! - [`select`]: [`find_unplayed_code`], the rejection-sampling pick of a
//!   puzzle the player has not already won.
//! - [`player`]: the read-only [`PlayerRecord`] boundary to a player's
//!   won-code sets, with an [`InMemoryPlayer`] implementation for callers
//!   and tests.
//!
//! # Examples
//!
//! ```
//! use varidoku_bank::parse_classic;
//!
//! let bank = "\
//! 1
//! 0 1 0 0
//! 2 0 0 3
//! 0 0 4 0
//! 0 3 0 0
//! ";
//! let puzzle = parse_classic(bank.as_bytes(), 1, 4)?;
//! assert_eq!(puzzle.rows[1], vec![2, 0, 0, 3]);
//! # Ok::<(), varidoku_bank::BankError>(())
//! ```

pub mod player;
pub mod puzzle;
pub mod select;

pub use self::{
    player::{InMemoryPlayer, PlayerRecord},
    puzzle::{BankError, ClassicPuzzle, KillerPuzzle, parse_classic, parse_killer},
    select::find_unplayed_code,
};
