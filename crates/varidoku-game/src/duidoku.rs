//! The two-player (duidoku) board.
//!
//! Two players alternate placing numbers on a small board under the base
//! rules; whoever cannot move loses. The variant therefore needs two
//! things on top of the base engine: a finished check that also detects
//! global deadlock, and a randomized opponent move.

use rand::{Rng, RngExt};
use varidoku_core::{Grid, GridError, NumberSet};

use crate::{board::Board, outcome::MoveOutcome, rules};

/// A move committed by the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcMove {
    /// Row of the placed number.
    pub x: usize,
    /// Column of the placed number.
    pub y: usize,
    /// The number placed.
    pub number: u8,
}

/// A duidoku board.
///
/// Defaults to the conventional 4×4 size but plays at any side. There is
/// no puzzle bank: a match always starts from an empty grid.
///
/// # Examples
///
/// ```
/// use varidoku_game::{Board, DuidokuBoard};
///
/// let mut board = DuidokuBoard::new(false);
/// assert_eq!(board.grid().side(), 4);
///
/// let mv = board.pc_move(&mut rand::rng()).expect("fresh board has moves");
/// assert_eq!(board.grid().value(mv.x, mv.y), mv.number);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuidokuBoard {
    grid: Grid,
}

impl DuidokuBoard {
    /// The side length used when none is given.
    pub const DEFAULT_SIDE: usize = 4;

    /// Creates an empty board of the default 4×4 size.
    #[must_use]
    #[expect(clippy::missing_panics_doc)]
    pub fn new(lettered: bool) -> Self {
        Self::with_side(Self::DEFAULT_SIDE, lettered).expect("default side is a valid grid size")
    }

    /// Creates an empty board of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] for an unusable side.
    pub fn with_side(side: usize, lettered: bool) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(side, lettered)?,
        })
    }

    /// Returns whether the cell at `(x, y)` is empty.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[must_use]
    pub fn is_empty_cell(&self, x: usize, y: usize) -> bool {
        self.grid.value(x, y) == 0
    }

    /// Makes one random legal move for the computer opponent.
    ///
    /// Returns `None` when the game is already decided ([`finished`]
    /// holds), without touching the grid. Otherwise, coordinates and a
    /// number are sampled uniformly until a triple lands on an empty cell
    /// and passes [`check`] — which has then already committed the
    /// placement. There is no iteration bound; a legal move exists
    /// somewhere (the game is not finished), so termination is
    /// probabilistic but guaranteed in distribution, though sparse
    /// positions can take many attempts.
    ///
    /// The random source is injected so callers can seed it; pass
    /// `&mut rand::rng()` for ordinary use.
    ///
    /// [`finished`]: Board::finished
    /// [`check`]: Board::check
    pub fn pc_move<R: Rng>(&mut self, rng: &mut R) -> Option<PcMove> {
        if self.finished() {
            return None;
        }
        let side = self.grid.side();
        loop {
            let x = rng.random_range(0..side);
            let y = rng.random_range(0..side);
            let number = rng.random_range(1..=self.grid.max_number());
            if !self.is_empty_cell(x, y) {
                continue;
            }
            if rules::check(&mut self.grid, x, y, number).is_placed() {
                return Some(PcMove { x, y, number });
            }
        }
    }
}

impl Board for DuidokuBoard {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn check(&mut self, x: usize, y: usize, number: u8) -> MoveOutcome {
        rules::check(&mut self.grid, x, y, number)
    }

    fn hint(&self, x: usize, y: usize) -> NumberSet {
        rules::hint(&self.grid, x, y)
    }

    /// The game is over when the grid is full, or when no legal number
    /// can be placed in any empty cell (global deadlock).
    fn finished(&self) -> bool {
        if self.grid.is_full() {
            return true;
        }
        for x in 0..self.grid.side() {
            for y in 0..self.grid.side() {
                if self.is_empty_cell(x, y) && !self.hint(x, y).is_empty() {
                    return false;
                }
            }
        }
        true
    }
}
