//! The capability set every board variant exposes.

use varidoku_core::{Grid, NumberSet};

use crate::outcome::MoveOutcome;

/// Operations common to every board variant.
///
/// This is the surface presentation layers drive a game through. Each
/// variant implements it over its own state; there is no inheritance,
/// and variant-specific behavior (killer's region sums, duidoku's
/// deadlock detection) lives entirely in the respective `impl`.
pub trait Board {
    /// Immutable view of the board's grid.
    ///
    /// All mutation goes through [`Board::check`] (or a variant's loading
    /// methods); callers can read but never write cells directly.
    fn grid(&self) -> &Grid;

    /// Validates one move and commits it when legal.
    ///
    /// See [`MoveOutcome`] for the priority order. The grid is mutated if
    /// and only if the result is [`MoveOutcome::Placed`].
    fn check(&mut self, x: usize, y: usize, number: u8) -> MoveOutcome;

    /// Enumerates the numbers that could legally be placed at `(x, y)`.
    ///
    /// Never mutates the grid.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    fn hint(&self, x: usize, y: usize) -> NumberSet;

    /// Returns whether the game is over.
    ///
    /// The default is grid fullness; the two-player variant also ends on
    /// global deadlock.
    fn finished(&self) -> bool {
        self.grid().is_full()
    }
}
