//! The base constraint set shared by every board variant.
//!
//! These functions implement the three universal sudoku rules — a number
//! may appear at most once per row, column, and aligned block — plus the
//! candidate enumeration behind hints. Variants compose them: classic
//! boards use them as-is, killer boards run their region-sum predicate
//! first, and duidoku boards build deadlock detection on top of [`hint`].

use varidoku_core::{Grid, NumberSet};

use crate::outcome::MoveOutcome;

/// Returns whether `(x, y, number)` is within the board at all.
fn in_range(grid: &Grid, x: usize, y: usize, number: u8) -> bool {
    number >= 1 && number <= grid.max_number() && grid.in_bounds(x, y)
}

/// Checks one move against the base constraints and commits it if legal.
///
/// The range guard comes first: a number outside `1..=side` or
/// coordinates off the board yield [`MoveOutcome::OutOfRange`]. Then row,
/// column, and block are tested in that fixed order and the first
/// violated constraint is reported. Only a fully legal move mutates the
/// grid.
///
/// Note that the scans include the target cell itself, so re-checking a
/// value into its own occupied cell reports a row conflict.
pub fn check(grid: &mut Grid, x: usize, y: usize, number: u8) -> MoveOutcome {
    if !in_range(grid, x, y, number) {
        return MoveOutcome::OutOfRange;
    }
    if grid.row_contains(x, number) {
        return MoveOutcome::RowConflict;
    }
    if grid.column_contains(y, number) {
        return MoveOutcome::ColumnConflict;
    }
    if grid.block_contains(x, y, number) {
        return MoveOutcome::BlockConflict;
    }
    grid.place(x, y, number);
    MoveOutcome::Placed
}

/// Enumerates the numbers that pass the base constraints at `(x, y)`.
///
/// Never mutates the grid. The enumeration ignores the cell's own
/// occupancy the same way [`check`] does: a value already placed in the
/// cell excludes itself through the row scan.
///
/// # Panics
///
/// Panics if the coordinates are out of bounds.
#[must_use]
pub fn hint(grid: &Grid, x: usize, y: usize) -> NumberSet {
    assert!(grid.in_bounds(x, y), "cell ({x}, {y}) is out of bounds");
    let mut candidates = NumberSet::new();
    for number in 1..=grid.max_number() {
        if !grid.row_contains(x, number)
            && !grid.column_contains(y, number)
            && !grid.block_contains(x, y, number)
        {
            candidates.insert(number);
        }
    }
    candidates
}
