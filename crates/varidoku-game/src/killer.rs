//! The killer board: colored-region sum constraints on top of the base
//! rules.

use std::{collections::HashMap, io::BufRead};

use rand::Rng;
use varidoku_bank::{BankError, KillerPuzzle, PlayerRecord, find_unplayed_code, parse_killer};
use varidoku_core::{Grid, NumberSet};

use crate::{
    board::Board,
    classic::{IdentityError, LoadError, PuzzleIdentity, SetupError},
    outcome::MoveOutcome,
    palette::ColorPalette,
    rules,
};

/// The colored regions of a killer board and their target sums.
///
/// Every cell belongs to exactly one region; every region a loaded
/// puzzle names has a target sum. Cells whose region has no sum (the
/// state before a puzzle is loaded) are simply unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    side: usize,
    region_of: Vec<u32>,
    target_sums: HashMap<u32, u32>,
}

impl RegionMap {
    /// Creates a map with every cell in region 0 and no target sums.
    #[must_use]
    pub fn empty(side: usize) -> Self {
        Self {
            side,
            region_of: vec![0; side * side],
            target_sums: HashMap::new(),
        }
    }

    /// Builds the map described by a parsed killer record.
    #[must_use]
    pub fn from_puzzle(puzzle: &KillerPuzzle) -> Self {
        debug_assert!(puzzle.region_rows.len() == puzzle.side);
        Self {
            side: puzzle.side,
            region_of: puzzle.region_rows.iter().flatten().copied().collect(),
            target_sums: puzzle.target_sums.clone(),
        }
    }

    /// Returns the region id of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[must_use]
    pub fn region_at(&self, x: usize, y: usize) -> u32 {
        assert!(
            x < self.side && y < self.side,
            "cell ({x}, {y}) is out of bounds"
        );
        self.region_of[x * self.side + y]
    }

    /// Returns the required sum for a region, if the region is known.
    #[must_use]
    pub fn target_sum(&self, region: u32) -> Option<u32> {
        self.target_sums.get(&region).copied()
    }

    /// Returns whether placing `number` at `(x, y)` keeps the region's
    /// target sum reachable.
    ///
    /// A placement is rejected when it overshoots the target, hits the
    /// target while the region still has other empty cells, undershoots
    /// on the region's last empty cell, or leaves a gap the remaining
    /// cells cannot cover even when maxed out.
    ///
    /// Out-of-range numbers and out-of-bounds coordinates are reported
    /// as allowed: the base range check owns that signal, and this
    /// predicate must not mask it.
    #[must_use]
    pub fn sum_allows(&self, grid: &Grid, x: usize, y: usize, number: u8) -> bool {
        if number < 1 || number > grid.max_number() || !grid.in_bounds(x, y) {
            return true;
        }
        debug_assert_eq!(self.side, grid.side());
        let region = self.region_at(x, y);
        let Some(target) = self.target_sum(region) else {
            return true;
        };

        let mut region_size = 0u32;
        let mut filled = 0u32;
        let mut prior_sum = 0u32;
        for cx in 0..self.side {
            for cy in 0..self.side {
                if self.region_of[cx * self.side + cy] == region {
                    region_size += 1;
                    let value = grid.value(cx, cy);
                    if value != 0 {
                        filled += 1;
                        prior_sum += u32::from(value);
                    }
                }
            }
        }

        let sum = prior_sum + u32::from(number);
        if sum > target {
            return false;
        }
        if sum == target {
            // hitting the target must also complete the region
            return filled + 1 == region_size;
        }
        if filled + 1 == region_size {
            return false;
        }
        let remaining = region_size - filled - 1;
        sum + remaining * u32::from(grid.max_number()) >= target
    }
}

/// A killer sudoku board.
///
/// Plays like a classic board with one extra rule: the grid is covered by
/// colored regions, and the values of each region must add up to exactly
/// its target sum. The region-sum constraint is checked *before* the base
/// three, so a sum violation wins over a simultaneous row conflict.
///
/// The killer bank format carries the region map and sum table instead of
/// initial cell values; a freshly loaded killer board starts empty.
///
/// # Examples
///
/// ```
/// use varidoku_bank::parse_killer;
/// use varidoku_game::{Board, KillerBoard, MoveOutcome};
///
/// let bank = "\
/// 1
/// 1 1 2 2
/// 1 3 3 2
/// 4 4 3 5
/// 4 5 5 5
/// 1 7,2 7,3 9,4 7,5 10
/// ";
/// let mut board = KillerBoard::new(4, false)?;
/// board.load(&parse_killer(bank.as_bytes(), 1, 4)?)?;
///
/// assert_eq!(board.target_sum(1), Some(7));
/// assert_eq!(board.check(0, 0, 4), MoveOutcome::Placed);
/// // 4 + 4 overshoots region 1's target of 7
/// assert_eq!(board.check(0, 1, 4), MoveOutcome::RegionSumConflict);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillerBoard {
    grid: Grid,
    identity: PuzzleIdentity,
    regions: RegionMap,
    palette: ColorPalette,
}

impl KillerBoard {
    /// Creates an empty board drawing from the default-size bank.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] for an unusable grid side.
    pub fn new(side: usize, lettered: bool) -> Result<Self, SetupError> {
        Self::with_puzzle_count(side, lettered, PuzzleIdentity::DEFAULT_PUZZLE_COUNT)
    }

    /// Creates an empty board drawing from a bank of `puzzle_count`
    /// puzzles.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] for an unusable grid side or a zero
    /// puzzle count.
    pub fn with_puzzle_count(
        side: usize,
        lettered: bool,
        puzzle_count: u32,
    ) -> Result<Self, SetupError> {
        Ok(Self {
            grid: Grid::new(side, lettered)?,
            identity: PuzzleIdentity::new(puzzle_count)?,
            regions: RegionMap::empty(side),
            palette: ColorPalette::new(),
        })
    }

    /// Returns the code of the loaded puzzle (0 when none is loaded).
    #[must_use]
    pub fn code(&self) -> u32 {
        self.identity.code()
    }

    /// Returns the size of the bank this board draws from.
    #[must_use]
    pub fn puzzle_count(&self) -> u32 {
        self.identity.puzzle_count()
    }

    /// Changes the bank size.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidPuzzleCount`] if `puzzle_count` is
    /// zero.
    pub fn set_puzzle_count(&mut self, puzzle_count: u32) -> Result<(), IdentityError> {
        self.identity.set_puzzle_count(puzzle_count)
    }

    /// Returns the region id of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[must_use]
    pub fn region_at(&self, x: usize, y: usize) -> u32 {
        self.regions.region_at(x, y)
    }

    /// Returns the required sum for a region, if the region is known.
    #[must_use]
    pub fn target_sum(&self, region: u32) -> Option<u32> {
        self.regions.target_sum(region)
    }

    /// Returns whether placing `number` at `(x, y)` passes the
    /// region-sum rule (the base rules are not consulted).
    #[must_use]
    pub fn region_sum_allows(&self, x: usize, y: usize, number: u8) -> bool {
        self.regions.sum_allows(&self.grid, x, y, number)
    }

    /// The colors regions are painted with.
    #[must_use]
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Mutable access to the region colors.
    pub fn palette_mut(&mut self) -> &mut ColorPalette {
        &mut self.palette
    }

    /// Loads a parsed killer puzzle, replacing the region map and
    /// emptying the grid.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the puzzle was parsed for a different
    /// side or its code does not fit this board's bank. On error the
    /// board is left exactly as it was.
    pub fn load(&mut self, puzzle: &KillerPuzzle) -> Result<(), LoadError> {
        if puzzle.side != self.grid.side() {
            return Err(LoadError::SideMismatch {
                puzzle_side: puzzle.side,
                board_side: self.grid.side(),
            });
        }
        self.identity.validate_code(puzzle.code)?;
        self.install(puzzle);
        Ok(())
    }

    fn install(&mut self, puzzle: &KillerPuzzle) {
        for x in 0..self.grid.side() {
            for y in 0..self.grid.side() {
                self.grid.clear(x, y);
            }
        }
        self.regions = RegionMap::from_puzzle(puzzle);
        self.identity.assign(puzzle.code);
    }

    /// Picks a killer puzzle the player has not won yet and loads it.
    ///
    /// A failure to read or decode the bank is logged and returned; the
    /// board keeps its previous state.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`BankError`] when the record cannot be
    /// read or decoded.
    pub fn start_new_game<S, P, R>(
        &mut self,
        source: S,
        player: &P,
        rng: &mut R,
    ) -> Result<(), BankError>
    where
        S: BufRead,
        P: PlayerRecord + ?Sized,
        R: Rng,
    {
        let code =
            find_unplayed_code(rng, self.identity.puzzle_count(), player.killer_codes_won());
        match parse_killer(source, code, self.grid.side()) {
            Ok(puzzle) => {
                self.install(&puzzle);
                Ok(())
            }
            Err(err) => {
                log::warn!("killer puzzle {code} failed to load: {err}");
                Err(err)
            }
        }
    }
}

impl Board for KillerBoard {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn check(&mut self, x: usize, y: usize, number: u8) -> MoveOutcome {
        if !self.regions.sum_allows(&self.grid, x, y, number) {
            return MoveOutcome::RegionSumConflict;
        }
        rules::check(&mut self.grid, x, y, number)
    }

    fn hint(&self, x: usize, y: usize) -> NumberSet {
        let mut candidates = rules::hint(&self.grid, x, y);
        candidates.retain(|number| self.regions.sum_allows(&self.grid, x, y, number));
        candidates
    }
}
