//! The classic board: base rules plus puzzle-bank loading.

use std::io::BufRead;

use rand::Rng;
use varidoku_bank::{BankError, ClassicPuzzle, PlayerRecord, find_unplayed_code, parse_classic};
use varidoku_core::{Grid, GridError, NumberSet};

use crate::{board::Board, outcome::MoveOutcome, rules};

/// Error in the puzzle-identity parameters of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IdentityError {
    /// The bank size was zero.
    #[display("puzzle count must be positive")]
    InvalidPuzzleCount,
    /// A code fell outside the bank.
    #[display("puzzle code {code} outside 1..={puzzle_count}")]
    CodeOutOfRange {
        /// The rejected code.
        code: u32,
        /// The bank size the code was checked against.
        puzzle_count: u32,
    },
}

/// Error constructing a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SetupError {
    /// The grid size was unusable.
    #[display("{_0}")]
    Grid(#[from] GridError),
    /// The puzzle-identity parameters were unusable.
    #[display("{_0}")]
    Identity(#[from] IdentityError),
}

/// Error loading a parsed puzzle onto a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum LoadError {
    /// The puzzle was parsed for a different board size.
    #[display("puzzle side {puzzle_side} does not match board side {board_side}")]
    SideMismatch {
        /// Side the puzzle was parsed for.
        puzzle_side: usize,
        /// Side of the receiving board.
        board_side: usize,
    },
    /// The puzzle code does not fit the board's bank.
    #[display("{_0}")]
    Identity(#[from] IdentityError),
}

/// Which puzzle of a bank a board is playing.
///
/// `code` is the 1-based identifier of one puzzle among `puzzle_count`;
/// 0 means no puzzle has been loaded yet. Once assigned, a code is always
/// within `1..=puzzle_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleIdentity {
    code: u32,
    puzzle_count: u32,
}

impl PuzzleIdentity {
    /// The bank size used when none is given.
    pub const DEFAULT_PUZZLE_COUNT: u32 = 10;

    /// Creates an identity with no puzzle loaded.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidPuzzleCount`] if `puzzle_count` is
    /// zero.
    pub fn new(puzzle_count: u32) -> Result<Self, IdentityError> {
        if puzzle_count < 1 {
            return Err(IdentityError::InvalidPuzzleCount);
        }
        Ok(Self {
            code: 0,
            puzzle_count,
        })
    }

    /// Returns the current puzzle code (0 when nothing is loaded).
    #[must_use]
    pub fn code(&self) -> u32 {
        self.code
    }

    /// Returns the size of the bank this board draws from.
    #[must_use]
    pub fn puzzle_count(&self) -> u32 {
        self.puzzle_count
    }

    /// Returns whether a puzzle has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.code != 0
    }

    /// Changes the bank size, for banks that grow in later versions.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidPuzzleCount`] if `puzzle_count` is
    /// zero.
    pub fn set_puzzle_count(&mut self, puzzle_count: u32) -> Result<(), IdentityError> {
        if puzzle_count < 1 {
            return Err(IdentityError::InvalidPuzzleCount);
        }
        self.puzzle_count = puzzle_count;
        Ok(())
    }

    pub(crate) fn validate_code(&self, code: u32) -> Result<(), IdentityError> {
        if code < 1 || code > self.puzzle_count {
            return Err(IdentityError::CodeOutOfRange {
                code,
                puzzle_count: self.puzzle_count,
            });
        }
        Ok(())
    }

    pub(crate) fn assign(&mut self, code: u32) {
        debug_assert!(self.validate_code(code).is_ok());
        self.code = code;
    }
}

/// A classic sudoku board.
///
/// Owns its grid and puzzle identity; move legality is exactly the base
/// rule set. Puzzles come from a plain-text bank, either by explicit
/// [`ClassicBoard::load`] of a parsed record or through
/// [`ClassicBoard::start_new_game`], which first picks a code the player
/// has not won yet.
///
/// # Examples
///
/// ```
/// use varidoku_bank::parse_classic;
/// use varidoku_game::{Board, ClassicBoard, MoveOutcome};
///
/// let bank = "\
/// 1
/// 0 1 0 0
/// 2 0 0 3
/// 0 0 4 0
/// 0 3 0 0
/// ";
/// let mut board = ClassicBoard::new(4, false)?;
/// board.load(&parse_classic(bank.as_bytes(), 1, 4)?)?;
///
/// assert_eq!(board.code(), 1);
/// assert_eq!(board.check(0, 0, 2), MoveOutcome::ColumnConflict);
/// assert_eq!(board.check(0, 0, 4), MoveOutcome::Placed);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicBoard {
    grid: Grid,
    identity: PuzzleIdentity,
}

impl ClassicBoard {
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

    /// Loads a parsed puzzle, replacing the whole grid.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the puzzle was parsed for a different
    /// side or its code does not fit this board's bank. On error the
    /// board is left exactly as it was.
    pub fn load(&mut self, puzzle: &ClassicPuzzle) -> Result<(), LoadError> {
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

    fn install(&mut self, puzzle: &ClassicPuzzle) {
        for (x, row) in puzzle.rows.iter().enumerate() {
            for (y, &value) in row.iter().enumerate() {
                self.grid.place(x, y, value);
            }
        }
        self.identity.assign(puzzle.code);
    }

    /// Picks a puzzle the player has not won yet and loads it.
    ///
    /// The chosen code is uniform over the codes outside the player's
    /// won set (see [`find_unplayed_code`]). A failure to read or decode
    /// the bank is logged and returned; the board keeps its previous
    /// state and the process never crashes over a bad bank record.
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
        let code = find_unplayed_code(
            rng,
            self.identity.puzzle_count(),
            player.classic_codes_won(),
        );
        match parse_classic(source, code, self.grid.side()) {
            Ok(puzzle) => {
                self.install(&puzzle);
                Ok(())
            }
            Err(err) => {
                log::warn!("classic puzzle {code} failed to load: {err}");
                Err(err)
            }
        }
    }
}

impl Board for ClassicBoard {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn check(&mut self, x: usize, y: usize, number: u8) -> MoveOutcome {
        rules::check(&mut self.grid, x, y, number)
    }

    fn hint(&self, x: usize, y: usize) -> NumberSet {
        rules::hint(&self.grid, x, y)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;
    use varidoku_bank::InMemoryPlayer;

    use super::*;

    const BANK: &str = "\
1
0 1 0 0
2 0 0 3
0 0 4 0
0 3 0 0
2
1 0 0 0
0 0 3 0
0 4 0 0
0 0 0 2
3
0 0 0 4
0 0 1 0
0 2 0 0
3 0 0 0
9
4 0 0 0
0 3 0 0
0 0 2 0
0 0 0 1
";

    #[test]
    fn test_new_board_defaults() {
        let board = ClassicBoard::new(9, false).unwrap();
        assert_eq!(board.code(), 0);
        assert_eq!(board.puzzle_count(), 10);
        assert!(!board.finished());
    }

    #[test]
    fn test_setup_errors() {
        assert!(matches!(
            ClassicBoard::new(0, false),
            Err(SetupError::Grid(_))
        ));
        assert!(matches!(
            ClassicBoard::with_puzzle_count(9, false, 0),
            Err(SetupError::Identity(IdentityError::InvalidPuzzleCount))
        ));
    }

    #[test]
    fn test_set_puzzle_count() {
        let mut board = ClassicBoard::new(9, false).unwrap();
        assert_eq!(board.puzzle_count(), 10);
        board.set_puzzle_count(11).unwrap();
        assert_eq!(board.puzzle_count(), 11);
        assert_eq!(
            board.set_puzzle_count(0),
            Err(IdentityError::InvalidPuzzleCount)
        );
    }

    #[test]
    fn test_load_populates_grid() {
        let mut board = ClassicBoard::new(4, false).unwrap();
        let puzzle = parse_classic(BANK.as_bytes(), 1, 4).unwrap();
        board.load(&puzzle).unwrap();

        assert_eq!(board.code(), 1);
        assert_eq!(board.grid().value(0, 1), 1);
        assert_eq!(board.grid().value(1, 0), 2);
        assert_eq!(board.grid().value(1, 3), 3);
        assert_eq!(board.grid().value(0, 0), 0);
    }

    #[test]
    fn test_load_replaces_previous_puzzle() {
        let mut board = ClassicBoard::new(4, false).unwrap();
        board
            .load(&parse_classic(BANK.as_bytes(), 1, 4).unwrap())
            .unwrap();
        board
            .load(&parse_classic(BANK.as_bytes(), 2, 4).unwrap())
            .unwrap();

        assert_eq!(board.code(), 2);
        assert_eq!(board.grid().value(0, 0), 1);
        // cleared by the second load
        assert_eq!(board.grid().value(0, 1), 0);
    }

    #[test]
    fn test_load_side_mismatch() {
        let mut board = ClassicBoard::new(9, false).unwrap();
        let puzzle = parse_classic(BANK.as_bytes(), 1, 4).unwrap();
        assert!(matches!(
            board.load(&puzzle),
            Err(LoadError::SideMismatch {
                puzzle_side: 4,
                board_side: 9,
            })
        ));
        assert_eq!(board.code(), 0);
    }

    #[test]
    fn test_load_code_out_of_range() {
        let mut board = ClassicBoard::with_puzzle_count(4, false, 2).unwrap();
        let puzzle = parse_classic(BANK.as_bytes(), 3, 4).unwrap();
        assert!(matches!(
            board.load(&puzzle),
            Err(LoadError::Identity(IdentityError::CodeOutOfRange {
                code: 3,
                puzzle_count: 2,
            }))
        ));
    }

    #[test]
    fn test_start_new_game_skips_won_codes() {
        let mut player = InMemoryPlayer::new("alex");
        for code in [1, 2, 4, 5, 6, 7, 8, 10] {
            player.record_classic_win(code);
        }
        let mut board = ClassicBoard::new(4, false).unwrap();
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        board
            .start_new_game(BANK.as_bytes(), &player, &mut rng)
            .unwrap();

        assert!(board.code() == 3 || board.code() == 9);
        assert!(board.identity.is_loaded());
    }

    #[test]
    fn test_start_new_game_reports_bad_bank() {
        let mut player = InMemoryPlayer::new("alex");
        for code in [1, 2, 4, 5, 6, 7, 8, 10] {
            player.record_classic_win(code);
        }
        let mut board = ClassicBoard::new(4, false).unwrap();
        board
            .load(&parse_classic(BANK.as_bytes(), 1, 4).unwrap())
            .unwrap();
        let before = board.clone();

        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let result = board.start_new_game("not a bank".as_bytes(), &player, &mut rng);

        assert!(matches!(result, Err(BankError::CodeNotFound { .. })));
        // failed load leaves the previous game intact
        assert_eq!(board, before);
    }

    #[test]
    fn test_check_and_hint_delegate_to_base_rules() {
        let mut board = ClassicBoard::new(9, false).unwrap();
        assert_eq!(board.check(0, 0, 1), MoveOutcome::Placed);
        assert_eq!(board.check(0, 1, 1), MoveOutcome::RowConflict);
        assert_eq!(board.check(0, 10, 4), MoveOutcome::OutOfRange);
        assert!(!board.hint(0, 1).contains(1));
        assert!(board.hint(0, 1).contains(2));
    }

    #[test]
    fn test_finished_when_grid_full() {
        let mut board = ClassicBoard::new(1, false).unwrap();
        assert!(!board.finished());
        assert_eq!(board.check(0, 0, 1), MoveOutcome::Placed);
        assert!(board.finished());
    }
}
