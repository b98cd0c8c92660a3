//! Selection of a puzzle the player has not already won.

use std::collections::HashSet;

use rand::{Rng, RngExt};

/// Picks a puzzle code in `1..=puzzle_count` outside `won_codes`.
///
/// When `won_codes` is empty, or already covers every code in range, any
/// code is returned uniformly at random. Otherwise codes are resampled
/// uniformly until one lands outside the won set; there is no iteration
/// bound, which is acceptable because the won set is a strict subset of a
/// small range.
///
/// The random source is injected so callers can seed it; pass
/// `&mut rand::rng()` for ordinary use.
///
/// # Panics
///
/// Panics if `puzzle_count` is zero.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use varidoku_bank::find_unplayed_code;
///
/// let won: HashSet<u32> = [1, 2, 3].into_iter().collect();
/// let code = find_unplayed_code(&mut rand::rng(), 4, &won);
/// assert_eq!(code, 4);
/// ```
pub fn find_unplayed_code<R: Rng>(rng: &mut R, puzzle_count: u32, won_codes: &HashSet<u32>) -> u32 {
    assert!(puzzle_count > 0, "puzzle count must be positive");
    let exhausted = (1..=puzzle_count).all(|code| won_codes.contains(&code));
    if won_codes.is_empty() || exhausted {
        return rng.random_range(1..=puzzle_count);
    }
    loop {
        let code = rng.random_range(1..=puzzle_count);
        if !won_codes.contains(&code) {
            return code;
        }
    }
}
