//! Number ↔ display-symbol conversion for lettered ("wordoku") boards.
//!
//! Storage is always numeric; these conversions exist purely for the
//! presentation boundary. Each alphabet is a contiguous code-point range
//! addressed by arithmetic offset from a base, so the mapping works for
//! any board side that fits the range.
//!
//! Invalid inputs are reported through sentinels rather than errors:
//! [`INVALID_SYMBOL`] for number → symbol and [`INVALID_NUMBER`] for
//! symbol → number. Callers must check for them.
//!
//! # Examples
//!
//! ```
//! use varidoku_core::{Alphabet, INVALID_NUMBER, number_to_symbol, symbol_to_number};
//!
//! assert_eq!(number_to_symbol(4, 9, Alphabet::Latin), 'D');
//! assert_eq!(symbol_to_number('d', 9, Alphabet::Latin), 4);
//! assert_eq!(symbol_to_number('%', 9, Alphabet::Latin), INVALID_NUMBER);
//! ```

/// Sentinel returned by [`number_to_symbol`] for out-of-range numbers.
pub const INVALID_SYMBOL: char = '-';

/// Sentinel returned by [`symbol_to_number`] for unmappable symbols.
pub const INVALID_NUMBER: i32 = -1;

/// The symbol range used to render a lettered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    /// Latin capitals starting at `'A'` for 1.
    #[default]
    Latin,
    /// Greek capitals starting at `'Α'` for 1.
    Greek,
}

impl Alphabet {
    /// Code point immediately below the first symbol of the range.
    const fn base(self) -> u32 {
        match self {
            Alphabet::Latin => 0x40,
            Alphabet::Greek => 0x390,
        }
    }
}

/// Maps a number in `1..=side` to its display symbol.
///
/// Out-of-range input (including zero and negatives) yields
/// [`INVALID_SYMBOL`].
#[must_use]
pub fn number_to_symbol(number: i32, side: usize, alphabet: Alphabet) -> char {
    let Ok(number) = u32::try_from(number) else {
        return INVALID_SYMBOL;
    };
    if number < 1 || !usize::try_from(number).is_ok_and(|n| n <= side) {
        return INVALID_SYMBOL;
    }
    char::from_u32(alphabet.base() + number).unwrap_or(INVALID_SYMBOL)
}

/// Maps a display symbol back to its number in `1..=side`.
///
/// The symbol is case-folded first; anything outside the alphabet's valid
/// contiguous range (non-letters, whitespace, letters past `side`) yields
/// [`INVALID_NUMBER`].
#[must_use]
pub fn symbol_to_number(symbol: char, side: usize, alphabet: Alphabet) -> i32 {
    let folded = match alphabet {
        Alphabet::Latin => u32::from(symbol.to_ascii_uppercase()),
        Alphabet::Greek => {
            let code = u32::from(symbol);
            // fold lowercase α..ω onto the uppercase range
            if (0x3B1..=0x3C9).contains(&code) {
                code - 0x20
            } else {
                code
            }
        }
    };
    let Some(number) = folded.checked_sub(alphabet.base()) else {
        return INVALID_NUMBER;
    };
    if number >= 1 && usize::try_from(number).is_ok_and(|n| n <= side) {
        i32::try_from(number).unwrap_or(INVALID_NUMBER)
    } else {
        INVALID_NUMBER
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_number_to_symbol_latin() {
        assert_eq!(number_to_symbol(1, 9, Alphabet::Latin), 'A');
        assert_eq!(number_to_symbol(4, 9, Alphabet::Latin), 'D');
        assert_eq!(number_to_symbol(11, 16, Alphabet::Latin), 'K');

        assert_eq!(number_to_symbol(10, 9, Alphabet::Latin), INVALID_SYMBOL);
        assert_eq!(number_to_symbol(0, 9, Alphabet::Latin), INVALID_SYMBOL);
        assert_eq!(number_to_symbol(-4, 9, Alphabet::Latin), INVALID_SYMBOL);
    }

    #[test]
    fn test_number_to_symbol_greek() {
        assert_eq!(number_to_symbol(1, 9, Alphabet::Greek), 'Α');
        assert_eq!(number_to_symbol(3, 9, Alphabet::Greek), 'Γ');
        assert_eq!(number_to_symbol(11, 16, Alphabet::Greek), 'Λ');

        assert_eq!(number_to_symbol(10, 9, Alphabet::Greek), INVALID_SYMBOL);
        assert_eq!(number_to_symbol(0, 9, Alphabet::Greek), INVALID_SYMBOL);
        assert_eq!(number_to_symbol(-4, 9, Alphabet::Greek), INVALID_SYMBOL);
    }

    #[test]
    fn test_symbol_to_number_latin() {
        assert_eq!(symbol_to_number('b', 9, Alphabet::Latin), 2);
        assert_eq!(symbol_to_number('E', 9, Alphabet::Latin), 5);
        assert_eq!(symbol_to_number('L', 16, Alphabet::Latin), 12);

        assert_eq!(symbol_to_number('9', 9, Alphabet::Latin), INVALID_NUMBER);
        assert_eq!(symbol_to_number(' ', 9, Alphabet::Latin), INVALID_NUMBER);
        assert_eq!(symbol_to_number('P', 9, Alphabet::Latin), INVALID_NUMBER);
        assert_eq!(symbol_to_number('p', 9, Alphabet::Latin), INVALID_NUMBER);
    }

    #[test]
    fn test_symbol_to_number_greek() {
        assert_eq!(symbol_to_number('γ', 9, Alphabet::Greek), 3);
        assert_eq!(symbol_to_number('Δ', 9, Alphabet::Greek), 4);

        assert_eq!(symbol_to_number('Π', 9, Alphabet::Greek), INVALID_NUMBER);
        assert_eq!(symbol_to_number('ψ', 9, Alphabet::Greek), INVALID_NUMBER);
        assert_eq!(symbol_to_number(' ', 9, Alphabet::Greek), INVALID_NUMBER);
        assert_eq!(symbol_to_number('A', 9, Alphabet::Greek), INVALID_NUMBER);
    }

    proptest! {
        #[test]
        fn round_trip_latin(number in 1i32..=25) {
            let symbol = number_to_symbol(number, 25, Alphabet::Latin);
            prop_assert_ne!(symbol, INVALID_SYMBOL);
            prop_assert_eq!(symbol_to_number(symbol, 25, Alphabet::Latin), number);
            prop_assert_eq!(
                symbol_to_number(symbol.to_ascii_lowercase(), 25, Alphabet::Latin),
                number
            );
        }

        #[test]
        fn round_trip_greek(number in 1i32..=25) {
            let symbol = number_to_symbol(number, 25, Alphabet::Greek);
            prop_assert_ne!(symbol, INVALID_SYMBOL);
            prop_assert_eq!(symbol_to_number(symbol, 25, Alphabet::Greek), number);
        }

        #[test]
        fn out_of_range_is_sentinel(number in prop_oneof![-100i32..=0, 10i32..=100]) {
            prop_assert_eq!(number_to_symbol(number, 9, Alphabet::Latin), INVALID_SYMBOL);
            prop_assert_eq!(number_to_symbol(number, 9, Alphabet::Greek), INVALID_SYMBOL);
        }
    }
}
