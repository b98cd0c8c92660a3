//! Parsing of the classic and killer puzzle-bank record formats.
//!
//! Both formats share the same envelope: a line holding the decimal code
//! of the record, followed by `side` lines of `side` whitespace-separated
//! integers. For classic records the integers are cell values (0 = blank);
//! for killer records they are region ids, and one further line holds the
//! comma-separated `"<regionId> <sum>"` target-sum table.
//!
//! Records are scanned linearly and the first matching header wins. All
//! failures come back as [`BankError`] values; nothing here panics on bad
//! input, and a malformed record produces no partial puzzle.

use std::{
    collections::HashMap,
    io::{self, BufRead},
};

/// Error produced while locating or decoding a bank record.
///
/// These are recoverable by design: a bad record degrades a single load,
/// and the caller decides whether and how to surface it.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum BankError {
    /// Reading from the underlying source failed.
    #[from]
    #[display("failed to read puzzle source: {_0}")]
    Io(io::Error),
    /// No record in the source carries the requested code.
    #[display("no puzzle with code {code} in source")]
    CodeNotFound {
        /// The requested puzzle code.
        code: u32,
    },
    /// The source ended before the record was complete.
    #[display("puzzle {code} is truncated")]
    Truncated {
        /// The requested puzzle code.
        code: u32,
    },
    /// A grid row held the wrong number of cells.
    #[display("puzzle {code}, row {row}: expected {expected} cells, found {found}")]
    RowLength {
        /// The requested puzzle code.
        code: u32,
        /// Zero-based row within the record.
        row: usize,
        /// Expected cell count (the board side).
        expected: usize,
        /// Cell count actually present.
        found: usize,
    },
    /// A grid cell was not a decimal integer.
    #[display("puzzle {code}, row {row}: invalid cell {token:?}")]
    BadCell {
        /// The requested puzzle code.
        code: u32,
        /// Zero-based row within the record.
        row: usize,
        /// The offending token.
        token: String,
    },
    /// A cell value exceeded the board side.
    #[display("puzzle {code}, row {row}: cell value {value} exceeds side {side}")]
    CellOutOfRange {
        /// The requested puzzle code.
        code: u32,
        /// Zero-based row within the record.
        row: usize,
        /// The offending value.
        value: u8,
        /// The board side.
        side: usize,
    },
    /// A target-sum entry was not a `"<regionId> <sum>"` pair.
    #[display("puzzle {code}: malformed region sum entry {token:?}")]
    BadRegionEntry {
        /// The requested puzzle code.
        code: u32,
        /// The offending entry.
        token: String,
    },
    /// A region id appears in the grid but has no target sum.
    #[display("puzzle {code}: region {region} has no target sum")]
    MissingRegionSum {
        /// The requested puzzle code.
        code: u32,
        /// The region id without a sum.
        region: u32,
    },
}

/// A validated classic record: initial cell values, 0 = blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicPuzzle {
    /// The record's 1-based code.
    pub code: u32,
    /// The board side the record was read for.
    pub side: usize,
    /// Cell values, row by row.
    pub rows: Vec<Vec<u8>>,
}

/// A validated killer record: region map plus target sums.
///
/// Killer boards start with an empty grid; the record only describes the
/// colored regions and the sum each region must reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillerPuzzle {
    /// The record's 1-based code.
    pub code: u32,
    /// The board side the record was read for.
    pub side: usize,
    /// Region ids, row by row.
    pub region_rows: Vec<Vec<u32>>,
    /// Required sum per region id; covers every id in `region_rows`.
    pub target_sums: HashMap<u32, u32>,
}

/// Scans `source` for the classic record with the given code.
///
/// # Errors
///
/// Returns [`BankError::CodeNotFound`] when no record matches, and the
/// other [`BankError`] variants for I/O failures or malformed records.
pub fn parse_classic<R: BufRead>(
    source: R,
    code: u32,
    side: usize,
) -> Result<ClassicPuzzle, BankError> {
    let mut lines = source.lines();
    let header = code.to_string();
    while let Some(line) = lines.next() {
        if line?.trim_end() != header {
            continue;
        }
        let rows = read_rows(&mut lines, code, side, |token, row| {
            let value: u8 = token.parse().map_err(|_| BankError::BadCell {
                code,
                row,
                token: token.to_owned(),
            })?;
            if usize::from(value) > side {
                return Err(BankError::CellOutOfRange {
                    code,
                    row,
                    value,
                    side,
                });
            }
            Ok(value)
        })?;
        return Ok(ClassicPuzzle { code, side, rows });
    }
    Err(BankError::CodeNotFound { code })
}

/// Scans `source` for the killer record with the given code.
///
/// # Errors
///
/// Returns [`BankError::CodeNotFound`] when no record matches, and the
/// other [`BankError`] variants for I/O failures or malformed records —
/// including [`BankError::MissingRegionSum`] when the region map names a
/// region the sum table does not cover.
pub fn parse_killer<R: BufRead>(
    source: R,
    code: u32,
    side: usize,
) -> Result<KillerPuzzle, BankError> {
    let mut lines = source.lines();
    let header = code.to_string();
    while let Some(line) = lines.next() {
        if line?.trim_end() != header {
            continue;
        }
        let region_rows = read_rows(&mut lines, code, side, |token, row| {
            token.parse::<u32>().map_err(|_| BankError::BadCell {
                code,
                row,
                token: token.to_owned(),
            })
        })?;
        let target_sums = read_target_sums(&mut lines, code)?;
        for &region in region_rows.iter().flatten() {
            if !target_sums.contains_key(&region) {
                return Err(BankError::MissingRegionSum { code, region });
            }
        }
        return Ok(KillerPuzzle {
            code,
            side,
            region_rows,
            target_sums,
        });
    }
    Err(BankError::CodeNotFound { code })
}

fn read_rows<T>(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    code: u32,
    side: usize,
    mut parse_cell: impl FnMut(&str, usize) -> Result<T, BankError>,
) -> Result<Vec<Vec<T>>, BankError> {
    let mut rows = Vec::with_capacity(side);
    for row in 0..side {
        let line = lines.next().ok_or(BankError::Truncated { code })??;
        let cells = line
            .split_whitespace()
            .map(|token| parse_cell(token, row))
            .collect::<Result<Vec<_>, _>>()?;
        if cells.len() != side {
            return Err(BankError::RowLength {
                code,
                row,
                expected: side,
                found: cells.len(),
            });
        }
        rows.push(cells);
    }
    Ok(rows)
}

fn read_target_sums(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    code: u32,
) -> Result<HashMap<u32, u32>, BankError> {
    let line = lines.next().ok_or(BankError::Truncated { code })??;
    let mut sums = HashMap::new();
    for entry in line.split(',') {
        if entry.trim().is_empty() {
            continue;
        }
        let bad_entry = || BankError::BadRegionEntry {
            code,
            token: entry.to_owned(),
        };
        let mut parts = entry.split_whitespace();
        let (Some(region), Some(sum), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(bad_entry());
        };
        let region: u32 = region.parse().map_err(|_| bad_entry())?;
        let sum: u32 = sum.parse().map_err(|_| bad_entry())?;
        sums.insert(region, sum);
    }
    Ok(sums)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC_BANK: &str = "\
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
";

    const KILLER_BANK: &str = "\
1
1 1 2 2
1 3 3 2
4 4 3 5
4 5 5 5
1 10,2 15,3 9,4 10,5 16
";

    #[test]
    fn test_parse_classic_finds_record() {
        let puzzle = parse_classic(CLASSIC_BANK.as_bytes(), 1, 4).unwrap();
        assert_eq!(puzzle.code, 1);
        assert_eq!(puzzle.rows[0], vec![0, 1, 0, 0]);
        assert_eq!(puzzle.rows[3], vec![0, 3, 0, 0]);

        let puzzle = parse_classic(CLASSIC_BANK.as_bytes(), 2, 4).unwrap();
        assert_eq!(puzzle.rows[0], vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_parse_classic_code_not_found() {
        let result = parse_classic(CLASSIC_BANK.as_bytes(), 7, 4);
        assert!(matches!(result, Err(BankError::CodeNotFound { code: 7 })));
    }

    #[test]
    fn test_parse_classic_truncated() {
        let bank = "1\n0 1 0 0\n2 0 0 3\n";
        let result = parse_classic(bank.as_bytes(), 1, 4);
        assert!(matches!(result, Err(BankError::Truncated { code: 1 })));
    }

    #[test]
    fn test_parse_classic_bad_cell() {
        let bank = "1\n0 1 0 0\n2 x 0 3\n0 0 4 0\n0 3 0 0\n";
        let result = parse_classic(bank.as_bytes(), 1, 4);
        assert!(matches!(
            result,
            Err(BankError::BadCell { code: 1, row: 1, ref token }) if token == "x"
        ));
    }

    #[test]
    fn test_parse_classic_row_length() {
        let bank = "1\n0 1 0 0\n2 0 0\n0 0 4 0\n0 3 0 0\n";
        let result = parse_classic(bank.as_bytes(), 1, 4);
        assert!(matches!(
            result,
            Err(BankError::RowLength {
                code: 1,
                row: 1,
                expected: 4,
                found: 3,
            })
        ));
    }

    #[test]
    fn test_parse_classic_cell_out_of_range() {
        let bank = "1\n0 1 0 0\n2 0 0 5\n0 0 4 0\n0 3 0 0\n";
        let result = parse_classic(bank.as_bytes(), 1, 4);
        assert!(matches!(
            result,
            Err(BankError::CellOutOfRange {
                code: 1,
                row: 1,
                value: 5,
                side: 4,
            })
        ));
    }

    #[test]
    fn test_parse_killer_reads_sums() {
        let puzzle = parse_killer(KILLER_BANK.as_bytes(), 1, 4).unwrap();
        assert_eq!(puzzle.region_rows[0], vec![1, 1, 2, 2]);
        assert_eq!(puzzle.region_rows[2], vec![4, 4, 3, 5]);
        assert_eq!(puzzle.target_sums[&2], 15);
        assert_eq!(puzzle.target_sums[&5], 16);
        assert_eq!(puzzle.target_sums.len(), 5);
    }

    #[test]
    fn test_parse_killer_missing_sum() {
        let bank = "\
1
1 1 2 2
1 3 3 2
4 4 3 5
4 5 5 5
1 10,2 15,3 9,4 10
";
        let result = parse_killer(bank.as_bytes(), 1, 4);
        assert!(matches!(
            result,
            Err(BankError::MissingRegionSum { code: 1, region: 5 })
        ));
    }

    #[test]
    fn test_parse_killer_bad_entry() {
        let bank = "\
1
1 1 2 2
1 3 3 2
4 4 3 5
4 5 5 5
1 10,2,3 9,4 10,5 16
";
        let result = parse_killer(bank.as_bytes(), 1, 4);
        assert!(matches!(
            result,
            Err(BankError::BadRegionEntry { code: 1, ref token }) if token == "2"
        ));
    }

    #[test]
    fn test_parse_killer_tolerates_trailing_comma() {
        let bank = "\
1
1 1 2 2
1 3 3 2
4 4 3 5
4 5 5 5
1 10,2 15,3 9,4 10,5 16,
";
        assert!(parse_killer(bank.as_bytes(), 1, 4).is_ok());
    }

    #[test]
    fn test_first_matching_record_wins() {
        let bank = "\
1
0 0 0 0
0 0 0 0
0 0 0 0
0 1 0 0
1
4 0 0 0
0 0 0 0
0 0 0 0
0 0 0 0
";
        let puzzle = parse_classic(bank.as_bytes(), 1, 4).unwrap();
        assert_eq!(puzzle.rows[3], vec![0, 1, 0, 0]);
        assert_eq!(puzzle.rows[0], vec![0, 0, 0, 0]);
    }
}
