// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bank-account OCR for seven-segment style displays.

use std::fmt;

const GLYPH_ROWS: usize = 3;
const GLYPH_COLS: usize = 3;
const ACCOUNT_DIGITS: usize = 9;

/// Digit glyphs, each flattened from three rows of three characters.
const GLYPHS: [&str; 10] = [
    " _ | ||_|",
    "     |  |",
    " _  _||_ ",
    " _  _| _|",
    "   |_|  |",
    " _ |_  _|",
    " _ |_ |_|",
    " _   |  |",
    " _ |_||_|",
    " _ |_| _|",
];

/// A decoded nine-digit account number.
///
/// [`AccountNumber::value`] folds the digits into a number, which drops
/// leading zeros; the `Display` form keeps them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountNumber {
    digits: [u8; ACCOUNT_DIGITS],
}

impl AccountNumber {
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn value(&self) -> u64 {
        self.digits.iter().fold(0, |acc, &digit| acc * 10 + u64::from(digit))
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OcrError {
    WrongRowCount { found: usize },
    WrongDigitCount { found: usize },
    UnknownGlyph { index: usize, glyph: String },
}

impl fmt::Display for OcrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongRowCount { found } => {
                write!(f, "display must have {GLYPH_ROWS} rows, found {found}")
            }
            Self::WrongDigitCount { found } => {
                write!(f, "display must carry {ACCOUNT_DIGITS} digits, found {found}")
            }
            Self::UnknownGlyph { index, glyph } => {
                write!(f, "unrecognized glyph at digit {index}: {glyph:?}")
            }
        }
    }
}

impl std::error::Error for OcrError {}

/// Decodes a scanned display of three text rows, three columns per digit.
///
/// Rows shorter than the widest one read as space-padded. A trailing
/// newline on the last row is tolerated.
pub fn parse_account(text: &str) -> Result<AccountNumber, OcrError> {
    let mut rows: Vec<&str> = text.split('\n').collect();
    if rows.last() == Some(&"") {
        rows.pop();
    }
    if rows.len() != GLYPH_ROWS {
        return Err(OcrError::WrongRowCount { found: rows.len() });
    }

    let readings: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
    let widest = readings.iter().map(Vec::len).max().unwrap_or(0);
    let cells = (widest + GLYPH_COLS - 1) / GLYPH_COLS;
    if cells != ACCOUNT_DIGITS {
        return Err(OcrError::WrongDigitCount { found: cells });
    }

    let mut digits = [0u8; ACCOUNT_DIGITS];
    for (index, slot) in digits.iter_mut().enumerate() {
        let mut glyph = String::with_capacity(GLYPH_ROWS * GLYPH_COLS);
        for row in &readings {
            for offset in 0..GLYPH_COLS {
                glyph.push(*row.get(index * GLYPH_COLS + offset).unwrap_or(&' '));
            }
        }

        match GLYPHS.iter().position(|&known| known == glyph) {
            Some(digit) => *slot = digit as u8,
            None => return Err(OcrError::UnknownGlyph { index, glyph }),
        }
    }

    Ok(AccountNumber { digits })
}
