// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::memchr_iter;

/// A figure's text split into character rows.
///
/// Rows keep whatever length the source gave them; reads past a row's end or
/// past the last row come back as `None` instead of panicking, so callers can
/// treat ragged input as if it were blank-padded without allocating padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Splits `text` on `\n` into rows. A trailing newline yields a final
    /// empty row, mirroring how line-based editors round-trip the text.
    pub fn parse(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut rows = Vec::new();
        let mut start = 0usize;
        for nl in memchr_iter(b'\n', bytes) {
            rows.push(text[start..nl].chars().collect());
            start = nl + 1;
        }
        rows.push(text[start..].chars().collect());
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of `row` in characters; absent rows have length 0.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.get(col).copied()
    }
}
