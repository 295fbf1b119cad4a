// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Greedy word wrapping.

/// Lazy line iterator produced by [`lines`].
pub struct Lines<'a> {
    words: std::str::Split<'a, char>,
    carry: Option<&'a str>,
    columns: usize,
}

/// Wraps `text` at `columns` characters, greedily packing words.
///
/// A word moves to the next line when appending it (with its separating
/// space) would exceed the column budget. A word longer than the budget
/// occupies a line of its own. Widths count characters, not bytes.
pub fn lines(text: &str, columns: usize) -> Lines<'_> {
    let mut words = text.split(' ');
    let carry = words.next();
    Lines { words, carry, columns }
}

impl<'a> Iterator for Lines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut line = String::from(self.carry.take()?);
        let mut width = line.chars().count();

        for word in self.words.by_ref() {
            let word_width = word.chars().count();
            if width + 1 + word_width <= self.columns {
                line.push(' ');
                line.push_str(word);
                width += 1 + word_width;
            } else {
                self.carry = Some(word);
                return Some(line);
            }
        }

        Some(line)
    }
}
