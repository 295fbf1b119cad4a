// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lazy sequence katas: song lyrics, Fibonacci, sorted merges.

/// Total lines in the song: one hundred verses of two lines each.
const SONG_LINES: usize = 200;

/// Line-by-line iterator over the "99 bottles of beer" lyrics.
pub struct BottlesOfBeer {
    line: usize,
}

/// Yields the canonical lyrics, two lines per verse, 200 lines in all.
pub fn bottles_of_beer() -> BottlesOfBeer {
    BottlesOfBeer { line: 0 }
}

fn quantity(count: usize) -> String {
    match count {
        0 => "no more bottles".to_owned(),
        1 => "1 bottle".to_owned(),
        n => format!("{n} bottles"),
    }
}

impl Iterator for BottlesOfBeer {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.line >= SONG_LINES {
            return None;
        }

        let verse = self.line / 2;
        let second = self.line % 2 == 1;
        self.line += 1;

        let bottles = 99 - verse;
        let text = match (bottles, second) {
            (0, false) => "No more bottles of beer on the wall, no more bottles of beer.".to_owned(),
            (0, true) => "Go to the store and buy some more, 99 bottles of beer on the wall.".to_owned(),
            (n, false) => format!("{0} of beer on the wall, {0} of beer.", quantity(n)),
            (n, true) => {
                format!("Take one down and pass it around, {} of beer on the wall.", quantity(n - 1))
            }
        };

        Some(text)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SONG_LINES - self.line;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BottlesOfBeer {}

/// Fibonacci numbers in `u64`, starting from zero.
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

/// Yields 0, 1, 1, 2, 3, 5, ... and ends just before `u64` overflow.
pub fn fibonacci() -> Fibonacci {
    Fibonacci { current: Some(0), next: Some(1) }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.current?;
        self.current = self.next;
        self.next = self.next.and_then(|following| following.checked_add(value));
        Some(value)
    }
}

/// Lazy merge of two sorted sources, produced by [`merge_sorted`].
pub struct MergeSorted<L: Iterator, R: Iterator> {
    left: L,
    right: R,
    left_head: Option<L::Item>,
    right_head: Option<L::Item>,
}

/// Merges two individually sorted iterators into one sorted iterator.
///
/// Pulls one element at a time, so either source may be unbounded. Equal
/// heads surface the right-hand element first.
pub fn merge_sorted<L, R>(left: L, right: R) -> MergeSorted<L::IntoIter, R::IntoIter>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
    L::Item: Ord,
{
    MergeSorted {
        left: left.into_iter(),
        right: right.into_iter(),
        left_head: None,
        right_head: None,
    }
}

impl<L, R> Iterator for MergeSorted<L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
    L::Item: Ord,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<L::Item> {
        if self.left_head.is_none() {
            self.left_head = self.left.next();
        }
        if self.right_head.is_none() {
            self.right_head = self.right.next();
        }

        match (&self.left_head, &self.right_head) {
            (Some(a), Some(b)) if a < b => self.left_head.take(),
            (Some(_), Some(_)) | (None, Some(_)) => self.right_head.take(),
            (Some(_), None) => self.left_head.take(),
            (None, None) => None,
        }
    }
}
