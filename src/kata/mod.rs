// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Small self-contained exercises bundled with the workbench, plus a
//! registry so clients can discover them by name or free-text query.

pub mod braces;
pub mod compass;
pub mod dominoes;
pub mod ocr;
pub mod poker;
pub mod ranges;
pub mod sequences;
pub mod trees;
pub mod wrap;
pub mod zigzag;

use smol_str::SmolStr;

/// Registry entry describing one kata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KataInfo {
    name: SmolStr,
    title: &'static str,
    summary: &'static str,
}

impl KataInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn summary(&self) -> &'static str {
        self.summary
    }
}

fn entry(name: &'static str, title: &'static str, summary: &'static str) -> KataInfo {
    KataInfo { name: SmolStr::new_static(name), title, summary }
}

/// Every kata the workbench exposes, in registry order.
pub fn katas() -> Vec<KataInfo> {
    vec![
        entry("compass", "Compass rose", "All 32 named points with their azimuths."),
        entry("braces", "Brace expansion", "Expands {a,b} alternation groups in a pattern."),
        entry("zigzag", "Zigzag matrix", "JPEG-style scan order for an n by n matrix."),
        entry("dominoes", "Domino chain", "Whether a tile set can be laid in one unbroken row."),
        entry("ranges", "Range compression", "Compresses sorted integers into a-b notation."),
        entry("wrap", "Word wrap", "Greedy column-bounded line wrapping."),
        entry(
            "poker",
            "Poker hand rank",
            "Classifies a five-card hand from high card to straight flush.",
        ),
        entry("ocr", "Account OCR", "Decodes seven-segment style bank account displays."),
        entry("sequences", "Lazy sequences", "99 bottles, Fibonacci and sorted-merge iterators."),
        entry("trees", "Tree traversals", "Depth-first and breadth-first walks without recursion."),
    ]
}

/// A registry hit with its relevance score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KataMatch {
    info: KataInfo,
    score: i64,
}

impl KataMatch {
    pub fn info(&self) -> &KataInfo {
        &self.info
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

const SEARCH_CUTOFF: i64 = 100;

/// Ranks katas against a free-text query, best match first.
///
/// A kata qualifies when the query is a character subsequence of its
/// name, title and summary; qualifying katas are scored with substring
/// and adjacency boosts plus a `rapidfuzz` ratio, and hits under the
/// cutoff are dropped.
pub fn search(query: &str, limit: usize) -> Vec<KataMatch> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<KataMatch> = katas()
        .into_iter()
        .filter_map(|info| {
            let haystack =
                format!("{} {} {}", info.name, info.title, info.summary).to_lowercase();
            let score = fuzzy_score(&needle, &haystack)?;
            (score >= SEARCH_CUTOFF).then_some(KataMatch { info, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.info.name.cmp(&b.info.name)));
    matches.truncate(limit);
    matches
}

struct SubsequenceHit {
    first: usize,
    last: usize,
    consecutive: usize,
    on_boundary: bool,
}

fn subsequence_hit(needle: &str, haystack: &str) -> Option<SubsequenceHit> {
    let mut wanted = needle.chars().peekable();
    let mut hit = SubsequenceHit { first: 0, last: 0, consecutive: 0, on_boundary: false };
    let mut started = false;
    let mut previous_index: Option<usize> = None;
    let mut previous_char: Option<char> = None;

    for (index, ch) in haystack.chars().enumerate() {
        let Some(&want) = wanted.peek() else {
            break;
        };

        if ch == want {
            wanted.next();
            if !started {
                started = true;
                hit.first = index;
                hit.on_boundary =
                    previous_char.map_or(true, |prev| matches!(prev, ' ' | '-' | '_' | '.'));
            }
            if previous_index.is_some_and(|prev| prev + 1 == index) {
                hit.consecutive += 1;
            }
            previous_index = Some(index);
            hit.last = index;
        }

        previous_char = Some(ch);
    }

    wanted.peek().is_none().then_some(hit)
}

/// Scores how well a lowercase needle matches a lowercase haystack.
/// Shared with the TUI palette, which ranks figures the same way.
pub(crate) fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    let hit = subsequence_hit(needle, haystack)?;
    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());

    let mut score = ratio.round() as i64;
    score += if haystack.contains(needle) { 200 } else { 50 };
    score += (hit.consecutive as i64) * 10;
    if hit.on_boundary {
        score += 50;
    }
    score -= (hit.first as i64) / 4;
    score -= (hit.last.saturating_sub(hit.first) as i64) / 2;

    Some(score)
}
