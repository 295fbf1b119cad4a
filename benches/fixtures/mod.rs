// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use proteus::decompose::Rect;

pub fn checksum_rects(rects: &[Rect]) -> u64 {
    let mut acc = 0u64;
    for rect in rects {
        acc = acc.wrapping_mul(131).wrapping_add(rect.top() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(rect.left() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(rect.width() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(rect.height() as u64);
    }
    acc
}

pub mod figure {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GridParams {
        pub cell_rows: usize,
        pub cell_cols: usize,
        pub cell_width: usize,
        pub cell_height: usize,
    }

    impl GridParams {
        pub const fn new(
            cell_rows: usize,
            cell_cols: usize,
            cell_width: usize,
            cell_height: usize,
        ) -> Self {
            Self {
                cell_rows,
                cell_cols,
                cell_width,
                cell_height,
            }
        }

        pub const fn rect_count(self) -> usize {
            self.cell_rows * self.cell_cols
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumDense,
        LargeWide,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumDense => "medium_dense",
                Self::LargeWide => "large_wide",
            }
        }

        pub const fn params(self) -> GridParams {
            match self {
                Self::Small => GridParams::new(3, 3, 6, 4),
                Self::MediumDense => GridParams::new(12, 12, 4, 3),
                Self::LargeWide => GridParams::new(20, 40, 8, 3),
            }
        }
    }

    /// Deterministic partition-grid generator.
    ///
    /// - Neighboring cells share their border rows and columns.
    /// - The figure decomposes into exactly `cell_rows * cell_cols` rectangles.
    pub fn grid(params: GridParams) -> String {
        assert!(params.cell_rows >= 1, "cell_rows must be >= 1");
        assert!(params.cell_cols >= 1, "cell_cols must be >= 1");
        assert!(params.cell_width >= 2, "cell_width must be >= 2");
        assert!(params.cell_height >= 2, "cell_height must be >= 2");

        let col_stride = params.cell_width - 1;
        let row_stride = params.cell_height - 1;
        let total_cols = params.cell_cols * col_stride + 1;
        let total_rows = params.cell_rows * row_stride + 1;

        let mut out = String::with_capacity((total_cols + 1) * total_rows);
        for row in 0..total_rows {
            let on_hline = row % row_stride == 0;
            for col in 0..total_cols {
                let on_vline = col % col_stride == 0;
                out.push(match (on_hline, on_vline) {
                    (true, true) => '+',
                    (true, false) => '-',
                    (false, true) => '|',
                    (false, false) => ' ',
                });
            }
            out.push('\n');
        }
        out
    }

    /// Concentric boxes with one blank row and column between consecutive
    /// borders. The figure decomposes into exactly `depth` rectangles.
    pub fn nested(depth: usize) -> String {
        assert!(depth >= 1, "depth must be >= 1");

        let side = 4 * depth;
        let mut canvas = vec![vec![' '; side]; side];
        for level in 0..depth {
            let first = 2 * level;
            let last = side - 1 - 2 * level;
            for col in first..=last {
                canvas[first][col] = '-';
                canvas[last][col] = '-';
            }
            for row in first..=last {
                canvas[row][first] = '|';
                canvas[row][last] = '|';
            }
            for (row, col) in [(first, first), (first, last), (last, first), (last, last)] {
                canvas[row][col] = '+';
            }
        }

        let mut out = String::with_capacity((side + 1) * side);
        for row in canvas {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    pub fn fixture(case: Case) -> String {
        grid(case.params())
    }
}

pub mod kata {
    use proteus::kata::poker::{parse_card, Card};

    /// Digit glyphs as three rows of three characters each.
    const DIGIT_GLYPH_ROWS: [[&str; 3]; 10] = [
        [" _ ", "| |", "|_|"],
        ["   ", "  |", "  |"],
        [" _ ", " _|", "|_ "],
        [" _ ", " _|", " _|"],
        ["   ", "|_|", "  |"],
        [" _ ", "|_ ", " _|"],
        [" _ ", "|_ ", "|_|"],
        [" _ ", "  |", "  |"],
        [" _ ", "|_|", "|_|"],
        [" _ ", "|_|", " _|"],
    ];

    /// Renders a nine-digit account display starting at `start_digit` and
    /// wrapping through the decimal digits.
    pub fn ocr_entry(start_digit: usize) -> String {
        let mut rows = [String::new(), String::new(), String::new()];
        for offset in 0..9 {
            let glyph = DIGIT_GLYPH_ROWS[(start_digit + offset) % 10];
            for (row, segment) in rows.iter_mut().zip(glyph) {
                row.push_str(segment);
            }
        }
        format!("{}\n{}\n{}\n", rows[0], rows[1], rows[2])
    }

    pub fn ocr_entries(count: usize) -> Vec<String> {
        (0..count).map(ocr_entry).collect()
    }

    /// One five-card hand per category, strongest first.
    pub fn poker_hands() -> Vec<[Card; 5]> {
        [
            ["A♠", "K♠", "Q♠", "J♠", "10♠"],
            ["9♣", "9♦", "9♥", "9♠", "2♥"],
            ["8♣", "8♦", "8♥", "3♠", "3♥"],
            ["A♦", "J♦", "8♦", "5♦", "2♦"],
            ["4♣", "5♦", "6♥", "7♠", "8♥"],
            ["7♣", "7♦", "7♥", "K♠", "2♥"],
            ["10♣", "10♦", "4♥", "4♠", "A♥"],
            ["J♣", "J♦", "9♥", "6♠", "2♥"],
            ["K♣", "9♦", "7♥", "5♠", "2♥"],
        ]
        .into_iter()
        .map(|texts| texts.map(|text| parse_card(text).expect("bench card")))
        .collect()
    }

    /// Ascending values with a gap before every seventh element, so the
    /// compressed text alternates runs and standalone items.
    pub fn range_values(len: usize) -> Vec<i64> {
        let mut values = Vec::with_capacity(len);
        let mut current = 0i64;
        for index in 0..len {
            current += if index % 7 == 0 { 3 } else { 1 };
            values.push(current);
        }
        values
    }

    /// A pattern of independent groups; expansion yields one spelling per
    /// combination of alternatives.
    pub fn brace_pattern(groups: usize, alts: usize) -> String {
        assert!(groups >= 1, "groups must be >= 1");
        assert!(alts >= 1, "alts must be >= 1");

        let mut pattern = String::from("base");
        for group in 0..groups {
            pattern.push('{');
            for alt in 0..alts {
                if alt > 0 {
                    pattern.push(',');
                }
                pattern.push_str(&format!("g{group}a{alt}"));
            }
            pattern.push('}');
            pattern.push('-');
        }
        pattern
    }
}
