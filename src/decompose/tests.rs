// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{decompose, rectangles, Rect};
use crate::model::fixtures::{NESTED_BOXES, TWO_CELLS};

fn corners(source: &str) -> Vec<(usize, usize, usize, usize)> {
    rectangles(source)
        .map(|rect| (rect.top(), rect.left(), rect.width(), rect.height()))
        .collect()
}

#[test]
fn no_plus_means_no_rectangles() {
    assert_eq!(corners(""), []);
    assert_eq!(corners("----\n||||\n    "), []);
    assert_eq!(corners("hello\nworld"), []);
}

#[test]
fn minimal_2x2_round_trips() {
    let rects: Vec<Rect> = rectangles("++\n++").collect();
    assert_eq!(rects.len(), 1);

    let rendered = rects[0].render();
    assert_eq!(rendered, "++\n++\n");

    // Scanning the rendering again reproduces the identical block.
    let again: Vec<String> = decompose(&rendered).collect();
    assert_eq!(again, [rendered]);
}

#[test]
fn single_box_matches_its_own_rendering() {
    let source = "\
+-------------+
|             |
|             |
+-------------+";
    let blocks: Vec<String> = decompose(source).collect();
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0],
        "+-------------+\n|             |\n|             |\n+-------------+\n"
    );
}

#[test]
fn two_horizontally_tiled_cells_yield_both_cells() {
    assert_eq!(corners(TWO_CELLS), [(0, 0, 8, 4), (0, 7, 7, 4)]);

    let blocks: Vec<String> = decompose(TWO_CELLS).collect();
    assert_eq!(
        blocks,
        [
            "+------+\n|      |\n|      |\n+------+\n",
            "+-----+\n|     |\n|     |\n+-----+\n",
        ]
    );
}

#[test]
fn two_vertically_tiled_cells_yield_both_cells() {
    let source = "\
+----+
|    |
+----+
|    |
|    |
+----+";
    assert_eq!(corners(source), [(0, 0, 6, 3), (2, 0, 6, 4)]);
}

#[test]
fn partition_grid_yields_one_rectangle_per_cell() {
    let source = "\
+--+--+
|  |  |
+--+--+
|  |  |
+--+--+";
    assert_eq!(
        corners(source),
        [
            (0, 0, 4, 3),
            (0, 3, 4, 3),
            (2, 0, 4, 3),
            (2, 3, 4, 3),
        ]
    );
}

#[test]
fn walk_passes_through_junctions_on_a_straight_edge() {
    // The outer box closes only because the two `+` junctions on its top
    // edge have blank cells below them and are walked through.
    assert_eq!(corners(NESTED_BOXES), [(0, 3, 7, 3), (2, 0, 15, 3)]);
}

#[test]
fn broken_edge_yields_no_rectangle() {
    let source = "\
+--- -+
|     |
+-----+";
    assert_eq!(corners(source), []);
}

#[test]
fn broken_side_yields_no_rectangle() {
    let source = "\
+-----+
|
+-----+";
    assert_eq!(corners(source), []);
}

#[test]
fn foreign_character_breaks_an_edge() {
    let source = "\
+--x--+
|     |
+-----+";
    assert_eq!(corners(source), []);
}

#[test]
fn short_row_breaks_a_side() {
    // The right edge would need row 1 to reach column 5.
    let source = "\
+----+
|
+----+";
    assert_eq!(corners(source), []);
}

#[test]
fn junction_that_cannot_turn_is_not_a_corner() {
    // The `+` at (0, 3) has nothing below it, so the top walk must pass
    // through it and close at (0, 6) instead.
    let source = "\
+--+--+
|     |
+-----+";
    assert_eq!(corners(source), [(0, 0, 7, 3)]);
}

#[test]
fn rescanning_is_idempotent() {
    let first = corners(NESTED_BOXES);
    let second = corners(NESTED_BOXES);
    assert_eq!(first, second);
}

#[test]
fn scan_is_lazy_and_ordered_row_major() {
    let mut iter = rectangles(TWO_CELLS);
    let first = iter.next().expect("first rectangle");
    assert_eq!((first.top(), first.left()), (0, 0));
    let second = iter.next().expect("second rectangle");
    assert_eq!((second.top(), second.left()), (0, 7));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn border_only_rectangles_render_without_interior_rows() {
    let rects: Vec<Rect> = rectangles("+-+\n+-+").collect();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].render(), "+-+\n+-+\n");

    let tall: Vec<Rect> = rectangles("++\n||\n++").collect();
    assert_eq!(tall.len(), 1);
    assert_eq!(tall[0].render(), "++\n||\n++\n");
}

#[test]
fn rendering_ignores_the_figure_interior() {
    let source = "\
+---+
|abc|
+---+";
    let blocks: Vec<String> = decompose(source).collect();
    assert_eq!(blocks, ["+---+\n|   |\n+---+\n"]);
}

#[test]
fn trailing_blank_padding_changes_nothing() {
    let padded = NESTED_BOXES
        .split('\n')
        .map(|row| format!("{row:<15}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(corners(&padded), corners(NESTED_BOXES));
}
