// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Grid;

use super::Rect;

/// Attempts to close a rectangle whose top-left corner is (row, col).
///
/// Four directed walks run clockwise: right along the top edge, down the
/// right edge, left along the bottom, up the left edge. Absence of a
/// rectangle is the normal outcome for junction corners, not an error.
pub(crate) fn trace_from(grid: &Grid, row: usize, col: usize) -> Option<Rect> {
    let right_col = walk_right(grid, row, col)?;
    let bottom_row = walk_down(grid, row, right_col)?;
    let left_col = walk_left(grid, bottom_row, right_col)?;
    let top_row = walk_up(grid, bottom_row, left_col)?;

    if top_row != row || left_col != col {
        return None;
    }

    Some(Rect::new(
        row,
        col,
        right_col - col + 1,
        bottom_row - row + 1,
    ))
}

// Every walk shares one local rule: the next cell must be the edge character
// being traced or a `+`; anything else (space, foreign character, out of
// bounds) means the boundary is broken. A `+` ends the walk only when the
// next clockwise edge can leave from it; a `+` on a straight run is a
// junction of some other rectangle and the walk passes through.

fn walk_right(grid: &Grid, row: usize, start_col: usize) -> Option<usize> {
    let mut col = start_col + 1;
    loop {
        match grid.char_at(row, col)? {
            '+' if matches!(grid.char_at(row + 1, col), Some('|' | '+')) => return Some(col),
            '+' | '-' => col += 1,
            _ => return None,
        }
    }
}

fn walk_down(grid: &Grid, start_row: usize, col: usize) -> Option<usize> {
    let mut row = start_row + 1;
    loop {
        match grid.char_at(row, col)? {
            '+' if col > 0 && matches!(grid.char_at(row, col - 1), Some('-' | '+')) => {
                return Some(row)
            }
            '+' | '|' => row += 1,
            _ => return None,
        }
    }
}

fn walk_left(grid: &Grid, row: usize, start_col: usize) -> Option<usize> {
    let mut col = start_col.checked_sub(1)?;
    loop {
        match grid.char_at(row, col)? {
            '+' if row > 0 && matches!(grid.char_at(row - 1, col), Some('|' | '+')) => {
                return Some(col)
            }
            '+' | '-' => col = col.checked_sub(1)?,
            _ => return None,
        }
    }
}

fn walk_up(grid: &Grid, start_row: usize, col: usize) -> Option<usize> {
    let mut row = start_row.checked_sub(1)?;
    loop {
        match grid.char_at(row, col)? {
            '+' if matches!(grid.char_at(row, col + 1), Some('-' | '+')) => return Some(row),
            '+' | '|' => row = row.checked_sub(1)?,
            _ => return None,
        }
    }
}
