// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rectangle decomposition engine.
//!
//! Scans a figure for candidate top-left corners in row-major order, traces
//! each candidate's boundary clockwise, and renders every closed rectangle
//! canonically. The grid is read-only throughout; candidates share no state.

mod emit;
mod trace;

#[cfg(test)]
mod tests;

use crate::model::Grid;

/// A closed axis-aligned rectangle in grid coordinates.
///
/// Width and height count characters including both corners; the smallest
/// rectangle is 2×2. Rects are plain values, never mutated after tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    top: usize,
    left: usize,
    width: usize,
    height: usize,
}

impl Rect {
    pub(crate) fn new(top: usize, left: usize, width: usize, height: usize) -> Self {
        debug_assert!(width >= 2 && height >= 2);
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Canonical rendering: border only, blank interior, one `\n` per line
    /// including the last. The source figure's interior does not matter.
    pub fn render(&self) -> String {
        emit::render_block(self.width, self.height)
    }
}

/// Finds every rectangle in `source`, lazily, ordered by the row-major scan
/// position of their top-left corners.
pub fn rectangles(source: &str) -> Rectangles {
    Rectangles {
        grid: Grid::parse(source),
        row: 0,
        col: 0,
    }
}

/// Like [`rectangles`], but yields each rectangle's canonical rendering.
pub fn decompose(source: &str) -> Decomposition {
    Decomposition {
        inner: rectangles(source),
    }
}

/// Lazy scanner over corner candidates; yields only candidates whose
/// boundary trace closes back on itself.
#[derive(Debug, Clone)]
pub struct Rectangles {
    grid: Grid,
    row: usize,
    col: usize,
}

impl Iterator for Rectangles {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        while self.row < self.grid.row_count() {
            let row_len = self.grid.row_len(self.row);
            while self.col < row_len {
                let (row, col) = (self.row, self.col);
                self.col += 1;
                if is_corner_candidate(&self.grid, row, col) {
                    if let Some(rect) = trace::trace_from(&self.grid, row, col) {
                        return Some(rect);
                    }
                }
            }
            self.row += 1;
            self.col = 0;
        }
        None
    }
}

/// Lazy sequence of canonical rectangle renderings.
#[derive(Debug, Clone)]
pub struct Decomposition {
    inner: Rectangles,
}

impl Iterator for Decomposition {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next().map(|rect| rect.render())
    }
}

// A candidate needs a vertical edge below and a horizontal edge to the
// right; everything else about the cell is decided by the trace.
fn is_corner_candidate(grid: &Grid, row: usize, col: usize) -> bool {
    grid.char_at(row, col) == Some('+')
        && matches!(grid.char_at(row + 1, col), Some('|' | '+'))
        && matches!(grid.char_at(row, col + 1), Some('-' | '+'))
}
