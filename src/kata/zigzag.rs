// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Zigzag scan order, as used by JPEG entropy coding.

/// Fills an `n` by `n` matrix with the zigzag traversal order.
///
/// The walk starts in the top-left cell and sweeps anti-diagonals, turning
/// at the borders. Cells on an even anti-diagonal move up-right, cells on an
/// odd one move down-left.
pub fn matrix(n: usize) -> Vec<Vec<usize>> {
    let mut cells = vec![vec![0usize; n]; n];
    if n == 0 {
        return cells;
    }

    let mut row = 1usize;
    let mut col = 1usize;
    for value in 0..n * n {
        cells[row - 1][col - 1] = value;
        if (row + col) % 2 == 0 {
            if col < n {
                col += 1;
            } else {
                row += 2;
            }
            if row > 1 {
                row -= 1;
            }
        } else {
            if row < n {
                row += 1;
            } else {
                col += 2;
            }
            if col > 1 {
                col -= 1;
            }
        }
    }

    cells
}
