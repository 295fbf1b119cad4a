// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::figure::Figure;
use super::ids::FigureId;

fn fid(value: &str) -> FigureId {
    FigureId::new(value).expect("figure id")
}

/// Two side-by-side cells sharing a vertical edge.
pub(crate) const TWO_CELLS: &str = "\
+------+-----+
|      |     |
|      |     |
+------+-----+";

/// A small box riding on a wider one; the shared edge carries two junctions.
pub(crate) const NESTED_BOXES: &str = "   +-----+
   |     |
+--+-----+----+
|             |
+-------------+";

pub(crate) fn demo_figures() -> Vec<Figure> {
    vec![
        Figure::new(fid("two-cells"), "Two cells", TWO_CELLS),
        Figure::new(fid("nested-boxes"), "Nested boxes", NESTED_BOXES),
    ]
}
