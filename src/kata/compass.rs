// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The thirty-two point compass rose.

use smol_str::{format_smolstr, SmolStr};

/// Angular distance between two adjacent points on the rose.
const STEP_DEGREES: f64 = 11.25;

/// Cardinal sides in clockwise order, starting from north.
const SIDES: [char; 4] = ['N', 'E', 'S', 'W'];

/// A single named direction with its azimuth in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct CompassPoint {
    abbreviation: SmolStr,
    azimuth: f64,
}

impl CompassPoint {
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }
}

/// Builds the full rose clockwise from north.
///
/// Each quarter between two cardinal sides contributes eight points whose
/// names follow the same shape: the near side, its by-point, the half-wind
/// toward the ordinal, the ordinal's by-points on both flanks, and the
/// mirrored trio approaching the far side. Ordinal names always put the
/// north/south side first (NE, SE, SW, NW).
pub fn points() -> Vec<CompassPoint> {
    let mut rose = Vec::with_capacity(32);

    for quarter in 0..4 {
        let near = SIDES[quarter];
        let far = SIDES[(quarter + 1) % 4];
        let ordinal = if quarter % 2 == 0 {
            format_smolstr!("{near}{far}")
        } else {
            format_smolstr!("{far}{near}")
        };

        let names: [SmolStr; 8] = [
            format_smolstr!("{near}"),
            format_smolstr!("{near}b{far}"),
            format_smolstr!("{near}{ordinal}"),
            format_smolstr!("{ordinal}b{near}"),
            ordinal.clone(),
            format_smolstr!("{ordinal}b{far}"),
            format_smolstr!("{far}{ordinal}"),
            format_smolstr!("{far}b{near}"),
        ];

        for (offset, abbreviation) in names.into_iter().enumerate() {
            let index = quarter * 8 + offset;
            rose.push(CompassPoint { abbreviation, azimuth: index as f64 * STEP_DEGREES });
        }
    }

    rose
}
