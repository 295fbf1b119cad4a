// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Range compression for sorted integer lists.

/// Compresses a sorted list of integers into conventional range text.
///
/// Runs of three or more consecutive values collapse to `first-last`;
/// pairs and singletons are written out unchanged. Items join with `,`.
pub fn compress(values: &[i64]) -> String {
    let mut out = String::new();
    let mut digits = itoa::Buffer::new();
    let mut index = 0;

    while index < values.len() {
        let mut end = index;
        while end + 1 < values.len() && values[end + 1].checked_sub(values[end]) == Some(1) {
            end += 1;
        }

        if !out.is_empty() {
            out.push(',');
        }
        match end - index {
            0 => out.push_str(digits.format(values[index])),
            1 => {
                out.push_str(digits.format(values[index]));
                out.push(',');
                out.push_str(digits.format(values[end]));
            }
            _ => {
                out.push_str(digits.format(values[index]));
                out.push('-');
                out.push_str(digits.format(values[end]));
            }
        }

        index = end + 1;
    }

    out
}
