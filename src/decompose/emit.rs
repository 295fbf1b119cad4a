// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Canonical rendering of a closed rectangle: border only, interior blank,
/// every line `\n`-terminated. Width and height include the corners.
pub(crate) fn render_block(width: usize, height: usize) -> String {
    debug_assert!(width >= 2 && height >= 2);

    let mut out = String::with_capacity((width + 1) * height);
    push_line(&mut out, '+', '-', width);
    for _ in 0..height.saturating_sub(2) {
        push_line(&mut out, '|', ' ', width);
    }
    push_line(&mut out, '+', '-', width);
    out
}

fn push_line(out: &mut String, corner: char, fill: char, width: usize) {
    out.push(corner);
    for _ in 0..width.saturating_sub(2) {
        out.push(fill);
    }
    out.push(corner);
    out.push('\n');
}
