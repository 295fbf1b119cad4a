// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus — ASCII-figure workbench (rectangle decomposition + MCP + TUI).
//!
//! The decomposition engine recovers the elementary rectangles of a `+`/`-`/`|`
//! figure; everything else in the crate is the workbench around it.

pub mod decompose;
pub mod kata;
pub mod mcp;
pub mod model;
pub mod tui;
pub mod ui;
