// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A workbench holds named figures; a figure is just text until the
//! decomposition engine is asked about it.

pub mod figure;
pub(crate) mod fixtures;
pub mod grid;
pub mod ids;
pub mod workbench;

pub use figure::Figure;
pub use grid::Grid;
pub use ids::{FigureId, Id, IdError};
pub use workbench::Workbench;
