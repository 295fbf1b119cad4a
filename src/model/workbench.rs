// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::figure::Figure;
use super::ids::FigureId;

/// The top-level container the TUI and MCP server run against.
///
/// Every mutating operation bumps `rev`, so observers can poll a single
/// counter instead of diffing figure maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbench {
    figures: BTreeMap<FigureId, Figure>,
    active_figure_id: Option<FigureId>,
    rev: u64,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbench {
    pub fn new() -> Self {
        Self {
            figures: BTreeMap::new(),
            active_figure_id: None,
            rev: 0,
        }
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn figures(&self) -> &BTreeMap<FigureId, Figure> {
        &self.figures
    }

    pub fn figure_ids(&self) -> impl Iterator<Item = &FigureId> {
        self.figures.keys()
    }

    pub fn figure(&self, figure_id: &FigureId) -> Option<&Figure> {
        self.figures.get(figure_id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Figure> {
        self.figures.values().find(|figure| figure.name() == name)
    }

    pub fn active_figure_id(&self) -> Option<&FigureId> {
        self.active_figure_id.as_ref()
    }

    pub fn active_figure(&self) -> Option<&Figure> {
        let figure_id = self.active_figure_id.as_ref()?;
        self.figures.get(figure_id)
    }

    /// Inserts or replaces a figure under its own id.
    pub fn upsert_figure(&mut self, figure: Figure) {
        self.figures.insert(figure.figure_id().clone(), figure);
        self.bump_rev();
    }

    /// Replaces `figure_id`'s source; returns false when the id is unknown.
    pub fn set_figure_source(&mut self, figure_id: &FigureId, source: impl Into<String>) -> bool {
        let Some(figure) = self.figures.get_mut(figure_id) else {
            return false;
        };
        figure.set_source(source);
        self.bump_rev();
        true
    }

    /// Removes a figure; the active id is cleared when it pointed at it.
    pub fn remove_figure(&mut self, figure_id: &FigureId) -> Option<Figure> {
        let removed = self.figures.remove(figure_id)?;
        if self.active_figure_id.as_ref() == Some(figure_id) {
            self.active_figure_id = None;
        }
        self.bump_rev();
        Some(removed)
    }

    pub fn set_active_figure_id(&mut self, figure_id: Option<FigureId>) {
        if self.active_figure_id == figure_id {
            return;
        }
        self.active_figure_id = figure_id;
        self.bump_rev();
    }

    fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }
}
