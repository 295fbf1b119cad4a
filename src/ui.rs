// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared UI state for cross-component coordination.
//!
//! This lightweight state propagates selection context between the
//! interactive TUI and programmatic integrations (MCP).

use crate::model::FigureId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    rev: u64,
    human_active_figure_id: Option<FigureId>,
    human_selected_rect: Option<usize>,
    follow_ai: bool,
    workbench_rev: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            rev: 0,
            human_active_figure_id: None,
            human_selected_rect: None,
            follow_ai: true,
            workbench_rev: 0,
        }
    }
}

impl UiState {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn human_active_figure_id(&self) -> Option<&FigureId> {
        self.human_active_figure_id.as_ref()
    }

    pub fn human_selected_rect(&self) -> Option<usize> {
        self.human_selected_rect
    }

    pub fn follow_ai(&self) -> bool {
        self.follow_ai
    }

    pub fn workbench_rev(&self) -> u64 {
        self.workbench_rev
    }

    /// Records the human's figure and rectangle selection. A rectangle
    /// selection is only meaningful inside a figure, so it is dropped when
    /// no figure is selected.
    pub fn set_human_selection(
        &mut self,
        active_figure_id: Option<FigureId>,
        selected_rect: Option<usize>,
    ) {
        let selected_rect = if active_figure_id.is_some() { selected_rect } else { None };

        if self.human_active_figure_id == active_figure_id
            && self.human_selected_rect == selected_rect
        {
            return;
        }

        self.human_active_figure_id = active_figure_id;
        self.human_selected_rect = selected_rect;
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn set_follow_ai(&mut self, follow_ai: bool) {
        if self.follow_ai == follow_ai {
            return;
        }
        self.follow_ai = follow_ai;
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn bump_workbench_rev(&mut self) {
        self.workbench_rev = self.workbench_rev.wrapping_add(1);
        self.rev = self.rev.wrapping_add(1);
    }
}
