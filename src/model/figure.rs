// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::FigureId;

/// A single named figure artifact.
///
/// The source text is stored verbatim; decomposition always runs on demand so
/// the entity can never hold a stale result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    figure_id: FigureId,
    name: String,
    source: String,
    rev: u64,
}

impl Figure {
    pub fn new(figure_id: FigureId, name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            figure_id,
            name: name.into(),
            source: source.into(),
            rev: 0,
        }
    }

    pub fn figure_id(&self) -> &FigureId {
        &self.figure_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.bump_rev();
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.bump_rev();
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::Figure;
    use crate::model::FigureId;

    #[test]
    fn figure_set_source_bumps_rev() {
        let figure_id = FigureId::new("f1").expect("figure id");
        let mut figure = Figure::new(figure_id.clone(), "Example", "+-+\n| |\n+-+");

        assert_eq!(figure.rev(), 0);
        figure.set_source("+--+\n|  |\n+--+");

        assert_eq!(figure.figure_id(), &figure_id);
        assert_eq!(figure.name(), "Example");
        assert_eq!(figure.source(), "+--+\n|  |\n+--+");
        assert_eq!(figure.rev(), 1);
    }

    #[test]
    fn figure_rename_keeps_source() {
        let figure_id = FigureId::new("f1").expect("figure id");
        let mut figure = Figure::new(figure_id, "Draft", "+-+");

        figure.rename("Final");

        assert_eq!(figure.name(), "Final");
        assert_eq!(figure.source(), "+-+");
        assert_eq!(figure.rev(), 1);
    }
}
