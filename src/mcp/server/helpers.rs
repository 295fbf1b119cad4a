// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// MCP server helper functions: id slugging and parsing, figure summaries,
/// and parameter tree conversion.
fn slug_for_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("figure");
    }
    slug
}

fn allocate_figure_id(workbench: &Workbench, name: &str) -> FigureId {
    let base = slug_for_name(name);

    if workbench.figure_ids().all(|figure_id| figure_id.as_str() != base) {
        return FigureId::new(base).expect("valid figure id");
    }

    for idx in 2.. {
        let candidate = format!("{base}-{idx}");
        if workbench.figure_ids().all(|figure_id| figure_id.as_str() != candidate) {
            return FigureId::new(candidate).expect("valid figure id");
        }
    }

    unreachable!("exhausted figure id space")
}

fn parse_figure_id(figure_id: &str) -> Result<FigureId, ErrorData> {
    FigureId::new(figure_id.to_owned()).map_err(|err| {
        ErrorData::invalid_params(
            format!("invalid figure_id: {err}"),
            Some(serde_json::json!({ "figure_id": figure_id })),
        )
    })
}

fn unknown_figure(figure_id: &FigureId) -> ErrorData {
    ErrorData::invalid_params(
        "figure not found",
        Some(serde_json::json!({ "figure_id": figure_id.as_str() })),
    )
}

fn figure_summary(figure: &Figure, active: bool) -> FigureSummary {
    let grid = Grid::parse(figure.source());
    FigureSummary {
        figure_id: figure.figure_id().as_str().to_owned(),
        name: figure.name().to_owned(),
        rows: grid.row_count() as u64,
        rectangles: decompose::rectangles(figure.source()).count() as u64,
        rev: figure.rev(),
        active,
    }
}

fn tree_from_param(node: TreeParamNode) -> kata::trees::TreeNode<String> {
    let children = node.children.into_iter().map(tree_from_param).collect();
    kata::trees::TreeNode::with_children(node.label, children)
}
