// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shared-UI context attached to read responses so an agent can see what
/// the human is looking at.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ReadContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_figure_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_active_figure_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_selected_rect: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_ai: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_rev: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_workbench_rev: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FigureSummary {
    pub figure_id: String,
    pub name: String,
    pub rows: u64,
    pub rectangles: u64,
    pub rev: u64,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FigureLoadParams {
    pub source: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FigureLoadResponse {
    pub figure: FigureSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FigureListResponse {
    pub figures: Vec<FigureSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_figure_id: Option<String>,
    pub context: ReadContext,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FigureActivateParams {
    pub figure_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FigureActivateResponse {
    pub active_figure_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FigureCurrentResponse {
    pub figure_id: String,
    pub name: String,
    pub source: String,
    pub rev: u64,
    pub context: ReadContext,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FigureRectanglesParams {
    pub figure_id: Option<String>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpRectangle {
    pub top: u64,
    pub left: u64,
    pub width: u64,
    pub height: u64,
    pub rendering: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FigureRectanglesResponse {
    pub rectangles: Vec<McpRectangle>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KataSummary {
    pub name: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KataListResponse {
    pub katas: Vec<KataSummary>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct KataFindParams {
    pub query: String,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KataMatchSummary {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KataFindResponse {
    pub matches: Vec<KataMatchSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpCompassPoint {
    pub abbreviation: String,
    pub azimuth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompassPointsResponse {
    pub points: Vec<McpCompassPoint>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BracesExpandParams {
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BracesExpandResponse {
    pub spellings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ZigzagMatrixParams {
    pub size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ZigzagMatrixResponse {
    pub matrix: Vec<Vec<u64>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DominoesChainParams {
    pub tiles: Vec<[u8; 2]>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DominoesChainResponse {
    pub can_chain: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RangesCompressParams {
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RangesCompressResponse {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TextWrapParams {
    pub text: String,
    pub columns: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextWrapResponse {
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PokerRankParams {
    pub cards: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PokerRankResponse {
    pub score: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OcrAccountParams {
    pub display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OcrAccountResponse {
    pub digits: Vec<u8>,
    pub account: String,
    pub value: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SequenceSampleParams {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SequenceSampleResponse {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TreeParamNode {
    pub label: String,
    #[serde(default)]
    pub children: Vec<TreeParamNode>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TreeTraverseParams {
    pub root: TreeParamNode,
    pub order: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TreeTraverseResponse {
    pub labels: Vec<String>,
}
