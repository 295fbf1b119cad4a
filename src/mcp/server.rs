// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rayon::prelude::*;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tokio::sync::Mutex;

use crate::decompose;
use crate::kata;
use crate::model::{Figure, FigureId, Grid, Workbench};
use crate::ui::UiState;

use super::types::*;

const SEQUENCE_SAMPLE_LIMIT: u64 = 512;
const ZIGZAG_SIZE_LIMIT: u64 = 64;
const KATA_FIND_DEFAULT_LIMIT: usize = 8;

#[derive(Clone)]
pub struct ProteusMcp {
    workbench: Arc<Mutex<Workbench>>,
    ui_state: Option<Arc<Mutex<UiState>>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ProteusMcp {
    pub fn new(workbench: Workbench) -> Self {
        Self::new_shared_with_ui_state(Arc::new(Mutex::new(workbench)), None)
    }

    pub fn new_shared(workbench: Arc<Mutex<Workbench>>) -> Self {
        Self::new_shared_with_ui_state(workbench, None)
    }

    pub fn new_shared_with_ui_state(
        workbench: Arc<Mutex<Workbench>>,
        ui_state: Option<Arc<Mutex<UiState>>>,
    ) -> Self {
        Self { workbench, ui_state, tool_router: Self::tool_router() }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    async fn notify_ui_workbench_changed(&self) {
        if let Some(ui_state) = self.ui_state.as_ref() {
            ui_state.lock().await.bump_workbench_rev();
        }
    }

    async fn read_context(&self, active_figure_id: Option<String>) -> ReadContext {
        let mut context = ReadContext { active_figure_id, ..ReadContext::default() };

        if let Some(ui_state) = self.ui_state.as_ref() {
            let snapshot = ui_state.lock().await.clone();
            context.human_active_figure_id =
                snapshot.human_active_figure_id().map(|figure_id| figure_id.as_str().to_owned());
            context.human_selected_rect = snapshot.human_selected_rect().map(|rect| rect as u64);
            context.follow_ai = Some(snapshot.follow_ai());
            context.ui_rev = Some(snapshot.rev());
            context.ui_workbench_rev = Some(snapshot.workbench_rev());
        }

        context
    }

    /// Load figure source into the workbench and make it active; follow up
    /// with `figure.rectangles` to decompose it.
    #[tool(name = "figure.load")]
    async fn figure_load(
        &self,
        params: Parameters<FigureLoadParams>,
    ) -> Result<Json<FigureLoadResponse>, ErrorData> {
        let FigureLoadParams { source, name } = params.0;
        let name = name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "figure".to_owned());

        let mut workbench = self.workbench.lock().await;
        let figure_id = allocate_figure_id(&workbench, &name);
        let figure = Figure::new(figure_id.clone(), name, source);
        let summary = figure_summary(&figure, true);
        workbench.upsert_figure(figure);
        workbench.set_active_figure_id(Some(figure_id));
        drop(workbench);
        self.notify_ui_workbench_changed().await;

        Ok(Json(FigureLoadResponse { figure: summary }))
    }

    /// List all figures in the workbench; start here, then `figure.activate`
    /// or `figure.rectangles`.
    #[tool(name = "figure.list")]
    async fn figure_list(&self) -> Result<Json<FigureListResponse>, ErrorData> {
        let workbench = self.workbench.lock().await;
        let active_figure_id =
            workbench.active_figure_id().map(|figure_id| figure_id.as_str().to_owned());
        let figures = workbench
            .figures()
            .par_iter()
            .map(|(figure_id, figure)| {
                figure_summary(figure, Some(figure_id) == workbench.active_figure_id())
            })
            .collect::<Vec<_>>();
        drop(workbench);
        let context = self.read_context(active_figure_id.clone()).await;

        Ok(Json(FigureListResponse { figures, active_figure_id, context }))
    }

    /// Switch the active figure; the TUI follows along while follow-AI is on.
    #[tool(name = "figure.activate")]
    async fn figure_activate(
        &self,
        params: Parameters<FigureActivateParams>,
    ) -> Result<Json<FigureActivateResponse>, ErrorData> {
        let figure_id = parse_figure_id(&params.0.figure_id)?;

        let mut workbench = self.workbench.lock().await;
        if workbench.figure(&figure_id).is_none() {
            return Err(unknown_figure(&figure_id));
        }
        workbench.set_active_figure_id(Some(figure_id.clone()));
        drop(workbench);
        self.notify_ui_workbench_changed().await;

        Ok(Json(FigureActivateResponse { active_figure_id: figure_id.into_string() }))
    }

    /// Read the active figure's source plus shared-UI context.
    #[tool(name = "figure.current")]
    async fn figure_current(&self) -> Result<Json<FigureCurrentResponse>, ErrorData> {
        let workbench = self.workbench.lock().await;
        let figure = workbench
            .active_figure()
            .ok_or_else(|| ErrorData::invalid_request("no active figure", None))?;
        let response = FigureCurrentResponse {
            figure_id: figure.figure_id().as_str().to_owned(),
            name: figure.name().to_owned(),
            source: figure.source().to_owned(),
            rev: figure.rev(),
            context: ReadContext::default(),
        };
        let active_figure_id = Some(response.figure_id.clone());
        drop(workbench);

        let context = self.read_context(active_figure_id).await;
        Ok(Json(FigureCurrentResponse { context, ..response }))
    }

    /// Decompose a figure into its basic rectangles, in scan order. Works on
    /// inline `source`, a named `figure_id`, or the active figure.
    #[tool(name = "figure.rectangles")]
    async fn figure_rectangles(
        &self,
        params: Parameters<FigureRectanglesParams>,
    ) -> Result<Json<FigureRectanglesResponse>, ErrorData> {
        let FigureRectanglesParams { figure_id, source } = params.0;
        let source = match (figure_id, source) {
            (Some(_), Some(_)) => {
                return Err(ErrorData::invalid_params(
                    "provide either figure_id or source, not both",
                    None,
                ));
            }
            (None, Some(source)) => source,
            (Some(figure_id), None) => {
                let figure_id = parse_figure_id(&figure_id)?;
                let workbench = self.workbench.lock().await;
                let figure =
                    workbench.figure(&figure_id).ok_or_else(|| unknown_figure(&figure_id))?;
                figure.source().to_owned()
            }
            (None, None) => {
                let workbench = self.workbench.lock().await;
                let figure = workbench
                    .active_figure()
                    .ok_or_else(|| ErrorData::invalid_request("no active figure", None))?;
                figure.source().to_owned()
            }
        };

        let rectangles = decompose::rectangles(&source)
            .map(|rect| McpRectangle {
                top: rect.top() as u64,
                left: rect.left() as u64,
                width: rect.width() as u64,
                height: rect.height() as u64,
                rendering: rect.render(),
            })
            .collect();

        Ok(Json(FigureRectanglesResponse { rectangles }))
    }

    /// List the kata registry; call `kata.find` to search it.
    #[tool(name = "kata.list")]
    async fn kata_list(&self) -> Result<Json<KataListResponse>, ErrorData> {
        let katas = kata::katas()
            .iter()
            .map(|info| KataSummary {
                name: info.name().to_owned(),
                title: info.title().to_owned(),
                summary: info.summary().to_owned(),
            })
            .collect();
        Ok(Json(KataListResponse { katas }))
    }

    /// Fuzzy-search the kata registry, best match first.
    #[tool(name = "kata.find")]
    async fn kata_find(
        &self,
        params: Parameters<KataFindParams>,
    ) -> Result<Json<KataFindResponse>, ErrorData> {
        let KataFindParams { query, limit } = params.0;
        let limit = match limit {
            Some(limit) => usize::try_from(limit)
                .map_err(|_| ErrorData::invalid_params("limit is out of range", None))?,
            None => KATA_FIND_DEFAULT_LIMIT,
        };

        let matches = kata::search(&query, limit)
            .iter()
            .map(|hit| KataMatchSummary {
                name: hit.info().name().to_owned(),
                title: hit.info().title().to_owned(),
                summary: hit.info().summary().to_owned(),
                score: hit.score(),
            })
            .collect();

        Ok(Json(KataFindResponse { matches }))
    }

    /// The full 32-point compass rose with azimuths.
    #[tool(name = "compass.points")]
    async fn compass_points(&self) -> Result<Json<CompassPointsResponse>, ErrorData> {
        let points = kata::compass::points()
            .iter()
            .map(|point| McpCompassPoint {
                abbreviation: point.abbreviation().to_owned(),
                azimuth: point.azimuth(),
            })
            .collect();
        Ok(Json(CompassPointsResponse { points }))
    }

    /// Expand `{a,b}` alternation groups in a pattern.
    #[tool(name = "braces.expand")]
    async fn braces_expand(
        &self,
        params: Parameters<BracesExpandParams>,
    ) -> Result<Json<BracesExpandResponse>, ErrorData> {
        let spellings = kata::braces::expand(&params.0.pattern).collect();
        Ok(Json(BracesExpandResponse { spellings }))
    }

    /// The zigzag scan order for a square matrix of the given size.
    #[tool(name = "zigzag.matrix")]
    async fn zigzag_matrix(
        &self,
        params: Parameters<ZigzagMatrixParams>,
    ) -> Result<Json<ZigzagMatrixResponse>, ErrorData> {
        let size = params.0.size;
        if size > ZIGZAG_SIZE_LIMIT {
            return Err(ErrorData::invalid_params(
                format!("size must be at most {ZIGZAG_SIZE_LIMIT}"),
                Some(serde_json::json!({ "size": size })),
            ));
        }

        let matrix = kata::zigzag::matrix(size as usize)
            .into_iter()
            .map(|row| row.into_iter().map(|value| value as u64).collect())
            .collect();

        Ok(Json(ZigzagMatrixResponse { matrix }))
    }

    /// Whether a set of domino tiles can be laid in one unbroken row.
    #[tool(name = "dominoes.chain")]
    async fn dominoes_chain(
        &self,
        params: Parameters<DominoesChainParams>,
    ) -> Result<Json<DominoesChainResponse>, ErrorData> {
        let can_chain = kata::dominoes::can_chain(&params.0.tiles);
        Ok(Json(DominoesChainResponse { can_chain }))
    }

    /// Compress a sorted integer list into `a-b` range notation.
    #[tool(name = "ranges.compress")]
    async fn ranges_compress(
        &self,
        params: Parameters<RangesCompressParams>,
    ) -> Result<Json<RangesCompressResponse>, ErrorData> {
        let text = kata::ranges::compress(&params.0.values);
        Ok(Json(RangesCompressResponse { text }))
    }

    /// Greedily wrap text at a column budget.
    #[tool(name = "text.wrap")]
    async fn text_wrap(
        &self,
        params: Parameters<TextWrapParams>,
    ) -> Result<Json<TextWrapResponse>, ErrorData> {
        let TextWrapParams { text, columns } = params.0;
        let columns = usize::try_from(columns)
            .map_err(|_| ErrorData::invalid_params("columns is out of range", None))?;
        let lines = kata::wrap::lines(&text, columns).collect();
        Ok(Json(TextWrapResponse { lines }))
    }

    /// Rank a five-card poker hand (`A♠`-style card text).
    #[tool(name = "poker.rank")]
    async fn poker_rank(
        &self,
        params: Parameters<PokerRankParams>,
    ) -> Result<Json<PokerRankResponse>, ErrorData> {
        let cards = params.0.cards;
        if cards.len() != 5 {
            return Err(ErrorData::invalid_params(
                "a poker hand has exactly 5 cards",
                Some(serde_json::json!({ "count": cards.len() as u64 })),
            ));
        }

        let mut hand = Vec::with_capacity(5);
        for card in &cards {
            let parsed = kata::poker::parse_card(card).map_err(|err| {
                ErrorData::invalid_params(
                    format!("cannot parse card: {err}"),
                    Some(serde_json::json!({ "card": card })),
                )
            })?;
            hand.push(parsed);
        }
        let hand: [kata::poker::Card; 5] =
            hand.try_into().unwrap_or_else(|_| unreachable!("length checked above"));

        let rank = kata::poker::hand_rank(&hand);
        Ok(Json(PokerRankResponse { score: u64::from(rank.score()), name: rank.name().to_owned() }))
    }

    /// Decode a seven-segment style account display into digits.
    #[tool(name = "ocr.account")]
    async fn ocr_account(
        &self,
        params: Parameters<OcrAccountParams>,
    ) -> Result<Json<OcrAccountResponse>, ErrorData> {
        let account = kata::ocr::parse_account(&params.0.display).map_err(|err| {
            ErrorData::invalid_params(format!("cannot decode display: {err}"), None)
        })?;

        Ok(Json(OcrAccountResponse {
            digits: account.digits().to_vec(),
            account: account.to_string(),
            value: account.value(),
        }))
    }

    /// Sample the first `count` items of a named sequence (`fibonacci` or
    /// `beer`).
    #[tool(name = "sequence.sample")]
    async fn sequence_sample(
        &self,
        params: Parameters<SequenceSampleParams>,
    ) -> Result<Json<SequenceSampleResponse>, ErrorData> {
        let SequenceSampleParams { name, count } = params.0;
        if count > SEQUENCE_SAMPLE_LIMIT {
            return Err(ErrorData::invalid_params(
                format!("count must be at most {SEQUENCE_SAMPLE_LIMIT}"),
                Some(serde_json::json!({ "count": count })),
            ));
        }
        let count = count as usize;

        let items = match name.as_str() {
            "fibonacci" => kata::sequences::fibonacci()
                .take(count)
                .map(|value| value.to_string())
                .collect(),
            "beer" => kata::sequences::bottles_of_beer().take(count).collect(),
            other => {
                return Err(ErrorData::invalid_params(
                    "unknown sequence; expected 'fibonacci' or 'beer'",
                    Some(serde_json::json!({ "name": other })),
                ));
            }
        };

        Ok(Json(SequenceSampleResponse { items }))
    }

    /// Traverse a JSON label tree in `depth` (preorder) or `breadth`
    /// (level) order.
    #[tool(name = "tree.traverse")]
    async fn tree_traverse(
        &self,
        params: Parameters<TreeTraverseParams>,
    ) -> Result<Json<TreeTraverseResponse>, ErrorData> {
        let TreeTraverseParams { root, order } = params.0;
        let tree = tree_from_param(root);

        let labels = match order.as_str() {
            "depth" => kata::trees::depth_first(&tree)
                .map(|node| node.value().clone())
                .collect::<Vec<_>>(),
            "breadth" => kata::trees::breadth_first(&tree)
                .map(|node| node.value().clone())
                .collect::<Vec<_>>(),
            other => {
                return Err(ErrorData::invalid_params(
                    "unknown order; expected 'depth' or 'breadth'",
                    Some(serde_json::json!({ "order": other })),
                ));
            }
        };

        Ok(Json(TreeTraverseResponse { labels }))
    }
}

#[tool_handler]
impl ServerHandler for ProteusMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Proteus ASCII-figure workbench (tools: figure.load, figure.list, figure.activate, figure.current, figure.rectangles, kata.list, kata.find, compass.points, braces.expand, zigzag.matrix, dominoes.chain, ranges.compress, text.wrap, poker.rank, ocr.account, sequence.sample, tree.traverse)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// Extracted id/summary/conversion helpers for MCP tool handlers.
include!("server/helpers.rs");

#[cfg(test)]
mod e2e;
