// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::*;

use crate::model::fixtures::{demo_figures, NESTED_BOXES, TWO_CELLS};
use crate::tui::testing::HeadlessTui;
use crossterm::event::KeyCode;

fn new_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().enable_all().build().expect("tokio runtime")
}

const ONE_THROUGH_NINE: &str = concat!(
    "    _  _     _  _  _  _  _ \n",
    "  | _| _||_||_ |_   ||_||_|\n",
    "  ||_  _|  | _||_|  ||_| _|\n",
);

struct CollabHarness {
    workbench: Arc<Mutex<Workbench>>,
    ui_state: Arc<Mutex<UiState>>,
}

impl CollabHarness {
    fn new() -> Self {
        Self {
            workbench: Arc::new(Mutex::new(Workbench::new())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
        }
    }

    fn with_demo_figures() -> Self {
        let harness = Self::new();
        {
            let mut workbench = harness.workbench.blocking_lock();
            for figure in demo_figures() {
                workbench.upsert_figure(figure);
            }
            let first = workbench.figure_ids().next().cloned();
            workbench.set_active_figure_id(first);
        }
        harness
    }

    fn server(&self) -> ProteusMcp {
        ProteusMcp::new_shared_with_ui_state(self.workbench.clone(), Some(self.ui_state.clone()))
    }

    fn tui(&self) -> HeadlessTui {
        HeadlessTui::new(self.workbench.clone(), Some(self.ui_state.clone()))
    }
}

#[test]
fn e2e_agent_loads_a_figure_and_the_tui_follows() {
    let runtime = new_runtime();
    let harness = CollabHarness::new();
    let server = harness.server();
    let mut tui = harness.tui();
    assert_eq!(tui.active_figure_id(), None);

    // Step 1 (agent/MCP): load a figure into the empty workbench.
    let Json(loaded) = runtime.block_on(async {
        server
            .figure_load(Parameters(FigureLoadParams {
                source: TWO_CELLS.to_owned(),
                name: Some("Two cells".to_owned()),
            }))
            .await
            .expect("figure.load")
    });
    assert_eq!(loaded.figure.figure_id, "two-cells");
    assert_eq!(loaded.figure.rectangles, 2);
    assert!(loaded.figure.active);

    // Step 2 (human/TUI): the poll loop picks up the new active figure.
    tui.sync_from_shared();
    assert_eq!(tui.active_figure_id().map(|id| id.to_string()), Some("two-cells".to_owned()));
    assert_eq!(tui.rectangle_count(), 2);
    assert_eq!(tui.selected_rect_index(), Some(0));

    // Step 3 (human/TUI): moving the selection publishes it for the agent.
    tui.press(KeyCode::Char('j'));
    assert_eq!(tui.selected_rect_index(), Some(1));

    let Json(listing) =
        runtime.block_on(async { server.figure_list().await.expect("figure.list") });
    assert_eq!(listing.active_figure_id.as_deref(), Some("two-cells"));
    assert_eq!(listing.context.human_active_figure_id.as_deref(), Some("two-cells"));
    assert_eq!(listing.context.human_selected_rect, Some(1));
    assert_eq!(listing.context.follow_ai, Some(true));
}

#[test]
fn e2e_human_palette_activation_is_visible_over_mcp() {
    let runtime = new_runtime();
    let harness = CollabHarness::with_demo_figures();
    let server = harness.server();
    let mut tui = harness.tui();
    assert_eq!(tui.active_figure_id().map(|id| id.to_string()), Some("nested-boxes".to_owned()));

    // Step 1 (human/TUI): find and activate the other figure via the palette.
    tui.press(KeyCode::Char('p'));
    for ch in "two".chars() {
        tui.press(KeyCode::Char(ch));
    }
    tui.press(KeyCode::Enter);
    assert_eq!(tui.active_figure_id().map(|id| id.to_string()), Some("two-cells".to_owned()));
    assert_eq!(tui.toast_message().as_deref(), Some("Activated two-cells"));

    // Step 2 (agent/MCP): the shared workbench and context both moved.
    let Json(current) =
        runtime.block_on(async { server.figure_current().await.expect("figure.current") });
    assert_eq!(current.figure_id, "two-cells");
    assert_eq!(current.source, TWO_CELLS);
    assert_eq!(current.context.human_active_figure_id.as_deref(), Some("two-cells"));
    assert_eq!(current.context.human_selected_rect, Some(0));
}

#[test]
fn e2e_follow_ai_off_keeps_the_human_figure() {
    let runtime = new_runtime();
    let harness = CollabHarness::with_demo_figures();
    let server = harness.server();
    let mut tui = harness.tui();

    // Step 1 (human/TUI): stop following the agent.
    tui.press(KeyCode::Char('F'));
    assert!(!tui.follow_ai());

    // Step 2 (agent/MCP): switch the active figure.
    let Json(activated) = runtime.block_on(async {
        server
            .figure_activate(Parameters(FigureActivateParams {
                figure_id: "two-cells".to_owned(),
            }))
            .await
            .expect("figure.activate")
    });
    assert_eq!(activated.active_figure_id, "two-cells");

    // Step 3 (human/TUI): the figure pane stays put.
    tui.sync_from_shared();
    assert_eq!(tui.active_figure_id().map(|id| id.to_string()), Some("nested-boxes".to_owned()));

    // Step 4 (agent/MCP): the context reports the divergence.
    let Json(current) =
        runtime.block_on(async { server.figure_current().await.expect("figure.current") });
    assert_eq!(current.figure_id, "two-cells");
    assert_eq!(current.context.human_active_figure_id.as_deref(), Some("nested-boxes"));
    assert_eq!(current.context.follow_ai, Some(false));

    // Step 5 (human/TUI): following again jumps to the agent's figure.
    tui.press(KeyCode::Char('F'));
    assert!(tui.follow_ai());
    assert_eq!(tui.active_figure_id().map(|id| id.to_string()), Some("two-cells".to_owned()));
}

#[test]
fn e2e_figure_and_kata_tools_cover_full_surface() {
    let runtime = new_runtime();
    let harness = CollabHarness::new();
    let server = harness.server();

    runtime.block_on(async {
        // figure.load twice; the second name collides and gets a suffix.
        let Json(first) = server
            .figure_load(Parameters(FigureLoadParams {
                source: TWO_CELLS.to_owned(),
                name: Some("Boxes".to_owned()),
            }))
            .await
            .expect("figure.load first");
        assert_eq!(first.figure.figure_id, "boxes");
        assert_eq!(first.figure.rows, 4);

        let Json(second) = server
            .figure_load(Parameters(FigureLoadParams {
                source: NESTED_BOXES.to_owned(),
                name: Some("Boxes".to_owned()),
            }))
            .await
            .expect("figure.load second");
        assert_eq!(second.figure.figure_id, "boxes-2");
        assert!(second.figure.active);

        let Json(listing) = server.figure_list().await.expect("figure.list");
        assert_eq!(listing.figures.len(), 2);
        assert_eq!(listing.active_figure_id.as_deref(), Some("boxes-2"));
        assert!(listing.figures[1].active);

        let Json(activated) = server
            .figure_activate(Parameters(FigureActivateParams { figure_id: "boxes".to_owned() }))
            .await
            .expect("figure.activate");
        assert_eq!(activated.active_figure_id, "boxes");

        let Json(current) = server.figure_current().await.expect("figure.current");
        assert_eq!(current.figure_id, "boxes");
        assert_eq!(current.source, TWO_CELLS);

        // figure.rectangles over the active figure, a named one, and inline source.
        let Json(active_rects) = server
            .figure_rectangles(Parameters(FigureRectanglesParams { figure_id: None, source: None }))
            .await
            .expect("figure.rectangles active");
        assert_eq!(active_rects.rectangles.len(), 2);
        assert_eq!(active_rects.rectangles[0].width, 8);
        assert_eq!(
            active_rects.rectangles[0].rendering,
            "+------+\n|      |\n|      |\n+------+\n"
        );

        let Json(named_rects) = server
            .figure_rectangles(Parameters(FigureRectanglesParams {
                figure_id: Some("boxes-2".to_owned()),
                source: None,
            }))
            .await
            .expect("figure.rectangles named");
        assert_eq!(named_rects.rectangles.len(), 2);
        assert_eq!(named_rects.rectangles[0].left, 3);
        assert_eq!(named_rects.rectangles[0].width, 7);

        let Json(inline_rects) = server
            .figure_rectangles(Parameters(FigureRectanglesParams {
                figure_id: None,
                source: Some("+-+\n| |\n+-+".to_owned()),
            }))
            .await
            .expect("figure.rectangles inline");
        assert_eq!(inline_rects.rectangles.len(), 1);
        assert_eq!(inline_rects.rectangles[0].rendering, "+-+\n| |\n+-+\n");

        // Kata registry.
        let Json(katas) = server.kata_list().await.expect("kata.list");
        assert_eq!(katas.katas.len(), 10);
        assert_eq!(katas.katas[0].name, "compass");

        let Json(found) = server
            .kata_find(Parameters(KataFindParams { query: "domino".to_owned(), limit: Some(3) }))
            .await
            .expect("kata.find");
        assert_eq!(found.matches.first().map(|hit| hit.name.as_str()), Some("dominoes"));

        // One call through every kata tool.
        let Json(rose) = server.compass_points().await.expect("compass.points");
        assert_eq!(rose.points.len(), 32);
        assert_eq!(rose.points[16].abbreviation, "S");
        assert_eq!(rose.points[16].azimuth, 180.0);

        let Json(expanded) = server
            .braces_expand(Parameters(BracesExpandParams { pattern: "ba{na,nana}na".to_owned() }))
            .await
            .expect("braces.expand");
        assert_eq!(expanded.spellings, ["bananana", "banana"]);

        let Json(zigzag) = server
            .zigzag_matrix(Parameters(ZigzagMatrixParams { size: 3 }))
            .await
            .expect("zigzag.matrix");
        assert_eq!(zigzag.matrix, [[0, 1, 5], [2, 4, 6], [3, 7, 8]]);

        let Json(chain) = server
            .dominoes_chain(Parameters(DominoesChainParams {
                tiles: vec![[2, 2], [2, 6], [6, 2]],
            }))
            .await
            .expect("dominoes.chain");
        assert!(chain.can_chain);

        let Json(compressed) = server
            .ranges_compress(Parameters(RangesCompressParams {
                values: vec![1, 2, 3, 7, 9, 10],
            }))
            .await
            .expect("ranges.compress");
        assert_eq!(compressed.text, "1-3,7,9,10");

        let Json(wrapped) = server
            .text_wrap(Parameters(TextWrapParams {
                text: "the quick brown fox jumps".to_owned(),
                columns: 10,
            }))
            .await
            .expect("text.wrap");
        assert_eq!(wrapped.lines, ["the quick", "brown fox", "jumps"]);

        let flush = ["2♥", "3♥", "4♥", "5♥", "6♥"];
        let Json(ranked) = server
            .poker_rank(Parameters(PokerRankParams {
                cards: flush.iter().map(|card| (*card).to_owned()).collect(),
            }))
            .await
            .expect("poker.rank");
        assert_eq!(ranked.score, 8);
        assert_eq!(ranked.name, "straight flush");

        let Json(decoded) = server
            .ocr_account(Parameters(OcrAccountParams { display: ONE_THROUGH_NINE.to_owned() }))
            .await
            .expect("ocr.account");
        assert_eq!(decoded.account, "123456789");

        let Json(fib) = server
            .sequence_sample(Parameters(SequenceSampleParams {
                name: "fibonacci".to_owned(),
                count: 5,
            }))
            .await
            .expect("sequence.sample");
        assert_eq!(fib.items, ["0", "1", "1", "2", "3"]);

        let root = TreeParamNode {
            label: "root".to_owned(),
            children: vec![
                TreeParamNode {
                    label: "a".to_owned(),
                    children: vec![TreeParamNode { label: "c".to_owned(), children: Vec::new() }],
                },
                TreeParamNode { label: "b".to_owned(), children: Vec::new() },
            ],
        };
        let Json(depth) = server
            .tree_traverse(Parameters(TreeTraverseParams {
                root: root.clone(),
                order: "depth".to_owned(),
            }))
            .await
            .expect("tree.traverse depth");
        assert_eq!(depth.labels, ["root", "a", "c", "b"]);

        let Json(breadth) = server
            .tree_traverse(Parameters(TreeTraverseParams { root, order: "breadth".to_owned() }))
            .await
            .expect("tree.traverse breadth");
        assert_eq!(breadth.labels, ["root", "a", "b", "c"]);
    });
}
