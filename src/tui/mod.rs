// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive TUI shell (ratatui + crossterm) over a shared workbench.

use std::{
    collections::BTreeMap,
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use tokio::sync::Mutex;

use crate::decompose;
use crate::kata;
use crate::model::{FigureId, Workbench};
use crate::ui::UiState;

mod hints;
mod theme;

use theme::TuiTheme;

const FOCUS_COLOR: Color = Color::LightGreen;
const AGENT_FOCUS_COLOR: Color = Color::LightBlue;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅿 🆁 🅾 🆃 🅴 🆄 🆂 ";
const RECT_HINT_CHARS: &str = "ASDFJKLEWCMPGH";

/// Runs the interactive terminal UI over a fresh demo workbench.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_workbench(Arc::new(Mutex::new(demo_workbench())), None)
}

/// Runs the terminal UI over a shared workbench, optionally mirroring
/// selection state with programmatic clients through `ui_state`.
pub fn run_with_workbench(
    workbench: Arc<Mutex<Workbench>>,
    ui_state: Option<Arc<Mutex<UiState>>>,
) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(workbench, ui_state, theme);
    app.publish_selection_to_ui_state();

    while !app.should_quit {
        app.sync_from_shared();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let compact_footer = footer_uses_compact_mode(main_area);
    let direction = if stack_main_panes_vertically(main_area) {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let panes = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_area);
    let figure_area = panes[0];
    let rects_area = panes[1];

    let figure_tail = if app.figure_id.is_some() {
        Some(app.figure_name.clone())
    } else {
        None
    };
    let figure_title = pane_title("Figure", '1', figure_tail.as_deref());
    let figure_border_style =
        panel_border_style_for_focus(app.focus, Focus::Figure, app.focus_owner);
    let figure = Paragraph::new(app.figure_text()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(figure_title)
            .border_style(figure_border_style),
    );
    frame.render_widget(figure, figure_area);

    let rects_counter = rect_counter_label(app.rects_state.selected(), app.rectangles.len());
    let rects_title = pane_title("Rectangles", '2', Some(&rects_counter));
    let rects_border_style =
        panel_border_style_for_focus(app.focus, Focus::Rectangles, app.focus_owner);
    let hint_row_labels = app.hint_row_labels();
    let items = app
        .rectangles
        .iter()
        .enumerate()
        .map(|(idx, rect)| {
            let label = rect_row_label(idx, rect);
            let hint = hint_row_labels
                .as_ref()
                .and_then(|labels| labels.get(idx).cloned().flatten());
            match hint {
                Some(hint) => ListItem::new(Line::from(vec![
                    Span::styled(format!("{hint:<2}"), app.theme.hint_style()),
                    Span::raw(" "),
                    Span::raw(label),
                ])),
                None => ListItem::new(Line::from(label)),
            }
        })
        .collect::<Vec<_>>();
    let rects_list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(rects_title)
                .border_style(rects_border_style),
        )
        .highlight_style(app.theme.selection_style());
    frame.render_stateful_widget(rects_list, rects_area, &mut app.rects_state);

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };

    if app.palette_mode == PaletteMode::Editing {
        render_palette(frame, app, main_area);
        let query = app.palette_query.clone();
        let status = Paragraph::new(palette_footer_line(app, &toast_suffix));
        frame.render_widget(status, status_area);
        let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
        frame.render_widget(brand, status_area);
        let cursor_x = status_area
            .x
            .saturating_add(2)
            .saturating_add(query.chars().count() as u16)
            .min(status_area.x.saturating_add(status_area.width.saturating_sub(1)));
        frame.set_cursor_position((cursor_x, status_area.y));
        return;
    }

    let status = Paragraph::new(footer_help_line(app, &toast_suffix, compact_footer));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);
}

// Extracted pane/footer/palette rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaletteMode {
    Inactive,
    Editing,
}

#[derive(Debug, Clone)]
enum PaletteTarget {
    Figure(FigureId),
    Kata {
        title: &'static str,
        summary: &'static str,
    },
}

#[derive(Debug, Clone)]
struct PaletteEntry {
    label: String,
    haystack: String,
    target: PaletteTarget,
}

#[derive(Debug, Clone, Default)]
enum HintMode {
    #[default]
    Inactive,
    Awaiting {
        labels: Vec<String>,
        buffer: String,
    },
}

struct App {
    workbench: Arc<Mutex<Workbench>>,
    ui_state: Option<Arc<Mutex<UiState>>>,
    theme: TuiTheme,
    workbench_rev: u64,
    ui_state_rev: u64,
    figure_id: Option<FigureId>,
    figure_name: String,
    figure_source: String,
    rectangles: Vec<decompose::Rect>,
    rects_state: ListState,
    focus: Focus,
    focus_owner: FocusOwner,
    follow_ai: bool,
    hint_mode: HintMode,
    palette_mode: PaletteMode,
    palette_query: String,
    palette_entries: Vec<PaletteEntry>,
    palette_results: Vec<usize>,
    palette_index: usize,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(
        workbench: Arc<Mutex<Workbench>>,
        ui_state: Option<Arc<Mutex<UiState>>>,
        theme: TuiTheme,
    ) -> Self {
        let mut app = Self {
            workbench,
            ui_state,
            theme,
            workbench_rev: 0,
            ui_state_rev: 0,
            figure_id: None,
            figure_name: String::new(),
            figure_source: String::new(),
            rectangles: Vec::new(),
            rects_state: ListState::default(),
            focus: Focus::Rectangles,
            focus_owner: FocusOwner::Human,
            follow_ai: true,
            hint_mode: HintMode::Inactive,
            palette_mode: PaletteMode::Inactive,
            palette_query: String::new(),
            palette_entries: Vec::new(),
            palette_results: Vec::new(),
            palette_index: 0,
            toast: None,
            should_quit: false,
        };
        app.reload_from_workbench(FocusOwner::Human);
        app
    }

    fn publish_selection_to_ui_state(&mut self) {
        let Some(ui_state) = self.ui_state.as_ref() else {
            return;
        };

        let mut ui_state = ui_state.blocking_lock();
        ui_state.set_follow_ai(self.follow_ai);
        if self.focus_owner == FocusOwner::Human {
            ui_state.set_human_selection(self.figure_id.clone(), self.rects_state.selected());
        }
    }

    /// Adopts shared-state changes made by other components since the last tick.
    fn sync_from_shared(&mut self) {
        if let Some(ui_state) = self.ui_state.as_ref() {
            let snapshot = ui_state.blocking_lock().clone();
            if snapshot.rev() != self.ui_state_rev {
                self.ui_state_rev = snapshot.rev();
                self.follow_ai = snapshot.follow_ai();
            }
        }

        let rev = self.workbench.blocking_lock().rev();
        if rev != self.workbench_rev {
            self.reload_from_workbench(FocusOwner::Agent);
        }
    }

    /// Reloads the displayed figure from the workbench and re-decomposes it.
    ///
    /// With follow-AI on this tracks the workbench's active figure; otherwise
    /// the current figure is kept while it still exists. `changed_by` becomes
    /// the focus owner when the displayed figure switches.
    fn reload_from_workbench(&mut self, changed_by: FocusOwner) {
        let previous_figure_id = self.figure_id.clone();
        let (rev, loaded) = {
            let workbench = self.workbench.blocking_lock();
            let figure_id = if self.follow_ai {
                workbench.active_figure_id().cloned()
            } else {
                match previous_figure_id.as_ref() {
                    Some(figure_id) if workbench.figure(figure_id).is_some() => {
                        Some(figure_id.clone())
                    }
                    _ => workbench.active_figure_id().cloned(),
                }
            }
            .or_else(|| workbench.figure_ids().next().cloned());

            let loaded = figure_id.and_then(|figure_id| {
                workbench.figure(&figure_id).map(|figure| {
                    (figure_id.clone(), figure.name().to_owned(), figure.source().to_owned())
                })
            });
            (workbench.rev(), loaded)
        };

        self.workbench_rev = rev;
        self.cancel_hint_mode();
        match loaded {
            Some((figure_id, name, source)) => {
                let figure_changed = previous_figure_id.as_ref() != Some(&figure_id);
                self.figure_id = Some(figure_id);
                self.figure_name = name;
                self.figure_source = source;
                self.rectangles = decompose::rectangles(&self.figure_source).collect();
                if figure_changed {
                    if previous_figure_id.is_some() {
                        self.focus_owner = changed_by;
                    }
                    self.rects_state = ListState::default();
                    if !self.rectangles.is_empty() {
                        self.rects_state.select(Some(0));
                    }
                } else {
                    self.clamp_rect_selection();
                }
            }
            None => {
                self.figure_id = None;
                self.figure_name.clear();
                self.figure_source.clear();
                self.rectangles.clear();
                self.rects_state = ListState::default();
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        self.focus_owner = FocusOwner::Human;

        if self.palette_mode == PaletteMode::Editing {
            self.handle_palette_key(code);
            return false;
        }

        if self.handle_hint_key(code) {
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('1') => self.focus = Focus::Figure,
            KeyCode::Char('2') => self.focus = Focus::Rectangles,
            KeyCode::Tab => self.focus = self.focus.cycle(),
            KeyCode::BackTab => self.focus = self.focus.cycle_back(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev_rect(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_rect(),
            KeyCode::Char('g') => self.select_first_rect(),
            KeyCode::Char('G') => self.select_last_rect(),
            KeyCode::Char('f') => self.enter_hint_mode(),
            KeyCode::Char('y') => self.yank_selected_rect(),
            KeyCode::Char('p') => self.open_palette(),
            KeyCode::Char('F') => self.toggle_follow_ai(),
            _ => {}
        }

        false
    }

    fn select_prev_rect(&mut self) {
        if self.rectangles.is_empty() {
            return;
        }
        let next = match self.rects_state.selected() {
            Some(0) | None => 0,
            Some(idx) => idx - 1,
        };
        self.rects_state.select(Some(next));
        self.publish_selection_to_ui_state();
    }

    fn select_next_rect(&mut self) {
        if self.rectangles.is_empty() {
            return;
        }
        let last = self.rectangles.len() - 1;
        let next = match self.rects_state.selected() {
            Some(idx) => (idx + 1).min(last),
            None => 0,
        };
        self.rects_state.select(Some(next));
        self.publish_selection_to_ui_state();
    }

    fn select_first_rect(&mut self) {
        if self.rectangles.is_empty() {
            return;
        }
        self.rects_state.select(Some(0));
        self.publish_selection_to_ui_state();
    }

    fn select_last_rect(&mut self) {
        if self.rectangles.is_empty() {
            return;
        }
        self.rects_state.select(Some(self.rectangles.len() - 1));
        self.publish_selection_to_ui_state();
    }

    fn select_rect(&mut self, index: usize) {
        if index >= self.rectangles.len() {
            return;
        }
        self.rects_state.select(Some(index));
        self.publish_selection_to_ui_state();
    }

    fn clamp_rect_selection(&mut self) {
        if self.rectangles.is_empty() {
            self.rects_state.select(None);
            return;
        }
        let last = self.rectangles.len() - 1;
        match self.rects_state.selected() {
            Some(idx) if idx > last => self.rects_state.select(Some(last)),
            None => self.rects_state.select(Some(0)),
            _ => {}
        }
    }

    fn enter_hint_mode(&mut self) {
        if self.rectangles.is_empty() {
            return;
        }
        let labels = hints::gen_labels(self.rectangles.len(), RECT_HINT_CHARS);
        self.hint_mode = HintMode::Awaiting { labels, buffer: String::new() };
    }

    fn cancel_hint_mode(&mut self) {
        self.hint_mode = HintMode::Inactive;
    }

    /// Consumes a key while hint mode is active; returns whether it was handled.
    fn handle_hint_key(&mut self, code: KeyCode) -> bool {
        let mode = std::mem::replace(&mut self.hint_mode, HintMode::Inactive);
        match mode {
            HintMode::Inactive => false,
            HintMode::Awaiting { labels, mut buffer } => match code {
                KeyCode::Esc => true,
                KeyCode::Char(ch) => {
                    buffer.push(ch.to_ascii_uppercase());
                    if let Some(index) = labels.iter().position(|label| *label == buffer) {
                        self.select_rect(index);
                    } else if labels.iter().any(|label| label.starts_with(buffer.as_str())) {
                        self.hint_mode = HintMode::Awaiting { labels, buffer };
                    } else {
                        self.set_toast("No matching hint");
                    }
                    true
                }
                _ => {
                    self.hint_mode = HintMode::Awaiting { labels, buffer };
                    true
                }
            },
        }
    }

    fn hint_row_labels(&self) -> Option<Vec<Option<String>>> {
        let HintMode::Awaiting { labels, buffer } = &self.hint_mode else {
            return None;
        };

        Some(
            labels
                .iter()
                .map(|label| {
                    if label.starts_with(buffer.as_str()) {
                        Some(label.clone())
                    } else {
                        None
                    }
                })
                .collect(),
        )
    }

    fn hint_overlays(&self) -> BTreeMap<(usize, usize), char> {
        let mut overlays = BTreeMap::new();
        let HintMode::Awaiting { labels, buffer } = &self.hint_mode else {
            return overlays;
        };

        for (rect, label) in self.rectangles.iter().zip(labels.iter()) {
            if !label.starts_with(buffer.as_str()) {
                continue;
            }
            for (offset, ch) in label.chars().enumerate() {
                if offset >= rect.width() {
                    break;
                }
                overlays.insert((rect.top(), rect.left() + offset), ch);
            }
        }
        overlays
    }

    fn open_palette(&mut self) {
        self.palette_mode = PaletteMode::Editing;
        self.palette_query.clear();
        self.palette_entries = self.palette_candidates();
        self.update_palette_results();
    }

    fn palette_candidates(&self) -> Vec<PaletteEntry> {
        let mut entries = Vec::new();
        {
            let workbench = self.workbench.blocking_lock();
            for (figure_id, figure) in workbench.figures() {
                let label = format!("{figure_id}  {}", figure.name());
                entries.push(PaletteEntry {
                    haystack: label.to_lowercase(),
                    label,
                    target: PaletteTarget::Figure(figure_id.clone()),
                });
            }
        }
        for info in kata::katas() {
            entries.push(PaletteEntry {
                label: format!("{}  {}", info.name(), info.title()),
                haystack: format!("{} {} {}", info.name(), info.title(), info.summary())
                    .to_lowercase(),
                target: PaletteTarget::Kata {
                    title: info.title(),
                    summary: info.summary(),
                },
            });
        }
        entries
    }

    fn update_palette_results(&mut self) {
        let needle = self.palette_query.trim().to_lowercase();
        if needle.is_empty() {
            self.palette_results = (0..self.palette_entries.len()).collect();
        } else {
            let mut scored = self
                .palette_entries
                .iter()
                .enumerate()
                .filter_map(|(idx, entry)| {
                    kata::fuzzy_score(&needle, &entry.haystack).map(|score| (score, idx))
                })
                .collect::<Vec<_>>();
            scored.sort_by(|a, b| {
                b.0.cmp(&a.0).then_with(|| {
                    self.palette_entries[a.1].label.cmp(&self.palette_entries[b.1].label)
                })
            });
            self.palette_results = scored.into_iter().map(|(_, idx)| idx).collect();
        }
        self.palette_index = 0;
    }

    fn handle_palette_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.close_palette(),
            KeyCode::Enter => self.accept_palette_entry(),
            KeyCode::Up => self.palette_index = self.palette_index.saturating_sub(1),
            KeyCode::Down => {
                if !self.palette_results.is_empty() {
                    self.palette_index =
                        (self.palette_index + 1).min(self.palette_results.len() - 1);
                }
            }
            KeyCode::Backspace => {
                self.palette_query.pop();
                self.update_palette_results();
            }
            KeyCode::Char(ch) => {
                self.palette_query.push(ch);
                self.update_palette_results();
            }
            _ => {}
        }
    }

    fn close_palette(&mut self) {
        self.palette_mode = PaletteMode::Inactive;
        self.palette_query.clear();
        self.palette_entries.clear();
        self.palette_results.clear();
        self.palette_index = 0;
    }

    fn accept_palette_entry(&mut self) {
        let Some(&entry_idx) = self.palette_results.get(self.palette_index) else {
            self.close_palette();
            return;
        };
        let target = self.palette_entries[entry_idx].target.clone();
        self.close_palette();

        match target {
            PaletteTarget::Figure(figure_id) => self.activate_figure(figure_id),
            PaletteTarget::Kata { title, summary } => self.set_toast(format!("{title}: {summary}")),
        }
    }

    fn activate_figure(&mut self, figure_id: FigureId) {
        {
            let mut workbench = self.workbench.blocking_lock();
            workbench.set_active_figure_id(Some(figure_id.clone()));
        }
        self.reload_from_workbench(FocusOwner::Human);
        self.publish_selection_to_ui_state();
        self.set_toast(format!("Activated {figure_id}"));
    }

    fn toggle_follow_ai(&mut self) {
        self.follow_ai = !self.follow_ai;
        self.publish_selection_to_ui_state();
        if self.follow_ai {
            self.reload_from_workbench(FocusOwner::Agent);
        }
        self.set_toast(if self.follow_ai { "Follow AI enabled" } else { "Follow AI disabled" });
    }

    fn yank_selected_rect(&mut self) {
        let Some(rect) = self.rects_state.selected().and_then(|idx| self.rectangles.get(idx))
        else {
            self.set_toast("No rectangle selected");
            return;
        };

        let rendered = rect.render();
        match copy_to_clipboard(&rendered) {
            Ok(backend) => {
                self.set_toast(format!("Yanked rectangle ({backend})"));
            }
            Err(err) => {
                self.set_toast(format!("Clipboard error: {err}"));
            }
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }

    /// Styled figure source with the selected rectangle's cells highlighted
    /// and, in hint mode, labels painted over rectangle corners.
    fn figure_text(&self) -> Text<'static> {
        if self.figure_id.is_none() {
            return Text::from("No figures in workbench");
        }

        let selected = self.rects_state.selected().and_then(|idx| self.rectangles.get(idx));
        let overlays = self.hint_overlays();
        let base_style = self.theme.base_style();
        let highlight_style = self.theme.rect_highlight_style();
        let hint_style = self.theme.hint_style();

        let mut lines = Vec::new();
        for (y, row) in self.figure_source.lines().enumerate() {
            let mut spans = Vec::<Span<'static>>::new();
            let mut run = String::new();
            let mut run_style = base_style;
            for (x, mut ch) in row.chars().enumerate() {
                let mut style = base_style;
                if let Some(rect) = selected {
                    if y >= rect.top()
                        && y < rect.top() + rect.height()
                        && x >= rect.left()
                        && x < rect.left() + rect.width()
                    {
                        style = highlight_style;
                    }
                }
                if let Some(&hint_ch) = overlays.get(&(y, x)) {
                    ch = hint_ch;
                    style = hint_style;
                }

                if style != run_style && !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), run_style));
                }
                run_style = style;
                run.push(ch);
            }
            if !run.is_empty() {
                spans.push(Span::styled(run, run_style));
            }
            lines.push(Line::from(spans));
        }

        Text::from(lines)
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Builds the workbench used when the TUI starts without any figures loaded.
pub fn demo_workbench() -> Workbench {
    let mut workbench = Workbench::new();
    for figure in crate::model::fixtures::demo_figures() {
        workbench.upsert_figure(figure);
    }
    let first = workbench.figure_ids().next().cloned();
    workbench.set_active_figure_id(first);
    workbench
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{App, TuiTheme, UiState, Workbench};
    use crate::model::FigureId;
    use crossterm::event::KeyCode;
    use ratatui::prelude::Text;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    pub(crate) struct HeadlessTui {
        app: App,
    }

    impl HeadlessTui {
        pub(crate) fn new(
            workbench: Arc<Mutex<Workbench>>,
            ui_state: Option<Arc<Mutex<UiState>>>,
        ) -> Self {
            let mut app = App::new(workbench, ui_state, TuiTheme::default());
            app.publish_selection_to_ui_state();
            Self { app }
        }

        pub(crate) fn press(&mut self, code: KeyCode) -> bool {
            self.app.handle_key_code(code)
        }

        pub(crate) fn sync_from_shared(&mut self) {
            self.app.sync_from_shared();
        }

        pub(crate) fn active_figure_id(&self) -> Option<FigureId> {
            self.app.figure_id.clone()
        }

        pub(crate) fn selected_rect_index(&self) -> Option<usize> {
            self.app.rects_state.selected()
        }

        pub(crate) fn rectangle_count(&self) -> usize {
            self.app.rectangles.len()
        }

        pub(crate) fn follow_ai(&self) -> bool {
            self.app.follow_ai
        }

        pub(crate) fn figure_text(&self) -> Text<'static> {
            self.app.figure_text()
        }

        pub(crate) fn toast_message(&self) -> Option<String> {
            self.app.toast.as_ref().map(|toast| toast.message.clone())
        }
    }
}
