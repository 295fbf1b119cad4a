// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, and style helpers used by TUI rendering.
fn stack_main_panes_vertically(area: Rect) -> bool {
    area.width < 80
}

fn footer_uses_compact_mode(area: Rect) -> bool {
    stack_main_panes_vertically(area)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Figure,
    Rectangles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusOwner {
    Human,
    Agent,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::Figure => Self::Rectangles,
            Self::Rectangles => Self::Figure,
        }
    }

    fn cycle_back(self) -> Self {
        match self {
            Self::Figure => Self::Rectangles,
            Self::Rectangles => Self::Figure,
        }
    }
}

fn panel_border_style_for_focus(active: Focus, panel: Focus, owner: FocusOwner) -> Style {
    if active != panel {
        return Style::default();
    }

    Style::default().fg(focus_color_for_owner(owner))
}

fn focus_color_for_owner(owner: FocusOwner) -> Color {
    match owner {
        FocusOwner::Human => FOCUS_COLOR,
        FocusOwner::Agent => AGENT_FOCUS_COLOR,
    }
}

fn pane_title(label: &str, key: char, tail: Option<&str>) -> String {
    let mut title = format!("─[{key}]─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn rect_counter_label(selected: Option<usize>, total: usize) -> String {
    if total == 0 {
        return "[0/0]".to_owned();
    }

    let width = total.to_string().len();
    let index = selected.map(|idx| idx + 1).unwrap_or(0).min(total);
    format!("[{index:0width$}/{total}]")
}

fn rect_row_label(index: usize, rect: &decompose::Rect) -> String {
    format!(
        "{:>3}  {}x{} @ ({},{})",
        index + 1,
        rect.width(),
        rect.height(),
        rect.top(),
        rect.left()
    )
}

fn footer_help_line(app: &App, toast_suffix: &str, compact: bool) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    let follow_ai = if app.follow_ai { "F◼ " } else { "F◻ " };
    let rect_hotkeys_disabled = app.rectangles.is_empty();

    if compact {
        let compact_hint = match app.hint_mode {
            HintMode::Inactive => "f",
            HintMode::Awaiting { .. } => "letters",
        };
        push_footer_entry_with_separator(&mut spans, "AI", follow_ai, " | ");
        push_footer_entry_with_separator_maybe_disabled(
            &mut spans,
            "HINT",
            compact_hint,
            " | ",
            rect_hotkeys_disabled,
        );
        push_footer_entry_with_separator(&mut spans, "FIND", "p", " | ");
        push_footer_entry_with_separator(&mut spans, "QUIT", "q", " | ");
    } else {
        match app.hint_mode {
            HintMode::Inactive => {
                push_footer_entry_maybe_disabled(&mut spans, "MOVE", "j/k", rect_hotkeys_disabled);
                push_footer_entry_maybe_disabled(&mut spans, "FIRST", "g", rect_hotkeys_disabled);
                push_footer_entry_maybe_disabled(&mut spans, "LAST", "G", rect_hotkeys_disabled);
                push_footer_entry_maybe_disabled(&mut spans, "HINT", "f", rect_hotkeys_disabled);
                push_footer_entry_maybe_disabled(&mut spans, "YANK", "y", rect_hotkeys_disabled);
                push_footer_entry(&mut spans, "FIND", "p");
            }
            HintMode::Awaiting { .. } => {
                push_footer_entry(&mut spans, "HINT", "letters");
                push_footer_entry(&mut spans, "CANCEL", "Esc");
            }
        }

        push_footer_entry(&mut spans, "AI", follow_ai);
        push_footer_entry(&mut spans, "QUIT", "q");
    }

    push_toast_suffix(&mut spans, toast_suffix);

    Line::from(spans)
}

fn palette_footer_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let query = app.palette_query.as_str();
    let (idx, total) = match app.palette_results.len() {
        0 => (0usize, 0usize),
        n => (app.palette_index.saturating_add(1), n),
    };

    let count = if query.is_empty() {
        None
    } else if total == 0 {
        Some("0".to_owned())
    } else {
        Some(format!("{idx}/{total}"))
    };

    let mut spans = vec![
        Span::styled(
            "p ".to_owned(),
            Style::default()
                .fg(FOOTER_KEY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(query.to_owned()),
        Span::raw("   "),
    ];
    if let Some(count) = count {
        spans.push(Span::styled(count, Style::default().fg(Color::LightGreen)));
    }

    push_footer_entry_with_separator(&mut spans, "Accept", "Enter", " | ");
    push_footer_entry_with_separator(&mut spans, "Close", "Esc", " | ");

    push_toast_suffix(&mut spans, toast_suffix);

    Line::from(spans)
}

fn push_toast_suffix(spans: &mut Vec<Span<'static>>, toast_suffix: &str) {
    let toast_message = toast_suffix
        .strip_prefix(" | ")
        .unwrap_or(toast_suffix)
        .trim();
    if toast_message.is_empty() {
        return;
    }

    spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
    spans.push(Span::styled(
        "Toast:".to_owned(),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::raw(toast_message.to_owned()));
}

fn footer_brand_line() -> Line<'static> {
    Line::from(vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        Style::default().fg(FOOTER_BRAND_COLOR),
    )])
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn render_palette(frame: &mut Frame<'_>, app: &App, main_area: Rect) {
    let area = centered_rect(60, 60, main_area);
    frame.render_widget(Clear, area);

    let items = app
        .palette_results
        .iter()
        .map(|&idx| ListItem::new(Line::from(app.palette_entries[idx].label.clone())))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(pane_title("Find", 'p', None))
                .border_style(Style::default().fg(FOCUS_COLOR)),
        )
        .highlight_style(app.theme.selection_style());

    let mut state = ListState::default();
    if !app.palette_results.is_empty() {
        state.select(Some(app.palette_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(spans, label, value, false);
}

fn push_footer_entry_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    disabled: bool,
) {
    push_footer_entry_with_separator_maybe_disabled(spans, label, value, " | ", disabled);
}

fn push_footer_entry_with_separator(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    separator: &'static str,
) {
    push_footer_entry_with_separator_maybe_disabled(spans, label, value, separator, false);
}

fn push_footer_entry_with_separator_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    separator: &'static str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(
            separator.to_owned(),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.extend(footer_value_spans(value, disabled));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}

fn footer_value_spans(value: &str, disabled: bool) -> Vec<Span<'static>> {
    let color = if disabled {
        Color::DarkGray
    } else {
        FOOTER_KEY_COLOR
    };
    vec![Span::styled(
        value.to_owned(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )]
}
