use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, InputMode};
use crate::model::{DiffStatus, SlotId};
use crate::render::{RenderedCell, RenderedResults, Segment};
use crate::slots::{DropZone, ZoneState};
use crate::theme::Theme;
use crate::ui::{help_popup, status_bar, styles};

const MARKER_WIDTH: usize = 2;
const GUTTER_WIDTH: usize = 5;
const DIVIDER: &str = " │ ";
const SLOT_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, app: &mut App) {
    let error_height = u16::from(app.error.is_some());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Header
            Constraint::Length(SLOT_HEIGHT),  // Drop zones
            Constraint::Length(1),            // Compare button + hint
            Constraint::Length(error_height), // Error line
            Constraint::Min(0),               // Results
            Constraint::Length(1),            // Status bar
        ])
        .split(frame.area());

    status_bar::render_header(frame, app, chunks[0]);
    render_slots(frame, app, chunks[1]);
    render_compare_line(frame, app, chunks[2]);
    if let Some(error) = &app.error {
        let line = Line::from(Span::styled(format!(" ✗ {error}"), styles::error_style(&app.theme)));
        frame.render_widget(Paragraph::new(line), chunks[3]);
    }
    render_results(frame, app, chunks[4]);
    status_bar::render_status_bar(frame, app, chunks[5]);

    if app.input_mode == InputMode::Help {
        help_popup::render_help(frame, app);
    }
}

fn render_slots(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_slot(frame, app, app.zone(SlotId::Original), chunks[0]);
    render_slot(frame, app, app.zone(SlotId::Modified), chunks[1]);
}

fn render_slot(frame: &mut Frame, app: &App, zone: &DropZone, area: Rect) {
    let theme = &app.theme;
    let slot = zone.slot();
    let focused = app.focused_slot == slot;
    let state = zone.state();

    let block = Block::default()
        .title(format!(" {} Document ", slot.label()))
        .borders(Borders::ALL)
        .border_style(styles::zone_border_style(theme, state, focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match state {
        ZoneState::DragHover => {
            let prompt = "Path: ";
            if app.input_mode == InputMode::PathEntry && focused {
                let x = inner.x + (prompt.width() + app.path_editor.cursor_column()) as u16;
                frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
            }
            vec![
                Line::from(vec![
                    Span::styled(prompt, Style::default().fg(theme.zone_hover)),
                    Span::styled(
                        app.path_editor.text().to_string(),
                        Style::default().fg(theme.fg_primary),
                    ),
                ]),
                Line::from(Span::styled(
                    "Enter to select, Esc to cancel",
                    styles::dim_style(theme),
                )),
            ]
        }
        ZoneState::HasFile => vec![
            Line::from(Span::styled(
                zone.display_name().unwrap_or_default().to_string(),
                Style::default()
                    .fg(theme.fg_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                zone.display_size().unwrap_or_default(),
                styles::dim_style(theme),
            )),
            Line::from(Span::styled("x to remove", styles::dim_style(theme))),
        ],
        ZoneState::Idle => vec![
            Line::from(Span::styled(
                "Drop a PDF or DOCX here",
                Style::default().fg(theme.fg_secondary),
            )),
            Line::from(Span::styled(
                "or press o to choose a file",
                styles::dim_style(theme),
            )),
        ],
    };

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_compare_line(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let button = if app.loading {
        Span::styled(" Comparing… ", styles::mode_style(theme))
    } else if app.can_compare() {
        Span::styled(" [ Compare ] ", styles::mode_style(theme))
    } else {
        Span::styled(
            " [ Compare ] ",
            styles::dim_style(theme).add_modifier(Modifier::CROSSED_OUT),
        )
    };

    let mut spans = vec![Span::raw(" "), button];
    if let Some(hint) = app.gate.hint {
        spans.push(Span::styled(format!("  {hint}"), styles::dim_style(theme)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    if !app.results_visible {
        app.pane.viewport_height = 0;
        app.pane.total_lines = 0;
        return;
    }
    let Some(results) = &app.results else {
        return;
    };
    let theme = &app.theme;

    let block = Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Counters + filter chips
            Constraint::Length(1), // Document names
            Constraint::Min(0),    // Rows
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(chip_line(results, app, theme)),
        chunks[0],
    );

    let column_width = column_width(inner.width as usize);
    let names = Line::from(vec![
        Span::raw(" ".repeat(MARKER_WIDTH + GUTTER_WIDTH)),
        Span::styled(
            pad(&truncate(&results.document_a, column_width), column_width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(DIVIDER, styles::dim_style(theme)),
        Span::raw(" ".repeat(GUTTER_WIDTH)),
        Span::styled(
            truncate(&results.document_b, column_width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(names), chunks[1]);

    let (lines, row_spans) = if results.rows.is_empty() {
        (
            vec![Line::from(Span::styled(
                "  The server returned no paragraphs.",
                styles::dim_style(theme),
            ))],
            Vec::new(),
        )
    } else {
        build_row_lines(results, app, theme, column_width)
    };

    let pane = &mut app.pane;
    pane.viewport_height = chunks[2].height as usize;
    pane.total_lines = lines.len();
    pane.resolve_center(&row_spans);
    pane.scroll_offset = pane.scroll_offset.min(pane.max_scroll_offset());

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(pane.scroll_offset)
        .take(pane.viewport_height)
        .collect();
    frame.render_widget(Paragraph::new(visible), chunks[2]);
}

fn chip_line<'a>(results: &RenderedResults, app: &App, theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (idx, status) in DiffStatus::ALL.iter().enumerate() {
        let inactive = app.filters.is_inactive(*status);
        spans.push(Span::styled(
            format!(" {} {} {} ", idx + 1, status.label(), results.counts.get(*status)),
            styles::chip_style(theme, *status, !inactive),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Width of one text column once marker, gutters and divider are taken.
fn column_width(total: usize) -> usize {
    let chrome = MARKER_WIDTH + 2 * GUTTER_WIDTH + DIVIDER.width();
    (total.saturating_sub(chrome) / 2).max(8)
}

/// Lines for all visible rows plus each row's `(top, height)` in those lines.
/// Filtered rows take no lines.
fn build_row_lines<'a>(
    results: &RenderedResults,
    app: &App,
    theme: &Theme,
    column_width: usize,
) -> (Vec<Line<'a>>, Vec<(usize, usize)>) {
    let mut lines = Vec::new();
    let mut spans = Vec::with_capacity(results.rows.len());

    for (idx, row) in results.rows.iter().enumerate() {
        if !app.filters.is_shown(row.status) {
            spans.push((lines.len(), 0));
            continue;
        }

        let focused = app.pane.focused_row == Some(idx);
        let left = wrap_cell(&row.left, column_width, theme);
        let right = wrap_cell(&row.right, column_width, theme);
        let height = left.len().max(right.len());
        let top = lines.len();

        for i in 0..height {
            let marker = if focused && i == 0 { "▶ " } else { "  " };
            let mut line_spans = vec![
                Span::styled(marker, styles::focus_marker_style(theme)),
                Span::styled(gutter(row.left.page, i), styles::page_gutter_style(theme)),
            ];
            let (left_spans, left_width) = left.get(i).cloned().unwrap_or_default();
            line_spans.extend(left_spans);
            line_spans.push(Span::raw(" ".repeat(column_width.saturating_sub(left_width))));
            line_spans.push(Span::styled(
                DIVIDER,
                Style::default().fg(styles::status_color(theme, row.status)),
            ));
            line_spans.push(Span::styled(
                gutter(row.right.page, i),
                styles::page_gutter_style(theme),
            ));
            let (right_spans, _) = right.get(i).cloned().unwrap_or_default();
            line_spans.extend(right_spans);

            let line = Line::from(line_spans);
            lines.push(if focused {
                line.style(styles::focused_row_style(theme))
            } else {
                line
            });
        }
        lines.push(Line::from(""));
        spans.push((top, height));
    }

    (lines, spans)
}

fn gutter(page: Option<u32>, line_idx: usize) -> String {
    match page {
        Some(page) if line_idx == 0 => format!("{:>width$} ", page, width = GUTTER_WIDTH - 1),
        _ => " ".repeat(GUTTER_WIDTH),
    }
}

type WrappedLine = (Vec<Span<'static>>, usize);

/// Word-wrap a cell's segments into lines of at most `width` columns. An
/// empty cell still takes one (blank) line.
fn wrap_cell(cell: &RenderedCell, width: usize, theme: &Theme) -> Vec<WrappedLine> {
    if cell.is_empty() {
        let placeholder = Span::styled("", styles::absent_cell_style(theme));
        return vec![(vec![placeholder], 0)];
    }

    let mut wrapper = Wrapper::new(width);
    for Segment { kind, text } in &cell.segments {
        let style = styles::segment_style(theme, *kind);
        let text: String = text
            .chars()
            .map(|c| if c != '\n' && c.is_control() { ' ' } else { c })
            .collect();
        for (n, part) in text.split('\n').enumerate() {
            if n > 0 {
                wrapper.break_line();
            }
            for token in part.split_inclusive(' ') {
                wrapper.push_token(token, style);
            }
        }
    }
    wrapper.finish()
}

struct Wrapper {
    width: usize,
    lines: Vec<WrappedLine>,
    current: Vec<Span<'static>>,
    used: usize,
}

impl Wrapper {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            lines: Vec::new(),
            current: Vec::new(),
            used: 0,
        }
    }

    fn break_line(&mut self) {
        if let Some(last) = self.current.last_mut() {
            let kept = last.content.trim_end().len();
            let trailing: usize = last.content[kept..]
                .chars()
                .map(|ch| ch.width().unwrap_or(0))
                .sum();
            self.used = self.used.saturating_sub(trailing);
            last.content.to_mut().truncate(kept);
        }
        let spans = std::mem::take(&mut self.current);
        self.lines.push((spans, self.used));
        self.used = 0;
    }

    fn push_token(&mut self, token: &str, style: Style) {
        let visible = token.trim_end();
        if self.used > 0 && self.used + visible.width() > self.width {
            self.break_line();
        }
        if self.used == 0 && visible.is_empty() {
            return;
        }

        if visible.width() > self.width {
            for ch in token.chars() {
                let w = ch.width().unwrap_or(0);
                if self.used + w > self.width {
                    self.break_line();
                }
                self.push_text(ch.to_string(), style, w);
            }
            return;
        }

        let text = if self.used + token.width() > self.width {
            visible
        } else {
            token
        };
        self.push_text(text.to_string(), style, text.width());
    }

    fn push_text(&mut self, text: String, style: Style, width: usize) {
        match self.current.last_mut() {
            Some(last) if last.style == style => last.content.to_mut().push_str(&text),
            _ => self.current.push(Span::styled(text, style)),
        }
        self.used += width;
    }

    fn finish(mut self) -> Vec<WrappedLine> {
        if !self.current.is_empty() || self.lines.is_empty() {
            self.break_line();
        }
        self.lines
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::CompareReply;
    use crate::config::Settings;
    use crate::model::DiffResult;
    use crate::render::SegmentKind;
    use ratatui::{Terminal, backend::TestBackend};

    fn cell(text: &str) -> RenderedCell {
        RenderedCell {
            page: None,
            segments: vec![Segment {
                kind: SegmentKind::Plain,
                text: text.to_string(),
            }],
        }
    }

    fn line_text(line: &WrappedLine) -> String {
        line.0.iter().map(|s| s.content.as_ref()).collect()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn should_wrap_on_word_boundaries() {
        let theme = Theme::dark();
        let lines = wrap_cell(&cell("the quick brown fox"), 10, &theme);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["the quick", "brown fox"]);
        assert!(lines.iter().all(|(_, w)| *w <= 10));
    }

    #[test]
    fn should_hard_break_words_longer_than_the_column() {
        let theme = Theme::dark();
        let lines = wrap_cell(&cell("abcdefghijkl"), 5, &theme);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["abcde", "fghij", "kl"]);
    }

    #[test]
    fn should_give_empty_cells_one_blank_line() {
        let theme = Theme::dark();
        let empty = RenderedCell {
            page: None,
            segments: Vec::new(),
        };
        let lines = wrap_cell(&empty, 10, &theme);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].1, 0);
    }

    #[test]
    fn should_wrap_text_with_control_characters() {
        // given
        let theme = Theme::dark();

        // when
        let lines = wrap_cell(&cell("abcdefghijkl\r\x0b\x0c"), 5, &theme);

        // then
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["abcde", "fghij", "kl"]);
        assert!(lines.iter().all(|(_, w)| *w <= 5));
        assert_eq!(lines[2].1, 2);
    }

    #[test]
    fn should_truncate_long_names_with_ellipsis() {
        assert_eq!(truncate("contract-final.pdf", 9), "contract…");
        assert_eq!(truncate("a.pdf", 9), "a.pdf");
    }

    #[test]
    fn should_draw_slots_results_and_readout() {
        // given
        let mut app = App::new(Theme::dark(), Settings::default());
        let result: DiffResult = serde_json::from_str(
            r#"{"document_a":{"name":"old.pdf"},"document_b":{"name":"new.pdf"},"diff":[
                {"status":"unchanged","text_a":"Same","text_b":"Same","page_a":1,"page_b":1},
                {"status":"modified","text_a":"Pay <mark>30</mark>","text_b":"Pay <mark>60</mark>","page_a":2,"page_b":2},
                {"status":"added","text_a":null,"text_b":"Extra"}
            ]}"#,
        )
        .unwrap();
        app.finish_compare(CompareReply {
            generation: 0,
            outcome: Ok(result),
        });
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        // when
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        // then
        let text = screen(&terminal);
        assert!(text.contains("Original Document"));
        assert!(text.contains("Modified Document"));
        assert!(text.contains("Drop a PDF or DOCX here"));
        assert!(text.contains("Select both documents to compare"));
        assert!(text.contains("Unchanged 1"));
        assert!(text.contains("Modified 1"));
        assert!(text.contains("old.pdf"));
        assert!(text.contains("Pay 60"));
        assert!(text.contains("0 of 2"));

        app.next_change();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("1 of 2"));
        assert!(text.contains("▶"));
        assert_eq!(app.pane.pending_center, None);
    }

    #[test]
    fn should_draw_help_popup_over_layout() {
        let mut app = App::new(Theme::light(), Settings::default());
        app.toggle_help();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        assert!(screen(&terminal).contains("Toggle unchanged/added/removed/modified"));
        assert!(app.help_state.total_lines > 0);
    }
}
