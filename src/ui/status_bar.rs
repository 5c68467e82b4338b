use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode, Message, MessageType};
use crate::theme::Theme;
use crate::ui::styles;

pub fn build_message_span(message: Option<&Message>, theme: &Theme) -> (Span<'static>, usize) {
    if let Some(msg) = message {
        let (fg, bg) = match msg.message_type {
            MessageType::Info => (theme.message_info_fg, theme.message_info_bg),
            MessageType::Warning => (theme.message_warning_fg, theme.message_warning_bg),
            MessageType::Error => (theme.message_error_fg, theme.message_error_bg),
        };
        let content = format!(" {} ", msg.content);
        let width = content.width();
        (
            Span::styled(
                content,
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            ),
            width,
        )
    } else {
        (Span::raw(""), 0)
    }
}

pub fn build_right_aligned_spans<'a>(
    mut left_spans: Vec<Span<'a>>,
    message_span: Span<'a>,
    message_width: usize,
    total_width: usize,
) -> Vec<Span<'a>> {
    let left_width: usize = left_spans.iter().map(|s| s.content.width()).sum();
    let padding_width = total_width.saturating_sub(left_width + message_width);
    let padding = Span::raw(" ".repeat(padding_width));

    left_spans.push(padding);
    if message_width > 0 {
        left_spans.push(message_span);
    }
    left_spans
}

pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let title_span = Span::styled(" doccmp - Document Comparison ", styles::header_style(theme));
    let server_span = Span::styled(
        format!("[{}] ", app.settings.server),
        Style::default().fg(theme.fg_secondary),
    );
    let busy_span = if app.loading {
        Span::styled(
            " Comparing… ",
            Style::default()
                .fg(theme.message_warning_fg)
                .bg(theme.message_warning_bg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![title_span, server_span, busy_span]);
    let header = Paragraph::new(line)
        .style(styles::status_bar_style(theme))
        .block(Block::default());

    frame.render_widget(header, area);
}

pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    // In command mode, show the input on the left (vim-style)
    let left_spans = if app.input_mode == InputMode::Command {
        vec![Span::styled(
            format!(":{}", app.command_editor.text()),
            Style::default().fg(theme.fg_primary),
        )]
    } else {
        let mode_str = match app.input_mode {
            InputMode::Normal => " NORMAL ",
            InputMode::PathEntry => " OPEN ",
            InputMode::Command => " COMMAND ",
            InputMode::Help => " HELP ",
        };
        let mode_span = Span::styled(mode_str, styles::mode_style(theme));

        let hints = match app.input_mode {
            InputMode::Normal if app.results_visible => {
                " j/k:change  1-4:filter  e:export  o:open  c:compare  ?:help  q:quit "
            }
            InputMode::Normal => " Tab:slot  o:open  x:remove  c:compare  ?:help  q:quit ",
            InputMode::PathEntry => " Enter:select  Esc:cancel ",
            InputMode::Command => " Enter:execute  Esc:cancel ",
            InputMode::Help => " q/?/Esc:close ",
        };
        let hints_span = Span::styled(hints, Style::default().fg(theme.fg_secondary));

        let mut spans = vec![mode_span, hints_span];
        if app.results_visible {
            spans.push(Span::styled(
                format!(" {} ", app.pane.readout),
                Style::default()
                    .fg(theme.cursor_color)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        spans
    };

    let (message_span, message_width) = build_message_span(app.message.as_ref(), theme);
    let total_width = area.width as usize;
    let spans = build_right_aligned_spans(left_spans, message_span, message_width, total_width);

    let status = Paragraph::new(Line::from(spans))
        .style(styles::status_bar_style(theme))
        .block(Block::default());

    frame.render_widget(status, area);
}
