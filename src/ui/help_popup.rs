use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::ui::styles;

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn key(keys: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {keys:<12}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Documents"),
        Line::from(""),
        key("Tab", "Switch between Original and Modified"),
        key("h/l", "Focus Original/Modified"),
        key("o", "Type a path for the focused slot"),
        key("(paste)", "Drop a file path onto the focused slot"),
        key("x/Del", "Remove the focused document"),
        key("c/Enter", "Compare the two documents"),
        Line::from(""),
        section("Results"),
        Line::from(""),
        key("j/J/Down", "Next change"),
        key("k/K/Up", "Previous change"),
        key("]/[", "Next/previous change"),
        key("1 2 3 4", "Toggle unchanged/added/removed/modified"),
        key("Ctrl-e/y", "Scroll one line"),
        key("Ctrl-d/u", "Half page down/up"),
        key("Ctrl-f/b", "Full page down/up"),
        key("g/G", "Go to top/bottom"),
        key("e", "Export comparison-report.html"),
        key("y", "Copy report to clipboard"),
        Line::from(""),
        section("Commands"),
        Line::from(""),
        key(":export", "Export the report"),
        key(":clip", "Copy the report to clipboard"),
        key(":server URL", "Use another comparison server"),
        key(":version", "Show version"),
        key(":q", "Quit"),
        Line::from(""),
        key("?", "Toggle this help"),
        key("q", "Quit"),
    ]
}

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help (j/k to scroll) - Press ? or Esc to close ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, true));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let help_text = help_lines();
    let indicator_style = styles::help_indicator_style(theme);

    let total_lines = help_text.len();
    let viewport_height = inner.height as usize;
    app.help_state.total_lines = total_lines;
    app.help_state.viewport_height = viewport_height;

    let can_scroll_up = app.help_state.scroll_offset > 0;
    let can_scroll_down = app.help_state.scroll_offset + viewport_height < total_lines;

    let visible_lines: Vec<Line> = help_text
        .into_iter()
        .skip(app.help_state.scroll_offset)
        .take(viewport_height)
        .collect();

    frame.render_widget(Paragraph::new(visible_lines), inner);

    if can_scroll_up {
        let up_area = Rect {
            x: inner.x + inner.width.saturating_sub(8),
            y: inner.y,
            width: 7,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("▲ more", indicator_style))),
            up_area,
        );
    }

    if can_scroll_down {
        let down_area = Rect {
            x: inner.x + inner.width.saturating_sub(8),
            y: inner.y + inner.height.saturating_sub(1),
            width: 7,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("▼ more", indicator_style))),
            down_area,
        );
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
