use ratatui::style::{Modifier, Style};

use crate::model::DiffStatus;
use crate::render::SegmentKind;
use crate::slots::ZoneState;
use crate::theme::Theme;

pub fn header_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.panel_bg)
        .fg(theme.fg_primary)
        .add_modifier(Modifier::BOLD)
}

pub fn dim_style(theme: &Theme) -> Style {
    Style::default().fg(theme.fg_dim)
}

pub fn border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.border_unfocused)
    }
}

pub fn zone_border_style(theme: &Theme, state: ZoneState, focused: bool) -> Style {
    let color = match state {
        ZoneState::DragHover => theme.zone_hover,
        ZoneState::HasFile => theme.zone_has_file,
        ZoneState::Idle if focused => theme.border_focused,
        ZoneState::Idle => theme.zone_idle,
    };
    let style = Style::default().fg(color);
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn status_bar_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.status_bar_bg)
        .fg(theme.fg_primary)
}

pub fn mode_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.mode_fg)
        .bg(theme.mode_bg)
        .add_modifier(Modifier::BOLD)
}

pub fn error_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.error_fg)
        .add_modifier(Modifier::BOLD)
}

pub fn status_color(theme: &Theme, status: DiffStatus) -> ratatui::style::Color {
    match status {
        DiffStatus::Unchanged => theme.fg_secondary,
        DiffStatus::Added => theme.diff_add,
        DiffStatus::Removed => theme.diff_del,
        DiffStatus::Modified => theme.diff_highlight_bg,
    }
}

/// Active chips are filled with the status color, inactive ones are dim and
/// struck through.
pub fn chip_style(theme: &Theme, status: DiffStatus, active: bool) -> Style {
    if active {
        Style::default()
            .fg(theme.chip_active_fg)
            .bg(status_color(theme, status))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.chip_inactive)
            .add_modifier(Modifier::CROSSED_OUT)
    }
}

pub fn segment_style(theme: &Theme, kind: SegmentKind) -> Style {
    match kind {
        SegmentKind::Plain => Style::default().fg(theme.fg_primary),
        SegmentKind::Highlight => Style::default()
            .fg(theme.diff_highlight_fg)
            .bg(theme.diff_highlight_bg),
        SegmentKind::Added => Style::default().fg(theme.diff_add).bg(theme.diff_add_bg),
        SegmentKind::Removed => Style::default()
            .fg(theme.diff_del)
            .bg(theme.diff_del_bg)
            .add_modifier(Modifier::CROSSED_OUT),
    }
}

pub fn page_gutter_style(theme: &Theme) -> Style {
    Style::default().fg(theme.page_gutter)
}

pub fn absent_cell_style(theme: &Theme) -> Style {
    Style::default().fg(theme.diff_absent)
}

pub fn focus_marker_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.cursor_color)
        .add_modifier(Modifier::BOLD)
}

pub fn focused_row_style(theme: &Theme) -> Style {
    Style::default().bg(theme.bg_highlight)
}

pub fn help_indicator_style(theme: &Theme) -> Style {
    Style::default().fg(theme.help_indicator)
}
