//! Keyboard/button navigation over the visible changed rows.

use crate::filter::Filters;
use crate::render::RenderedRow;

/// The parts of the results view navigation drives.
pub trait ResultsSurface {
    /// Mark `row` as focused, clearing any previous marker
    fn set_focus_marker(&mut self, row: Option<usize>);

    /// Scroll so `row` sits in the middle of the viewport
    fn center_row(&mut self, row: usize);

    fn set_position_readout(&mut self, readout: String);
}

/// Ordered row indices of the visible change set plus a cursor into it.
///
/// The cursor is `None` after every rebuild and otherwise always indexes
/// inside the set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavController {
    visible: Vec<usize>,
    cursor: Option<usize>,
}

impl NavController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the visible change set and drop focus.
    pub fn rebuild<S: ResultsSurface + ?Sized>(
        &mut self,
        rows: &[RenderedRow],
        filters: &Filters,
        surface: &mut S,
    ) {
        self.visible = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.status.is_change() && filters.is_shown(row.status))
            .map(|(idx, _)| idx)
            .collect();
        self.cursor = None;
        surface.set_focus_marker(None);
        surface.set_position_readout(self.position_text());
    }

    /// Forget all rows, as when results are cleared for a new compare.
    pub fn clear<S: ResultsSurface + ?Sized>(&mut self, surface: &mut S) {
        self.rebuild(&[], &Filters::default(), surface);
    }

    /// Focus the change at `target`, wrapping past either end.
    /// No-op on an empty set.
    pub fn go_to<S: ResultsSurface + ?Sized>(&mut self, target: isize, surface: &mut S) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }

        let idx = if target < 0 {
            len - 1
        } else if target as usize >= len {
            0
        } else {
            target as usize
        };

        self.cursor = Some(idx);
        let row = self.visible[idx];
        surface.set_focus_marker(Some(row));
        surface.center_row(row);
        surface.set_position_readout(self.position_text());
    }

    pub fn next<S: ResultsSurface + ?Sized>(&mut self, surface: &mut S) {
        self.go_to(self.cursor_index() + 1, surface);
    }

    pub fn prev<S: ResultsSurface + ?Sized>(&mut self, surface: &mut S) {
        self.go_to(self.cursor_index() - 1, surface);
    }

    /// Cursor as a signed index, `-1` when nothing is focused
    pub fn cursor_index(&self) -> isize {
        self.cursor.map_or(-1, |c| c as isize)
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Row index of the focused change
    pub fn focused_row(&self) -> Option<usize> {
        self.cursor.map(|c| self.visible[c])
    }

    #[cfg(test)]
    pub fn visible_rows(&self) -> &[usize] {
        &self.visible
    }

    pub fn position_text(&self) -> String {
        let current = self.cursor.map_or(0, |c| c + 1);
        format!("{current} of {}", self.visible.len())
    }
}
