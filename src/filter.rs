use crate::model::DiffStatus;

/// Which status categories are currently displayed. All are shown by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    shown: [bool; 4],
}

impl Default for Filters {
    fn default() -> Self {
        Self { shown: [true; 4] }
    }
}

impl Filters {
    pub fn is_shown(&self, status: DiffStatus) -> bool {
        self.shown[status.index()]
    }

    /// Chip is rendered inactive while its status is hidden
    pub fn is_inactive(&self, status: DiffStatus) -> bool {
        !self.is_shown(status)
    }

    /// Flip one category; returns whether it is now shown.
    pub fn toggle(&mut self, status: DiffStatus) -> bool {
        let shown = &mut self.shown[status.index()];
        *shown = !*shown;
        *shown
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_show_everything_by_default() {
        let filters = Filters::default();
        assert!(DiffStatus::ALL.iter().all(|s| filters.is_shown(*s)));
    }

    #[test]
    fn should_toggle_single_category() {
        let mut filters = Filters::default();

        assert!(!filters.toggle(DiffStatus::Added));
        assert!(filters.is_inactive(DiffStatus::Added));
        assert!(filters.is_shown(DiffStatus::Removed));

        assert!(filters.toggle(DiffStatus::Added));
        assert!(filters.is_shown(DiffStatus::Added));
    }

    #[test]
    fn should_reset_to_all_shown() {
        let mut filters = Filters::default();
        filters.toggle(DiffStatus::Modified);
        filters.toggle(DiffStatus::Unchanged);
        filters.reset();
        assert_eq!(filters, Filters::default());
    }
}
