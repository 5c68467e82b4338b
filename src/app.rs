use std::path::{Path, PathBuf};

use chrono::Local;

use crate::client::{CompareJob, CompareReply};
use crate::config::Settings;
use crate::error::DoccmpError;
use crate::filter::Filters;
use crate::gate::{GateState, gate};
use crate::model::{DiffStatus, SlotId};
use crate::nav::{NavController, ResultsSurface};
use crate::output::{build_report, copy_to_clipboard, report_timestamp, write_report};
use crate::render::{RenderedResults, render_results};
use crate::slots::{DropOrigin, DropZone, SelectError, parse_dropped_path};
use crate::text_edit::LineEditor;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Path prompt open on the focused slot
    PathEntry,
    Command,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub content: String,
    pub message_type: MessageType,
}

#[derive(Debug, Default)]
pub struct HelpState {
    pub scroll_offset: usize,
    pub viewport_height: usize,
    pub total_lines: usize,
}

/// Scroll state of the results pane. Rows wrap, so the pane only knows line
/// geometry after a render; centering is resolved there.
#[derive(Debug, Default)]
pub struct ResultsPane {
    pub focused_row: Option<usize>,
    pub scroll_offset: usize,
    pub pending_center: Option<usize>,
    pub readout: String,
    pub viewport_height: usize,
    pub total_lines: usize,
}

impl ResultsPane {
    pub fn max_scroll_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport_height)
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.pending_center = None;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll_offset());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Apply a pending center request given the line span of each row.
    pub fn resolve_center(&mut self, row_spans: &[(usize, usize)]) {
        let Some(row) = self.pending_center.take() else {
            return;
        };
        if let Some(&(top, height)) = row_spans.get(row) {
            let middle = top + height / 2;
            self.scroll_offset = middle
                .saturating_sub(self.viewport_height / 2)
                .min(self.max_scroll_offset());
        }
    }
}

impl ResultsSurface for ResultsPane {
    fn set_focus_marker(&mut self, row: Option<usize>) {
        self.focused_row = row;
    }

    fn center_row(&mut self, row: usize) {
        self.pending_center = Some(row);
    }

    fn set_position_readout(&mut self, readout: String) {
        self.readout = readout;
    }
}

pub struct App {
    pub theme: Theme,
    pub settings: Settings,
    pub input_mode: InputMode,
    pub focused_slot: SlotId,
    pub original: DropZone,
    pub modified: DropZone,
    pub gate: GateState,
    pub loading: bool,
    pub error: Option<String>,
    pub results: Option<RenderedResults>,
    pub results_visible: bool,
    pub filters: Filters,
    pub nav: NavController,
    pub pane: ResultsPane,
    pub path_editor: LineEditor,
    pub command_editor: LineEditor,
    pub message: Option<Message>,
    pub help_state: HelpState,
    pub should_quit: bool,
    pending_job: Option<CompareJob>,
    generation: u64,
}

impl App {
    pub fn new(theme: Theme, settings: Settings) -> Self {
        let mut app = Self {
            theme,
            settings,
            input_mode: InputMode::Normal,
            focused_slot: SlotId::Original,
            original: DropZone::new(SlotId::Original),
            modified: DropZone::new(SlotId::Modified),
            gate: gate(false, false),
            loading: false,
            error: None,
            results: None,
            results_visible: false,
            filters: Filters::default(),
            nav: NavController::new(),
            pane: ResultsPane::default(),
            path_editor: LineEditor::new(),
            command_editor: LineEditor::new(),
            message: None,
            help_state: HelpState::default(),
            should_quit: false,
            pending_job: None,
            generation: 0,
        };
        app.nav.clear(&mut app.pane);
        app
    }

    pub fn zone(&self, slot: SlotId) -> &DropZone {
        match slot {
            SlotId::Original => &self.original,
            SlotId::Modified => &self.modified,
        }
    }

    fn zone_mut(&mut self, slot: SlotId) -> &mut DropZone {
        match slot {
            SlotId::Original => &mut self.original,
            SlotId::Modified => &mut self.modified,
        }
    }

    pub fn focus_slot(&mut self, slot: SlotId) {
        self.focused_slot = slot;
    }

    pub fn cycle_slot_focus(&mut self) {
        self.focused_slot = self.focused_slot.other();
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(Message {
            content: msg.into(),
            message_type: MessageType::Info,
        });
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.message = Some(Message {
            content: msg.into(),
            message_type: MessageType::Warning,
        });
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(Message {
            content: msg.into(),
            message_type: MessageType::Error,
        });
    }

    pub fn show_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    pub fn hide_error(&mut self) {
        self.error = None;
    }

    // Slot gestures

    /// Open the path prompt on the focused slot; the slot shows as hovered.
    pub fn open_picker(&mut self) {
        if self.loading {
            return;
        }
        let slot = self.focused_slot;
        self.zone_mut(slot).drag_enter();
        self.path_editor.clear();
        self.input_mode = InputMode::PathEntry;
    }

    pub fn cancel_picker(&mut self) {
        let slot = self.focused_slot;
        self.zone_mut(slot).drag_leave();
        self.path_editor.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn submit_picker(&mut self) {
        let text = self.path_editor.take();
        self.input_mode = InputMode::Normal;
        let slot = self.focused_slot;
        match parse_dropped_path(&text) {
            Some(path) => {
                let path = expand_home(&path);
                self.drop_file(slot, &path, DropOrigin::Picker);
            }
            None => self.zone_mut(slot).drag_leave(),
        }
    }

    /// Text pasted outside a prompt is a file dropped on the focused slot.
    pub fn drop_text(&mut self, text: &str) {
        if self.loading {
            return;
        }
        match parse_dropped_path(text) {
            Some(path) => {
                let slot = self.focused_slot;
                self.drop_file(slot, &path, DropOrigin::Drop);
            }
            None => log::debug!("ignoring paste without a path"),
        }
    }

    pub fn drop_file(&mut self, slot: SlotId, path: &Path, origin: DropOrigin) {
        self.hide_error();
        let outcome = self
            .zone_mut(slot)
            .accept(path, origin)
            .map(|file| (file.name.clone(), file.size));

        match outcome {
            Ok((name, size)) => {
                log::info!("{} document set to {name} ({size} bytes)", slot.label());
                self.set_message(format!("{}: {name}", slot.label()));
            }
            Err(err) => {
                match &err {
                    SelectError::Rejected(rejection) => {
                        log::info!("rejected {} for {}: {rejection}", path.display(), slot.label())
                    }
                    SelectError::Unreadable { source, .. } => {
                        log::warn!("cannot read {}: {}", path.display(), source.detail())
                    }
                }
                self.show_error(err.to_string());
            }
        }
        self.update_compare_gate();
    }

    pub fn remove_file(&mut self, slot: SlotId) {
        if self.loading {
            return;
        }
        if let Some(file) = self.zone_mut(slot).remove() {
            log::info!("{} document {} removed", slot.label(), file.name);
        }
        self.update_compare_gate();
    }

    pub fn update_compare_gate(&mut self) {
        self.gate = gate(self.original.is_occupied(), self.modified.is_occupied());
    }

    pub fn can_compare(&self) -> bool {
        self.gate.enabled && !self.loading
    }

    // Compare flow

    /// Start a compare unless one is already in flight. The job is picked up
    /// by the event loop through `take_pending_job`.
    pub fn request_compare(&mut self) {
        if self.loading {
            log::debug!("compare already in flight; ignoring");
            return;
        }

        let files = self
            .original
            .file()
            .cloned()
            .zip(self.modified.file().cloned());
        let Some((original, modified)) = files else {
            self.show_error(DoccmpError::MissingSelection.to_string());
            return;
        };

        self.generation += 1;
        self.hide_error();
        self.loading = true;
        self.results = None;
        self.results_visible = false;
        self.nav.clear(&mut self.pane);
        self.pane.scroll_to_top();

        log::info!(
            "comparing {} with {} on {}",
            original.name,
            modified.name,
            self.settings.server
        );
        self.pending_job = Some(CompareJob {
            generation: self.generation,
            server: self.settings.server.clone(),
            original,
            modified,
        });
    }

    pub fn take_pending_job(&mut self) -> Option<CompareJob> {
        self.pending_job.take()
    }

    pub fn finish_compare(&mut self, reply: CompareReply) {
        if reply.generation != self.generation {
            log::debug!("dropping stale compare reply #{}", reply.generation);
            return;
        }
        self.loading = false;

        match reply.outcome {
            Ok(result) => {
                let rendered = render_results(&result);
                log::info!(
                    "compare finished: {} rows ({} unchanged, {} added, {} removed, {} modified)",
                    rendered.rows.len(),
                    rendered.counts.unchanged,
                    rendered.counts.added,
                    rendered.counts.removed,
                    rendered.counts.modified
                );
                self.filters.reset();
                self.nav.rebuild(&rendered.rows, &self.filters, &mut self.pane);
                self.results = Some(rendered);
                self.results_visible = true;
                self.pane.scroll_to_top();
            }
            Err(err) => {
                log::warn!("compare failed: {}", err.detail());
                self.show_error(err.to_string());
            }
        }
    }

    // Results

    pub fn toggle_filter(&mut self, status: DiffStatus) {
        if !self.results_visible {
            return;
        }
        let shown = self.filters.toggle(status);
        if let Some(results) = &self.results {
            self.nav.rebuild(&results.rows, &self.filters, &mut self.pane);
        }
        let state = if shown { "shown" } else { "hidden" };
        self.set_message(format!("{} rows {state}", status.label()));
    }

    pub fn next_change(&mut self) {
        if self.results_visible {
            self.nav.next(&mut self.pane);
        }
    }

    pub fn prev_change(&mut self) {
        if self.results_visible {
            self.nav.prev(&mut self.pane);
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        if self.results_visible {
            self.pane.scroll_down(lines);
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        if self.results_visible {
            self.pane.scroll_up(lines);
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.pane.scroll_to_top();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.pane.scroll_offset = self.pane.max_scroll_offset();
    }

    fn report_html(&self) -> Option<String> {
        let results = self.results.as_ref().filter(|_| self.results_visible)?;
        let markup = results.to_markup(&self.filters, self.nav.focused_row());
        Some(build_report(&markup, &report_timestamp(Local::now())))
    }

    pub fn export_report(&mut self) {
        let Some(html) = self.report_html() else {
            self.set_warning(DoccmpError::NoResults.to_string());
            return;
        };
        match write_report(&self.settings.export_dir, &html) {
            Ok(path) => {
                log::info!("report written to {}", path.display());
                self.set_message(format!("Report saved to {}", path.display()));
            }
            Err(e) => {
                log::error!("report export failed: {}", e.detail());
                self.set_error(format!("Export failed: {e}"));
            }
        }
    }

    pub fn copy_report(&mut self) {
        let Some(html) = self.report_html() else {
            self.set_warning(DoccmpError::NoResults.to_string());
            return;
        };
        match copy_to_clipboard(&html, "Report") {
            Ok(msg) => self.set_message(msg),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    pub fn set_server(&mut self, server: &str) {
        let server = server.trim().trim_end_matches('/');
        if server.is_empty() {
            self.set_warning(format!("Server is {}", self.settings.server));
            return;
        }
        log::info!("server changed to {server}");
        self.settings.server = server.to_string();
        self.set_message(format!("Server set to {server}"));
    }

    // Modes

    pub fn enter_command_mode(&mut self) {
        self.input_mode = InputMode::Command;
        self.command_editor.clear();
    }

    pub fn exit_command_mode(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command_editor.clear();
    }

    pub fn toggle_help(&mut self) {
        if self.input_mode == InputMode::Help {
            self.input_mode = InputMode::Normal;
        } else {
            self.input_mode = InputMode::Help;
            self.help_state.scroll_offset = 0;
        }
    }

    pub fn help_scroll_down(&mut self, lines: usize) {
        let max_offset = self
            .help_state
            .total_lines
            .saturating_sub(self.help_state.viewport_height);
        self.help_state.scroll_offset = (self.help_state.scroll_offset + lines).min(max_offset);
    }

    pub fn help_scroll_up(&mut self, lines: usize) {
        self.help_state.scroll_offset = self.help_state.scroll_offset.saturating_sub(lines);
    }
}

/// Expand a leading `~` the way a shell would for typed paths.
fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match directories::BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::ScriptedTransport;
    use crate::client::{CompareClient, CompareWorker};
    use crate::validate::MAX_FILE_SIZE;
    use std::time::Duration;
    use tempfile::{TempDir, tempdir};

    const SERVER_REPLY: &str = r#"{
        "document_a": {"name": "old.pdf"},
        "document_b": {"name": "new.pdf"},
        "diff": [
            {"status": "unchanged", "text_a": "Intro", "text_b": "Intro"},
            {"status": "added", "text_a": null, "text_b": "New clause"},
            {"status": "unchanged", "text_a": "Body", "text_b": "Body"},
            {"status": "removed", "text_a": "Old clause", "text_b": null},
            {"status": "modified", "text_a": "Pay <mark>30</mark> days", "text_b": "Pay <mark>60</mark> days"},
            {"status": "added", "text_a": null, "text_b": "Annex"},
            {"status": "unchanged", "text_a": "End", "text_b": "End"}
        ]
    }"#;

    fn test_app(dir: &TempDir) -> App {
        let settings = Settings {
            export_dir: dir.path().join("out"),
            ..Settings::default()
        };
        App::new(Theme::dark(), settings)
    }

    fn pdf(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"%PDF-1.7\n...").unwrap();
        path
    }

    fn with_both_files(dir: &TempDir) -> App {
        let mut app = test_app(dir);
        app.drop_file(SlotId::Original, &pdf(dir, "old.pdf"), DropOrigin::Drop);
        app.drop_file(SlotId::Modified, &pdf(dir, "new.pdf"), DropOrigin::Drop);
        app
    }

    fn run_compare(app: &mut App, transport: ScriptedTransport) {
        let worker = CompareWorker::spawn(CompareClient::new(transport, None));
        app.request_compare();
        let job = app.take_pending_job().expect("compare should be requested");
        worker.request(job).unwrap();
        let reply = worker
            .recv_timeout(Duration::from_secs(5))
            .expect("worker should reply");
        app.finish_compare(reply);
    }

    #[test]
    fn should_enable_compare_only_with_both_documents() {
        // given
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        assert!(!app.can_compare());
        assert_eq!(app.gate.hint, Some("Select both documents to compare"));

        // when
        app.drop_file(SlotId::Original, &pdf(&dir, "old.pdf"), DropOrigin::Drop);

        // then
        assert!(!app.can_compare());
        assert_eq!(app.gate.hint, Some("Select the modified document"));

        app.drop_file(SlotId::Modified, &pdf(&dir, "new.pdf"), DropOrigin::Drop);
        assert!(app.can_compare());
        assert_eq!(app.gate.hint, None);

        app.remove_file(SlotId::Original);
        assert!(!app.can_compare());
        assert_eq!(app.gate.hint, Some("Select the original document"));
    }

    #[test]
    fn should_show_rejection_and_keep_slot_on_bad_drop() {
        // given
        let dir = tempdir().unwrap();
        let mut app = with_both_files(&dir);
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, b"plain").unwrap();

        // when
        app.drop_file(SlotId::Original, &notes, DropOrigin::Drop);

        // then
        assert_eq!(app.error.as_deref(), Some("Please select a PDF or DOCX file."));
        assert_eq!(app.original.display_name(), Some("old.pdf"));
        assert!(app.can_compare());
    }

    #[test]
    fn should_clear_slot_when_picked_file_is_too_large() {
        // given
        let dir = tempdir().unwrap();
        let mut app = with_both_files(&dir);
        let big = dir.path().join("big.pdf");
        let file = std::fs::File::create(&big).unwrap();
        file.set_len(MAX_FILE_SIZE + 1).unwrap();

        // when
        app.focus_slot(SlotId::Modified);
        app.open_picker();
        app.path_editor.insert_str(big.to_str().unwrap());
        app.submit_picker();

        // then
        assert_eq!(
            app.error.as_deref(),
            Some("File is too large. Maximum size is 10MB.")
        );
        assert!(!app.modified.is_occupied());
        assert!(!app.can_compare());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn should_hover_slot_while_prompt_is_open() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);

        app.open_picker();
        assert_eq!(app.original.state(), crate::slots::ZoneState::DragHover);

        app.cancel_picker();
        assert_eq!(app.original.state(), crate::slots::ZoneState::Idle);
    }

    #[test]
    fn should_drop_pasted_path_on_focused_slot() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        let path = pdf(&dir, "with space.pdf");
        let pasted = format!("'{}'", path.display());

        app.focus_slot(SlotId::Modified);
        app.drop_text(&pasted);

        assert_eq!(app.modified.display_name(), Some("with space.pdf"));
        assert!(!app.original.is_occupied());
    }

    #[test]
    fn should_refuse_compare_without_both_documents() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);
        app.drop_file(SlotId::Original, &pdf(&dir, "old.pdf"), DropOrigin::Drop);

        app.request_compare();

        assert_eq!(app.error.as_deref(), Some("Please select both documents."));
        assert!(app.take_pending_job().is_none());
        assert!(!app.loading);
    }

    #[test]
    fn should_render_counts_and_navigate_after_successful_compare() {
        // given
        let dir = tempdir().unwrap();
        let mut app = with_both_files(&dir);

        // when
        run_compare(&mut app, ScriptedTransport::replying(200, SERVER_REPLY));

        // then
        assert!(!app.loading);
        assert!(app.results_visible);
        let counts = app.results.as_ref().unwrap().counts;
        assert_eq!(
            (counts.unchanged, counts.added, counts.removed, counts.modified),
            (3, 2, 1, 1)
        );
        assert_eq!(app.pane.readout, "0 of 4");

        app.next_change();
        assert_eq!(app.pane.readout, "1 of 4");
        assert_eq!(app.pane.focused_row, Some(1));

        app.prev_change();
        app.prev_change();
        assert_eq!(app.pane.readout, "3 of 4");
        assert_eq!(app.pane.focused_row, Some(4));
    }

    #[test]
    fn should_show_server_error_and_keep_results_hidden() {
        // given
        let dir = tempdir().unwrap();
        let mut app = with_both_files(&dir);

        // when
        run_compare(
            &mut app,
            ScriptedTransport::replying(400, r#"{"error":"file too large"}"#),
        );

        // then
        assert_eq!(app.error.as_deref(), Some("file too large"));
        assert!(!app.results_visible);
        assert!(app.results.is_none());
        assert!(!app.loading);
        assert!(app.can_compare());
    }

    #[test]
    fn should_ignore_second_compare_while_busy() {
        let dir = tempdir().unwrap();
        let mut app = with_both_files(&dir);

        app.request_compare();
        let first = app.take_pending_job().unwrap();
        app.request_compare();

        assert!(app.loading);
        assert!(!app.can_compare());
        assert!(app.take_pending_job().is_none());
        assert_eq!(first.generation, 1);
    }

    #[test]
    fn should_reenable_compare_when_job_cannot_be_queued() {
        // given
        let dir = tempdir().unwrap();
        let mut app = with_both_files(&dir);
        app.request_compare();
        let job = app.take_pending_job().unwrap();

        // when
        app.finish_compare(CompareReply {
            generation: job.generation,
            outcome: Err(DoccmpError::Transport("compare worker stopped".to_string())),
        });

        // then
        assert!(!app.loading);
        assert!(app.can_compare());
        assert_eq!(
            app.error.as_deref(),
            Some("Failed to compare documents. Please try again.")
        );
    }

    #[test]
    fn should_drop_stale_replies() {
        let dir = tempdir().unwrap();
        let mut app = with_both_files(&dir);
        app.request_compare();
        let _ = app.take_pending_job();

        app.finish_compare(CompareReply {
            generation: 99,
            outcome: Err(DoccmpError::Server("late".to_string())),
        });

        assert!(app.loading);
        assert!(app.error.is_none());
    }

    #[test]
    fn should_rebuild_navigation_when_filter_toggles() {
        // given
        let dir = tempdir().unwrap();
        let mut app = with_both_files(&dir);
        run_compare(&mut app, ScriptedTransport::replying(200, SERVER_REPLY));
        app.next_change();

        // when
        app.toggle_filter(DiffStatus::Added);

        // then
        assert_eq!(app.pane.readout, "0 of 2");
        assert_eq!(app.pane.focused_row, None);
        app.next_change();
        assert_eq!(app.pane.focused_row, Some(3));

        app.toggle_filter(DiffStatus::Added);
        assert_eq!(app.pane.readout, "0 of 4");
    }

    #[test]
    fn should_reset_filters_on_new_compare() {
        let dir = tempdir().unwrap();
        let mut app = with_both_files(&dir);
        run_compare(&mut app, ScriptedTransport::replying(200, SERVER_REPLY));
        app.toggle_filter(DiffStatus::Modified);

        run_compare(&mut app, ScriptedTransport::replying(200, SERVER_REPLY));

        assert_eq!(app.filters, Filters::default());
        assert_eq!(app.pane.readout, "0 of 4");
    }

    #[test]
    fn should_ignore_navigation_without_results() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);

        app.next_change();
        app.prev_change();

        assert_eq!(app.pane.readout, "0 of 0");
        assert_eq!(app.pane.focused_row, None);
    }

    #[test]
    fn should_warn_when_exporting_without_results() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);

        app.export_report();

        let message = app.message.expect("warning expected");
        assert_eq!(message.content, "No results to export");
        assert_eq!(message.message_type, MessageType::Warning);
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn should_export_report_with_hidden_rows_and_focus() {
        // given
        let dir = tempdir().unwrap();
        let mut app = with_both_files(&dir);
        run_compare(&mut app, ScriptedTransport::replying(200, SERVER_REPLY));
        app.toggle_filter(DiffStatus::Unchanged);
        app.next_change();

        // when
        app.export_report();

        // then
        let path = dir.path().join("out").join("comparison-report.html");
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("<title>Comparison Report</title>"));
        assert!(html.contains("<div class=\"diff-item diff-unchanged\" style=\"display:none\">"));
        assert!(html.contains("<div class=\"diff-item diff-added active\">"));
        assert!(html.contains("<span class=\"highlight\">60</span>"));
        assert_eq!(
            app.message.map(|m| m.message_type),
            Some(MessageType::Info)
        );
    }

    #[test]
    fn should_center_focused_row_using_rendered_geometry() {
        let mut pane = ResultsPane {
            viewport_height: 10,
            total_lines: 100,
            ..ResultsPane::default()
        };

        pane.center_row(2);
        pane.resolve_center(&[(0, 4), (4, 4), (40, 6)]);

        assert_eq!(pane.scroll_offset, 38);
        assert_eq!(pane.pending_center, None);
    }

    #[test]
    fn should_trim_server_url_when_changed() {
        let dir = tempdir().unwrap();
        let mut app = test_app(&dir);

        app.set_server(" http://docs.internal:9000/ ");

        assert_eq!(app.settings.server, "http://docs.internal:9000");
    }
}
