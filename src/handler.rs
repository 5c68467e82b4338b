use crate::app::{App, InputMode};
use crate::input::Action;
use crate::model::SlotId;
use crate::text_edit::LineEditor;

/// Apply a text-editing action; returns false for anything else.
fn edit_line(editor: &mut LineEditor, action: &Action) -> bool {
    match action {
        Action::InsertChar(c) => editor.insert_char(*c),
        Action::DeleteChar => editor.delete_char_before(),
        Action::DeleteWord => editor.delete_word_before(),
        Action::ClearLine => editor.clear(),
        Action::CursorLeft => editor.move_left(),
        Action::CursorRight => editor.move_right(),
        Action::CursorHome => editor.move_home(),
        Action::CursorEnd => editor.move_end(),
        _ => return false,
    }
    true
}

pub fn handle_help_action(app: &mut App, action: Action) {
    match action {
        Action::ScrollDown(n) => app.help_scroll_down(n),
        Action::ScrollUp(n) => app.help_scroll_up(n),
        Action::HalfPageDown => app.help_scroll_down(app.help_state.viewport_height / 2),
        Action::HalfPageUp => app.help_scroll_up(app.help_state.viewport_height / 2),
        Action::ToggleHelp => app.toggle_help(),
        _ => {}
    }
}

/// Handle actions while the path prompt is open on a slot
pub fn handle_path_action(app: &mut App, action: Action) {
    if edit_line(&mut app.path_editor, &action) {
        return;
    }
    match action {
        Action::SubmitInput => app.submit_picker(),
        Action::ExitMode => app.cancel_picker(),
        _ => {}
    }
}

/// Handle actions in Command mode (text input for :commands)
pub fn handle_command_action(app: &mut App, action: Action) {
    if edit_line(&mut app.command_editor, &action) {
        return;
    }
    match action {
        Action::ExitMode => app.exit_command_mode(),
        Action::SubmitInput => {
            let cmd = app.command_editor.take();
            app.exit_command_mode();
            run_command(app, cmd.trim());
        }
        _ => {}
    }
}

fn run_command(app: &mut App, cmd: &str) {
    let (name, arg) = match cmd.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (cmd, ""),
    };

    match name {
        "" => {}
        "q" | "quit" | "q!" => app.should_quit = true,
        "export" | "w" => app.export_report(),
        "clip" | "y" => app.copy_report(),
        "compare" => app.request_compare(),
        "server" => app.set_server(arg),
        "version" => app.set_message(format!("doccmp v{}", env!("CARGO_PKG_VERSION"))),
        _ => app.set_error(format!("Unknown command: {cmd}")),
    }
}

/// Handle actions in Normal mode
pub fn handle_normal_action(app: &mut App, action: Action) {
    match action {
        Action::NextChange => app.next_change(),
        Action::PrevChange => app.prev_change(),
        Action::ScrollDown(n) => app.scroll_down(n),
        Action::ScrollUp(n) => app.scroll_up(n),
        Action::HalfPageDown => app.scroll_down(app.pane.viewport_height / 2),
        Action::HalfPageUp => app.scroll_up(app.pane.viewport_height / 2),
        Action::PageDown => app.scroll_down(app.pane.viewport_height),
        Action::PageUp => app.scroll_up(app.pane.viewport_height),
        Action::GoToTop => app.scroll_to_top(),
        Action::GoToBottom => app.scroll_to_bottom(),
        Action::FocusOriginal => app.focus_slot(SlotId::Original),
        Action::FocusModified => app.focus_slot(SlotId::Modified),
        Action::ToggleFocus => app.cycle_slot_focus(),
        Action::OpenPicker => app.open_picker(),
        Action::RemoveFile => app.remove_file(app.focused_slot),
        Action::Compare => app.request_compare(),
        Action::ToggleFilter(status) => app.toggle_filter(status),
        Action::Export => app.export_report(),
        Action::CopyReport => app.copy_report(),
        Action::EnterCommandMode => app.enter_command_mode(),
        Action::ToggleHelp => app.toggle_help(),
        Action::ExitMode => {
            app.message = None;
            app.hide_error();
        }
        Action::Quit => app.should_quit = true,
        _ => {}
    }
}

/// Bracketed paste: text for an open prompt, otherwise a dropped file.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.input_mode {
        InputMode::PathEntry => app.path_editor.insert_str(text),
        InputMode::Command => app.command_editor.insert_str(text),
        InputMode::Normal => app.drop_text(text),
        InputMode::Help => {}
    }
}

pub fn dispatch(app: &mut App, action: Action) {
    match app.input_mode {
        InputMode::Help => handle_help_action(app, action),
        InputMode::PathEntry => handle_path_action(app, action),
        InputMode::Command => handle_command_action(app, action),
        InputMode::Normal => handle_normal_action(app, action),
    }
}
