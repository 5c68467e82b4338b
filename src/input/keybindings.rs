use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::InputMode;
use crate::model::DiffStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Results scrolling
    ScrollDown(usize),
    ScrollUp(usize),
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    GoToTop,
    GoToBottom,

    // Change navigation
    NextChange,
    PrevChange,

    // Slots
    FocusOriginal,
    FocusModified,
    ToggleFocus,
    OpenPicker,
    RemoveFile,
    Compare,

    // Results
    ToggleFilter(DiffStatus),
    Export,
    CopyReport,

    // Mode changes
    EnterCommandMode,
    ExitMode,
    ToggleHelp,
    Quit,

    // Text input
    InsertChar(char),
    DeleteChar,
    DeleteWord,
    ClearLine,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    SubmitInput,

    // No-op
    None,
}

pub fn map_key_to_action(key: KeyEvent, mode: InputMode) -> Action {
    match mode {
        InputMode::Normal => map_normal_mode(key),
        InputMode::PathEntry | InputMode::Command => map_line_input(key),
        InputMode::Help => map_help_mode(key),
    }
}

fn map_normal_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Change navigation (use _ for modifiers since shift is implicit in the character)
        (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => Action::NextChange,
        (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => Action::PrevChange,
        (KeyCode::Char('J'), _) => Action::NextChange,
        (KeyCode::Char('K'), _) => Action::PrevChange,
        (KeyCode::Char(']') | KeyCode::Char('n'), _) => Action::NextChange,
        (KeyCode::Char('[') | KeyCode::Char('p') | KeyCode::Char('N'), _) => Action::PrevChange,

        // Scrolling
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::ScrollDown(1),
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::ScrollUp(1),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::HalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::HalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::GoToTop,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::GoToBottom,

        // Slots
        (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::BackTab, _) => Action::ToggleFocus,
        (KeyCode::Char('h') | KeyCode::Left, KeyModifiers::NONE) => Action::FocusOriginal,
        (KeyCode::Char('l') | KeyCode::Right, KeyModifiers::NONE) => Action::FocusModified,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenPicker,
        (KeyCode::Char('x'), KeyModifiers::NONE) | (KeyCode::Delete, _) => Action::RemoveFile,
        (KeyCode::Enter, KeyModifiers::NONE) | (KeyCode::Char('c'), KeyModifiers::NONE) => {
            Action::Compare
        }

        // Filter chips
        (KeyCode::Char('1'), _) => Action::ToggleFilter(DiffStatus::Unchanged),
        (KeyCode::Char('2'), _) => Action::ToggleFilter(DiffStatus::Added),
        (KeyCode::Char('3'), _) => Action::ToggleFilter(DiffStatus::Removed),
        (KeyCode::Char('4'), _) => Action::ToggleFilter(DiffStatus::Modified),

        (KeyCode::Char('e'), KeyModifiers::NONE) => Action::Export,
        (KeyCode::Char('y'), KeyModifiers::NONE) => Action::CopyReport,

        // Mode changes (use _ for shifted characters like : and ?)
        (KeyCode::Char(':'), _) => Action::EnterCommandMode,
        (KeyCode::Char('?'), _) => Action::ToggleHelp,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        _ => Action::None,
    }
}

fn map_line_input(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::ExitMode,
        (KeyCode::Enter, _) => Action::SubmitInput,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Action::DeleteWord,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearLine,
        (KeyCode::Left, _) => Action::CursorLeft,
        (KeyCode::Right, _) => Action::CursorRight,
        (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorHome,
        (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
        _ => Action::None,
    }
}

fn map_help_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('q'), _) | (KeyCode::Char('?'), _) => {
            Action::ToggleHelp
        }
        (KeyCode::Char('j') | KeyCode::Down, _) => Action::ScrollDown(1),
        (KeyCode::Char('k') | KeyCode::Up, _) => Action::ScrollUp(1),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::HalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::HalfPageUp,
        _ => Action::None,
    }
}
