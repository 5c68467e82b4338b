//! Upload slots and the drop/pick gestures that fill them.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::{PickedFile, SlotId};
use crate::validate::{Rejection, format_size, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneState {
    #[default]
    Idle,
    DragHover,
    HasFile,
}

/// How a file reached the slot. A rejected pick clears the slot, a rejected
/// drop leaves the previous file in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOrigin {
    Drop,
    Picker,
}

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("{0}")]
    Rejected(Rejection),

    #[error("Could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: crate::error::DoccmpError,
    },
}

#[derive(Debug)]
pub struct DropZone {
    slot: SlotId,
    hovering: bool,
    file: Option<PickedFile>,
}

impl DropZone {
    pub fn new(slot: SlotId) -> Self {
        Self {
            slot,
            hovering: false,
            file: None,
        }
    }

    pub fn slot(&self) -> SlotId {
        self.slot
    }

    pub fn state(&self) -> ZoneState {
        if self.hovering {
            ZoneState::DragHover
        } else if self.file.is_some() {
            ZoneState::HasFile
        } else {
            ZoneState::Idle
        }
    }

    pub fn file(&self) -> Option<&PickedFile> {
        self.file.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.file.is_some()
    }

    pub fn drag_enter(&mut self) {
        self.hovering = true;
    }

    pub fn drag_leave(&mut self) {
        self.hovering = false;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.name.as_str())
    }

    pub fn display_size(&self) -> Option<String> {
        self.file.as_ref().map(|f| format_size(f.size))
    }

    /// Validate and adopt the file at `path`. Any gesture ends the hover.
    pub fn accept(
        &mut self,
        path: &Path,
        origin: DropOrigin,
    ) -> Result<&PickedFile, SelectError> {
        self.hovering = false;

        let picked = match PickedFile::from_path(path) {
            Ok(picked) => picked,
            Err(source) => {
                if origin == DropOrigin::Picker {
                    self.file = None;
                }
                return Err(SelectError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if let Err(rejection) = validate(&picked) {
            if origin == DropOrigin::Picker {
                self.file = None;
            }
            return Err(SelectError::Rejected(rejection));
        }

        Ok(&*self.file.insert(picked))
    }

    pub fn remove(&mut self) -> Option<PickedFile> {
        self.file.take()
    }
}

/// Extract the first path from text a terminal pasted when files were dropped
/// onto it.
///
/// Handles single or double quotes, backslash-escaped spaces and `file://`
/// URIs. Several dropped files arrive space- or newline-separated; only the
/// first is used.
pub fn parse_dropped_path(text: &str) -> Option<PathBuf> {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let token = first_token(line)?;
    let path = match token.strip_prefix("file://") {
        Some(rest) => {
            // file://host/path: drop an optional host part
            let rest = if rest.starts_with('/') {
                rest
            } else {
                rest.find('/').map(|i| &rest[i..])?
            };
            percent_decode(rest)
        }
        None => token,
    };

    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

fn first_token(line: &str) -> Option<String> {
    let mut chars = line.chars().peekable();
    let mut token = String::new();

    match chars.peek().copied() {
        Some(quote) if quote == '\'' || quote == '"' => {
            chars.next();
            for c in chars.by_ref() {
                if c == quote {
                    return Some(token);
                }
                token.push(c);
            }
            // unterminated quote: keep what was read
            Some(token)
        }
        Some(_) => {
            while let Some(c) = chars.next() {
                match c {
                    '\\' => match chars.peek() {
                        Some(&next) if is_shell_escaped(next) => {
                            token.push(next);
                            chars.next();
                        }
                        _ => token.push('\\'),
                    },
                    c if c.is_whitespace() => break,
                    c => token.push(c),
                }
            }
            Some(token)
        }
        None => None,
    }
}

fn is_shell_escaped(c: char) -> bool {
    c.is_whitespace() || "'\"\\()[]&;$!#".contains(c)
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(hex) = input.get(i + 1..i + 3)
            && let Ok(byte) = u8::from_str_radix(hex, 16)
        {
            out.push(byte);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn should_adopt_valid_file_and_report_size() {
        // given
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "v1.pdf", &[0u8; 1536]);
        let mut zone = DropZone::new(SlotId::Original);

        // when
        let adopted = zone.accept(&path, DropOrigin::Drop).unwrap();

        // then
        assert_eq!(adopted.name, "v1.pdf");
        assert_eq!(zone.state(), ZoneState::HasFile);
        assert_eq!(zone.display_name(), Some("v1.pdf"));
        assert_eq!(zone.display_size().as_deref(), Some("1.5 KB"));
    }

    #[test]
    fn should_keep_previous_file_when_drop_is_rejected() {
        let dir = tempdir().unwrap();
        let good = write(dir.path(), "v1.pdf", b"%PDF-1.4");
        let bad = write(dir.path(), "notes.txt", b"hello");
        let mut zone = DropZone::new(SlotId::Original);
        zone.accept(&good, DropOrigin::Drop).unwrap();

        let result = zone.accept(&bad, DropOrigin::Drop);

        assert!(matches!(
            result,
            Err(SelectError::Rejected(Rejection::WrongType))
        ));
        assert_eq!(zone.display_name(), Some("v1.pdf"));
    }

    #[test]
    fn should_clear_slot_when_pick_is_rejected() {
        let dir = tempdir().unwrap();
        let good = write(dir.path(), "v1.pdf", b"%PDF-1.4");
        let bad = write(dir.path(), "notes.txt", b"hello");
        let mut zone = DropZone::new(SlotId::Modified);
        zone.accept(&good, DropOrigin::Picker).unwrap();

        let result = zone.accept(&bad, DropOrigin::Picker);

        assert!(result.is_err());
        assert!(!zone.is_occupied());
        assert_eq!(zone.state(), ZoneState::Idle);
    }

    #[test]
    fn should_reject_oversized_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.pdf");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(crate::validate::MAX_FILE_SIZE + 1).unwrap();
        let mut zone = DropZone::new(SlotId::Original);

        let result = zone.accept(&path, DropOrigin::Drop);

        assert!(matches!(
            result,
            Err(SelectError::Rejected(Rejection::TooLarge))
        ));
        assert!(!zone.is_occupied());
    }

    #[test]
    fn should_report_unreadable_path() {
        let dir = tempdir().unwrap();
        let mut zone = DropZone::new(SlotId::Original);
        let result = zone.accept(&dir.path().join("missing.pdf"), DropOrigin::Drop);
        assert!(matches!(result, Err(SelectError::Unreadable { .. })));
    }

    #[test]
    fn should_track_hover_state() {
        let mut zone = DropZone::new(SlotId::Original);
        zone.drag_enter();
        assert_eq!(zone.state(), ZoneState::DragHover);
        zone.drag_leave();
        assert_eq!(zone.state(), ZoneState::Idle);
    }

    #[test]
    fn should_remove_file() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "v1.docx", b"PK");
        let mut zone = DropZone::new(SlotId::Original);
        zone.accept(&path, DropOrigin::Picker).unwrap();

        let removed = zone.remove();

        assert_eq!(removed.map(|f| f.name), Some("v1.docx".to_string()));
        assert_eq!(zone.state(), ZoneState::Idle);
    }

    #[test]
    fn should_parse_plain_and_escaped_paths() {
        assert_eq!(
            parse_dropped_path("/tmp/report.pdf\n"),
            Some(PathBuf::from("/tmp/report.pdf"))
        );
        assert_eq!(
            parse_dropped_path("/tmp/my\\ report\\ (1).pdf"),
            Some(PathBuf::from("/tmp/my report (1).pdf"))
        );
    }

    #[test]
    fn should_parse_quoted_paths() {
        assert_eq!(
            parse_dropped_path("'/tmp/my report.pdf' '/tmp/other.pdf'"),
            Some(PathBuf::from("/tmp/my report.pdf"))
        );
        assert_eq!(
            parse_dropped_path("\"/tmp/a b.docx\""),
            Some(PathBuf::from("/tmp/a b.docx"))
        );
    }

    #[test]
    fn should_take_first_of_several_dropped_files() {
        assert_eq!(
            parse_dropped_path("/tmp/a.pdf /tmp/b.pdf"),
            Some(PathBuf::from("/tmp/a.pdf"))
        );
        assert_eq!(
            parse_dropped_path("\n  /tmp/a.pdf\n/tmp/b.pdf"),
            Some(PathBuf::from("/tmp/a.pdf"))
        );
    }

    #[test]
    fn should_parse_file_uris() {
        assert_eq!(
            parse_dropped_path("file:///home/me/My%20Doc.pdf"),
            Some(PathBuf::from("/home/me/My Doc.pdf"))
        );
        assert_eq!(
            parse_dropped_path("file://localhost/tmp/a.pdf"),
            Some(PathBuf::from("/tmp/a.pdf"))
        );
    }

    #[test]
    fn should_keep_windows_backslashes() {
        assert_eq!(
            parse_dropped_path(r"C:\Users\me\a.pdf"),
            Some(PathBuf::from(r"C:\Users\me\a.pdf"))
        );
    }

    #[test]
    fn should_return_none_for_blank_paste() {
        assert_eq!(parse_dropped_path("   \n  "), None);
        assert_eq!(parse_dropped_path("''"), None);
    }
}
