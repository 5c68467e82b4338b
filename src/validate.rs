//! Client-side checks applied to a file before it is adopted into a slot.

use std::fmt;

use crate::model::PickedFile;

pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const ALLOWED_EXTENSIONS: [&str; 2] = [".pdf", ".docx"];
pub const ALLOWED_TYPES: [&str; 2] = [PDF_MIME, DOCX_MIME];

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    WrongType,
    TooLarge,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::WrongType => "Please select a PDF or DOCX file.",
            Rejection::TooLarge => "File is too large. Maximum size is 10MB.",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Extension match is case-insensitive; a recognized declared type is
/// accepted whatever the name.
pub fn is_allowed_type(name: &str, content_type: Option<&str>) -> bool {
    let name = name.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        || content_type.is_some_and(|ct| ALLOWED_TYPES.contains(&ct))
}

/// Type is checked before size.
pub fn validate(file: &PickedFile) -> Result<(), Rejection> {
    if !is_allowed_type(&file.name, file.content_type.as_deref()) {
        return Err(Rejection::WrongType);
    }
    if file.size > MAX_FILE_SIZE {
        return Err(Rejection::TooLarge);
    }
    Ok(())
}

/// Human-readable size in binary units with one decimal place.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    while unit + 1 < SIZE_UNITS.len() && bytes >= 1024u64.pow(unit as u32 + 1) {
        unit += 1;
    }

    let value = bytes as f64 / 1024f64.powi(unit as i32);
    format!("{:.1} {}", value, SIZE_UNITS[unit])
}

/// Guess a declared content type from the first bytes of a file.
///
/// DOCX is a ZIP whose first entry is `[Content_Types].xml` and which holds
/// `word/` parts; other OOXML packages share the first entry but not `word/`.
pub fn sniff_content_type(head: &[u8]) -> Option<&'static str> {
    if head.starts_with(b"%PDF-") {
        return Some(PDF_MIME);
    }

    const ZIP_LOCAL_HEADER: &[u8] = b"PK\x03\x04";
    const FIRST_ENTRY: &[u8] = b"[Content_Types].xml";
    if head.starts_with(ZIP_LOCAL_HEADER)
        && head.get(30..30 + FIRST_ENTRY.len()) == Some(FIRST_ENTRY)
        && head.windows(5).any(|w| w == b"word/")
    {
        return Some(DOCX_MIME);
    }

    None
}
