//! Turns a server `DiffResult` into rows of typed text segments.
//!
//! The segments are plain (decoded) document text tagged with how they should
//! be styled. Both the terminal view and the HTML serializer consume them, so
//! escaping happens exactly once, at output.

pub mod html;

use crate::model::{DiffResult, DiffStatus};

pub use html::{decode_entities, escape_html};

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Plain,
    /// Words that changed inside a modified row
    Highlight,
    Added,
    Removed,
}

impl SegmentKind {
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            SegmentKind::Plain => None,
            SegmentKind::Highlight => Some("highlight"),
            SegmentKind::Added => Some("added"),
            SegmentKind::Removed => Some("removed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedCell {
    pub page: Option<u32>,
    pub segments: Vec<Segment>,
}

impl RenderedCell {
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub status: DiffStatus,
    pub left: RenderedCell,
    pub right: RenderedCell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl StatusCounts {
    pub fn get(&self, status: DiffStatus) -> usize {
        match status {
            DiffStatus::Unchanged => self.unchanged,
            DiffStatus::Added => self.added,
            DiffStatus::Removed => self.removed,
            DiffStatus::Modified => self.modified,
        }
    }

    fn bump(&mut self, status: DiffStatus) {
        match status {
            DiffStatus::Unchanged => self.unchanged += 1,
            DiffStatus::Added => self.added += 1,
            DiffStatus::Removed => self.removed += 1,
            DiffStatus::Modified => self.modified += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResults {
    pub document_a: String,
    pub document_b: String,
    pub rows: Vec<RenderedRow>,
    pub counts: StatusCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

pub fn render_results(result: &DiffResult) -> RenderedResults {
    let mut counts = StatusCounts::default();
    let mut rows = Vec::with_capacity(result.diff.len());

    for diff in &result.diff {
        counts.bump(diff.status);
        rows.push(RenderedRow {
            status: diff.status,
            left: RenderedCell {
                page: diff.page_a,
                segments: format_text(diff.text_a.as_deref(), diff.status, Side::Left),
            },
            right: RenderedCell {
                page: diff.page_b,
                segments: format_text(diff.text_b.as_deref(), diff.status, Side::Right),
            },
        });
    }

    RenderedResults {
        document_a: result.document_a.name.clone(),
        document_b: result.document_b.name.clone(),
        rows,
        counts,
    }
}

fn format_text(text: Option<&str>, status: DiffStatus, side: Side) -> Vec<Segment> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    let whole = |kind| {
        vec![Segment {
            kind,
            text: decode_entities(text),
        }]
    };

    match (status, side) {
        (DiffStatus::Modified, _) => split_highlights(text),
        (DiffStatus::Added, Side::Right) => whole(SegmentKind::Added),
        (DiffStatus::Removed, Side::Left) => whole(SegmentKind::Removed),
        _ => whole(SegmentKind::Plain),
    }
}

/// Split server text on `<mark>`/`</mark>`. An unclosed marker highlights to
/// the end of the text; a stray closing marker is dropped.
fn split_highlights(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;
    let mut inside = false;

    loop {
        let marker = if inside { MARK_CLOSE } else { MARK_OPEN };
        let (piece, next) = match rest.find(marker) {
            Some(pos) => (&rest[..pos], Some(&rest[pos + marker.len()..])),
            None => (rest, None),
        };

        let piece = if inside {
            piece.to_string()
        } else {
            piece.replace(MARK_CLOSE, "")
        };
        if !piece.is_empty() {
            segments.push(Segment {
                kind: if inside {
                    SegmentKind::Highlight
                } else {
                    SegmentKind::Plain
                },
                text: decode_entities(&piece),
            });
        }

        match next {
            Some(next) => {
                rest = next;
                inside = !inside;
            }
            None => break,
        }
    }

    segments
}
