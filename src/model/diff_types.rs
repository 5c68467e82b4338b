use serde::{Deserialize, Serialize};

/// Status of one paired paragraph as reported by the compare server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    Unchanged,
    Added,
    Removed,
    Modified,
}

impl DiffStatus {
    pub const ALL: [DiffStatus; 4] = [
        DiffStatus::Unchanged,
        DiffStatus::Added,
        DiffStatus::Removed,
        DiffStatus::Modified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiffStatus::Unchanged => "unchanged",
            DiffStatus::Added => "added",
            DiffStatus::Removed => "removed",
            DiffStatus::Modified => "modified",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiffStatus::Unchanged => "Unchanged",
            DiffStatus::Added => "Added",
            DiffStatus::Removed => "Removed",
            DiffStatus::Modified => "Modified",
        }
    }

    /// Added, removed and modified rows are changes; unchanged rows are not.
    pub fn is_change(&self) -> bool {
        !matches!(self, DiffStatus::Unchanged)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            DiffStatus::Unchanged => 0,
            DiffStatus::Added => 1,
            DiffStatus::Removed => 2,
            DiffStatus::Modified => 3,
        }
    }
}

/// One unit of the comparison: a status and the paired text of both sides.
///
/// Text arrives HTML-escaped, and modified rows wrap changed words in
/// `<mark>` markers. Either side may be `null` when the paragraph exists only
/// in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRow {
    pub status: DiffStatus,
    #[serde(default)]
    pub text_a: Option<String>,
    #[serde(default)]
    pub text_b: Option<String>,
    /// Page (PDF) or paragraph (DOCX) number in the original document
    #[serde(default)]
    pub page_a: Option<u32>,
    /// Page (PDF) or paragraph (DOCX) number in the modified document
    #[serde(default)]
    pub page_b: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub name: String,
}

/// Successful body of `POST /api/compare/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub document_a: DocumentInfo,
    pub document_b: DocumentInfo,
    pub diff: Vec<DiffRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_server_body_with_nulls_and_pages() {
        // given
        let body = r#"{
            "document_a": {"name": "v1.pdf"},
            "document_b": {"name": "v2.pdf"},
            "diff": [
                {"status": "unchanged", "text_a": "Intro", "text_b": "Intro", "page_a": 1, "page_b": 1},
                {"status": "added", "text_a": null, "text_b": "New", "page_a": null, "page_b": 2}
            ]
        }"#;

        // when
        let result: DiffResult = serde_json::from_str(body).unwrap();

        // then
        assert_eq!(result.document_a.name, "v1.pdf");
        assert_eq!(result.diff.len(), 2);
        assert_eq!(result.diff[1].status, DiffStatus::Added);
        assert_eq!(result.diff[1].text_a, None);
        assert_eq!(result.diff[1].page_b, Some(2));
    }

    #[test]
    fn should_accept_rows_without_page_numbers() {
        let row: DiffRow =
            serde_json::from_str(r#"{"status": "removed", "text_a": "Gone"}"#).unwrap();
        assert_eq!(row.status, DiffStatus::Removed);
        assert_eq!(row.text_b, None);
        assert_eq!(row.page_a, None);
    }

    #[test]
    fn should_reject_unknown_status() {
        let row = serde_json::from_str::<DiffRow>(r#"{"status": "moved", "text_a": "x"}"#);
        assert!(row.is_err());
    }

    #[test]
    fn should_classify_changes() {
        assert!(!DiffStatus::Unchanged.is_change());
        assert!(DiffStatus::Added.is_change());
        assert!(DiffStatus::Removed.is_change());
        assert!(DiffStatus::Modified.is_change());
    }
}
