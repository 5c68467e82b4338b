use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::validate::sniff_content_type;

/// Bytes read from the start of a file to guess its content type
const SNIFF_LEN: u64 = 8 * 1024;

/// One of the two upload positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    /// Slot A
    Original,
    /// Slot B
    Modified,
}

impl SlotId {
    pub fn label(&self) -> &'static str {
        match self {
            SlotId::Original => "Original",
            SlotId::Modified => "Modified",
        }
    }

    /// Multipart field the slot is uploaded under
    pub fn field_name(&self) -> &'static str {
        match self {
            SlotId::Original => "file_a",
            SlotId::Modified => "file_b",
        }
    }

    pub fn other(&self) -> SlotId {
        match self {
            SlotId::Original => SlotId::Modified,
            SlotId::Modified => SlotId::Original,
        }
    }
}

/// A file the user selected for a slot. The file stays on disk until upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    /// Content type guessed from the file head, if recognizable
    pub content_type: Option<String>,
}

impl PickedFile {
    /// Stat the file and sniff its head. Fails if the path cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        if metadata.is_dir() {
            return Err(std::io::Error::other("is a directory").into());
        }

        let mut head = Vec::new();
        File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            content_type: sniff_content_type(&head).map(str::to_string),
        })
    }

    /// Content type sent with the multipart part
    pub fn upload_content_type(&self) -> &str {
        self.content_type
            .as_deref()
            .unwrap_or("application/octet-stream")
    }
}
