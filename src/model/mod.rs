pub mod diff_types;
pub mod selection;

pub use diff_types::{DiffResult, DiffRow, DiffStatus, DocumentInfo};
pub use selection::{PickedFile, SlotId};
