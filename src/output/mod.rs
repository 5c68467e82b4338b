pub mod clipboard;
pub mod report;

pub use clipboard::copy_to_clipboard;
pub use report::{REPORT_FILENAME, build_report, report_timestamp, write_report};
