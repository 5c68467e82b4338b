use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;

pub const REPORT_FILENAME: &str = "comparison-report.html";
pub const REPORT_TITLE: &str = "Comparison Report";

/// Mirrors the on-page diff styling so the report stands alone.
const REPORT_CSS: &str = concat!(
    "*{box-sizing:border-box;margin:0;padding:0}",
    "body{font-family:-apple-system,BlinkMacSystemFont,sans-serif;padding:32px;background:#f5f5f5}",
    "h1{font-size:24px;margin-bottom:8px}.date{color:#666;font-size:14px;margin-bottom:24px}",
    ".results{background:#fff;border:1px solid #ddd;border-radius:8px;overflow:hidden}",
    ".diff-headers{display:flex;background:#333;color:#fff;font-weight:600}",
    ".diff-title{flex:1;padding:12px 16px}.diff-title+.diff-title{border-left:1px solid #555}",
    ".diff-item{display:flex;border-bottom:1px solid #eee}",
    ".diff-item.active{outline:2px solid #4a90d9;outline-offset:-2px}",
    ".diff-cell{flex:1;padding:12px 16px;line-height:1.6}.diff-cell+.diff-cell{border-left:1px solid #eee}",
    ".diff-cell p{margin:0}.highlight{background:#fff3cd;padding:2px 4px;border-radius:3px}",
    ".added{background:#d4edda;color:#155724;padding:2px 4px;border-radius:3px}",
    ".removed{background:#f8d7da;color:#721c24;padding:2px 4px;border-radius:3px;text-decoration:line-through}",
    ".diff-added .diff-cell:first-child{background:#f8f8f8;color:#999}",
    ".diff-added .diff-cell:last-child{background:#f0fff0}",
    ".diff-removed .diff-cell:first-child{background:#fff0f0}",
    ".diff-removed .diff-cell:last-child{background:#f8f8f8;color:#999}",
    ".diff-modified .diff-cell:first-child{background:#fffdf0}",
    ".diff-modified .diff-cell:last-child{background:#f0fff0}",
);

pub fn report_timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Wrap already-rendered results markup into a standalone document.
pub fn build_report(results_markup: &str, generated_at: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\">\
         <title>{REPORT_TITLE}</title><style>{REPORT_CSS}</style></head>\
         <body><h1>{REPORT_TITLE}</h1><p class=\"date\">{generated_at}</p>\
         <div class=\"results\">{results_markup}</div></body></html>"
    )
}

/// Write the report into `dir`, replacing an earlier one.
pub fn write_report(dir: &Path, html: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(REPORT_FILENAME);
    std::fs::write(&path, html)?;
    Ok(path)
}
