use std::fmt::Write;

use crate::filter::Filters;
use crate::render::{RenderedCell, RenderedResults};

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

/// Decode HTML character references in a single pass.
///
/// Named references cover what an HTML escaper emits; numeric references
/// (`&#39;`, `&#x27;`) are decoded generally. Anything unrecognized is kept
/// as-is, so raw markup passes through untouched.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        match decode_reference(candidate) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &candidate[consumed..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode the reference at the start of `s` (which begins with `&`).
/// Returns the character and the number of bytes consumed.
fn decode_reference(s: &str) -> Option<(char, usize)> {
    let end = s.get(..12).unwrap_or(s).find(';')?;
    let body = &s[1..end];

    let decoded = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let number = body.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)?
        }
    };

    Some((decoded, end + 1))
}

fn write_cell(html: &mut String, cell: &RenderedCell) {
    html.push_str("<div class=\"diff-cell\"><p>");
    for segment in &cell.segments {
        let text = escape_html(&segment.text);
        match segment.kind.css_class() {
            Some(class) => {
                let _ = write!(html, "<span class=\"{class}\">{text}</span>");
            }
            None => html.push_str(&text),
        }
    }
    html.push_str("</p></div>");
}

impl RenderedResults {
    /// Serialize the results view as it currently stands: rows of filtered-out
    /// statuses are kept but hidden, the focused row is marked `active`.
    pub fn to_markup(&self, filters: &Filters, focused: Option<usize>) -> String {
        let mut html = String::new();

        let _ = write!(
            html,
            "<div class=\"diff-headers\"><div class=\"diff-title\">{}</div><div class=\"diff-title\">{}</div></div>",
            escape_html(&self.document_a),
            escape_html(&self.document_b)
        );

        for (idx, row) in self.rows.iter().enumerate() {
            let active = if focused == Some(idx) { " active" } else { "" };
            let hidden = if filters.is_shown(row.status) {
                ""
            } else {
                " style=\"display:none\""
            };
            let _ = write!(
                html,
                "<div class=\"diff-item diff-{}{active}\"{hidden}>",
                row.status.as_str()
            );
            write_cell(&mut html, &row.left);
            write_cell(&mut html, &row.right);
            html.push_str("</div>");
        }

        html
    }
}
