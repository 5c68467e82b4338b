use std::io::Write;

use arboard::Clipboard;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::{DoccmpError, Result};

/// Copy `text` to the clipboard; returns a status line for the user.
pub fn copy_to_clipboard(text: &str, what: &str) -> Result<String> {
    if should_prefer_osc52() {
        copy_osc52(text)?;
        return Ok(format!("{what} copied to clipboard (via terminal)"));
    }

    match Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
        Ok(_) => Ok(format!("{what} copied to clipboard")),
        Err(e) => {
            log::debug!("system clipboard unavailable ({e}), using OSC 52");
            copy_osc52(text)?;
            Ok(format!("{what} copied to clipboard (via terminal)"))
        }
    }
}

/// In tmux, SSH and zellij the system clipboard may belong to another machine.
fn should_prefer_osc52() -> bool {
    std::env::var("TMUX").is_ok()
        || std::env::var("SSH_TTY").is_ok()
        || std::env::var("ZELLIJ").is_ok()
}

fn copy_osc52(text: &str) -> Result<()> {
    if std::env::var("TMUX").is_ok() {
        copy_via_tmux(text)
    } else {
        let mut stdout = std::io::stdout().lock();
        write_osc52(&mut stdout, text)
    }
}

/// `tmux load-buffer -w -` forwards to the outer terminal's clipboard.
fn copy_via_tmux(text: &str) -> Result<()> {
    use std::process::{Command, Stdio};

    let mut child = Command::new("tmux")
        .args(["load-buffer", "-w", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| DoccmpError::Clipboard(format!("Failed to run tmux: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| DoccmpError::Clipboard(format!("Failed to write to tmux: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| DoccmpError::Clipboard(format!("tmux load-buffer failed: {e}")))?;
    if !status.success() {
        return Err(DoccmpError::Clipboard(
            "tmux load-buffer exited with error".to_string(),
        ));
    }
    Ok(())
}

fn write_osc52<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    let encoded = BASE64.encode(text);
    write!(writer, "\x1b]52;c;{encoded}\x07")
        .and_then(|_| writer.flush())
        .map_err(|e| DoccmpError::Clipboard(format!("Failed to write OSC 52: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_write_osc52_sequence() {
        let mut out = Vec::new();
        write_osc52(&mut out, "<p>hi</p>").unwrap();
        let expected = format!("\x1b]52;c;{}\x07", BASE64.encode("<p>hi</p>"));
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
