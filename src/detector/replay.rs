// SPDX-License-Identifier: GPL-3.0-only

//! Replay scan event streams from disk
//!
//! A recorded JSON-lines file stands in for a live detector feed: one
//! [`ScanResult`] per line, blank lines and `#` comments skipped. Used by the
//! headless replay command and the terminal preview.

use super::ScanResult;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use tracing::debug;

/// Load a JSON-lines scan event stream
pub fn load_events(path: &Path) -> AppResult<Vec<ScanResult>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("{}: {}", path.display(), e)))?;

    let mut events = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event: ScanResult = serde_json::from_str(line)
            .map_err(|e| AppError::Input(format!("{}:{}: {}", path.display(), number + 1, e)))?;
        events.push(event);
    }

    if events.is_empty() {
        return Err(AppError::Input(format!(
            "no scan events in {}",
            path.display()
        )));
    }

    debug!(count = events.len(), path = %path.display(), "Loaded scan events");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        path
    }

    #[test]
    fn test_load_events_skips_comments_and_blanks() {
        let path = write_temp(
            "scan_overlay_replay_test.jsonl",
            concat!(
                "# recorded feed\n",
                "\n",
                r#"{"payload":"A","corner_points":[{"x":1.0,"y":2.0}],"bounding_box":{"origin":{"x":1.0,"y":2.0},"size":{"width":3.0,"height":4.0}}}"#,
                "\n",
            ),
        );

        let events = load_events(&path).expect("load");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].payload, "A");
    }

    #[test]
    fn test_load_events_reports_line_number() {
        let path = write_temp("scan_overlay_replay_bad.jsonl", "not json\n");
        let err = load_events(&path).expect_err("malformed line");
        assert!(err.to_string().contains(":1:"), "got: {}", err);
    }

    #[test]
    fn test_load_events_rejects_empty_stream() {
        let path = write_temp("scan_overlay_replay_empty.jsonl", "# nothing here\n");
        assert!(load_events(&path).is_err());
    }
}
