//! Title lookup from a content file's front-matter block.
//!
//! A content file may open with a small `key: value` block fenced by `---`
//! lines:
//!
//! ```text
//! ---
//! title: "Quick Start"
//! description: ignored
//! ---
//! # Body starts here
//! ```
//!
//! Only `title` is consumed. Lookup is best-effort: an unreadable file, a
//! missing or unterminated block, or a block without a usable title all
//! resolve to `None`. Nothing here can fail the build, so there is no error
//! type.

use std::path::Path;

const DELIMITER: &str = "---";

/// Read the declared `title` of a content file, if any.
pub fn read_title(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    parse_title(&content)
}

/// Extract the `title` value from file content.
///
/// The key is matched case-insensitively and only its first occurrence
/// counts. The value is everything after the first colon, trimmed, with one
/// leading and one trailing quote removed. Empty values count as absent.
pub fn parse_title(content: &str) -> Option<String> {
    let block = front_matter_lines(content)?;
    for line in block {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        if key.trim().is_empty() || !key.trim().eq_ignore_ascii_case("title") {
            continue;
        }
        let value = trim_quotes(value.trim());
        return (!value.is_empty()).then(|| value.to_string());
    }
    None
}

/// Lines between the opening and closing delimiters.
///
/// Returns `None` unless the very first line is a delimiter and a closing
/// delimiter follows at least one line of content.
fn front_matter_lines(content: &str) -> Option<Vec<&str>> {
    let mut lines = content.lines();
    if lines.next()?.trim_end() != DELIMITER {
        return None;
    }
    let mut block = Vec::new();
    for line in lines {
        if line.trim_end() == DELIMITER {
            return (!block.is_empty()).then_some(block);
        }
        block.push(line);
    }
    None
}

fn trim_quotes(value: &str) -> &str {
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}
