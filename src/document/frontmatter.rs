//! Line-oriented helpers for the document metadata block.
//!
//! Model output is scanned tolerantly (stray indentation and trailing
//! whitespace are accepted) but the structural requirements are strict:
//! opening and closing `---` lines, and a `publishedAt` key between them.

use crate::types::{AppError, Result};

const DELIMITER: &str = "---";
const FENCE: &str = "```";

/// Strip one enclosing code fence if the model wrapped the whole document.
///
/// Handles a bare ``` as well as language-tagged openers like ```markdown.
/// Interior fences are left in place for the caller to reject.
pub(crate) fn strip_enclosing_fence(raw: &str) -> String {
    let trimmed = raw.trim();
    let lines: Vec<&str> = trimmed.lines().collect();

    let wrapped = lines.len() >= 2
        && lines.first().is_some_and(|l| l.trim().starts_with(FENCE))
        && lines.last().is_some_and(|l| l.trim() == FENCE);

    if wrapped {
        lines[1..lines.len() - 1].join("\n").trim().to_string()
    } else {
        trimmed.to_string()
    }
}

pub(crate) fn contains_fence(document: &str) -> bool {
    document.contains(FENCE)
}

/// Rewrite the frontmatter's `publishedAt` value to `timestamp`.
///
/// Fails if the document does not open with a delimiter line, the block is
/// never closed, or the key is absent.
pub(crate) fn rewrite_published_at(document: &str, timestamp: &str) -> Result<String> {
    let lines: Vec<&str> = document.lines().collect();

    if lines.first().map(|l| l.trim_end()) != Some(DELIMITER) {
        return Err(AppError::Llm(
            "generated document does not begin with a frontmatter delimiter".to_string(),
        ));
    }

    let close = lines[1..]
        .iter()
        .position(|l| l.trim_end() == DELIMITER)
        .map(|i| i + 1)
        .ok_or_else(|| {
            AppError::Llm("generated document frontmatter is never closed".to_string())
        })?;

    let mut out: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
    let mut rewritten = false;
    for line in &mut out[1..close] {
        if line.trim_start().starts_with("publishedAt:") {
            *line = format!("publishedAt: '{}'", timestamp);
            rewritten = true;
            break;
        }
    }

    if !rewritten {
        return Err(AppError::Llm(
            "generated document frontmatter is missing publishedAt".to_string(),
        ));
    }

    Ok(out.join("\n"))
}
