//! Greedy line packing for a single paragraph

use crate::error::{ReflowError, Result};
use regex::Regex;
use tracing::warn;

static WHITESPACE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Quote prefix for a depth: `depth` markers and a space, or nothing at depth 0
#[must_use]
pub fn quote_prefix(depth: usize) -> String {
    if depth == 0 {
        String::new()
    } else {
        let mut prefix = ">".repeat(depth);
        prefix.push(' ');
        prefix
    }
}

/// Render a paragraph as wrapped lines, each ending in `\n`.
///
/// No line is longer than `line_length` characters unless it holds a single
/// word that does not fit on its own; such words are never split.
pub fn render_paragraph(text: &str, depth: usize, line_length: usize) -> Result<String> {
    let mut output = String::new();
    render_into(&mut output, text, depth, line_length)?;
    Ok(output)
}

/// Append the rendered paragraph to `output`
pub fn render_into(
    output: &mut String,
    text: &str,
    depth: usize,
    line_length: usize,
) -> Result<()> {
    let prefix = quote_prefix(depth);
    let prefix_len = prefix.chars().count();
    if line_length <= prefix_len {
        return Err(ReflowError::WidthTooSmall { line_length, depth });
    }
    let budget = line_length - prefix_len;

    let mut line = String::new();
    let mut line_len = 0;

    for word in WHITESPACE_REGEX.split(text).filter(|w| !w.is_empty()) {
        let word_len = word.chars().count();
        if word_len > budget {
            warn!(word_len, budget, depth, "word exceeds line length");
        }

        if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + word_len < budget {
            line.push(' ');
            line.push_str(word);
            line_len += word_len + 1;
        } else {
            push_line(output, &prefix, &line);
            line.clear();
            line.push_str(word);
            line_len = word_len;
        }
    }

    if !line.is_empty() {
        push_line(output, &prefix, &line);
    }

    Ok(())
}

fn push_line(output: &mut String, prefix: &str, line: &str) {
    output.push_str(prefix);
    output.push_str(line);
    output.push('\n');
}
