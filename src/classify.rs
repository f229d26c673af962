//! Quote depth detection for single lines

use crate::types::QuotedLine;
use regex::Regex;
use tracing::trace;

// Leading run of ASCII whitespace and quote markers
static QUOTE_RUN_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[ \t\n\x0B\x0C\r>]*").unwrap());

/// Split a line into its quote depth and the text after the quote run.
///
/// ASCII whitespace between markers is skipped, so `"> > >text"` and
/// `">>>text"` both have depth 3. A `>` after the first other character,
/// including a non-ASCII space such as U+00A0, is text.
#[must_use]
pub fn classify(line: &str) -> QuotedLine<'_> {
    let end = QUOTE_RUN_REGEX.find(line).map_or(0, |m| m.end());
    let depth = line[..end].matches('>').count();
    let text = &line[end..];

    trace!(depth, text, "classified line");

    QuotedLine { depth, text }
}

/// Quote depth of a line, ignoring its text
#[must_use]
pub fn quote_depth(line: &str) -> usize {
    classify(line).depth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stops_at_first_text_char() {
        let line = classify("  >a > b");
        assert_eq!(line.depth, 1);
        assert_eq!(line.text, "a > b");
    }

    #[test]
    fn test_only_markers() {
        let line = classify(">> >");
        assert_eq!(line.depth, 3);
        assert_eq!(line.text, "");
    }
}
