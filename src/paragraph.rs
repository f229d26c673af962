//! Grouping of classified lines into paragraphs

use crate::classify::classify;
use crate::types::Paragraph;
use std::iter::FusedIterator;
use tracing::debug;

/// Push-based paragraph state machine.
///
/// Starts as an empty depth-0 paragraph. Lines at the running depth are
/// appended with a separating space; a line at any other depth closes the
/// running paragraph and opens a new one. Depth changes are the only
/// paragraph boundaries, blank lines included.
#[derive(Debug, Clone, Default)]
pub struct ParagraphAccumulator {
    current: Paragraph,
}

impl ParagraphAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line, returning the paragraph it closed, if any
    pub fn push(&mut self, raw_line: &str) -> Option<Paragraph> {
        let line = classify(raw_line.trim_end_matches(['\r', '\n']));

        if line.depth == self.current.depth {
            self.current.text.push(' ');
            self.current.text.push_str(line.text);
            return None;
        }

        let done = std::mem::replace(&mut self.current, Paragraph::new(line.depth, line.text));
        debug!(
            depth = done.depth,
            words = done.word_count(),
            "flushed paragraph"
        );
        Some(done)
    }

    /// Close the running paragraph, even if it is empty
    #[must_use]
    pub fn finish(self) -> Paragraph {
        debug!(
            depth = self.current.depth,
            words = self.current.word_count(),
            "flushed final paragraph"
        );
        self.current
    }

    /// Depth of the paragraph being built
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.current.depth
    }
}

/// Lazy iterator over the paragraphs of a sequence of lines.
///
/// Always yields at least one paragraph: empty input gives a single empty
/// depth-0 paragraph.
#[derive(Debug, Clone)]
pub struct Paragraphs<I> {
    lines: I,
    state: Option<ParagraphAccumulator>,
}

impl<I> Paragraphs<I> {
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            state: Some(ParagraphAccumulator::new()),
        }
    }
}

impl<I, S> Iterator for Paragraphs<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Paragraph;

    fn next(&mut self) -> Option<Paragraph> {
        let state = self.state.as_mut()?;
        for line in self.lines.by_ref() {
            if let Some(done) = state.push(line.as_ref()) {
                return Some(done);
            }
        }
        self.state.take().map(ParagraphAccumulator::finish)
    }
}

impl<I, S> FusedIterator for Paragraphs<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
}

/// Group lines into paragraphs by quote depth
pub fn paragraphs<T>(lines: T) -> Paragraphs<T::IntoIter>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    Paragraphs::new(lines)
}
