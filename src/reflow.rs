//! Reflow pipeline: decode, classify, group, render

use crate::error::{ReflowError, Result};
use crate::paragraph::{ParagraphAccumulator, paragraphs};
use crate::render::render_into;
use crate::types::{DecodeMode, ReflowConfig};
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Decode one raw input line according to `mode`.
///
/// `line` is the 1-based line number reported in strict mode errors.
pub fn decode_line(bytes: &[u8], mode: DecodeMode, line: usize) -> Result<Cow<'_, str>> {
    let source = match std::str::from_utf8(bytes) {
        Ok(text) => return Ok(Cow::Borrowed(text)),
        Err(source) => source,
    };

    match mode {
        DecodeMode::Strict => Err(ReflowError::Decode { line, source }),
        DecodeMode::Replace => {
            debug!(line, "replacing invalid UTF-8");
            Ok(String::from_utf8_lossy(bytes))
        }
        DecodeMode::Drop => {
            debug!(line, "dropping invalid UTF-8");
            let mut text = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                text.push_str(chunk.valid());
            }
            Ok(Cow::Owned(text))
        }
    }
}

/// Incremental reflower.
///
/// Lines go in one at a time; rendered text comes out as soon as a
/// paragraph is closed by a change of quote depth.
#[derive(Debug)]
pub struct Reflower {
    config: ReflowConfig,
    paragraphs: ParagraphAccumulator,
    lines_read: usize,
    rendered: String,
}

impl Reflower {
    pub fn new(config: ReflowConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            paragraphs: ParagraphAccumulator::new(),
            lines_read: 0,
            rendered: String::new(),
        })
    }

    /// Number of lines pushed so far
    #[must_use]
    pub const fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Feed one decoded line, returning any text it caused to be rendered
    pub fn push_line(&mut self, line: &str) -> Result<&str> {
        self.lines_read += 1;
        self.rendered.clear();
        if let Some(paragraph) = self.paragraphs.push(line) {
            render_into(
                &mut self.rendered,
                &paragraph.text,
                paragraph.depth,
                self.config.line_length,
            )?;
        }
        Ok(&self.rendered)
    }

    /// Feed one raw line, decoding it with the configured mode
    pub fn push_bytes(&mut self, raw: &[u8]) -> Result<&str> {
        let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let text = decode_line(raw, self.config.decode, self.lines_read + 1)?;
        self.push_line(&text)
    }

    /// Render whatever paragraph is still open
    pub fn finish(self) -> Result<String> {
        let last = self.paragraphs.finish();
        let mut output = String::new();
        render_into(&mut output, &last.text, last.depth, self.config.line_length)?;
        info!(lines = self.lines_read, "reflow complete");
        Ok(output)
    }
}

/// Reflow already-split lines to `line_length`
pub fn reflow_lines<T>(lines: T, line_length: usize) -> Result<String>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    ReflowConfig::with_line_length(line_length).validate()?;

    let mut output = String::new();
    for paragraph in paragraphs(lines) {
        render_into(&mut output, &paragraph.text, paragraph.depth, line_length)?;
    }
    Ok(output)
}

/// Reflow a whole email body held in memory
pub fn reflow(input: &str, config: &ReflowConfig) -> Result<String> {
    let mut reflower = Reflower::new(*config)?;
    let mut output = String::with_capacity(input.len());
    for line in input.lines() {
        output.push_str(reflower.push_line(line)?);
    }
    output.push_str(&reflower.finish()?);
    Ok(output)
}

/// Reflow raw bytes, decoding each line with `config.decode`
pub fn reflow_bytes(input: &[u8], config: &ReflowConfig) -> Result<String> {
    let mut reflower = Reflower::new(*config)?;
    let mut output = String::with_capacity(input.len());
    for line in input.split_inclusive(|&b| b == b'\n') {
        output.push_str(reflower.push_bytes(line)?);
    }
    output.push_str(&reflower.finish()?);
    Ok(output)
}

/// Read `reader` line by line and write the reflowed text to `writer`.
///
/// Input is consumed incrementally, but nothing reaches `writer` unless the
/// whole input reflows: on error the writer is left untouched.
pub fn reflow_reader<R, W>(mut reader: R, mut writer: W, config: &ReflowConfig) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut reflower = Reflower::new(*config)?;
    let mut output = String::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        output.push_str(reflower.push_bytes(&buf)?);
    }
    output.push_str(&reflower.finish()?);

    writer.write_all(output.as_bytes())?;
    writer.flush()?;
    Ok(())
}
