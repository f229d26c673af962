//! Core types for reflowing emails

use crate::error::{ReflowError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default maximum line length, quote prefix included
pub const DEFAULT_LINE_LENGTH: usize = 72;

/// A single input line split into its quote depth and remaining text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotedLine<'a> {
    /// Number of `>` markers in the leading quote run
    pub depth: usize,

    /// Text after the quote run, internal whitespace untouched
    pub text: &'a str,
}

/// A run of consecutive lines sharing one quote depth, joined by spaces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Quote depth shared by every line of the paragraph
    pub depth: usize,

    /// Line texts joined by single spaces
    pub text: String,
}

impl Paragraph {
    pub fn new(depth: usize, text: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }

    /// Check if the paragraph holds no words at all
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// How to treat bytes that are not valid UTF-8
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Fail on the first invalid sequence
    Strict,
    /// Silently remove invalid bytes
    #[default]
    Drop,
    /// Substitute U+FFFD for each invalid sequence
    Replace,
}

impl DecodeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Drop => "drop",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for a reflow run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflowConfig {
    /// Maximum line length, including any quote prefix
    pub line_length: usize,

    /// Handling of invalid UTF-8 in the input
    pub decode: DecodeMode,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
            decode: DecodeMode::default(),
        }
    }
}

impl ReflowConfig {
    #[must_use]
    pub fn with_line_length(line_length: usize) -> Self {
        Self {
            line_length,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn decode(mut self, decode: DecodeMode) -> Self {
        self.decode = decode;
        self
    }

    /// Reject settings under which no line can hold any text
    pub fn validate(&self) -> Result<()> {
        if self.line_length == 0 {
            return Err(ReflowError::InvalidConfig(
                "line_length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
