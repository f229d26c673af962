// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Reflow
//!
//! Rewraps plain-text email bodies so that no line exceeds a maximum length,
//! while keeping the quote depth given by leading `>` markers.
//!
//! # How it works
//!
//! - Each line is split into its quote depth and text
//! - Consecutive lines at the same depth are joined into one paragraph
//! - Each paragraph is greedily packed into lines under the width budget,
//!   with the quote prefix put back in front
//!
//! Words longer than the budget are kept whole on a line of their own.
//!
//! # Example
//!
//! ```rust
//! use email_reflow::{ReflowConfig, reflow};
//!
//! let body = "> quoted line one\n> quoted line two\nmy reply";
//! let out = reflow(body, &ReflowConfig::default()).unwrap();
//!
//! assert_eq!(out, "> quoted line one quoted line two\nmy reply\n");
//! ```

mod classify;
mod error;
mod paragraph;
mod reflow;
mod render;
mod types;

pub use classify::{classify, quote_depth};
pub use error::{ReflowError, Result};
pub use paragraph::{ParagraphAccumulator, Paragraphs, paragraphs};
pub use reflow::{Reflower, decode_line, reflow, reflow_bytes, reflow_lines, reflow_reader};
pub use render::{quote_prefix, render_into, render_paragraph};
pub use types::*;
