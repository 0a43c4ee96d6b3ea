//! Error types returned by the wrapping engine.
//!
//! - `ConfigError` for invalid width/indent/tabstop combinations (raised at construction)
//! - `DecodingError` for byte input that is not valid UTF-8
//! - `WrapError` as the top-level error type

use std::fmt;
use thiserror::Error;

/// Which row an indent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentRow {
    First,
    Subsequent,
}

impl fmt::Display for IndentRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentRow::First => write!(f, "first-row"),
            IndentRow::Subsequent => write!(f, "subsequent-row"),
        }
    }
}

/// Invalid configuration. Always surfaced before any text is wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "column width {column_width} must be larger than the {row} indent ({indent_width} runes)"
    )]
    IndentTooWide {
        row: IndentRow,
        column_width: usize,
        indent_width: usize,
    },

    #[error("tabstop width must be at least 1")]
    ZeroTabstop,

    #[error("line separator must not be empty")]
    EmptySeparator,
}

/// Input bytes that do not decode as UTF-8.
///
/// `offset` is the byte position (counted from the start of the session) of the
/// first byte of the offending sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} UTF-8 sequence at byte offset {offset}", sequence_kind(.truncated))]
pub struct DecodingError {
    pub offset: u64,
    /// `true` when input ended in the middle of a multi-byte rune.
    pub truncated: bool,
}

fn sequence_kind(truncated: &bool) -> &'static str {
    if *truncated { "truncated" } else { "invalid" }
}

/// Top-level error type for wrapping operations.
#[derive(Debug, Error)]
pub enum WrapError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("decoding error: {0}")]
    Decoding(#[from] DecodingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
