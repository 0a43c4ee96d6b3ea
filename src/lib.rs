//! runewrap
//!
//! A small Rust library for word-wrapping UTF-8 text to a fixed column width.
//! Pairs with the `runewrap` CLI.
//!
//! ### Features
//! - Breaks at whitespace, hard-splits only words longer than a whole row
//! - Widths are counted in runes (code points), never bytes
//! - Tabs expand to a configurable number of spaces; CR/LF runs fold to one space
//!   (or, optionally, force row ends)
//! - Separate indents for the first row and the rows after it
//! - One-shot, incremental (`add_text` / `finish`) and streamed input; chunk
//!   boundaries may fall anywhere, even inside a multi-byte rune
//!
//! ### Example
//! ```
//! use runewrap::{WrapOptions, Wrapper};
//!
//! let config = WrapOptions {
//!     column_width: 16,
//!     first_row_indent: "- ".into(),
//!     subsequent_row_indent: "  ".into(),
//!     ..WrapOptions::default()
//! }
//! .build()?;
//! let wrapper = Wrapper::new(config);
//! let out = wrapper.wrap_text("Line width is counted in runes, not bytes.");
//! assert_eq!(out, "- Line width is\n  counted in\n  runes, not\n  bytes.");
//! # Ok::<(), runewrap::ConfigError>(())
//! ```

pub mod breaker;
pub mod budget;
pub mod classify;
pub mod config;
pub mod decode;
pub mod error;
pub mod output;
pub mod source;
pub mod token;
pub mod wrapper;

pub use config::{WrapConfig, WrapOptions};
pub use error::{ConfigError, DecodingError, WrapError};
pub use source::{ChunkSource, IterSource, ReaderSource};
pub use wrapper::Wrapper;
