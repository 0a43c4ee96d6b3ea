//! Wrapping configuration.
//!
//! `WrapOptions` is the plain, serializable record (what a config file or the
//! CLI supplies). `WrapConfig` is the validated, immutable form the engine
//! runs on. Validation happens once, in `WrapOptions::build`, so derived
//! widths can never go stale.
//!
//! ### Example
//! ```
//! use runewrap::{WrapConfig, WrapOptions};
//!
//! let config = WrapOptions {
//!     column_width: 30,
//!     subsequent_row_indent: "  ".into(),
//!     ..WrapOptions::default()
//! }
//! .build()?;
//! assert_eq!(config.column_width(), 30);
//! # Ok::<(), runewrap::ConfigError>(())
//! ```

use crate::error::{ConfigError, IndentRow};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_COLUMN_WIDTH: usize = 80;
pub const DEFAULT_TABSTOP_WIDTH: usize = 4;
pub const DEFAULT_LINE_SEPARATOR: &str = "\n";

/// Unvalidated wrapping options, as read from JSON or assembled by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrapOptions {
    /// Maximum runes per row, indent included.
    pub column_width: usize,
    pub first_row_indent: String,
    pub subsequent_row_indent: String,
    /// Turn CR/LF runs into a single space instead of forcing a row end.
    pub fold_line_breaks: bool,
    /// Number of spaces a tab expands to.
    pub tabstop_width: usize,
    pub line_separator: String,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            first_row_indent: String::new(),
            subsequent_row_indent: String::new(),
            fold_line_breaks: true,
            tabstop_width: DEFAULT_TABSTOP_WIDTH,
            line_separator: DEFAULT_LINE_SEPARATOR.into(),
        }
    }
}

impl WrapOptions {
    /// Validate and freeze into a `WrapConfig`.
    pub fn build(self) -> Result<WrapConfig, ConfigError> {
        WrapConfig::try_from(self)
    }
}

/// Validated configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapConfig {
    column_width: usize,
    first_row_indent: String,
    first_row_indent_width: usize,
    subsequent_row_indent: String,
    subsequent_row_indent_width: usize,
    fold_line_breaks: bool,
    tabstop_width: usize,
    line_separator: String,
}

impl WrapConfig {
    /// Positional constructor.
    ///
    /// ### Errors
    /// - `ConfigError::IndentTooWide` when `column_width` is not larger than either indent (in runes)
    /// - `ConfigError::ZeroTabstop` when `tabstop_width == 0`
    /// - `ConfigError::EmptySeparator` when `line_separator` is empty
    pub fn configure(
        column_width: usize,
        first_row_indent: &str,
        subsequent_row_indent: &str,
        fold_line_breaks: bool,
        tabstop_width: usize,
        line_separator: &str,
    ) -> Result<Self, ConfigError> {
        WrapOptions {
            column_width,
            first_row_indent: first_row_indent.into(),
            subsequent_row_indent: subsequent_row_indent.into(),
            fold_line_breaks,
            tabstop_width,
            line_separator: line_separator.into(),
        }
        .build()
    }

    /// Default settings with a different column width.
    pub fn with_width(column_width: usize) -> Result<Self, ConfigError> {
        WrapOptions {
            column_width,
            ..WrapOptions::default()
        }
        .build()
    }

    pub fn column_width(&self) -> usize {
        self.column_width
    }

    pub fn first_row_indent(&self) -> &str {
        &self.first_row_indent
    }

    pub fn subsequent_row_indent(&self) -> &str {
        &self.subsequent_row_indent
    }

    /// Indent text for a row.
    pub fn indent_for(&self, first_row: bool) -> &str {
        if first_row {
            &self.first_row_indent
        } else {
            &self.subsequent_row_indent
        }
    }

    /// Indent width in runes for a row.
    pub fn indent_width_for(&self, first_row: bool) -> usize {
        if first_row {
            self.first_row_indent_width
        } else {
            self.subsequent_row_indent_width
        }
    }

    pub fn fold_line_breaks(&self) -> bool {
        self.fold_line_breaks
    }

    pub fn tabstop_width(&self) -> usize {
        self.tabstop_width
    }

    pub fn line_separator(&self) -> &str {
        &self.line_separator
    }

    /// Back to the serializable form (e.g. for printing the effective config).
    pub fn to_options(&self) -> WrapOptions {
        WrapOptions {
            column_width: self.column_width,
            first_row_indent: self.first_row_indent.clone(),
            subsequent_row_indent: self.subsequent_row_indent.clone(),
            fold_line_breaks: self.fold_line_breaks,
            tabstop_width: self.tabstop_width,
            line_separator: self.line_separator.clone(),
        }
    }
}

impl Default for WrapConfig {
    /// 80 columns, no indents, folded line breaks, 4-space tabs, `"\n"` separator.
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            first_row_indent: String::new(),
            first_row_indent_width: 0,
            subsequent_row_indent: String::new(),
            subsequent_row_indent_width: 0,
            fold_line_breaks: true,
            tabstop_width: DEFAULT_TABSTOP_WIDTH,
            line_separator: DEFAULT_LINE_SEPARATOR.into(),
        }
    }
}

impl TryFrom<WrapOptions> for WrapConfig {
    type Error = ConfigError;

    fn try_from(o: WrapOptions) -> Result<Self, Self::Error> {
        let first_row_indent_width = o.first_row_indent.chars().count();
        let subsequent_row_indent_width = o.subsequent_row_indent.chars().count();

        for (row, indent_width) in [
            (IndentRow::First, first_row_indent_width),
            (IndentRow::Subsequent, subsequent_row_indent_width),
        ] {
            if o.column_width <= indent_width {
                return Err(ConfigError::IndentTooWide {
                    row,
                    column_width: o.column_width,
                    indent_width,
                });
            }
        }
        if o.tabstop_width == 0 {
            return Err(ConfigError::ZeroTabstop);
        }
        if o.line_separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }

        Ok(Self {
            column_width: o.column_width,
            first_row_indent: o.first_row_indent,
            first_row_indent_width,
            subsequent_row_indent: o.subsequent_row_indent,
            subsequent_row_indent_width,
            fold_line_breaks: o.fold_line_breaks,
            tabstop_width: o.tabstop_width,
            line_separator: o.line_separator,
        })
    }
}

/// Load options from a JSON file. Missing keys take their defaults.
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<WrapOptions> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let options = serde_json::from_str(&text)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(options)
}

/// Save options as pretty JSON.
pub fn save_options<P: AsRef<Path>>(options: &WrapOptions, path: P) -> Result<()> {
    let s = serde_json::to_string_pretty(options)?;
    fs::write(path, s)?;
    Ok(())
}
