//! Append-only buffer for wrapped text.
//!
//! Row indents are written lazily, right before the first content of a row.
//! A separator is therefore never followed by a dangling indent, and a
//! session that never sees a word produces nothing at all.

use crate::config::WrapConfig;

#[derive(Debug, Clone)]
pub struct OutputAccumulator {
    buf: String,
    first_row_indent: String,
    subsequent_row_indent: String,
    line_separator: String,
    /// The current row's indent has been written.
    row_open: bool,
    /// Number of separators written so far.
    rows_ended: usize,
}

impl OutputAccumulator {
    pub fn new(config: &WrapConfig) -> Self {
        Self {
            buf: String::new(),
            first_row_indent: config.first_row_indent().to_owned(),
            subsequent_row_indent: config.subsequent_row_indent().to_owned(),
            line_separator: config.line_separator().to_owned(),
            row_open: false,
            rows_ended: 0,
        }
    }

    fn open_row(&mut self) {
        if self.row_open {
            return;
        }
        let indent = if self.rows_ended == 0 {
            &self.first_row_indent
        } else {
            &self.subsequent_row_indent
        };
        self.buf.push_str(indent);
        self.row_open = true;
    }

    /// Append content runes, preceded by the row indent if the row is new.
    pub fn append_runes(&mut self, text: &str) {
        self.open_row();
        self.buf.push_str(text);
    }

    /// Append `n` ASCII spaces (a normalized whitespace run).
    pub fn append_spaces(&mut self, n: usize) {
        self.open_row();
        self.buf.extend(std::iter::repeat_n(' ', n));
    }

    /// End the current row. With `keep_indent` an untouched row still gets its
    /// indent (a row the wrapper deliberately left empty); otherwise an empty
    /// row is just the separator.
    pub fn append_line_break(&mut self, keep_indent: bool) {
        if keep_indent {
            self.open_row();
        }
        self.buf.push_str(&self.line_separator);
        self.rows_ended += 1;
        self.row_open = false;
    }

    pub fn has_content(&self) -> bool {
        !self.buf.is_empty() || self.rows_ended > 0
    }

    /// Rows started so far (0 for an empty session).
    pub fn rows(&self) -> usize {
        if self.has_content() {
            self.rows_ended + 1
        } else {
            0
        }
    }

    pub fn snapshot(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
