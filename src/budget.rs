//! Remaining-width bookkeeping for the row being built.

use crate::config::WrapConfig;

#[derive(Debug, Clone)]
pub struct LineBudget {
    column_width: usize,
    first_indent_width: usize,
    subsequent_indent_width: usize,
    remaining: usize,
}

impl LineBudget {
    /// Budget for the first row of a session.
    pub fn new(config: &WrapConfig) -> Self {
        let mut budget = Self {
            column_width: config.column_width(),
            first_indent_width: config.indent_width_for(true),
            subsequent_indent_width: config.indent_width_for(false),
            remaining: 0,
        };
        budget.reset(true);
        budget
    }

    /// Start a new row.
    pub fn reset(&mut self, first_row: bool) {
        let indent = if first_row {
            self.first_indent_width
        } else {
            self.subsequent_indent_width
        };
        // config validation guarantees column_width > indent
        self.remaining = self.column_width - indent;
    }

    pub fn charge(&mut self, n: usize) {
        self.remaining = self.remaining.saturating_sub(n);
    }

    pub fn would_overflow(&self, n: usize) -> bool {
        n > self.remaining
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Width available on a freshly started subsequent row.
    pub fn fresh_width(&self) -> usize {
        self.column_width - self.subsequent_indent_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_subtracts_the_row_indent() {
        let config = WrapConfig::configure(30, "----", "  ", true, 4, "\n").unwrap();
        let mut b = LineBudget::new(&config);
        assert_eq!(b.remaining(), 26);
        b.reset(false);
        assert_eq!(b.remaining(), 28);
        assert_eq!(b.fresh_width(), 28);
    }

    #[test]
    fn overflow_is_strictly_greater() {
        let config = WrapConfig::with_width(10).unwrap();
        let mut b = LineBudget::new(&config);
        b.charge(4);
        assert!(!b.would_overflow(6));
        assert!(b.would_overflow(7));
        b.charge(100);
        assert_eq!(b.remaining(), 0);
    }
}
