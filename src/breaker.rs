//! The line-breaking decision core.
//!
//! A `LineBreaker` is one wrap session. It receives tokens in order (possibly
//! cut at arbitrary chunk boundaries), holds the whitespace run and the word
//! it has not committed yet, and decides for each completed word whether it
//! goes on the current row, on a fresh row, or has to be hard-split.
//!
//! Widths are rune counts after normalization: tabs already expanded, CR/LF
//! runs already folded. Nothing is ever retracted from the output; all
//! look-ahead happens on the pending whitespace and word.

use crate::budget::LineBudget;
use crate::classify::{Normalized, RuneClassifier};
use crate::config::WrapConfig;
use crate::output::OutputAccumulator;
use crate::token::{Token, tokenize};
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    AtLineStart,
    MidLine,
}

#[derive(Debug, Clone)]
pub struct LineBreaker {
    config: WrapConfig,
    classifier: RuneClassifier,
    budget: LineBudget,
    out: OutputAccumulator,
    position: Position,
    /// Normalized width of whitespace seen since the last committed word.
    pending_whitespace: usize,
    /// Forced row ends seen since the last committed word (unfolded mode).
    pending_breaks: usize,
    /// Word being assembled; may span several chunks.
    word: String,
    word_runes: usize,
    hard_splits: usize,
}

impl LineBreaker {
    pub fn new(config: WrapConfig) -> Self {
        Self {
            classifier: RuneClassifier::new(config.fold_line_breaks(), config.tabstop_width()),
            budget: LineBudget::new(&config),
            out: OutputAccumulator::new(&config),
            config,
            position: Position::AtLineStart,
            pending_whitespace: 0,
            pending_breaks: 0,
            word: String::new(),
            word_runes: 0,
            hard_splits: 0,
        }
    }

    pub fn config(&self) -> &WrapConfig {
        &self.config
    }

    /// Discard all session state, keeping the configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    /// Tokenize and feed a piece of decoded text.
    pub fn feed_str(&mut self, text: &str) {
        for token in tokenize(text) {
            self.feed(token);
        }
    }

    pub fn feed(&mut self, token: Token<'_>) {
        match token {
            Token::Whitespace { text, .. } => {
                if self.word_runes > 0 {
                    self.place_word();
                }
                for c in text.chars() {
                    match self.classifier.normalize(c) {
                        Normalized::Spaces(n) => self.pending_whitespace += n,
                        Normalized::LineBreak => {
                            self.pending_breaks += 1;
                            self.pending_whitespace = 0;
                        }
                        Normalized::Absorbed => {}
                    }
                }
            }
            Token::Word { text, runes } => {
                self.classifier.end_run();
                self.word.push_str(text);
                self.word_runes += runes;
                self.settle_long_word();
            }
        }
    }

    /// End of stream: commit the last word and drop trailing whitespace.
    pub fn finish(&mut self) {
        if self.word_runes > 0 {
            self.place_word();
        }
        self.pending_whitespace = 0;
        self.pending_breaks = 0;
    }

    pub fn output(&self) -> &str {
        self.out.snapshot()
    }

    pub fn rows(&self) -> usize {
        self.out.rows()
    }

    pub fn hard_splits(&self) -> usize {
        self.hard_splits
    }

    pub fn into_output(self) -> String {
        self.out.into_string()
    }

    /// Place the completed pending word.
    fn place_word(&mut self) {
        self.commit_forced_breaks();

        let len = self.word_runes;
        if self.position == Position::MidLine {
            let needed = self.pending_whitespace + len;
            if !self.budget.would_overflow(needed) {
                self.out.append_spaces(self.pending_whitespace);
                self.emit_word();
                self.budget.charge(needed);
                return;
            }
            // covers both "whitespace exhausts the row" and "word does not fit"
            self.wrap_row();
        }

        if self.budget.would_overflow(len) {
            if len <= self.budget.fresh_width() {
                // only reachable on the first row, whose indent is wider
                self.wrap_row();
            } else {
                self.split_word();
            }
        }

        self.emit_word();
        self.budget.charge(len);
        self.position = Position::MidLine;
    }

    /// Commit full-row fragments of a word that can no longer fit any row,
    /// without waiting for the word to end.
    fn settle_long_word(&mut self) {
        if self.word_runes <= self.budget.fresh_width() {
            return;
        }
        self.commit_forced_breaks();
        if self.position == Position::MidLine {
            if !self
                .budget
                .would_overflow(self.pending_whitespace + self.word_runes)
            {
                return;
            }
            self.wrap_row();
        }
        self.split_word();
    }

    /// At row start: emit the word's leading fragments, a full row each,
    /// until the rest fits the current row.
    fn split_word(&mut self) {
        debug_assert_eq!(self.position, Position::AtLineStart);
        while self.budget.would_overflow(self.word_runes) {
            let take = self.budget.remaining();
            let cut = self
                .word
                .char_indices()
                .nth(take)
                .map_or(self.word.len(), |(i, _)| i);
            trace!("hard split after {take} runes of a {}-rune word", self.word_runes);
            self.out.append_runes(&self.word[..cut]);
            self.word.drain(..cut);
            self.word_runes -= take;
            self.hard_splits += 1;
            self.wrap_row();
        }
    }

    fn emit_word(&mut self) {
        self.out.append_runes(&self.word);
        self.word.clear();
        self.word_runes = 0;
        self.pending_whitespace = 0;
        self.position = Position::MidLine;
    }

    /// Insert a wrap point; pending whitespace is dropped, never rendered.
    fn wrap_row(&mut self) {
        self.out.append_line_break(true);
        self.budget.reset(false);
        self.position = Position::AtLineStart;
        self.pending_whitespace = 0;
    }

    /// Turn line breaks kept from the input into row ends. Breaks before any
    /// content are leading whitespace and vanish.
    fn commit_forced_breaks(&mut self) {
        if self.pending_breaks == 0 {
            return;
        }
        if self.out.has_content() {
            for _ in 0..self.pending_breaks {
                self.out.append_line_break(false);
            }
            self.budget.reset(false);
            self.position = Position::AtLineStart;
        }
        self.pending_breaks = 0;
        self.pending_whitespace = 0;
    }
}
