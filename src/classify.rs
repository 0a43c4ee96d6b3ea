//! Rune classification and whitespace normalization.
//!
//! Every rune is one column wide. Whitespace is normalized before it is
//! measured: tabs expand to `tabstop_width` spaces, CR/LF either fold into a
//! single space per run or become forced row ends, and any other whitespace
//! rune counts as one space.

/// Unicode `White_Space` property.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// What one input whitespace rune turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalized {
    /// This many columns of space.
    Spaces(usize),
    /// A forced row end (only when line breaks are not folded).
    LineBreak,
    /// Swallowed by the preceding rune (CR/LF run collapsing).
    Absorbed,
}

/// Stateful normalizer. The state is the previous line-break rune of the
/// current whitespace run, so CR/LF runs collapse correctly even when a chunk
/// boundary falls between them.
#[derive(Debug, Clone)]
pub struct RuneClassifier {
    fold_line_breaks: bool,
    tabstop_width: usize,
    previous_break: Option<char>,
}

impl RuneClassifier {
    pub fn new(fold_line_breaks: bool, tabstop_width: usize) -> Self {
        Self {
            fold_line_breaks,
            tabstop_width,
            previous_break: None,
        }
    }

    /// Normalize one whitespace rune.
    pub fn normalize(&mut self, c: char) -> Normalized {
        if !is_line_break(c) {
            self.previous_break = None;
            return match c {
                '\t' => Normalized::Spaces(self.tabstop_width),
                _ => Normalized::Spaces(1),
            };
        }

        let previous = self.previous_break.replace(c);
        if self.fold_line_breaks {
            // any run of CR/LF is a single space
            match previous {
                Some(_) => Normalized::Absorbed,
                None => Normalized::Spaces(1),
            }
        } else {
            // CRLF is one break; LF LF, CR CR and LF CR are two
            match (previous, c) {
                (Some('\r'), '\n') => {
                    self.previous_break = None;
                    Normalized::Absorbed
                }
                _ => Normalized::LineBreak,
            }
        }
    }

    /// A non-whitespace rune ends the current whitespace run.
    pub fn end_run(&mut self) {
        self.previous_break = None;
    }
}
