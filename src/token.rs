//! Splits decoded text into alternating whitespace runs and words.
//!
//! Tokenizing is stateless: the offset returned with each token is where the
//! next call resumes, so a suffix of the input tokenizes exactly like the same
//! region of the whole input. A run cut short by the end of a chunk simply
//! continues in the first token of the next chunk; the line breaker joins them.

use crate::classify::is_whitespace;

/// One run of the input. Borrowed from the text being tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Raw (not yet normalized) whitespace.
    Whitespace { text: &'a str, runes: usize },
    Word { text: &'a str, runes: usize },
}

impl Token<'_> {
    pub fn runes(&self) -> usize {
        match *self {
            Token::Whitespace { runes, .. } | Token::Word { runes, .. } => runes,
        }
    }
}

/// Next token of `input` and the number of bytes it consumed.
/// `None` means the input is exhausted.
pub fn next_token(input: &str) -> Option<(Token<'_>, usize)> {
    let first = input.chars().next()?;
    let whitespace = is_whitespace(first);

    let mut runes = 0;
    let mut end = input.len();
    for (i, c) in input.char_indices() {
        if is_whitespace(c) != whitespace {
            end = i;
            break;
        }
        runes += 1;
    }

    let text = &input[..end];
    let token = if whitespace {
        Token::Whitespace { text, runes }
    } else {
        Token::Word { text, runes }
    };
    Some((token, end))
}

/// Iterator over the tokens of a string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens { rest: input }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (token, consumed) = next_token(self.rest)?;
        self.rest = &self.rest[consumed..];
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_runs() {
        let got: Vec<_> = tokenize("  ab\t∀∁ c").collect();
        assert_eq!(
            got,
            vec![
                Token::Whitespace { text: "  ", runes: 2 },
                Token::Word { text: "ab", runes: 2 },
                Token::Whitespace { text: "\t", runes: 1 },
                Token::Word { text: "∀∁", runes: 2 },
                Token::Whitespace { text: " ", runes: 1 },
                Token::Word { text: "c", runes: 1 },
            ]
        );
    }

    #[test]
    fn reports_bytes_not_runes() {
        let (token, consumed) = next_token("∀∁∂ x").unwrap();
        assert_eq!(token.runes(), 3);
        assert_eq!(consumed, 9);
    }

    #[test]
    fn empty_input_is_end_of_stream() {
        assert!(next_token("").is_none());
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn resuming_from_an_offset_matches_full_tokenization() {
        let input = "This is   a ∀∁∂∃ \t\n bit";
        let full: Vec<_> = tokenize(input).collect();
        let mut offset = 0;
        for expected in &full {
            let (token, consumed) = next_token(&input[offset..]).unwrap();
            assert_eq!(&token, expected);
            offset += consumed;
        }
        assert_eq!(offset, input.len());
    }
}
