//! Incremental UTF-8 decoding of byte chunks.
//!
//! Chunks may end in the middle of a multi-byte rune. The incomplete tail is
//! held back and completed by the next chunk. Invalid sequences are an error;
//! nothing is ever replaced with U+FFFD, since that would change widths.

use crate::error::DecodingError;

#[derive(Debug, Clone, Default)]
pub struct Utf8Decoder {
    /// Leading bytes of a rune cut off by the previous chunk (at most 3).
    pending: Vec<u8>,
    /// Bytes accepted so far, including `pending`.
    consumed: u64,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `chunk`, handing every complete piece of text to `sink` in order.
    ///
    /// On error the valid text before the offending sequence has already been
    /// delivered; the bad bytes and anything after them in this chunk are dropped.
    pub fn decode(
        &mut self,
        chunk: &[u8],
        mut sink: impl FnMut(&str),
    ) -> Result<(), DecodingError> {
        let mut input = chunk;

        // finish a rune started in the previous chunk, one byte at a time
        while !self.pending.is_empty() {
            let Some((&b, rest)) = input.split_first() else {
                return Ok(());
            };
            self.pending.push(b);
            input = rest;
            match std::str::from_utf8(&self.pending) {
                Ok(s) => {
                    sink(s);
                    self.consumed += self.pending.len() as u64;
                    self.pending.clear();
                }
                Err(e) if e.error_len().is_some() => {
                    let offset = self.consumed;
                    self.pending.clear();
                    return Err(DecodingError {
                        offset,
                        truncated: false,
                    });
                }
                Err(_) => {}
            }
        }

        let (valid, tail) = match std::str::from_utf8(input) {
            Ok(s) => (s, &[][..]),
            Err(e) => {
                let (head, tail) = input.split_at(e.valid_up_to());
                let head = std::str::from_utf8(head).unwrap_or_default();
                if e.error_len().is_some() {
                    sink(head);
                    let offset = self.consumed + head.len() as u64;
                    self.consumed = offset;
                    return Err(DecodingError {
                        offset,
                        truncated: false,
                    });
                }
                (head, tail)
            }
        };

        sink(valid);
        self.consumed += valid.len() as u64;
        self.pending.extend_from_slice(tail);
        Ok(())
    }

    /// End of input: a rune still waiting for its continuation bytes is an error.
    pub fn finish(&mut self) -> Result<(), DecodingError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let offset = self.consumed;
        self.pending.clear();
        Err(DecodingError {
            offset,
            truncated: true,
        })
    }

    /// Total bytes decoded so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
