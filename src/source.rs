//! Pull-based byte chunk sources for streamed wrapping.

use std::io::{self, ErrorKind, Read};

/// Default read size for `ReaderSource`.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// A blocking source of byte chunks.
///
/// `Ok(None)` is the end-of-stream marker; it is not an error. Chunk
/// boundaries are arbitrary and may fall inside a multi-byte rune.
pub trait ChunkSource {
    fn next_chunk(&mut self) -> io::Result<Option<&[u8]>>;
}

/// Reads fixed-size chunks from any `std::io::Read`.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    /// `chunk_size` of 0 is treated as 1.
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            buf: vec![0; chunk_size.max(1)],
        }
    }
}

impl<R: Read> ChunkSource for ReaderSource<R> {
    fn next_chunk(&mut self) -> io::Result<Option<&[u8]>> {
        loop {
            match self.reader.read(&mut self.buf) {
                Ok(0) => return Ok(None),
                Ok(n) => return Ok(Some(&self.buf[..n])),
                // part of the Read contract, not a failure of the source
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Serves the items of an iterator as chunks.
pub struct IterSource<I, B> {
    iter: I,
    current: Option<B>,
}

impl<I, B> IterSource<I, B>
where
    I: Iterator<Item = B>,
    B: AsRef<[u8]>,
{
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            current: None,
        }
    }
}

impl<I, B> ChunkSource for IterSource<I, B>
where
    I: Iterator<Item = B>,
    B: AsRef<[u8]>,
{
    fn next_chunk(&mut self) -> io::Result<Option<&[u8]>> {
        self.current = self.iter.next();
        Ok(self.current.as_ref().map(|b| b.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flaky {
        calls: usize,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.calls += 1;
            match self.calls {
                1 => Err(ErrorKind::Interrupted.into()),
                2 => {
                    buf[0] = b'x';
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn reader_source_retries_interrupted_reads() {
        let mut src = ReaderSource::with_chunk_size(Flaky { calls: 0 }, 4);
        assert_eq!(src.next_chunk().unwrap(), Some(&b"x"[..]));
        assert_eq!(src.next_chunk().unwrap(), None);
    }

    #[test]
    fn reader_source_respects_chunk_size() {
        let mut src = ReaderSource::with_chunk_size(&b"abcdefg"[..], 3);
        let mut got = Vec::new();
        while let Some(chunk) = src.next_chunk().unwrap() {
            got.push(chunk.to_vec());
        }
        assert_eq!(got, vec![b"abc".to_vec(), b"def".to_vec(), b"g".to_vec()]);
    }

    #[test]
    fn iter_source_serves_borrowed_slices_through_the_trait() {
        let bytes = String::from("∀∁ split").into_bytes();
        let mut src = IterSource::new([&bytes[..2], &bytes[2..]]);
        let source: &mut dyn ChunkSource = &mut src;
        let mut got = Vec::new();
        while let Some(chunk) = source.next_chunk().unwrap() {
            got.extend_from_slice(chunk);
        }
        assert_eq!(got, bytes);
    }

    #[test]
    fn iter_source_yields_items_then_end() {
        let mut src = IterSource::new(vec!["ab", "", "c"]);
        assert_eq!(src.next_chunk().unwrap(), Some(&b"ab"[..]));
        assert_eq!(src.next_chunk().unwrap(), Some(&b""[..]));
        assert_eq!(src.next_chunk().unwrap(), Some(&b"c"[..]));
        assert_eq!(src.next_chunk().unwrap(), None);
    }
}
