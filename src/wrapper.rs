//! Public wrapping operations.
//!
//! A `Wrapper` owns one validated configuration and one incremental session.
//! The one-shot operations (`wrap_text`, `wrap_from_stream`, `wrap_reader`)
//! run on a private session of their own and never disturb the incremental one
//! driven by `add_text` / `finish` / `reset`.
//!
//! ### Errors
//! - `WrapError::Decoding` for bytes that are not UTF-8. In incremental mode the
//!   text before the bad sequence stays in the session; call `reset()` to start over.
//! - `WrapError::Io` from a chunk source. The partial output is discarded.
//!
//! ### Example
//! ```
//! use runewrap::{WrapConfig, Wrapper};
//!
//! let wrapper = Wrapper::new(WrapConfig::with_width(10)?);
//! assert_eq!(wrapper.wrap_text("the quick brown fox"), "the quick\nbrown fox");
//!
//! let mut session = Wrapper::new(WrapConfig::with_width(10)?);
//! session.add_text("the qu".as_bytes())?;
//! session.add_text("ick brown fox".as_bytes())?;
//! assert_eq!(session.finish()?, "the quick\nbrown fox");
//! # Ok::<(), runewrap::WrapError>(())
//! ```

use crate::breaker::LineBreaker;
use crate::config::WrapConfig;
use crate::decode::Utf8Decoder;
use crate::error::WrapError;
use crate::source::{ChunkSource, ReaderSource};
use log::debug;
use std::io::Read;

#[derive(Debug, Clone)]
pub struct Wrapper {
    session: LineBreaker,
    decoder: Utf8Decoder,
}

impl Default for Wrapper {
    fn default() -> Self {
        Self::new(WrapConfig::default())
    }
}

impl Wrapper {
    pub fn new(config: WrapConfig) -> Self {
        Self {
            session: LineBreaker::new(config),
            decoder: Utf8Decoder::new(),
        }
    }

    pub fn config(&self) -> &WrapConfig {
        self.session.config()
    }

    /// Wrap a complete string.
    pub fn wrap_text(&self, text: &str) -> String {
        let mut session = LineBreaker::new(self.config().clone());
        session.feed_str(text);
        session.finish();
        debug!(
            "wrapped {} bytes into {} rows ({} hard splits)",
            text.len(),
            session.rows(),
            session.hard_splits()
        );
        session.into_output()
    }

    /// Wrap everything a chunk source yields until its end-of-stream marker.
    pub fn wrap_from_stream<S: ChunkSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<String, WrapError> {
        let mut session = LineBreaker::new(self.config().clone());
        let mut decoder = Utf8Decoder::new();
        let mut chunks = 0usize;

        while let Some(chunk) = source.next_chunk()? {
            decoder.decode(chunk, |text| session.feed_str(text))?;
            chunks += 1;
        }
        decoder.finish()?;
        session.finish();

        debug!(
            "wrapped {} bytes from {} chunks into {} rows ({} hard splits)",
            decoder.consumed(),
            chunks,
            session.rows(),
            session.hard_splits()
        );
        Ok(session.into_output())
    }

    /// Wrap UTF-8 text read from `reader` in default-sized chunks.
    pub fn wrap_reader<R: Read>(&self, reader: R) -> Result<String, WrapError> {
        self.wrap_from_stream(&mut ReaderSource::new(reader))
    }

    /// Feed the next chunk of the incremental session. Chunks may split
    /// words and multi-byte runes anywhere.
    pub fn add_text(&mut self, chunk: &[u8]) -> Result<(), WrapError> {
        let session = &mut self.session;
        self.decoder.decode(chunk, |text| session.feed_str(text))?;
        Ok(())
    }

    /// Feed already-decoded text to the incremental session.
    pub fn add_str(&mut self, text: &str) -> Result<(), WrapError> {
        self.add_text(text.as_bytes())
    }

    /// What `finish` would return if the input ended now. An incomplete
    /// trailing rune is left out.
    pub fn accumulated_output(&self) -> String {
        let mut preview = self.session.clone();
        preview.finish();
        preview.into_output()
    }

    /// End the incremental session: flush the last word, return the wrapped
    /// text and start a fresh session.
    pub fn finish(&mut self) -> Result<String, WrapError> {
        let decoded = self.decoder.finish();
        self.session.finish();
        let fresh = LineBreaker::new(self.config().clone());
        let session = std::mem::replace(&mut self.session, fresh);
        let consumed = self.decoder.consumed();
        self.decoder.reset();
        decoded?;

        debug!(
            "session finished: {} bytes into {} rows ({} hard splits)",
            consumed,
            session.rows(),
            session.hard_splits()
        );
        Ok(session.into_output())
    }

    /// Drop the incremental session's state, keeping the configuration.
    pub fn reset(&mut self) {
        debug!("session reset after {} bytes", self.decoder.consumed());
        self.session.reset();
        self.decoder.reset();
    }
}
