//! Speech engine seam: decode options, segment stream, engine trait.

use std::path::Path;

use crate::error::EngineError;
use crate::mode::ModelSize;
use crate::types::{Segment, TranscribeInfo};

pub use crate::whisper::WhisperEngine;

/// Decoding options for one engine invocation.
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Spoken language code; `None` lets the engine auto-detect
    pub language: Option<String>,
    /// Suppress non-speech regions during decoding
    pub vad_filter: bool,
    /// Beam search width; 1 decodes greedily
    pub beam_width: i32,
}

impl DecodeOptions {
    /// Options for the given model size: VAD on, beam width derived from the
    /// size tier.
    pub fn for_size(size: ModelSize, language: Option<String>) -> Self {
        Self {
            language,
            vad_filter: true,
            beam_width: size.beam_width(),
        }
    }
}

/// Finite, single-pass stream of engine segments.
///
/// The stream is tied to one decode call and is not restartable; consuming
/// it is the only suspension point in the pipeline. Callers must not assume
/// it can be re-consumed.
pub struct SegmentStream {
    inner: Box<dyn Iterator<Item = Result<Segment, EngineError>>>,
}

impl SegmentStream {
    pub fn new(inner: impl Iterator<Item = Result<Segment, EngineError>> + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    /// Stream over already-materialized segments. Used by tests and mock
    /// engines.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self::new(segments.into_iter().map(Ok))
    }
}

impl Iterator for SegmentStream {
    type Item = Result<Segment, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl std::fmt::Debug for SegmentStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SegmentStream")
    }
}

/// A speech-to-text engine bound to loaded model weights.
///
/// The trait is the seam between the invoker's retry policy and the real
/// whisper.cpp binding, so the two-strike behavior is testable with mock
/// engines.
pub trait SpeechEngine {
    /// Decode the media at `path`, producing the segment stream and summary
    /// metadata, or fail if the media cannot be read.
    fn transcribe(
        &mut self,
        path: &Path,
        options: &DecodeOptions,
    ) -> Result<(SegmentStream, TranscribeInfo), EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_derive_beam_width_from_size() {
        let options = DecodeOptions::for_size(ModelSize::Medium, Some("pt".into()));
        assert_eq!(options.beam_width, 5);
        assert!(options.vad_filter);
        assert_eq!(options.language.as_deref(), Some("pt"));

        let options = DecodeOptions::for_size(ModelSize::Base, None);
        assert_eq!(options.beam_width, 1);
    }

    #[test]
    fn stream_yields_segments_in_order() {
        let stream = SegmentStream::from_segments(vec![
            Segment::new("one", 0.0, 1.0),
            Segment::new("two", 1.0, 2.0),
        ]);

        let texts: Vec<String> = stream.map(|s| s.unwrap().text).collect();
        assert_eq!(texts, ["one", "two"]);
    }
}
