//! Core types for scriba-asr

use serde::Serialize;
use std::path::PathBuf;

use crate::mode::ModelSize;

/// Text segment with timestamps.
///
/// Represents a portion of transcribed text with start and end times in
/// seconds. Serialized field order matches the stdout contract.
#[derive(Clone, Debug, Serialize)]
pub struct Segment {
    /// Start time in seconds
    pub start: f32,
    /// End time in seconds
    pub end: f32,
    /// Transcribed text
    pub text: String,
}

impl Segment {
    pub fn new(text: impl Into<String>, start: f32, end: f32) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Summary metadata reported by the engine alongside the segment stream.
#[derive(Clone, Debug, Default)]
pub struct TranscribeInfo {
    /// Detected (or explicitly requested) language code
    pub language: Option<String>,
}

/// Final aggregated transcription result.
#[derive(Clone, Debug, Serialize)]
pub struct Transcript {
    /// Space-joined concatenation of all non-empty segment texts
    pub text: String,
    /// Engine-detected language, requested language, or "auto"
    pub language: String,
    /// Maximum segment end time seen, in seconds
    pub duration: f32,
    /// All segments in emitted order
    pub segments: Vec<Segment>,
}

/// Model weight sources.
///
/// Either a local bundle directory discovered under the models root, or a
/// bare size identifier resolved through the engine's own default mechanism
/// (the hub cache, which may download over the network).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelSource {
    /// Local bundle directory holding the weights
    Bundle { dir: PathBuf, size: ModelSize },
    /// Bare identifier, resolved via the hub
    Id(ModelSize),
}

impl ModelSource {
    /// Model size this source was selected for.
    pub fn size(&self) -> ModelSize {
        match self {
            ModelSource::Bundle { size, .. } => *size,
            ModelSource::Id(size) => *size,
        }
    }
}
