//! Error types for scriba-asr organized by pipeline stage.

use std::process::ExitStatus;
use thiserror::Error;

/// Pipeline error variants organized by stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Engine instantiation or decoding error
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// External transcoder error
    #[error(transparent)]
    Transcode(#[from] TranscodeError),

    /// Both the direct decode and the transcoded retry failed.
    ///
    /// The message carries the direct-attempt error, which is usually the
    /// more diagnostic of the two; the retry failure stays on the source
    /// chain.
    #[error("failed to process input media: {direct}")]
    Unrecoverable {
        direct: EngineError,
        #[source]
        retry: Box<Error>,
    },
}

/// Audio loading and validation errors.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Sample rate validation failed
    #[error("invalid sample rate: expected {expected}Hz, got {got}Hz")]
    InvalidSampleRate { expected: u32, got: u32 },

    /// Channel count validation failed
    #[error("invalid channel count: expected mono or stereo, got {0} channels")]
    InvalidChannels(u16),

    /// IO error during audio loading
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// WAV file format error
    #[error(transparent)]
    Hound(#[from] hound::Error),
}

/// Speech engine errors (model resolution, context creation, decoding).
#[derive(Debug, Error)]
pub enum EngineError {
    /// No usable model weights at the resolved location
    #[error("model weights not found: {0}")]
    ModelNotFound(String),

    /// Hub download or cache error while resolving a bare model identifier
    #[error(transparent)]
    Hub(#[from] hf_hub::api::sync::ApiError),

    /// whisper.cpp error
    #[error(transparent)]
    Whisper(#[from] whisper_rs::WhisperError),

    /// Audio loading stage error
    #[error(transparent)]
    Audio(#[from] AudioError),
}

/// External transcoder (ffmpeg) errors.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// Transcoder binary could not be spawned
    #[error("failed to launch transcoder {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Transcoder ran but reported failure
    #[error("transcoder exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// Result type alias for scriba-asr operations.
pub type Result<T> = std::result::Result<T, Error>;

// Nested From implementations for automatic error conversion chains

// hound::Error → AudioError → EngineError
impl From<hound::Error> for EngineError {
    fn from(e: hound::Error) -> Self {
        EngineError::Audio(AudioError::Hound(e))
    }
}

// std::io::Error → AudioError → EngineError
impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::Audio(AudioError::Io(e))
    }
}
