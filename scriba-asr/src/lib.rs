//! scriba-asr: single-shot media transcription pipeline.
//!
//! This crate implements everything between "a media path" and "a finished
//! transcript": locating bundled assets (ffmpeg, model weights), mapping a
//! coarse quality mode to a model size, invoking the speech engine with a
//! transcode-and-retry fallback, and aggregating the engine's segment stream
//! into a single result.
//!
//! # Quick Start
//!
//! ```ignore
//! use scriba_asr::assets;
//! use scriba_asr::engine::{DecodeOptions, WhisperEngine};
//! use scriba_asr::invoke::transcribe_with_fallback;
//! use scriba_asr::mode::Mode;
//! use scriba_asr::transcode::FfmpegTranscoder;
//!
//! let size = Mode::parse(Some("balanced")).model_size();
//! let assets = assets::locate(size, None);
//!
//! let mut engine = WhisperEngine::new(&assets.model)?;
//! let transcoder = FfmpegTranscoder::new(assets.ffmpeg_dir.clone());
//! let options = DecodeOptions::for_size(size, None);
//!
//! let invoked = transcribe_with_fallback(&mut engine, &transcoder, path, &options)?;
//! let transcript = scriba_asr::aggregate::collect(invoked.segments, invoked.info, None)?;
//! println!("{}", transcript.text);
//! ```

pub mod aggregate;
pub mod assets;
pub mod audio;
pub mod engine;
pub mod error;
pub mod invoke;
pub mod mode;
pub mod transcode;
pub mod types;
pub mod whisper;
