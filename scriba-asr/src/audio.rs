//! WAV loading for engine input.

use hound::{SampleFormat, WavReader, WavSpec};
use std::path::Path;

use crate::error::AudioError;

/// Expected sample rate for the speech engine (16kHz)
pub const SAMPLE_RATE: u32 = 16_000;

/// Load audio from a WAV file.
///
/// Returns audio samples as f32 and the WAV specification.
pub fn load_audio(path: impl AsRef<Path>) -> Result<(Vec<f32>, WavSpec), AudioError> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<hound::Result<_>>()?,
        SampleFormat::Int => reader
            .samples::<i16>()
            .map(|s| s.map(|s| s as f32 / i16::MAX as f32))
            .collect::<hound::Result<_>>()?,
    };

    Ok((samples, spec))
}

/// Load audio from a WAV file as mono f32 samples at 16kHz.
///
/// Validates sample rate is 16kHz and converts stereo to mono if needed.
/// A wrong-rate or otherwise unreadable file fails here, which is what
/// triggers the invoker's transcode fallback.
pub fn read_audio_mono(path: impl AsRef<Path>) -> Result<Vec<f32>, AudioError> {
    let (mut audio, spec) = load_audio(path)?;

    if spec.sample_rate != SAMPLE_RATE {
        return Err(AudioError::InvalidSampleRate {
            expected: SAMPLE_RATE,
            got: spec.sample_rate,
        });
    }

    if spec.channels == 0 || spec.channels > 2 {
        return Err(AudioError::InvalidChannels(spec.channels));
    }

    if spec.channels == 2 {
        audio = audio
            .chunks(2)
            .map(|chunk| chunk.iter().sum::<f32>() / 2.0)
            .collect();
    }

    Ok(audio)
}
