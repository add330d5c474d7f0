//! Job orchestration: assets → engine → invocation → aggregation.

use eyre::{Context, Result, bail};
use scriba_asr::aggregate;
use scriba_asr::assets;
use scriba_asr::engine::{DecodeOptions, WhisperEngine};
use scriba_asr::invoke::{Invoked, transcribe_with_fallback};
use scriba_asr::transcode::FfmpegTranscoder;
use scriba_asr::types::Transcript;

use crate::cli::Config;

/// Run one transcription job to completion.
///
/// The scratch waveform (if the fallback path was taken) is removed before
/// this function returns, so the caller can emit the result knowing no
/// temporary file is left behind.
pub fn run(config: Config) -> Result<Transcript> {
    if !config.input.is_file() {
        bail!("input file not found: {}", config.input.display());
    }

    let size = config.mode.model_size();
    let assets = assets::locate(size, config.models_dir.as_deref());

    tracing::info!(
        input = ?config.input.display(),
        %size,
        model = ?assets.model,
        "starting transcription"
    );

    let mut engine = WhisperEngine::new(&assets.model).wrap_err("failed to load speech model")?;
    let transcoder = FfmpegTranscoder::new(assets.ffmpeg_dir.clone());
    let options = DecodeOptions::for_size(size, config.language.clone());

    let Invoked {
        segments,
        info,
        scratch,
    } = transcribe_with_fallback(&mut engine, &transcoder, &config.input, &options)?;

    let transcript = aggregate::collect(segments, info, config.language.as_deref())?;

    // Cleanup happens before the document is written.
    drop(scratch);

    tracing::info!(
        language = transcript.language,
        duration = transcript.duration,
        segments = transcript.segments.len(),
        "transcription complete"
    );

    Ok(transcript)
}
