//! whisper.cpp engine binding.

use hf_hub::api::sync::Api;
use std::os::raw::c_int;
use std::path::{Path, PathBuf};
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperState,
};

use crate::audio;
use crate::engine::{DecodeOptions, SegmentStream, SpeechEngine};
use crate::error::EngineError;
use crate::mode::ModelSize;
use crate::types::{ModelSource, Segment, TranscribeInfo};

/// Hub repository holding ggml whisper weights.
const HUB_REPO_ID: &str = "ggerganov/whisper.cpp";

/// Segment timestamps are reported in 10ms units.
const TIMESTAMP_UNITS_PER_SEC: f32 = 100.0;

/// Speech engine backed by whisper.cpp, CPU execution.
///
/// Quantized (q8_0) weights are preferred when resolving a model, trading a
/// little accuracy for broad hardware compatibility.
pub struct WhisperEngine {
    ctx: WhisperContext,
}

impl WhisperEngine {
    /// Load model weights from the given source and build the context.
    pub fn new(source: &ModelSource) -> Result<Self, EngineError> {
        let weights = resolve_weights(source)?;

        tracing::info!(path = ?weights.display(), "loading speech model");

        let path = weights.to_str().ok_or_else(|| {
            EngineError::ModelNotFound(format!("non-UTF8 model path: {:?}", weights.display()))
        })?;

        let ctx = WhisperContext::new_with_params(path, WhisperContextParameters::default())?;

        Ok(Self { ctx })
    }
}

impl SpeechEngine for WhisperEngine {
    fn transcribe(
        &mut self,
        path: &Path,
        options: &DecodeOptions,
    ) -> Result<(SegmentStream, TranscribeInfo), EngineError> {
        let samples = audio::read_audio_mono(path)?;

        tracing::debug!(
            samples = samples.len(),
            beam_width = options.beam_width,
            "decoding"
        );

        let mut state = self.ctx.create_state()?;
        state.full(build_params(options), &samples)?;

        let language = match &options.language {
            Some(lang) => Some(lang.clone()),
            None => {
                let id = state.full_lang_id_from_state()?;
                whisper_rs::get_lang_str(id).map(str::to_owned)
            }
        };

        let count = state.full_n_segments()?;
        let stream = SegmentStream::new((0..count).map(move |i| read_segment(&state, i)));

        Ok((stream, TranscribeInfo { language }))
    }
}

/// Build whisper.cpp decode parameters from the pipeline options.
fn build_params(options: &DecodeOptions) -> FullParams<'_, '_> {
    let strategy = if options.beam_width > 1 {
        SamplingStrategy::BeamSearch {
            beam_size: options.beam_width,
            patience: -1.0,
        }
    } else {
        SamplingStrategy::Greedy { best_of: 1 }
    };

    let mut params = FullParams::new(strategy);

    // "auto" triggers whisper.cpp language detection
    params.set_language(Some(options.language.as_deref().unwrap_or("auto")));
    params.set_translate(false);
    params.set_suppress_blank(true);
    params.set_suppress_non_speech_tokens(options.vad_filter);

    // stdout belongs to the JSON contract
    params.set_print_special(false);
    params.set_print_progress(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);

    params
}

/// Extract one segment from the decode state.
fn read_segment(state: &WhisperState, index: c_int) -> Result<Segment, EngineError> {
    let text = state.full_get_segment_text(index)?;
    let start = state.full_get_segment_t0(index)? as f32 / TIMESTAMP_UNITS_PER_SEC;
    let end = state.full_get_segment_t1(index)? as f32 / TIMESTAMP_UNITS_PER_SEC;

    Ok(Segment::new(text, start, end))
}

/// Resolve a model source to a weights file on disk.
///
/// Bundle directories are searched for known weight file names, quantized
/// first. Bare identifiers go through the hub cache, which downloads on a
/// cache miss.
fn resolve_weights(source: &ModelSource) -> Result<PathBuf, EngineError> {
    match source {
        ModelSource::Bundle { dir, size } => {
            let candidates = [
                format!("ggml-{size}-q8_0.bin"),
                format!("ggml-{size}.bin"),
                "ggml-model.bin".to_string(),
                "model.bin".to_string(),
            ];

            candidates
                .iter()
                .map(|name| dir.join(name))
                .find(|p| p.is_file())
                .ok_or_else(|| {
                    EngineError::ModelNotFound(format!(
                        "no weight file under bundle {:?}",
                        dir.display()
                    ))
                })
        }
        ModelSource::Id(size) => fetch_weights(*size),
    }
}

/// Fetch weights for a bare size identifier from the hub.
fn fetch_weights(size: ModelSize) -> Result<PathBuf, EngineError> {
    tracing::info!(%size, "resolving model through the hub");

    let api = Api::new()?;
    let repo = api.model(HUB_REPO_ID.to_string());

    let candidates = [format!("ggml-{size}-q8_0.bin"), format!("ggml-{size}.bin")];

    candidates
        .iter()
        .find_map(|name| repo.get(name).ok())
        .ok_or_else(|| EngineError::ModelNotFound(format!("ggml-{size}.bin on {HUB_REPO_ID}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_without_weights_is_model_not_found() {
        let dir = std::env::temp_dir().join("scriba-asr-whisper-empty");
        std::fs::create_dir_all(&dir).unwrap();

        let source = ModelSource::Bundle {
            dir: dir.clone(),
            size: ModelSize::Small,
        };

        match resolve_weights(&source) {
            Err(EngineError::ModelNotFound(msg)) => assert!(msg.contains("bundle")),
            other => panic!("expected ModelNotFound, got {other:?}"),
        }
    }

    #[test]
    fn bundle_prefers_quantized_weights() {
        let dir = std::env::temp_dir().join("scriba-asr-whisper-q8");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("ggml-small-q8_0.bin"), b"q8").unwrap();
        std::fs::write(dir.join("ggml-small.bin"), b"f16").unwrap();

        let source = ModelSource::Bundle {
            dir: dir.clone(),
            size: ModelSize::Small,
        };

        let resolved = resolve_weights(&source).unwrap();
        assert_eq!(resolved, dir.join("ggml-small-q8_0.bin"));
    }
}
