//! Two-strike engine invocation: direct attempt, then one transcoded retry.

use std::path::Path;

use crate::engine::{DecodeOptions, SegmentStream, SpeechEngine};
use crate::error::{Error, Result};
use crate::transcode::{TempWaveform, Transcoder, normalized_wav_path};
use crate::types::TranscribeInfo;

/// Outcome of a successful invocation.
///
/// Carries the scratch waveform guard (when the fallback path was taken) so
/// the file outlives segment consumption and is removed before the result is
/// emitted.
#[derive(Debug)]
pub struct Invoked {
    pub segments: SegmentStream,
    pub info: TranscribeInfo,
    pub scratch: Option<TempWaveform>,
}

/// Decode `input`, transcoding and retrying exactly once if the direct
/// attempt fails.
///
/// A direct failure is treated as an unsupported or corrupt container: the
/// input is normalized to a mono 16 kHz PCM WAV next to the original and
/// decoded again with identical options. If the transcode or the retry also
/// fails, the consolidated error carries the original failure, which is
/// typically the more diagnostic one. No further retries.
pub fn transcribe_with_fallback<E, T>(
    engine: &mut E,
    transcoder: &T,
    input: &Path,
    options: &DecodeOptions,
) -> Result<Invoked>
where
    E: SpeechEngine,
    T: Transcoder,
{
    let direct = match engine.transcribe(input, options) {
        Ok((segments, info)) => {
            return Ok(Invoked {
                segments,
                info,
                scratch: None,
            });
        }
        Err(direct) => direct,
    };

    tracing::warn!(
        error = %direct,
        input = ?input.display(),
        "direct decode failed, transcoding and retrying"
    );

    // Guard created before the transcode so a partial output is cleaned up
    // on every exit path.
    let scratch = TempWaveform::new(normalized_wav_path(input));

    if let Err(transcode) = transcoder.transcode(input, scratch.path()) {
        return Err(Error::Unrecoverable {
            direct,
            retry: Box::new(transcode.into()),
        });
    }

    match engine.transcribe(scratch.path(), options) {
        Ok((segments, info)) => Ok(Invoked {
            segments,
            info,
            scratch: Some(scratch),
        }),
        Err(retry) => Err(Error::Unrecoverable {
            direct,
            retry: Box::new(retry.into()),
        }),
    }
}
