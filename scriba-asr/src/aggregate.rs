//! Segment aggregation into the final transcript.

use unicode_normalization::UnicodeNormalization;

use crate::engine::SegmentStream;
use crate::error::Result;
use crate::types::{Segment, Transcript, TranscribeInfo};

/// Fallback language token when neither the engine nor the caller named one.
const AUTO_LANGUAGE: &str = "auto";

/// Consume the segment stream fully and build the transcript.
///
/// Per segment the text is trimmed and NFC-normalized. The full text is the
/// single-space join of all non-empty normalized texts; empty segments
/// contribute neither a token nor a separator, but still appear in the
/// segment list. Duration is the running maximum of segment end times, which
/// follows the engine's output rather than the true media length.
pub fn collect(
    segments: SegmentStream,
    info: TranscribeInfo,
    requested_language: Option<&str>,
) -> Result<Transcript> {
    let mut collected = Vec::new();
    let mut parts: Vec<String> = Vec::new();
    let mut duration = 0.0f32;

    for segment in segments {
        let segment = segment?;
        let text = normalize_text(&segment.text);

        duration = duration.max(segment.end);

        if !text.is_empty() {
            parts.push(text.clone());
        }

        collected.push(Segment::new(text, segment.start, segment.end));
    }

    let language = info
        .language
        .or_else(|| requested_language.map(str::to_owned))
        .unwrap_or_else(|| AUTO_LANGUAGE.to_string());

    Ok(Transcript {
        text: parts.join(" "),
        language,
        duration,
        segments: collected,
    })
}

/// Trim surrounding whitespace and apply canonical composition (NFC).
pub fn normalize_text(raw: &str) -> String {
    raw.trim().nfc().collect()
}
