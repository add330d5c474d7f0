//! Single-shot JSON output contract.
//!
//! Exactly one document per process invocation, UTF-8 with non-ASCII
//! characters left unescaped. The caller branches on the `ok` field.

use serde::Serialize;
use std::io::{self, Write};

use scriba_asr::types::{Segment, Transcript};

#[derive(Serialize)]
struct SuccessBody<'a> {
    ok: bool,
    text: &'a str,
    language: &'a str,
    duration: f32,
    segments: &'a [Segment],
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    ok: bool,
    error: &'a str,
}

/// Write the success document.
pub fn write_success<W: Write>(mut writer: W, transcript: &Transcript) -> io::Result<()> {
    let body = SuccessBody {
        ok: true,
        text: &transcript.text,
        language: &transcript.language,
        duration: transcript.duration,
        segments: &transcript.segments,
    };

    serde_json::to_writer(&mut writer, &body)?;
    writer.flush()
}

/// Write the error document.
pub fn write_error<W: Write>(mut writer: W, message: &str) -> io::Result<()> {
    let body = ErrorBody {
        ok: false,
        error: message,
    };

    serde_json::to_writer(&mut writer, &body)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_document_keeps_non_ascii_unescaped() {
        let transcript = Transcript {
            text: "Olá mundo".into(),
            language: "pt".into(),
            duration: 6.1,
            segments: vec![Segment::new("Olá mundo", 0.0, 6.1)],
        };

        let mut buffer = Vec::new();
        write_success(&mut buffer, &transcript).unwrap();
        let json = String::from_utf8(buffer).unwrap();

        assert!(json.starts_with("{\"ok\":true,"));
        assert!(json.contains("Olá mundo"));
        assert!(!json.contains("\\u"));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["ok"], true);
        assert_eq!(parsed["language"], "pt");
        assert_eq!(parsed["segments"][0]["text"], "Olá mundo");
    }

    #[test]
    fn segments_serialize_start_end_text() {
        let transcript = Transcript {
            text: "hi".into(),
            language: "en".into(),
            duration: 1.0,
            segments: vec![Segment::new("hi", 0.0, 1.0)],
        };

        let mut buffer = Vec::new();
        write_success(&mut buffer, &transcript).unwrap();
        let json = String::from_utf8(buffer).unwrap();

        assert!(json.contains("{\"start\":0.0,\"end\":1.0,\"text\":\"hi\"}"));
    }

    #[test]
    fn error_document_shape() {
        let mut buffer = Vec::new();
        write_error(&mut buffer, "input file not found: x.mp4").unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["ok"], false);
        assert_eq!(parsed["error"], "input file not found: x.mp4");
    }
}
