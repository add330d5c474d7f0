//! scriba: subprocess CLI around the scriba-asr pipeline.
//!
//! One process handles one transcription job and writes exactly one JSON
//! document to stdout: a success payload (`ok: true`) or an error payload
//! (`ok: false`). All diagnostics go to stderr.

pub mod cli;
pub mod job;
pub mod output;
