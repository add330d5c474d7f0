//! External media transcoding via ffmpeg.
//!
//! Used only as the recovery path when the engine cannot read the input
//! directly: the media is normalized to a mono 16 kHz 16-bit PCM WAV placed
//! alongside the original, then decoded again.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::TranscodeError;

/// Media transcoder producing a normalized waveform file.
///
/// Trait seam so the invoker's retry policy can be tested without ffmpeg.
pub trait Transcoder {
    /// Produce a mono / 16 kHz / 16-bit PCM WAV at `output`, or fail.
    fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;
}

/// Transcoder shelling out to ffmpeg.
///
/// When a bundled ffmpeg directory was resolved it is used explicitly;
/// otherwise the binary is expected on the ambient PATH.
#[derive(Clone, Debug)]
pub struct FfmpegTranscoder {
    ffmpeg_dir: Option<PathBuf>,
}

impl FfmpegTranscoder {
    pub fn new(ffmpeg_dir: Option<PathBuf>) -> Self {
        Self { ffmpeg_dir }
    }

    fn program(&self) -> PathBuf {
        let name = format!("ffmpeg{}", std::env::consts::EXE_SUFFIX);
        match &self.ffmpeg_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let program = self.program();

        tracing::debug!(
            program = ?program.display(),
            input = ?input.display(),
            output = ?output.display(),
            "transcoding to normalized wav"
        );

        let result = Command::new(&program)
            .arg("-y")
            .arg("-i")
            .arg(input)
            .args(["-ac", "1", "-ar", "16000", "-acodec", "pcm_s16le"])
            .args(["-f", "wav", "-loglevel", "error"])
            .arg(output)
            .output()
            .map_err(|source| TranscodeError::Launch {
                program: program.display().to_string(),
                source,
            })?;

        if !result.status.success() {
            return Err(TranscodeError::Failed {
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Scratch path for the normalized waveform: the input file name with a
/// `.norm.wav` suffix appended, in the input's own directory. Never collides
/// with the source file.
pub fn normalized_wav_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("input"));
    name.push(".norm.wav");
    input.with_file_name(name)
}

/// Owned scratch waveform, deleted on drop.
///
/// Deletion is best-effort; a failure to remove the file is never surfaced.
#[derive(Debug)]
pub struct TempWaveform {
    path: PathBuf,
}

impl TempWaveform {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempWaveform {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
