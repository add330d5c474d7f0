//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use eyre::Result;
use scriba_asr::mode::Mode;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "transcribe")]
#[command(about = "Transcribe an audio/video file and print one JSON result on stdout")]
#[command(version)]
pub struct Cli {
    /// Path to the input audio or video file
    pub input: PathBuf,

    /// Quality/speed tradeoff selecting the model size
    #[arg(short, long, value_enum, default_value = "balanced")]
    pub mode: ModeArg,

    /// Spoken language code (e.g. pt, en); auto-detected when omitted
    #[arg(short, long)]
    pub language: Option<String>,

    /// Root directory holding local model bundles
    #[arg(long)]
    pub models_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    Fast,
    Balanced,
    Perfect,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Fast => Mode::Fast,
            ModeArg::Balanced => Mode::Balanced,
            ModeArg::Perfect => Mode::Perfect,
        }
    }
}

/// Resolved configuration for one transcription job.
#[derive(Debug)]
pub struct Config {
    pub input: PathBuf,
    pub mode: Mode,
    pub language: Option<String>,
    pub models_dir: Option<PathBuf>,
}

impl TryFrom<Cli> for Config {
    type Error = eyre::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        Ok(Self {
            input: cli.input,
            mode: cli.mode.into(),
            language: cli.language,
            models_dir: cli.models_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::parse_from(["transcribe", "talk.mp4"]);

        assert_eq!(cli.input.to_str(), Some("talk.mp4"));
        assert!(matches!(cli.mode, ModeArg::Balanced));
        assert!(cli.language.is_none());
        assert!(cli.models_dir.is_none());
    }

    #[test]
    fn parses_mode_and_language() {
        let cli = Cli::parse_from(["transcribe", "talk.mp4", "-m", "perfect", "-l", "pt"]);

        assert!(matches!(cli.mode, ModeArg::Perfect));
        assert_eq!(cli.language.as_deref(), Some("pt"));
    }

    #[test]
    fn parses_models_dir_override() {
        let cli = Cli::parse_from(["transcribe", "talk.mp4", "--models-dir", "/opt/models"]);

        assert_eq!(cli.models_dir.as_deref(), Some("/opt/models".as_ref()));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["transcribe", "talk.mp4", "-m", "turbo"]).is_err());
    }

    #[test]
    fn config_resolves_mode() {
        let cli = Cli::parse_from(["transcribe", "talk.mp4", "-m", "fast"]);
        let config = Config::try_from(cli).unwrap();

        assert_eq!(config.mode, Mode::Fast);
    }
}
