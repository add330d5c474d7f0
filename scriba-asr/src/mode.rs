//! Quality mode to model size mapping.

use std::fmt;

/// Coarse quality/speed preference selecting a model size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Fast,
    Balanced,
    Perfect,
}

impl Mode {
    /// Parse a mode from an optional raw string.
    ///
    /// Total and case-insensitive: anything absent or unrecognized resolves
    /// to [`Mode::Balanced`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("fast") => Mode::Fast,
            Some("perfect") => Mode::Perfect,
            _ => Mode::Balanced,
        }
    }

    /// Map the mode to a concrete model size.
    pub fn model_size(self) -> ModelSize {
        match self {
            Mode::Fast => ModelSize::Base,
            Mode::Balanced => ModelSize::Small,
            Mode::Perfect => ModelSize::Medium,
        }
    }
}

/// Whisper model size tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelSize {
    Base,
    Small,
    Medium,
}

impl ModelSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
        }
    }

    /// Decoding beam width for this size.
    ///
    /// Mid-tier models get wider beam search; the cheap tier decodes greedily
    /// to keep latency down.
    pub fn beam_width(self) -> i32 {
        match self {
            ModelSize::Small | ModelSize::Medium => 5,
            ModelSize::Base => 1,
        }
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
