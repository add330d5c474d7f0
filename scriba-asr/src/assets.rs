//! On-disk asset resolution for relocatable deployments.
//!
//! Finds the bundled ffmpeg directory and the model weights to use for a
//! job. Every tier degrades gracefully: when nothing is found the pipeline
//! falls back to ffmpeg on the ambient PATH and to resolving the model by
//! bare identifier.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::mode::ModelSize;
use crate::types::ModelSource;

/// Environment override naming the directory that holds the ffmpeg binary.
pub const FFMPEG_DIR_ENV: &str = "SCRIBA_FFMPEG_DIR";

/// Environment override naming the root directory of local model bundles.
pub const MODELS_DIR_ENV: &str = "SCRIBA_MODELS_DIR";

/// Resolved asset locations for one job.
#[derive(Clone, Debug)]
pub struct ResolvedAssets {
    /// Directory holding the ffmpeg binary, if a bundled one was found
    pub ffmpeg_dir: Option<PathBuf>,
    /// Root directory of local model bundles, if one exists
    pub models_root: Option<PathBuf>,
    /// Selected model source
    pub model: ModelSource,
}

/// Resolve assets from the process environment and the running executable's
/// own directory.
pub fn locate(size: ModelSize, models_dir_override: Option<&Path>) -> ResolvedAssets {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    locate_with(size, models_dir_override, exe_dir.as_deref(), &|key| {
        std::env::var_os(key)
    })
}

/// Resolution with an injected environment lookup and executable directory.
///
/// Precedence for the ffmpeg directory: environment override (if the
/// directory exists), then the relocatable `bin/<arch>` layout next to the
/// executable, then nothing (ffmpeg is expected on PATH).
///
/// Precedence for the models root: explicit override, environment override,
/// then the relocatable `models` directory next to the executable. A tier
/// that names a missing directory is skipped, never fatal.
pub(crate) fn locate_with(
    size: ModelSize,
    models_dir_override: Option<&Path>,
    exe_dir: Option<&Path>,
    env: &dyn Fn(&str) -> Option<OsString>,
) -> ResolvedAssets {
    let ffmpeg_dir = env(FFMPEG_DIR_ENV)
        .map(PathBuf::from)
        .filter(|p| p.is_dir())
        .or_else(|| {
            exe_dir
                .map(|dir| dir.join("bin").join(arch_tag()))
                .filter(|p| p.is_dir())
        });

    let models_root = models_dir_override
        .filter(|p| p.is_dir())
        .map(Path::to_path_buf)
        .or_else(|| {
            env(MODELS_DIR_ENV)
                .map(PathBuf::from)
                .filter(|p| p.is_dir())
        })
        .or_else(|| exe_dir.map(|dir| dir.join("models")).filter(|p| p.is_dir()));

    let model = match models_root.as_deref() {
        Some(root) => lookup_bundle(root, size),
        None => ModelSource::Id(size),
    };

    tracing::debug!(?ffmpeg_dir, ?models_root, ?model, "assets resolved");

    ResolvedAssets {
        ffmpeg_dir,
        models_root,
        model,
    }
}

/// Find a local bundle directory for the given size under the models root.
///
/// Accepts `root/<size>` or `root/faster-whisper-<size>`; the first existing
/// directory wins. Neither existing falls back to the bare identifier.
fn lookup_bundle(root: &Path, size: ModelSize) -> ModelSource {
    [
        root.join(size.as_str()),
        root.join(format!("faster-whisper-{size}")),
    ]
    .into_iter()
    .find(|p| p.is_dir())
    .map(|dir| ModelSource::Bundle { dir, size })
    .unwrap_or(ModelSource::Id(size))
}

/// Coarse architecture tag for the relocatable `bin/<arch>` layout.
const fn arch_tag() -> &'static str {
    if cfg!(target_pointer_width = "64") {
        "x64"
    } else {
        "x86"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("scriba-asr-assets").join(name);
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).expect("failed to create scratch dir");
        dir
    }

    fn no_env(_: &str) -> Option<OsString> {
        None
    }

    #[test]
    fn plain_size_dir_beats_prefixed_bundle() {
        let root = scratch_dir("precedence");
        fs::create_dir_all(root.join("small")).unwrap();
        fs::create_dir_all(root.join("faster-whisper-small")).unwrap();

        let assets = locate_with(ModelSize::Small, Some(&root), None, &no_env);

        assert_eq!(
            assets.model,
            ModelSource::Bundle {
                dir: root.join("small"),
                size: ModelSize::Small,
            }
        );
    }

    #[test]
    fn prefixed_bundle_used_when_plain_missing() {
        let root = scratch_dir("prefixed");
        fs::create_dir_all(root.join("faster-whisper-medium")).unwrap();

        let assets = locate_with(ModelSize::Medium, Some(&root), None, &no_env);

        assert_eq!(
            assets.model,
            ModelSource::Bundle {
                dir: root.join("faster-whisper-medium"),
                size: ModelSize::Medium,
            }
        );
    }

    #[test]
    fn missing_bundle_falls_back_to_identifier() {
        let root = scratch_dir("empty-root");

        let assets = locate_with(ModelSize::Base, Some(&root), None, &no_env);

        assert_eq!(assets.model, ModelSource::Id(ModelSize::Base));
        assert_eq!(assets.models_root.as_deref(), Some(root.as_path()));
    }

    #[test]
    fn no_root_anywhere_yields_bare_identifier() {
        let assets = locate_with(ModelSize::Small, None, None, &no_env);

        assert_eq!(assets.model, ModelSource::Id(ModelSize::Small));
        assert!(assets.models_root.is_none());
        assert!(assets.ffmpeg_dir.is_none());
    }

    #[test]
    fn env_override_used_when_directory_exists() {
        let root = scratch_dir("env-root");
        fs::create_dir_all(root.join("small")).unwrap();
        let env_root = root.clone();

        let assets = locate_with(ModelSize::Small, None, None, &move |key| {
            (key == MODELS_DIR_ENV).then(|| env_root.clone().into_os_string())
        });

        assert_eq!(assets.models_root.as_deref(), Some(root.as_path()));
    }

    #[test]
    fn env_override_skipped_when_directory_missing() {
        let assets = locate_with(ModelSize::Small, None, None, &|key| {
            (key == MODELS_DIR_ENV).then(|| OsString::from("/definitely/not/here"))
        });

        assert_eq!(assets.model, ModelSource::Id(ModelSize::Small));
        assert!(assets.models_root.is_none());
    }

    #[test]
    fn explicit_override_beats_environment() {
        let cli_root = scratch_dir("cli-root");
        let env_root = scratch_dir("env-root-2");
        let env_value = env_root.clone();

        let assets = locate_with(ModelSize::Small, Some(&cli_root), None, &move |key| {
            (key == MODELS_DIR_ENV).then(|| env_value.clone().into_os_string())
        });

        assert_eq!(assets.models_root.as_deref(), Some(cli_root.as_path()));
    }

    #[test]
    fn relocatable_layout_found_next_to_executable() {
        let exe_dir = scratch_dir("exe-dir");
        fs::create_dir_all(exe_dir.join("bin").join(arch_tag())).unwrap();
        fs::create_dir_all(exe_dir.join("models").join("small")).unwrap();

        let assets = locate_with(ModelSize::Small, None, Some(&exe_dir), &no_env);

        assert_eq!(
            assets.ffmpeg_dir.as_deref(),
            Some(exe_dir.join("bin").join(arch_tag()).as_path())
        );
        assert_eq!(
            assets.model,
            ModelSource::Bundle {
                dir: exe_dir.join("models").join("small"),
                size: ModelSize::Small,
            }
        );
    }
}
