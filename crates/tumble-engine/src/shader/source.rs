use std::fs;
use std::path::{Path, PathBuf};

use crate::gl::ShaderStage;

use super::defaults::default_source;
use super::error::SourceError;

/// Where a stage's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    File(PathBuf),
    BuiltIn,
    Inline,
}

/// Source text for one stage.
#[derive(Debug, Clone)]
pub struct StageSource {
    pub stage: ShaderStage,
    pub text: String,
    pub origin: SourceOrigin,
}

impl StageSource {
    /// Loads `path`, substituting the built-in default for `stage` when the
    /// file cannot be read.
    pub fn load_or_default(stage: ShaderStage, path: &Path) -> Self {
        match read_source(path) {
            Ok(text) => {
                log::debug!("loaded {stage} shader from {}", path.display());
                Self {
                    stage,
                    text,
                    origin: SourceOrigin::File(path.to_path_buf()),
                }
            }
            Err(err) => {
                log::warn!("{err}; using built-in {stage} shader");
                Self::built_in(stage)
            }
        }
    }

    pub fn built_in(stage: ShaderStage) -> Self {
        Self {
            stage,
            text: default_source(stage).to_string(),
            origin: SourceOrigin::BuiltIn,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == SourceOrigin::BuiltIn
    }
}

/// Vertex + fragment source pair.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub vertex: StageSource,
    pub fragment: StageSource,
}

impl ShaderSource {
    /// Loads both stages from disk with per-stage fallback.
    pub fn load(vertex_path: &Path, fragment_path: &Path) -> Self {
        Self {
            vertex: StageSource::load_or_default(ShaderStage::Vertex, vertex_path),
            fragment: StageSource::load_or_default(ShaderStage::Fragment, fragment_path),
        }
    }

    /// Wraps in-memory text for both stages.
    pub fn from_strings(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: StageSource {
                stage: ShaderStage::Vertex,
                text: vertex.into(),
                origin: SourceOrigin::Inline,
            },
            fragment: StageSource {
                stage: ShaderStage::Fragment,
                text: fragment.into(),
                origin: SourceOrigin::Inline,
            },
        }
    }

    /// The built-in pair.
    pub fn built_in() -> Self {
        Self {
            vertex: StageSource::built_in(ShaderStage::Vertex),
            fragment: StageSource::built_in(ShaderStage::Fragment),
        }
    }
}

/// Reads a whole UTF-8 shader file.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shader::{DEFAULT_FRAGMENT_SHADER, DEFAULT_VERTEX_SHADER};

    /// Writes `contents` to a unique file under the system temp dir.
    pub(crate) fn temp_file(tag: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "tumble-{}-{}-{tag}.glsl",
            std::process::id(),
            std::thread::current().name().unwrap_or("t").replace("::", "-"),
        ));
        fs::write(&path, contents).expect("write temp shader");
        path
    }

    fn missing(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tumble-missing-{}-{tag}.glsl", std::process::id()))
    }

    #[test]
    fn reads_existing_file() {
        let path = temp_file("read", b"void main() {}\n");
        assert_eq!(read_source(&path).unwrap(), "void main() {}\n");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = missing("report");
        let err = read_source(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("failed to read shader source"));
    }

    #[test]
    fn non_utf8_file_is_a_load_failure() {
        let path = temp_file("latin1", &[0x76, 0xff, 0xfe, 0x00]);
        assert!(read_source(&path).is_err());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_stage_falls_back_independently() {
        let frag = temp_file("fallback-frag", b"void main() { }\n");
        let src = ShaderSource::load(&missing("fallback-vert"), &frag);

        assert!(src.vertex.is_fallback());
        assert_eq!(src.vertex.text, DEFAULT_VERTEX_SHADER);

        assert!(!src.fragment.is_fallback());
        assert_eq!(src.fragment.origin, SourceOrigin::File(frag.clone()));
        let _ = fs::remove_file(frag);
    }

    #[test]
    fn both_missing_yields_built_in_pair() {
        let src = ShaderSource::load(&missing("both-v"), &missing("both-f"));
        assert_eq!(src.vertex.text, DEFAULT_VERTEX_SHADER);
        assert_eq!(src.fragment.text, DEFAULT_FRAGMENT_SHADER);
        assert_eq!(src.fragment.stage, ShaderStage::Fragment);
    }
}
