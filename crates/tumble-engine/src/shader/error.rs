use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::gl::ShaderStage;

/// A shader file could not be read.
///
/// Recovered by falling back to the built-in source for the stage.
#[derive(Debug)]
pub struct SourceError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read shader source {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Shader program build failure. Always fatal to startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The API refused to allocate a shader or program object.
    Create { object: &'static str, message: String },
    /// A stage failed to compile; `log` is the compiler info log.
    Compile { stage: ShaderStage, log: String },
    /// The stages failed to link; `log` is the program info log.
    Link { log: String },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Create { object, message } => {
                write!(f, "failed to create {object} object: {message}")
            }
            BuildError::Compile { stage, log } => {
                write!(f, "{stage} shader failed to compile: {}", log.trim_end())
            }
            BuildError::Link { log } => write!(f, "shader program failed to link: {}", log.trim_end()),
        }
    }
}

impl std::error::Error for BuildError {}
