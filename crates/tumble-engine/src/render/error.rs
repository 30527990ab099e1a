use std::fmt;

use crate::mesh::UploadError;

use super::Phase;

/// Frame renderer failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The operation requires the `Ready` phase.
    NotReady(Phase),
    /// `initialize` was called outside the `Uninitialized` phase.
    AlreadyInitialized(Phase),
    /// A mesh could not be uploaded during initialization.
    Upload(UploadError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NotReady(phase) => write!(f, "renderer is not ready (phase: {phase:?})"),
            RenderError::AlreadyInitialized(phase) => {
                write!(f, "renderer cannot be initialized twice (phase: {phase:?})")
            }
            RenderError::Upload(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Upload(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UploadError> for RenderError {
    fn from(err: UploadError) -> Self {
        RenderError::Upload(err)
    }
}
