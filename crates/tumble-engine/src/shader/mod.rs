//! Shader-program build pipeline.
//!
//! `source → compile (per stage) → link → handle`, with diagnostics routed
//! through `log` and no GL object surviving a failed build.
//!
//! Missing or unreadable shader files always fall back to the built-in
//! default source for that stage.

mod builder;
mod defaults;
mod error;
mod source;
mod uniforms;

pub use builder::{link_program, ProgramHandle, ShaderProgramBuilder};
pub use defaults::{default_source, DEFAULT_FRAGMENT_SHADER, DEFAULT_VERTEX_SHADER};
pub use error::{BuildError, SourceError};
pub use source::{read_source, ShaderSource, SourceOrigin, StageSource};
pub use uniforms::{UniformBindings, UniformNames};
