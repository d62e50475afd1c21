// glspin/src/error.rs
//
//! Various errors that methods can produce.

use crate::shader::ShaderKind;

use thiserror::Error;

/// Various errors that methods can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Looking up an OpenGL function address failed.
    ///
    /// This usually means the driver is too old for the requested context version. It isn't
    /// transient, so there's nothing to retry.
    #[error("OpenGL function `{0}` not found")]
    GLFunctionNotFound(&'static str),
    /// Function loading was attempted without a current OpenGL context on this thread.
    #[error("no OpenGL context is current on this thread")]
    NoCurrentContext,
    /// The driver rejected a shader. Carries the shader info log.
    #[error("failed to compile {kind} shader:\n{log}")]
    ShaderCompilationFailed { kind: ShaderKind, log: String },
    /// The driver couldn't link a program. Carries the program info log.
    #[error("failed to link program:\n{0}")]
    ProgramLinkFailed(String),
}
