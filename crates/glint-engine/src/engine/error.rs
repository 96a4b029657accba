use std::fmt;

/// Failure to bring up a render engine. Every variant is terminal for that
/// initialization attempt; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// The surface could not produce a graphics context.
    ContextUnavailable,
    /// A shader stage failed to compile; carries the compiler log.
    ShaderCompileError(String),
    /// The program failed to link; carries the link log.
    ProgramLinkError(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::ContextUnavailable => write!(f, "graphics context unavailable"),
            GraphicsError::ShaderCompileError(log) => {
                write!(f, "shader compilation failed:\n{log}")
            }
            GraphicsError::ProgramLinkError(log) => write!(f, "program link failed:\n{log}"),
        }
    }
}

impl std::error::Error for GraphicsError {}
