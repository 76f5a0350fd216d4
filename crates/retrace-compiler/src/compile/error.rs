use retrace_syntax::Unsupported;

/// Errors that abort compilation. No partial program is produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A node the compiler cannot lower; carries its dump tag.
    #[error("unsupported construct: {0}")]
    Unsupported(String),
}

impl From<Unsupported> for CompileError {
    fn from(err: Unsupported) -> Self {
        CompileError::Unsupported(err.construct)
    }
}

pub type CompileResult<T> = Result<T, CompileError>;
