//! Errors that can occur while running a program.
//!
//! Failing to match is not an error: [`VM::execute`](super::VM::execute)
//! returns `Ok(None)` for that.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many instructions executed).
    #[error("runtime execution limit of {0} steps exceeded")]
    ExecFuelExhausted(u32),

    /// Too many checkpoints alive at once.
    #[error("runtime checkpoint limit of {0} exceeded")]
    CheckpointLimitExceeded(usize),
}
