//! Checkpoints for backtracking.
//!
//! `save` and `split` push a resumable checkpoint for the alternative not
//! taken. On failure the VM restores the most recent one and continues.
//! Placeholders and fences never resume: backtracking into them discards
//! them and keeps going.

use retrace_bytecode::Address;

use super::error::RuntimeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckpointKind {
    /// Resume execution at the address.
    Resume(Address),
    /// Stands in for a checkpoint a later `clear` may drop.
    Placeholder,
    /// Barrier for the next `cut`.
    Fence,
}

/// Saved machine state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pub kind: CheckpointKind,
    /// Input position (byte offset into the subject).
    pub pos: usize,
    /// Register file at the time of the push.
    pub registers: Vec<u32>,
    /// Position registers at the time of the push.
    pub marks: Vec<Option<usize>>,
}

impl Checkpoint {
    pub fn new(
        kind: CheckpointKind,
        pos: usize,
        registers: Vec<u32>,
        marks: Vec<Option<usize>>,
    ) -> Self {
        Self {
            kind,
            pos,
            registers,
            marks,
        }
    }
}

/// Stack of checkpoints with a size limit.
#[derive(Debug)]
pub struct CheckpointStack {
    stack: Vec<Checkpoint>,
    limit: usize,
}

impl CheckpointStack {
    /// Create an empty stack holding at most `limit` checkpoints.
    pub fn new(limit: usize) -> Self {
        Self {
            stack: Vec::new(),
            limit,
        }
    }

    /// Push a checkpoint, failing once the limit is reached.
    pub fn push(&mut self, checkpoint: Checkpoint) -> Result<(), RuntimeError> {
        if self.stack.len() >= self.limit {
            return Err(RuntimeError::CheckpointLimitExceeded(self.limit));
        }
        self.stack.push(checkpoint);
        Ok(())
    }

    /// Pop and return the most recent checkpoint.
    pub fn pop(&mut self) -> Option<Checkpoint> {
        self.stack.pop()
    }

    /// Drop every checkpoint above the nearest fence, then the fence itself.
    ///
    /// Returns the fence and the number of checkpoints dropped above it, or
    /// `None` (leaving the stack untouched) when there is no fence.
    pub fn cut_to_fence(&mut self) -> Option<(Checkpoint, usize)> {
        let at = self
            .stack
            .iter()
            .rposition(|cp| cp.kind == CheckpointKind::Fence)?;
        let dropped = self.stack.len() - at - 1;
        let fence = self.stack.drain(at..).next()?;
        Some((fence, dropped))
    }

    #[inline]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }
}
