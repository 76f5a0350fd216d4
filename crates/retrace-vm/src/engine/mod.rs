//! Backtracking engine.
//!
//! Checkpoints carry the resume address, the input position and a copy of
//! the register file. Failure pops the most recent resumable checkpoint.

mod checkpoint;
mod error;
mod invariants;
mod trace;
mod vm;

#[cfg(test)]
mod trace_tests;

pub use checkpoint::{Checkpoint, CheckpointKind};
pub use error::RuntimeError;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{FuelLimits, VM, VMBuilder};
