#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime VM for executing compiled retrace programs.
//!
//! The VM walks a [`retrace_bytecode::Program`] over a subject string,
//! backtracking through saved checkpoints until it accepts or runs out of
//! alternatives.

pub mod engine;

pub use engine::{
    Checkpoint, CheckpointKind, FuelLimits, NoopTracer, PrintTracer, RuntimeError, Tracer, VM,
    VMBuilder, Verbosity,
};
