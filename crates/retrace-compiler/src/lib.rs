#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Retrace compiler: lowers a pattern tree to bytecode.
//!
//! - `compile` - the recursive lowering, quantifier loops and group fences
//!
//! Parsing and match-level propagation live in `retrace-syntax`; the
//! instruction set and builder live in `retrace-bytecode`.

pub mod compile;

#[cfg(test)]
pub mod test_utils;

pub use compile::{CompileError, Compiler, compile};
