//! Pattern tree to linear bytecode.
//!
//! # Module Organization
//!
//! - `compiler`: compiler state and node dispatch
//! - `sequences`: concatenation and alternation
//! - `quantifier`: the unified repetition loop (`*`, `+`, `?`, `{n,m}`)
//! - `groups`: transparent groups, atomic groups and lookahead
//! - `consumers`: leaves that consume by predicate

mod compiler;
mod consumers;
mod error;
mod groups;
mod quantifier;
mod sequences;

#[cfg(test)]
mod groups_tests;
#[cfg(test)]
mod quantifier_tests;

pub use compiler::{Compiler, compile};
pub use error::CompileError;
