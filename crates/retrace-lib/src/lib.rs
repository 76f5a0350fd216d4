//! Retrace: a backtracking regex engine that matches by grapheme cluster.
//!
//! # Example
//!
//! ```
//! use retrace_lib::{SyntaxOptions, compile_regex};
//!
//! let regex = compile_regex("a(b|c)*d", SyntaxOptions::TRADITIONAL).expect("valid pattern");
//! assert_eq!(regex.find("xxabcbd").expect("within limits"), Some(2..7));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod regex;

#[cfg(test)]
mod regex_tests;

pub use regex::{Regex, RegexBuilder, compile_regex};

pub use retrace_bytecode::{Program, dump};
pub use retrace_compiler::CompileError;
pub use retrace_core::{Colors, MatchLevel};
pub use retrace_syntax::{Ast, ParseError, SyntaxOptions};
pub use retrace_vm::{FuelLimits, PrintTracer, RuntimeError, Tracer, Verbosity};

/// Errors from compiling or running a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Result type for regex operations.
pub type Result<T> = std::result::Result<T, Error>;
