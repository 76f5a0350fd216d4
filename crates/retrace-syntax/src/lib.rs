//! Regex syntax for retrace: tree, parser, diagnostics and tree rewrites.
//!
//! - `ast` - the immutable pattern tree consumed by the compiler
//! - `group` - group kinds and matching-option sequences
//! - `parser` - pattern text to [`Ast`]
//! - `diagnostics` - parse error taxonomy and snippet rendering
//! - `transform` - match-level propagation over a tree
//! - `dump` - indented tree printer

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod diagnostics;
pub mod dump;
pub mod group;
pub mod parser;
pub mod transform;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod dump_tests;

pub use ast::{
    Amount, Anchor, Ast, Atom, CharacterClass, ClassMember, CustomCharacterClass, PosixSet,
    QuantKind, Quantification, Reference, Transform,
};
pub use diagnostics::{ParseError, ParseErrorKind, Radix};
pub use group::{Group, GroupKind, MatchingOption, MatchingOptionSequence};
pub use parser::{Parser, SyntaxOptions, parse};
pub use transform::Unsupported;
