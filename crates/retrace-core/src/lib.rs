#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the retrace crates.
//!
//! - [`MatchLevel`]: whether matching steps over grapheme clusters or scalars
//! - [`ClassPredicate`]: built-in character predicates (`\d`, `\w`, `\p{..}`, ...)
//! - [`Colors`]: ANSI palette for dumps and traces
//! - [`text`]: grapheme/scalar stepping over subject and pattern text

mod class;
mod colors;
mod match_level;
pub mod text;

#[cfg(test)]
mod class_tests;

pub use class::{ClassKind, ClassPredicate, Property};
pub use colors::Colors;
pub use match_level::MatchLevel;
