#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Bytecode for the retrace backtracking VM.
//!
//! - `ids` - addresses, registers and string handles
//! - `instructions` - the instruction set
//! - `builder` - [`ProgramBuilder`], the only way to make a [`Program`]
//! - `program` - the finished, immutable program
//! - `dump` - human-readable listing

mod builder;
mod dump;
mod ids;
mod instructions;
mod invariants;
mod program;
mod strings;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod dump_tests;

pub use builder::ProgramBuilder;
pub use dump::{dump, width_for_count};
pub use ids::{Address, IntRegister, PosRegister, StringId};
pub use instructions::Instruction;
pub use program::Program;
pub use strings::StringTableBuilder;
