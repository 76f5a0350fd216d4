pub mod ast;
pub mod dump;
pub mod exec;
pub mod pattern;
pub mod trace;

#[cfg(test)]
mod exec_tests;
