//! Helpers for compiler tests.

use retrace_bytecode::{Program, dump};
use retrace_core::{Colors, MatchLevel};
use retrace_syntax::{Ast, SyntaxOptions, parse};

use crate::{CompileError, compile};

/// Snapshot test for the bytecode listing of a pattern.
#[macro_export]
macro_rules! shot_bytecode {
    ($pattern:literal, @$snapshot:literal) => {{
        let output = $crate::test_utils::bytecode($pattern);
        insta::with_settings!({ omit_expression => true }, {
            insta::assert_snapshot!(format!("{}\n---\n{output}", $pattern), @$snapshot);
        });
    }};
}

pub fn tree(pattern: &str) -> Ast {
    parse(pattern, SyntaxOptions::TRADITIONAL).expect("pattern should parse")
}

pub fn program_at(pattern: &str, level: MatchLevel) -> Program {
    compile(&tree(pattern), level).expect("pattern should compile")
}

pub fn program(pattern: &str) -> Program {
    program_at(pattern, MatchLevel::GraphemeCluster)
}

pub fn bytecode(pattern: &str) -> String {
    dump(&program(pattern), Colors::OFF)
}

pub fn compile_error(pattern: &str) -> CompileError {
    match compile(&tree(pattern), MatchLevel::GraphemeCluster) {
        Ok(program) => panic!(
            "expected {pattern:?} to be rejected, got:\n{}",
            dump(&program, Colors::OFF)
        ),
        Err(err) => err,
    }
}
