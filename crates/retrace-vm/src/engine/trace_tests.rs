use retrace_compiler::compile;
use retrace_core::{Colors, MatchLevel};
use retrace_syntax::{SyntaxOptions, parse};

use super::{PrintTracer, VM, Verbosity};

fn trace(pattern: &str, subject: &str, verbosity: Verbosity) -> String {
    let ast = parse(pattern, SyntaxOptions::TRADITIONAL).expect("parse failed");
    let program = compile(&ast, MatchLevel::GraphemeCluster).expect("compile failed");
    let mut tracer = PrintTracer::new(&program, verbosity, Colors::OFF);
    VM::builder(subject)
        .build()
        .execute_with(&program, 0, &mut tracer)
        .expect("execution failed");
    format!("{pattern} on {subject:?}\n---\n{}", tracer.output())
}

#[test]
fn default_shows_backtracking() {
    insta::assert_snapshot!(trace("ab|c", "c", Verbosity::Default), @r#"
    ab|c on "c"
    ---
      0   save @4
      1   match "a"
        ○ @0
      4 ❮❮❮ @0
      4   match "c"
        ● "c"
      5   accept
        ◼ @1
    "#);
}

#[test]
fn no_match_is_reported() {
    insta::assert_snapshot!(trace("a", "b", Verbosity::Default), @r#"
    a on "b"
    ---
      0   match "a"
        ○ @0
        ◼ no match
    "#);
}

#[test]
fn verbose_shows_checkpoints_and_cuts() {
    insta::assert_snapshot!(trace("(?>a)b", "ab", Verbosity::Verbose), @r#"
    (?>a)b on "ab"
    ---
      0   fence
        + fence (depth 1)
      1   match "a"
        ● "a"
      2   cut
        ✂ dropped 0, @1
      3   match "b"
        ● "b"
      4   accept
        ◼ @2
    "#);
}

#[test]
fn very_verbose_shows_positions() {
    insta::assert_snapshot!(trace("a", "a", Verbosity::VeryVerbose), @r#"
    a on "a"
    ---
      0   match "a"  @0
        ● "a"
      1   accept  @1
        ◼ @1
    "#);
}

#[test]
fn lines_match_output() {
    let ast = parse("a", SyntaxOptions::TRADITIONAL).expect("parse failed");
    let program = compile(&ast, MatchLevel::GraphemeCluster).expect("compile failed");
    let mut tracer = PrintTracer::new(&program, Verbosity::Default, Colors::OFF);
    let end = VM::builder("a")
        .build()
        .execute_with(&program, 0, &mut tracer)
        .expect("execution failed");

    assert_eq!(end, Some(1));
    assert_eq!(tracer.lines().len(), 4);
    assert_eq!(tracer.output(), tracer.lines().join("\n") + "\n");
}
