use retrace_compiler::CompileError;
use retrace_core::MatchLevel;
use retrace_syntax::{ParseErrorKind, SyntaxOptions};
use retrace_vm::{FuelLimits, RuntimeError};

use crate::{Error, Regex, RegexBuilder, compile_regex};

#[test]
fn builder_defaults() {
    let regex = Regex::new("a").expect("valid pattern");
    assert_eq!(regex.pattern(), "a");
    assert_eq!(regex.match_level(), MatchLevel::GraphemeCluster);
    assert_eq!(regex.limits(), FuelLimits::default());
    assert_eq!(regex.program().len(), 2);
}

#[test]
fn builder_settings_flow_through() {
    let regex = RegexBuilder::new("a b")
        .syntax(SyntaxOptions::EXPERIMENTAL)
        .match_level(MatchLevel::UnicodeScalar)
        .limits(FuelLimits::new().exec_fuel(10))
        .build()
        .expect("valid pattern");

    assert_eq!(regex.match_level(), MatchLevel::UnicodeScalar);
    assert_eq!(regex.limits().get_exec_fuel(), 10);
    // Whitespace is trivia in experimental syntax.
    assert_eq!(regex.matches_at("ab", 0), Ok(Some(2)));
}

#[test]
fn syntax_selector_is_honored() {
    let traditional = compile_regex("a b", SyntaxOptions::TRADITIONAL).expect("valid pattern");
    let experimental = compile_regex("a b", SyntaxOptions::EXPERIMENTAL).expect("valid pattern");
    assert_eq!(traditional.matches_at("a b", 0), Ok(Some(3)));
    assert_eq!(traditional.matches_at("ab", 0), Ok(None));
    assert_eq!(experimental.matches_at("ab", 0), Ok(Some(2)));
}

#[test]
fn parse_errors_surface() {
    let err = Regex::new("(a").expect_err("missing paren");
    let Error::Parse(err) = err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(err.kind, ParseErrorKind::Expected(")".to_string()));
}

#[test]
fn max_depth_limits_nesting() {
    assert!(Regex::builder("((a))").max_depth(2).build().is_ok());
    let err = Regex::builder("((a))").max_depth(1).build().expect_err("too deep");
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn unsupported_constructs_surface() {
    let err = Regex::new("[abc]").expect_err("custom classes are unsupported");
    assert_eq!(
        err,
        Error::Compile(CompileError::Unsupported("customCharacterClass".to_string()))
    );
    assert_eq!(err.to_string(), "unsupported construct: customCharacterClass");
}

#[test]
fn runtime_errors_surface() {
    let regex = RegexBuilder::new("a*")
        .limits(FuelLimits::new().exec_fuel(2))
        .build()
        .expect("valid pattern");
    assert_eq!(
        regex.find("aaaa"),
        Err(Error::Runtime(RuntimeError::ExecFuelExhausted(2)))
    );
}

#[test]
fn matches_at_rejects_mid_scalar_start() {
    let regex = Regex::new(".").expect("valid pattern");
    assert_eq!(regex.matches_at("é", 1), Ok(None));
    assert_eq!(regex.matches_at("é", 9), Ok(None));
}

#[test]
fn find_scans_by_level() {
    let grapheme = Regex::new("\u{301}").expect("valid pattern");
    assert_eq!(grapheme.find("e\u{301}"), Ok(None));

    let scalar = RegexBuilder::new("\u{301}")
        .match_level(MatchLevel::UnicodeScalar)
        .build()
        .expect("valid pattern");
    assert_eq!(scalar.find("e\u{301}"), Ok(Some(1..3)));
}
