use crate::ast::Ast;
use crate::group::{GroupKind, MatchingOption, MatchingOptionSequence};
use crate::parser::{SyntaxOptions, parse};
use crate::shot_ast;

fn group_kind(pattern: &str) -> GroupKind {
    match parse(pattern, SyntaxOptions::TRADITIONAL) {
        Ok(Ast::Group(group)) => group.kind,
        other => panic!("expected a group for {pattern:?}, got {other:?}"),
    }
}

#[test]
fn group_specifiers() {
    let cases = [
        ("(a)", GroupKind::Capture),
        ("(?<n>a)", GroupKind::NamedCapture("n".into())),
        ("(?'n'a)", GroupKind::NamedCapture("n".into())),
        ("(?P<n>a)", GroupKind::NamedCapture("n".into())),
        ("(?:a)", GroupKind::NonCapture),
        ("(?|a)", GroupKind::NonCaptureReset),
        ("(?>a)", GroupKind::Atomic),
        ("(?=a)", GroupKind::Lookahead),
        ("(?!a)", GroupKind::NegativeLookahead),
        ("(?*a)", GroupKind::NonAtomicLookahead),
        ("(?<=a)", GroupKind::Lookbehind),
        ("(?<!a)", GroupKind::NegativeLookbehind),
        ("(?<*a)", GroupKind::NonAtomicLookbehind),
        ("(*sr:a)", GroupKind::ScriptRun),
        ("(*asr:a)", GroupKind::AtomicScriptRun),
    ];
    for (pattern, kind) in cases {
        assert_eq!(group_kind(pattern), kind, "{pattern}");
    }
}

#[test]
fn capturing_kinds() {
    assert!(group_kind("(a)").is_capturing());
    assert!(group_kind("(?<n>a)").is_capturing());
    assert!(!group_kind("(?:a)").is_capturing());
    assert_eq!(group_kind("(?<year>a)").name(), Some("year"));
}

#[test]
fn matching_options_with_body() {
    let kind = group_kind("(?ixx-sm:a)");
    assert_eq!(
        kind,
        GroupKind::ChangeMatchingOptions {
            options: MatchingOptionSequence {
                caret: false,
                adding: vec![MatchingOption::CaseInsensitive, MatchingOption::ExtraExtended],
                removing: vec![MatchingOption::SingleLine, MatchingOption::Multiline],
            },
            implicit_scope: false,
        }
    );
    assert_eq!(kind.dump_base(), "changeMatchingOptions<ixx-sm, false>");
}

#[test]
fn caret_and_text_segment_options() {
    let kind = group_kind("(?^y{w}:a)");
    assert_eq!(
        kind,
        GroupKind::ChangeMatchingOptions {
            options: MatchingOptionSequence {
                caret: true,
                adding: vec![MatchingOption::TextSegmentWordMode],
                removing: vec![],
            },
            implicit_scope: false,
        }
    );
}

#[test]
fn isolated_options_scope_the_rest_of_the_concatenation() {
    shot_ast!("a(?i)bc|d", @r#"
    alternation
      concatenation
        atom char "a"
        group_changeMatchingOptions<i, true>
          concatenation
            atom char "b"
            atom char "c"
      atom char "d"
    "#);
}

#[test]
fn isolated_options_inside_a_group() {
    shot_ast!("(x(?-i)y)z", @r#"
    concatenation
      group_capture
        concatenation
          atom char "x"
          group_changeMatchingOptions<-i, true>
            atom char "y"
      atom char "z"
    "#);
}

#[test]
fn comment_is_trivia() {
    assert_eq!(
        parse("a(?# note )b", SyntaxOptions::TRADITIONAL).unwrap(),
        Ast::Concatenation(vec![
            Ast::char("a"),
            Ast::Trivia(" note ".into()),
            Ast::char("b"),
        ])
    );
}

#[test]
fn empty_group_and_empty_branches() {
    shot_ast!("(|a|)", @r#"
    group_capture
      alternation
        empty
        atom char "a"
        empty
    "#);
}
