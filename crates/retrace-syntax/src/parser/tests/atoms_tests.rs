use retrace_core::{ClassKind, ClassPredicate, Property};

use crate::ast::{Anchor, Ast, Atom, Reference};
use crate::parser::{Parser, SyntaxOptions, parse};
use crate::shot_ast;

fn atom(pattern: &str) -> Atom {
    match parse(pattern, SyntaxOptions::TRADITIONAL) {
        Ok(Ast::Atom(atom)) => atom,
        other => panic!("expected a single atom for {pattern:?}, got {other:?}"),
    }
}

#[test]
fn literals_and_dot() {
    shot_ast!("a.b", @r#"
    concatenation
      atom char "a"
      atom any
      atom char "b"
    "#);
}

#[test]
fn graphemes_are_single_atoms() {
    assert_eq!(atom("e\u{301}"), Atom::Char("e\u{301}".into()));
    assert_eq!(atom("🇺🇸"), Atom::Char("🇺🇸".into()));
}

#[test]
fn class_escapes() {
    let cases = [
        (r"\d", ClassPredicate::new(ClassKind::Digit)),
        (r"\D", ClassPredicate::new(ClassKind::Digit).inverted()),
        (r"\w", ClassPredicate::new(ClassKind::Word)),
        (r"\S", ClassPredicate::new(ClassKind::Whitespace).inverted()),
        (r"\h", ClassPredicate::new(ClassKind::HorizontalWhitespace)),
        (r"\V", ClassPredicate::new(ClassKind::VerticalWhitespace).inverted()),
        (r"\R", ClassPredicate::new(ClassKind::NewlineSequence)),
        (r"\N", ClassPredicate::new(ClassKind::NewlineSequence).inverted()),
        (r"\X", ClassPredicate::any_grapheme()),
    ];
    for (pattern, predicate) in cases {
        assert_eq!(atom(pattern), Atom::Class(predicate), "{pattern}");
    }
}

#[test]
fn scalar_escapes() {
    let cases = [
        (r"\n", '\n'),
        (r"\t", '\t'),
        (r"\e", '\u{1b}'),
        (r"\0", '\0'),
        (r"\012", '\n'),
        (r"\x41", 'A'),
        (r"\x{1F600}", '😀'),
        (r"\u{301}", '\u{301}'),
        (r"\U0001F600", '😀'),
        (r"\o{101}", 'A'),
        (r"\cA", '\u{1}'),
        (r"\cz", '\u{1a}'),
    ];
    for (pattern, c) in cases {
        assert_eq!(atom(pattern), Atom::Scalar(c), "{pattern}");
    }
}

#[test]
fn escaped_metacharacters_are_literal() {
    assert_eq!(atom(r"\."), Atom::Char(".".into()));
    assert_eq!(atom(r"\("), Atom::Char("(".into()));
    assert_eq!(atom(r"\\"), Atom::Char("\\".into()));
}

#[test]
fn properties() {
    assert_eq!(
        atom(r"\p{L}"),
        Atom::Class(ClassPredicate::property(Property::Alphabetic))
    );
    assert_eq!(
        atom(r"\pN"),
        Atom::Class(ClassPredicate::property(Property::Numeric))
    );
    assert_eq!(
        atom(r"\P{White_Space}"),
        Atom::Class(ClassPredicate::property(Property::WhiteSpace).inverted())
    );
    assert_eq!(
        atom(r"\p{^Lu}"),
        Atom::Class(ClassPredicate::property(Property::Uppercase).inverted())
    );
    assert_eq!(
        atom(r"\p{Greek}"),
        Atom::Property {
            name: "Greek".into(),
            inverted: false
        }
    );
}

#[test]
fn anchors() {
    let cases = [
        ("^", Anchor::StartOfLine),
        ("$", Anchor::EndOfLine),
        (r"\A", Anchor::StartOfSubject),
        (r"\z", Anchor::EndOfSubject),
        (r"\Z", Anchor::EndOfSubjectBeforeNewline),
        (r"\b", Anchor::WordBoundary),
        (r"\B", Anchor::NotWordBoundary),
        (r"\G", Anchor::FirstMatchingPosition),
    ];
    for (pattern, anchor) in cases {
        assert_eq!(atom(pattern), Atom::Anchor(anchor), "{pattern}");
    }
}

#[test]
fn backreferences() {
    let cases = [
        (r"\1", Reference::Absolute(1)),
        (r"\12", Reference::Absolute(12)),
        (r"\k<name>", Reference::Named("name".into())),
        (r"\k'name'", Reference::Named("name".into())),
        (r"\k{name}", Reference::Named("name".into())),
        (r"\g2", Reference::Absolute(2)),
        (r"\g-1", Reference::Relative(-1)),
        (r"\g{+2}", Reference::Relative(2)),
        (r"\g{-3}", Reference::Relative(-3)),
        (r"\g{word}", Reference::Named("word".into())),
    ];
    for (pattern, reference) in cases {
        assert_eq!(atom(pattern), Atom::Backreference(reference), "{pattern}");
    }
}

#[test]
fn quoted_runs() {
    let ast = parse(r"\Qa.b*\E+", SyntaxOptions::TRADITIONAL).unwrap();
    insta::assert_snapshot!(ast.dump(), @r#"
    quant_+
      quote "a.b*"
    "#);

    let unterminated = parse(r"x\Q(y", SyntaxOptions::TRADITIONAL).unwrap();
    assert_eq!(
        unterminated,
        Ast::Concatenation(vec![Ast::char("x"), Ast::Quote("(y".into())])
    );
}

#[test]
fn literal_brace_when_not_a_bound() {
    shot_ast!("a{b}{,}", @r#"
    concatenation
      atom char "a"
      atom char "{"
      atom char "b"
      atom char "}"
      atom char "{"
      atom char ","
      atom char "}"
    "#);
}

#[test]
fn experimental_syntax_whitespace_and_quotes() {
    let ast = Parser::new(r#"a  "b c"+"#)
        .syntax(SyntaxOptions::EXPERIMENTAL)
        .parse()
        .unwrap();

    insta::assert_snapshot!(ast.dump(), @r#"
    concatenation
      atom char "a"
      trivia "  "
      quant_+
        quote "b c"
    "#);
}

#[test]
fn traditional_syntax_keeps_whitespace() {
    let ast = parse("a b", SyntaxOptions::TRADITIONAL).unwrap();
    assert_eq!(
        ast,
        Ast::Concatenation(vec![Ast::char("a"), Ast::char(" "), Ast::char("b")])
    );
}
