use crate::ast::{Amount, Ast, QuantKind, Quantification};
use crate::parser::{SyntaxOptions, parse};

fn quantification(pattern: &str) -> Quantification {
    match parse(pattern, SyntaxOptions::TRADITIONAL) {
        Ok(Ast::Quantification(q)) => q,
        other => panic!("expected a quantification for {pattern:?}, got {other:?}"),
    }
}

#[test]
fn amounts() {
    let cases = [
        ("a*", Amount::ZeroOrMore),
        ("a+", Amount::OneOrMore),
        ("a?", Amount::ZeroOrOne),
        ("a{3}", Amount::Exactly(3)),
        ("a{3,}", Amount::NOrMore(3)),
        ("a{,4}", Amount::UpToN(4)),
        ("a{2,5}", Amount::Range(2, 5)),
        ("a{0,0}", Amount::Range(0, 0)),
        ("a{5,2}", Amount::Range(5, 2)),
    ];
    for (pattern, amount) in cases {
        let q = quantification(pattern);
        assert_eq!(q.amount, amount, "{pattern}");
        assert_eq!(q.kind, QuantKind::Eager, "{pattern}");
        assert_eq!(*q.child, Ast::char("a"));
    }
}

#[test]
fn kinds() {
    assert_eq!(quantification("a*").kind, QuantKind::Eager);
    assert_eq!(quantification("a*?").kind, QuantKind::Reluctant);
    assert_eq!(quantification("a*+").kind, QuantKind::Possessive);
    assert_eq!(quantification("a{2,}?").kind, QuantKind::Reluctant);
    assert_eq!(quantification("a??").kind, QuantKind::Reluctant);
    assert_eq!(quantification("a?+").kind, QuantKind::Possessive);
}

#[test]
fn bounds() {
    assert_eq!(Amount::ZeroOrMore.bounds(), (0, None));
    assert_eq!(Amount::OneOrMore.bounds(), (1, None));
    assert_eq!(Amount::ZeroOrOne.bounds(), (0, Some(1)));
    assert_eq!(Amount::Exactly(4).bounds(), (4, Some(4)));
    assert_eq!(Amount::NOrMore(2).bounds(), (2, None));
    assert_eq!(Amount::UpToN(3).bounds(), (0, Some(3)));
    assert_eq!(Amount::Range(1, 9).bounds(), (1, Some(9)));
}

#[test]
fn stacked_quantifiers_nest() {
    let outer = quantification("a{2}*");
    assert_eq!(outer.amount, Amount::ZeroOrMore);
    let Ast::Quantification(inner) = *outer.child else {
        panic!("inner quantifier expected");
    };
    assert_eq!(inner.amount, Amount::Exactly(2));
}

#[test]
fn quantifier_binds_to_last_operand() {
    let ast = parse("ab+", SyntaxOptions::TRADITIONAL).unwrap();
    assert_eq!(
        ast,
        Ast::Concatenation(vec![
            Ast::char("a"),
            Ast::quantification(Amount::OneOrMore, QuantKind::Eager, Ast::char("b")),
        ])
    );
}
