use crate::{ClassKind, ClassPredicate, Property};

#[test]
fn digit_and_inverse() {
    let d = ClassPredicate::new(ClassKind::Digit);
    assert!(d.matches_scalar('7'));
    assert!(!d.matches_scalar('x'));
    assert!(d.inverted().matches_scalar('x'));
    assert!(!d.inverted().matches_scalar('7'));
}

#[test]
fn grapheme_tests_first_scalar() {
    let w = ClassPredicate::new(ClassKind::Word);
    assert!(w.matches_grapheme("e\u{301}"));
    assert!(!w.matches_grapheme("-"));
    assert!(!w.matches_grapheme(""));
}

#[test]
fn horizontal_vs_vertical_space() {
    let h = ClassPredicate::new(ClassKind::HorizontalWhitespace);
    let v = ClassPredicate::new(ClassKind::VerticalWhitespace);
    assert!(h.matches_scalar('\t'));
    assert!(!h.matches_scalar('\n'));
    assert!(v.matches_scalar('\n'));
    assert!(!v.matches_scalar(' '));
}

#[test]
fn newline_sequence_accepts_crlf_cluster() {
    let r = ClassPredicate::new(ClassKind::NewlineSequence);
    assert!(r.matches_grapheme("\r\n"));
}

#[test]
fn property_names_are_loose() {
    assert_eq!(Property::from_name("White_Space"), Some(Property::WhiteSpace));
    assert_eq!(Property::from_name("whitespace"), Some(Property::WhiteSpace));
    assert_eq!(Property::from_name("L"), Some(Property::Alphabetic));
    assert_eq!(Property::from_name("Lu"), Some(Property::Uppercase));
    assert_eq!(Property::from_name("Greek"), None);
}

#[test]
fn display_uses_escape_spelling() {
    assert_eq!(ClassPredicate::new(ClassKind::Digit).to_string(), "\\d");
    assert_eq!(ClassPredicate::new(ClassKind::Word).inverted().to_string(), "\\W");
    assert_eq!(ClassPredicate::any_scalar().to_string(), ".");
    assert_eq!(ClassPredicate::any_grapheme().to_string(), "\\X");
    assert_eq!(
        ClassPredicate::property(Property::Uppercase).inverted().to_string(),
        "\\P{Uppercase}"
    );
}

#[test]
fn any_grapheme_consumes_whole_cluster() {
    assert!(ClassPredicate::any_grapheme().consumes_grapheme());
    assert!(!ClassPredicate::any_scalar().consumes_grapheme());
}
