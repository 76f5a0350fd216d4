use crate::ast::{Amount, Ast, QuantKind, Transform};
use crate::group::{Group, GroupKind};
use crate::shot_ast;

#[test]
fn nested_tree() {
    shot_ast!("a(b|c)*d", @r#"
    concatenation
      atom char "a"
      quant_*
        group_capture
          alternation
            atom char "b"
            atom char "c"
      atom char "d"
    "#);
}

#[test]
fn quantifier_kinds() {
    shot_ast!("x{2,4}?y{3}+z{,5}", @r#"
    concatenation
      quant_{2,4}?
        atom char "x"
      quant_{3}+
        atom char "y"
      quant_{,5}
        atom char "z"
    "#);
}

#[test]
fn custom_class_members() {
    shot_ast!(r"[^a-z\d[:alpha:][xy]]", @r#"
    customCharacterClass(inverted)
      range char "a" - char "z"
      class \d
      posix [:alpha:]
      customCharacterClass
        char "x"
        char "y"
    "#);
}

#[test]
fn group_transform_dumps_its_group() {
    let upper = Transform::new("upper", |s| s.to_uppercase());
    let ast = Ast::GroupTransform(Group::new(GroupKind::Capture, Ast::char("a")), upper);

    insta::assert_snapshot!(ast.dump(), @r#"
    groupTransform<upper> group_capture
      atom char "a"
    "#);
}

#[test]
fn empty_pattern() {
    assert_eq!(Ast::Empty.dump(), "empty\n");
    let star = Ast::quantification(Amount::ZeroOrMore, QuantKind::Eager, Ast::Empty);
    assert_eq!(star.dump(), "quant_*\n  empty\n");
}
