use retrace_core::{ClassKind, ClassPredicate, Colors, MatchLevel};

use crate::{ProgramBuilder, dump, width_for_count};

#[test]
fn dump_all_sections() {
    let mut b = ProgramBuilder::new();
    let r0 = b.make_int_register(2);
    let body = b.make_address();
    let exit = b.make_address();

    b.build_reset(r0);
    b.label(body);
    b.build_match("a", MatchLevel::GraphemeCluster);
    b.build_cond_branch(exit, r0);
    b.build_split(body, exit);
    b.label(exit);
    b.build_match_sequence("xy", MatchLevel::GraphemeCluster);
    b.build_consume(ClassPredicate::new(ClassKind::Digit), MatchLevel::UnicodeScalar);
    b.build_cut(true);
    b.build_accept();

    let program = b.assemble();
    insta::assert_snapshot!(dump(&program, Colors::OFF), @r#"
    [registers]
    R0 = 2

    [strings]
    S0 "xy"

    [code]
    0  reset R0
    1  match "a"
    2  cond_branch R0, @4
    3  split @1, save @4
    4  match_seq S0  "xy"
    5  consume \d @scalar
    6  cut restore
    7  accept
    "#);
}

#[test]
fn dump_code_only() {
    let mut b = ProgramBuilder::new();
    b.build_advance(1);
    b.build_save_placeholder();
    b.build_clear();
    b.build_fence();
    b.build_cut(false);
    b.build_fail();
    b.build_accept();

    let program = b.assemble();
    insta::assert_snapshot!(dump(&program, Colors::OFF), @r"
    [code]
    0  advance 1
    1  save_placeholder
    2  clear
    3  fence
    4  cut
    5  fail
    6  accept
    ");
}

#[test]
fn colored_dump_wraps_headers() {
    let mut b = ProgramBuilder::new();
    b.build_accept();
    let out = dump(&b.assemble(), Colors::ON);
    assert!(out.starts_with("\x1b[34m[code]\x1b[0m\n"), "{out:?}");
}

#[test]
fn widths() {
    assert_eq!(width_for_count(0), 1);
    assert_eq!(width_for_count(1), 1);
    assert_eq!(width_for_count(10), 1);
    assert_eq!(width_for_count(11), 2);
    assert_eq!(width_for_count(101), 3);
}

#[test]
fn dump_position_registers() {
    let mut b = ProgramBuilder::new();
    let r0 = b.make_int_register(1);
    let p0 = b.make_pos_register();
    let exit = b.make_address();

    b.build_reset(r0);
    b.build_unmark(p0);
    b.build_mark(p0);
    b.build_check_progress(exit, p0);
    b.label(exit);
    b.build_accept();

    let program = b.assemble();
    insta::assert_snapshot!(dump(&program, Colors::OFF), @r"
    [registers]
    R0 = 1
    P0 = unmarked

    [code]
    0  reset R0
    1  unmark P0
    2  mark P0
    3  check_progress P0, @4
    4  accept
    ");
}
