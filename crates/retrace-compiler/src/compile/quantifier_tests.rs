use retrace_bytecode::Instruction;

use crate::shot_bytecode;
use crate::test_utils::program;

fn registers(pattern: &str) -> usize {
    program(pattern).register_count()
}

#[test]
fn star() {
    shot_bytecode!("a*", @r#"
    a*
    ---
    [code]
    0  branch @2
    1  match "a"
    2  split @1, save @3
    3  accept
    "#);
}

#[test]
fn plus() {
    shot_bytecode!("a+", @r#"
    a+
    ---
    [code]
    0  match "a"
    1  split @0, save @2
    2  accept
    "#);
}

#[test]
fn optional() {
    shot_bytecode!("a?", @r#"
    a?
    ---
    [registers]
    R0 = 1

    [code]
    0  reset R0
    1  branch @3
    2  match "a"
    3  cond_branch R0, @5
    4  split @2, save @5
    5  accept
    "#);
}

#[test]
fn exact_count() {
    shot_bytecode!("a{3}", @r#"
    a{3}
    ---
    [registers]
    R0 = 3

    [code]
    0  reset R0
    1  cond_branch R0, @4
    2  match "a"
    3  branch @1
    4  branch @6
    5  split @2, save @6
    6  accept
    "#);
}

#[test]
fn bounded_range() {
    shot_bytecode!("a{2,4}", @r#"
    a{2,4}
    ---
    [registers]
    R0 = 2
    R1 = 2

    [code]
    0  reset R0
    1  reset R1
    2  cond_branch R0, @5
    3  match "a"
    4  branch @2
    5  cond_branch R1, @7
    6  split @3, save @7
    7  accept
    "#);
}

#[test]
fn reluctant_range() {
    shot_bytecode!("a{2,4}?", @r#"
    a{2,4}?
    ---
    [registers]
    R0 = 2
    R1 = 2

    [code]
    0  reset R0
    1  reset R1
    2  cond_branch R0, @5
    3  match "a"
    4  branch @2
    5  cond_branch R1, @7
    6  save @3
    7  accept
    "#);
}

#[test]
fn possessive_star() {
    shot_bytecode!("a*+", @r#"
    a*+
    ---
    [code]
    0  save_placeholder
    1  branch @5
    2  fence
    3  match "a"
    4  cut
    5  clear
    6  split @2, save @7
    7  accept
    "#);
}

#[test]
fn nested_loop_resets_inner_counter() {
    shot_bytecode!("(a{2}b)*", @r#"
    (a{2}b)*
    ---
    [registers]
    R0 = 2

    [code]
    0  branch @8
    1  reset R0
    2  cond_branch R0, @5
    3  match "a"
    4  branch @2
    5  branch @7
    6  split @3, save @7
    7  match "b"
    8  split @1, save @9
    9  accept
    "#);
}

#[test]
fn register_allocation_is_demand_driven() {
    assert_eq!(registers("a*"), 0);
    assert_eq!(registers("a+"), 0);
    assert_eq!(registers("a*?"), 0);
    assert_eq!(registers("a++"), 0);
    assert_eq!(registers("a{1,}"), 0);
    assert_eq!(registers("a{3,}"), 1);
    assert_eq!(registers("a{4}"), 1);
    assert_eq!(registers("a{1,3}"), 1);
    assert_eq!(registers("a{2,5}"), 2);
    assert_eq!(registers("a{2,5}+"), 2);
    assert_eq!(registers("a{3,}b{2,5}"), 3);
}

#[test]
fn degenerate_bounds_emit_nothing() {
    for pattern in ["a{0,0}", "a{0}", "(a|b){0}", "a{5,2}", "a{,0}"] {
        assert_eq!(program(pattern).instructions(), &[Instruction::Accept], "{pattern}");
    }
    assert_eq!(program("xa{0}y").len(), program("xy").len());
}

#[test]
fn possessive_clears_before_every_exit() {
    let program = program("a{1,3}+");
    let insts = program.instructions();

    let clear = insts
        .iter()
        .position(|i| *i == Instruction::Clear)
        .expect("possessive loop clears");
    assert!(matches!(insts[clear + 1], Instruction::CondBranch { .. }));
    assert!(matches!(insts[clear + 2], Instruction::Split { .. }));
    assert_eq!(program.count(|i| *i == Instruction::SavePlaceholder), 1);
    assert_eq!(program.count(|i| *i == Instruction::Fence), 1);
    assert_eq!(program.count(|i| *i == Instruction::Cut { restore: false }), 1);
}

#[test]
fn empty_body_checks_progress() {
    shot_bytecode!("(?:a*)*", @r#"
    (?:a*)*
    ---
    [registers]
    P0 = unmarked

    [code]
    0  unmark P0
    1  branch @6
    2  mark P0
    3  branch @5
    4  match "a"
    5  split @4, save @6
    6  check_progress P0, @8
    7  split @2, save @8
    8  accept
    "#);
}

#[test]
fn progress_checks_only_where_a_pass_can_be_empty() {
    let pos_registers = |pattern: &str| program(pattern).pos_register_count();

    assert_eq!(pos_registers("a*"), 0);
    assert_eq!(pos_registers("(ab)+"), 0);
    assert_eq!(pos_registers("(a*){0,3}"), 0);
    assert_eq!(pos_registers("(a*)*"), 1);
    assert_eq!(pos_registers("(a|b?)+"), 1);
    assert_eq!(pos_registers("(?:)*"), 1);
    assert_eq!(pos_registers("(?=a)*"), 1);
    assert_eq!(pos_registers("(a?b?){2,}"), 1);
    assert_eq!(pos_registers("((a*)*)*"), 2);
}
