use crate::shot_bytecode;
use crate::test_utils::program;

#[test]
fn capture_groups_are_transparent() {
    assert_eq!(program("(a)(?<n>b)(?:c)(?|d)(?i:e)"), program("abcde"));
}

#[test]
fn atomic_group() {
    shot_bytecode!("(?>a+)b", @r#"
    (?>a+)b
    ---
    [code]
    0  fence
    1  match "a"
    2  split @1, save @3
    3  cut
    4  match "b"
    5  accept
    "#);
}

#[test]
fn lookahead() {
    shot_bytecode!("(?=ab)", @r#"
    (?=ab)
    ---
    [code]
    0  fence
    1  match "a"
    2  match "b"
    3  cut restore
    4  accept
    "#);
}

#[test]
fn negative_lookahead() {
    shot_bytecode!("(?!a)b", @r#"
    (?!a)b
    ---
    [code]
    0  save @6
    1  fence
    2  match "a"
    3  cut
    4  clear
    5  fail
    6  match "b"
    7  accept
    "#);
}
