use retrace_lib::Colors;

use super::exec::format_match;

#[test]
fn plain_match() {
    assert_eq!(format_match("xxabcd", 2..6, Colors::OFF), "2..6 \"abcd\"");
}

#[test]
fn empty_match_at_end() {
    assert_eq!(format_match("abc", 3..3, Colors::OFF), "3..3 \"\"");
}

#[test]
fn colored_match() {
    let colors = Colors::new(true);
    let out = format_match("café", 0..5, colors);
    assert_eq!(out, format!("0..5 {}\"café\"{}", colors.green, colors.reset));
}
