//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The same arg definition is reused across commands, hidden (via
//! `.hide(true)`) where it has no effect.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern text (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Regex pattern")
}

/// Subject text (positional).
pub fn subject_arg() -> Arg {
    Arg::new("subject")
        .value_name("SUBJECT")
        .help("Text to match against")
}

/// Subject from file (-f/--subject-file).
pub fn subject_file_arg() -> Arg {
    Arg::new("subject_file")
        .short('f')
        .long("subject-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("subject")
        .help("Read the subject from a file (use \"-\" for stdin)")
}

/// Surface syntax (--syntax).
pub fn syntax_arg() -> Arg {
    Arg::new("syntax")
        .long("syntax")
        .value_name("SYNTAX")
        .default_value("traditional")
        .value_parser(["traditional", "experimental"])
        .help("Pattern syntax")
}

/// Match level (--level).
pub fn level_arg() -> Arg {
    Arg::new("level")
        .long("level")
        .value_name("LEVEL")
        .default_value("grapheme")
        .value_parser(["grapheme", "scalar"])
        .help("Match by grapheme cluster or by Unicode scalar")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Execution fuel limit per match attempt")
}

/// Require the match to cover the whole subject (--whole).
pub fn whole_arg() -> Arg {
    Arg::new("whole")
        .long("whole")
        .action(ArgAction::SetTrue)
        .help("Only succeed if the pattern matches the entire subject")
}
