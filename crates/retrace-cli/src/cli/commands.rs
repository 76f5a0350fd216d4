//! Command builders for the CLI.
//!
//! Every command accepts the same flags so a command line can be switched
//! between `ast`, `dump`, `exec` and `trace` by changing only the verb.
//! Flags a command ignores are hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Add hidden subject args (for commands that don't run the pattern).
fn with_hidden_subject_args(cmd: Command) -> Command {
    cmd.arg(subject_arg().hide(true))
        .arg(subject_file_arg().hide(true))
}

/// Add hidden runtime args (for commands that don't run the pattern).
fn with_hidden_runtime_args(cmd: Command) -> Command {
    cmd.arg(fuel_arg().hide(true))
        .arg(verbose_arg().hide(true))
        .arg(whole_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("retrace")
        .about("Compile, inspect and trace backtracking regexes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Show the parsed pattern tree.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the pattern tree")
        .after_help(
            r#"EXAMPLES:
  retrace ast 'a(b|c)*d'
  retrace ast --level scalar '\w+'
  retrace ast --syntax experimental '"a b" c+'"#,
        )
        .arg(pattern_arg())
        .arg(syntax_arg())
        .arg(level_arg())
        .arg(color_arg());

    with_hidden_runtime_args(with_hidden_subject_args(cmd))
}

/// Show compiled bytecode.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled program")
        .after_help(
            r#"EXAMPLES:
  retrace dump 'a{2,4}?'
  retrace dump --level scalar '(?>a|ab)c'"#,
        )
        .arg(pattern_arg())
        .arg(syntax_arg())
        .arg(level_arg())
        .arg(color_arg());

    with_hidden_runtime_args(with_hidden_subject_args(cmd))
}

/// Find the leftmost match in a subject.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Find the leftmost match of a pattern in a subject")
        .after_help(
            r#"EXAMPLES:
  retrace exec 'b+' 'abbbc'              # prints 1..4 "bbb"
  retrace exec --whole 'a|ab' 'ab'       # whole-subject match
  retrace exec 'x+' -f input.txt         # subject from a file"#,
        )
        .arg(pattern_arg())
        .arg(subject_arg())
        .arg(subject_file_arg())
        .arg(syntax_arg())
        .arg(level_arg())
        .arg(fuel_arg())
        .arg(whole_arg())
        .arg(color_arg());

    cmd.arg(verbose_arg().hide(true))
}

/// Trace execution step by step.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace execution for debugging")
        .after_help(
            r#"EXAMPLES:
  retrace trace 'a|ab' 'ab'              # instructions and backtracks
  retrace trace -v '(?>a*)b' 'aab'       # also checkpoints and cuts
  retrace trace -vv 'a{2}' 'aa'          # also input positions"#,
        )
        .arg(pattern_arg())
        .arg(subject_arg())
        .arg(subject_file_arg())
        .arg(syntax_arg())
        .arg(level_arg())
        .arg(fuel_arg())
        .arg(verbose_arg())
        .arg(color_arg())
        .arg(whole_arg().hide(true))
}
