//! Human-readable program listing.
//!
//! ```text
//! [registers]
//! R0 = 2
//! P0 = unmarked
//!
//! [strings]
//! S0 "abc"
//!
//! [code]
//! 0  match "a"
//! 1  accept
//! ```
//!
//! Empty `[registers]` and `[strings]` sections are left out.

use std::fmt::Write as _;

use retrace_core::Colors;

use crate::instructions::Instruction;
use crate::program::Program;

pub fn dump(program: &Program, colors: Colors) -> String {
    let mut out = String::new();
    dump_registers(&mut out, program, colors);
    dump_strings(&mut out, program, colors);
    dump_code(&mut out, program, colors);
    out
}

/// Digits needed to print indices below `count`.
pub fn width_for_count(count: usize) -> usize {
    count.saturating_sub(1).max(1).to_string().len()
}

fn dump_registers(out: &mut String, program: &Program, c: Colors) {
    let registers = program.initial_registers();
    let positions = program.pos_register_count();
    if registers.is_empty() && positions == 0 {
        return;
    }

    writeln!(out, "{}[registers]{}", c.blue, c.reset).unwrap();
    for (i, initial) in registers.iter().enumerate() {
        writeln!(out, "{}R{i}{} = {initial}", c.dim, c.reset).unwrap();
    }
    for i in 0..positions {
        writeln!(out, "{}P{i}{} = unmarked", c.dim, c.reset).unwrap();
    }
    out.push('\n');
}

fn dump_strings(out: &mut String, program: &Program, c: Colors) {
    let strings = program.strings();
    if strings.is_empty() {
        return;
    }

    writeln!(out, "{}[strings]{}", c.blue, c.reset).unwrap();
    let w = width_for_count(strings.len());
    for (i, s) in strings.iter().enumerate() {
        writeln!(out, "S{i:0w$} {}{s:?}{}", c.green, c.reset).unwrap();
    }
    out.push('\n');
}

fn dump_code(out: &mut String, program: &Program, c: Colors) {
    writeln!(out, "{}[code]{}", c.blue, c.reset).unwrap();
    let w = width_for_count(program.len());
    for (i, inst) in program.instructions().iter().enumerate() {
        write!(out, "{}{i:0w$}{}  {inst}", c.dim, c.reset).unwrap();
        if let Instruction::MatchSequence { string, .. } = inst {
            write!(out, "  {}{:?}{}", c.green, program.string(*string), c.reset).unwrap();
        }
        out.push('\n');
    }
}
