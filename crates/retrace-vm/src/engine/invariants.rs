//! Invariant checks excluded from coverage reports.
//!
//! A well-formed program never trips these; they catch compiler bugs.

#![cfg_attr(coverage_nightly, coverage(off))]

use retrace_bytecode::{Address, Instruction, Program};

use super::checkpoint::Checkpoint;

pub(super) fn ensure_instruction(program: &Program, ip: Address) -> &Instruction {
    program.get(ip).unwrap_or_else(|| {
        panic!(
            "VM: ran off the end of the program at {ip} ({} instructions)",
            program.len()
        )
    })
}

pub(super) fn ensure_start(subject: &str, start: usize) {
    assert!(
        subject.is_char_boundary(start),
        "VM: start offset {start} is not a char boundary of a {}-byte subject",
        subject.len()
    );
}

pub(super) fn ensure_cleared(popped: Option<Checkpoint>, ip: Address) {
    if popped.is_none() {
        panic!("VM: clear at {ip} with no checkpoint to drop");
    }
}

pub(super) fn ensure_fence(
    cut: Option<(Checkpoint, usize)>,
    ip: Address,
) -> (Checkpoint, usize) {
    cut.unwrap_or_else(|| panic!("VM: cut at {ip} without a matching fence"))
}
