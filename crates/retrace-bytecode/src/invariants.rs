//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::ids::{Address, IntRegister, PosRegister, StringId};

pub(crate) fn ensure_unplaced(address: Address, placed: Option<u32>) {
    if let Some(at) = placed {
        panic!("ProgramBuilder: address {address} already placed at instruction {at}");
    }
}

pub(crate) fn ensure_placed(address: Address, placed: Option<u32>) -> u32 {
    placed.unwrap_or_else(|| {
        panic!("ProgramBuilder: address {address} was never placed (missing label call)")
    })
}

pub(crate) fn ensure_known_address(address: Address, count: usize) {
    assert!(
        address.index() < count,
        "ProgramBuilder: address {address} was not made by this builder"
    );
}

pub(crate) fn ensure_known_register(register: IntRegister, count: usize) {
    assert!(
        register.index() < count,
        "ProgramBuilder: register {register} was not made by this builder"
    );
}

pub(crate) fn ensure_known_pos_register(register: PosRegister, count: usize) {
    assert!(
        register.index() < count,
        "ProgramBuilder: register {register} was not made by this builder"
    );
}

pub(crate) fn ensure_string(id: StringId, strings: &[String]) -> &str {
    strings
        .get(id.index())
        .map(String::as_str)
        .unwrap_or_else(|| panic!("Program: string {id} out of range ({} strings)", strings.len()))
}
