//! Incremental program construction.
//!
//! Code is appended linearly. Jump targets are symbolic addresses made up
//! front with [`ProgramBuilder::make_address`] and bound to the next
//! instruction with [`ProgramBuilder::label`]; `assemble` resolves them.

use retrace_core::{ClassPredicate, MatchLevel};

use crate::ids::{Address, IntRegister, PosRegister, StringId};
use crate::instructions::Instruction;
use crate::invariants::{
    ensure_known_address, ensure_known_pos_register, ensure_known_register, ensure_placed,
    ensure_unplaced,
};
use crate::program::Program;
use crate::strings::StringTableBuilder;

#[derive(Debug, Default)]
pub struct ProgramBuilder {
    instructions: Vec<Instruction>,
    /// Instruction index each address is bound to.
    addresses: Vec<Option<u32>>,
    /// Initial value of each register.
    registers: Vec<u32>,
    pos_registers: usize,
    strings: StringTableBuilder,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an unbound code address.
    pub fn make_address(&mut self) -> Address {
        let address = Address(self.addresses.len() as u32);
        self.addresses.push(None);
        address
    }

    /// Bind `address` to the next instruction emitted.
    pub fn label(&mut self, address: Address) {
        ensure_known_address(address, self.addresses.len());
        let slot = &mut self.addresses[address.index()];
        ensure_unplaced(address, *slot);
        *slot = Some(self.instructions.len() as u32);
    }

    /// Allocate a counter register seeded with `initial`.
    pub fn make_int_register(&mut self, initial: u32) -> IntRegister {
        let register = IntRegister(self.registers.len() as u16);
        self.registers.push(initial);
        register
    }

    /// Allocate a position register, initially unmarked.
    pub fn make_pos_register(&mut self) -> PosRegister {
        let register = PosRegister(self.pos_registers as u16);
        self.pos_registers += 1;
        register
    }

    pub fn intern(&mut self, text: &str) -> StringId {
        self.strings.intern(text)
    }

    /// Number of instructions emitted so far.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn register_count(&self) -> usize {
        self.registers.len()
    }

    pub fn pos_register_count(&self) -> usize {
        self.pos_registers
    }

    pub fn build_advance(&mut self, n: u32) {
        self.push(Instruction::Advance(n));
    }

    pub fn build_match(&mut self, text: impl Into<String>, level: MatchLevel) {
        self.push(Instruction::Match {
            text: text.into(),
            level,
        });
    }

    pub fn build_match_sequence(&mut self, text: &str, level: MatchLevel) {
        let string = self.intern(text);
        self.push(Instruction::MatchSequence { string, level });
    }

    pub fn build_consume(&mut self, predicate: ClassPredicate, level: MatchLevel) {
        self.push(Instruction::Consume { predicate, level });
    }

    pub fn build_save(&mut self, resume: Address) {
        self.check_address(resume);
        self.push(Instruction::Save(resume));
    }

    pub fn build_save_placeholder(&mut self) {
        self.push(Instruction::SavePlaceholder);
    }

    pub fn build_branch(&mut self, to: Address) {
        self.check_address(to);
        self.push(Instruction::Branch(to));
    }

    pub fn build_cond_branch(&mut self, to: Address, register: IntRegister) {
        self.check_address(to);
        ensure_known_register(register, self.registers.len());
        self.push(Instruction::CondBranch { to, register });
    }

    pub fn build_split(&mut self, to: Address, saving: Address) {
        self.check_address(to);
        self.check_address(saving);
        self.push(Instruction::Split { to, saving });
    }

    pub fn build_clear(&mut self) {
        self.push(Instruction::Clear);
    }

    pub fn build_reset(&mut self, register: IntRegister) {
        ensure_known_register(register, self.registers.len());
        self.push(Instruction::Reset(register));
    }

    pub fn build_mark(&mut self, register: PosRegister) {
        ensure_known_pos_register(register, self.pos_registers);
        self.push(Instruction::Mark(register));
    }

    pub fn build_unmark(&mut self, register: PosRegister) {
        ensure_known_pos_register(register, self.pos_registers);
        self.push(Instruction::Unmark(register));
    }

    pub fn build_check_progress(&mut self, exit: Address, register: PosRegister) {
        self.check_address(exit);
        ensure_known_pos_register(register, self.pos_registers);
        self.push(Instruction::CheckProgress { exit, register });
    }

    pub fn build_fence(&mut self) {
        self.push(Instruction::Fence);
    }

    pub fn build_cut(&mut self, restore: bool) {
        self.push(Instruction::Cut { restore });
    }

    pub fn build_fail(&mut self) {
        self.push(Instruction::Fail);
    }

    pub fn build_accept(&mut self) {
        self.push(Instruction::Accept);
    }

    /// Resolve every address and freeze the program.
    ///
    /// # Panics
    /// If an address used by an instruction was never labeled.
    pub fn assemble(self) -> Program {
        let resolved: Vec<Option<u32>> = self.addresses;
        let instructions = self
            .instructions
            .into_iter()
            .map(|inst| {
                inst.map_addresses(|address| {
                    Address(ensure_placed(address, resolved[address.index()]))
                })
            })
            .collect();

        Program::new(
            instructions,
            self.strings.into_strings(),
            self.registers,
            self.pos_registers,
        )
    }

    fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    fn check_address(&self, address: Address) {
        ensure_known_address(address, self.addresses.len());
    }
}
