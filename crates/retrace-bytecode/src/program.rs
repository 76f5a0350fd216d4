use crate::ids::{Address, StringId};
use crate::instructions::Instruction;
use crate::invariants::ensure_string;

/// An assembled program.
///
/// Immutable and freely shareable between concurrent executions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    strings: Vec<String>,
    registers: Vec<u32>,
    pos_registers: usize,
}

impl Program {
    pub(crate) fn new(
        instructions: Vec<Instruction>,
        strings: Vec<String>,
        registers: Vec<u32>,
        pos_registers: usize,
    ) -> Self {
        Self {
            instructions,
            strings,
            registers,
            pos_registers,
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, address: Address) -> Option<&Instruction> {
        self.instructions.get(address.index())
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    /// # Panics
    /// If `id` is not from this program.
    pub fn string(&self, id: StringId) -> &str {
        ensure_string(id, &self.strings)
    }

    /// Initial value of each register, indexed by register number.
    pub fn initial_registers(&self) -> &[u32] {
        &self.registers
    }

    pub fn register_count(&self) -> usize {
        self.registers.len()
    }

    /// Number of position registers; all start unmarked.
    pub fn pos_register_count(&self) -> usize {
        self.pos_registers
    }

    /// Number of instructions satisfying `pred`.
    pub fn count(&self, pred: impl Fn(&Instruction) -> bool) -> usize {
        self.instructions.iter().filter(|inst| pred(inst)).count()
    }
}
