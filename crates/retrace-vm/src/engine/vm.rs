//! Virtual machine for executing compiled retrace programs.

use retrace_bytecode::{Address, Instruction, IntRegister, PosRegister, Program, StringId};
use retrace_core::text::{is_grapheme_boundary, next_grapheme, next_scalar};
use retrace_core::{ClassPredicate, MatchLevel};

use super::checkpoint::{Checkpoint, CheckpointKind, CheckpointStack};
use super::error::RuntimeError;
use super::invariants::{ensure_cleared, ensure_fence, ensure_instruction, ensure_start};
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for program execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum total steps (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum live checkpoints (default: 1,000,000).
    pub(crate) checkpoint_limit: usize,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            checkpoint_limit: 1_000_000,
        }
    }
}

impl FuelLimits {
    /// Create new fuel limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    /// Set the checkpoint limit.
    pub fn checkpoint_limit(mut self, limit: usize) -> Self {
        self.checkpoint_limit = limit;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }
    pub fn get_checkpoint_limit(&self) -> usize {
        self.checkpoint_limit
    }
}

/// What the dispatch loop does after an instruction.
enum Flow {
    Continue,
    Done(Option<usize>),
}

/// Virtual machine state for one execution.
pub struct VM<'t> {
    /// Text being matched.
    pub(crate) subject: &'t str,
    /// Current instruction pointer.
    pub(crate) ip: Address,
    /// Current input position (byte offset into `subject`).
    pub(crate) pos: usize,
    pub(crate) registers: Vec<u32>,
    /// Input positions recorded by `mark`.
    pub(crate) marks: Vec<Option<usize>>,
    pub(crate) checkpoints: CheckpointStack,
    /// When set, `accept` short of the subject's end backtracks instead.
    pub(crate) accept_at_end: bool,

    // Fuel tracking
    pub(crate) exec_fuel: u32,
    pub(crate) limits: FuelLimits,
}

/// Builder for VM instances.
pub struct VMBuilder<'t> {
    subject: &'t str,
    limits: FuelLimits,
    accept_at_end: bool,
}

impl<'t> VMBuilder<'t> {
    /// Create a new VM builder.
    pub fn new(subject: &'t str) -> Self {
        Self {
            subject,
            limits: FuelLimits::default(),
            accept_at_end: false,
        }
    }

    /// Set the fuel limits.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    /// Set the checkpoint limit.
    pub fn checkpoint_limit(mut self, limit: usize) -> Self {
        self.limits = self.limits.checkpoint_limit(limit);
        self
    }

    /// Only accept paths that consume the rest of the subject.
    pub fn accept_at_end(mut self, yes: bool) -> Self {
        self.accept_at_end = yes;
        self
    }

    /// Build the VM.
    pub fn build(self) -> VM<'t> {
        VM {
            subject: self.subject,
            ip: Address::new(0),
            pos: 0,
            registers: Vec::new(),
            marks: Vec::new(),
            checkpoints: CheckpointStack::new(self.limits.get_checkpoint_limit()),
            accept_at_end: self.accept_at_end,
            exec_fuel: self.limits.get_exec_fuel(),
            limits: self.limits,
        }
    }
}

impl<'t> VM<'t> {
    /// Create a VM builder.
    pub fn builder(subject: &'t str) -> VMBuilder<'t> {
        VMBuilder::new(subject)
    }

    /// Create a VM with the given limits.
    pub fn new(subject: &'t str, limits: FuelLimits) -> Self {
        Self::builder(subject).limits(limits).build()
    }

    /// Run `program` with input starting at byte offset `start`.
    ///
    /// Returns the end offset of the first accepting path, or `None` when
    /// every alternative fails. Uses `NoopTracer`, which gets optimized away.
    ///
    /// # Panics
    /// If `start` is not a char boundary of the subject.
    pub fn execute(self, program: &Program, start: usize) -> Result<Option<usize>, RuntimeError> {
        self.execute_with(program, start, &mut NoopTracer)
    }

    /// Run `program` with a tracer for debugging.
    pub fn execute_with<T: Tracer>(
        mut self,
        program: &Program,
        start: usize,
        tracer: &mut T,
    ) -> Result<Option<usize>, RuntimeError> {
        ensure_start(self.subject, start);
        self.ip = Address::new(0);
        self.pos = start;
        self.registers = program.initial_registers().to_vec();
        self.marks = vec![None; program.pos_register_count()];

        loop {
            // Fuel check
            if self.exec_fuel == 0 {
                return Err(RuntimeError::ExecFuelExhausted(self.limits.exec_fuel));
            }
            self.exec_fuel -= 1;

            // Fetch and dispatch
            let instr = ensure_instruction(program, self.ip);
            tracer.trace_instruction(self.ip, instr, self.pos);

            let flow = match instr {
                Instruction::Advance(n) => self.exec_advance(*n, tracer),
                Instruction::Match { text, level } => self.exec_match(text, *level, tracer),
                Instruction::MatchSequence { string, level } => {
                    self.exec_match_sequence(program, *string, *level, tracer)
                }
                Instruction::Consume { predicate, level } => {
                    self.exec_consume(predicate, *level, tracer)
                }
                Instruction::Save(resume) => {
                    self.push(CheckpointKind::Resume(*resume), tracer)?;
                    self.next()
                }
                Instruction::SavePlaceholder => {
                    self.push(CheckpointKind::Placeholder, tracer)?;
                    self.next()
                }
                Instruction::Branch(to) => self.jump(*to),
                Instruction::CondBranch { to, register } => self.exec_cond_branch(*to, *register),
                Instruction::Split { to, saving } => {
                    self.push(CheckpointKind::Resume(*saving), tracer)?;
                    self.jump(*to)
                }
                Instruction::Clear => {
                    ensure_cleared(self.checkpoints.pop(), self.ip);
                    self.next()
                }
                Instruction::Reset(register) => {
                    self.registers[register.index()] =
                        program.initial_registers()[register.index()];
                    self.next()
                }
                Instruction::Mark(register) => {
                    self.marks[register.index()] = Some(self.pos);
                    self.next()
                }
                Instruction::Unmark(register) => {
                    self.marks[register.index()] = None;
                    self.next()
                }
                Instruction::CheckProgress { exit, register } => {
                    self.exec_check_progress(*exit, *register)
                }
                Instruction::Fence => {
                    self.push(CheckpointKind::Fence, tracer)?;
                    self.next()
                }
                Instruction::Cut { restore } => self.exec_cut(*restore, tracer),
                Instruction::Fail => self.backtrack(tracer),
                Instruction::Accept => self.exec_accept(tracer),
            };

            if let Flow::Done(outcome) = flow {
                return Ok(outcome);
            }
        }
    }

    fn next(&mut self) -> Flow {
        self.ip = Address::new(self.ip.index() as u32 + 1);
        Flow::Continue
    }

    fn jump(&mut self, to: Address) -> Flow {
        self.ip = to;
        Flow::Continue
    }

    /// Consume `len` bytes of input and fall through.
    fn consume<T: Tracer>(&mut self, len: usize, tracer: &mut T) -> Flow {
        let end = self.pos + len;
        tracer.trace_consume(&self.subject[self.pos..end]);
        self.pos = end;
        self.next()
    }

    fn reject<T: Tracer>(&mut self, tracer: &mut T) -> Flow {
        tracer.trace_consume_failure(self.pos);
        self.backtrack(tracer)
    }

    fn push<T: Tracer>(&mut self, kind: CheckpointKind, tracer: &mut T) -> Result<(), RuntimeError> {
        let checkpoint = Checkpoint::new(
            kind,
            self.pos,
            self.registers.clone(),
            self.marks.clone(),
        );
        self.checkpoints.push(checkpoint)?;
        tracer.trace_checkpoint_created(kind, self.checkpoints.len());
        Ok(())
    }

    /// Resume from the most recent resumable checkpoint.
    ///
    /// Placeholders and fences are discarded on the way down.
    fn backtrack<T: Tracer>(&mut self, tracer: &mut T) -> Flow {
        while let Some(cp) = self.checkpoints.pop() {
            let CheckpointKind::Resume(resume) = cp.kind else {
                continue;
            };
            tracer.trace_backtrack(resume, cp.pos);
            self.ip = resume;
            self.pos = cp.pos;
            self.registers = cp.registers;
            self.marks = cp.marks;
            return Flow::Continue;
        }
        tracer.trace_no_match();
        Flow::Done(None)
    }

    fn exec_advance<T: Tracer>(&mut self, n: u32, tracer: &mut T) -> Flow {
        let mut len = 0;
        for _ in 0..n {
            let Some(g) = next_grapheme(self.subject, self.pos + len) else {
                return self.reject(tracer);
            };
            len += g.len();
        }
        self.consume(len, tracer)
    }

    fn exec_match<T: Tracer>(&mut self, text: &str, level: MatchLevel, tracer: &mut T) -> Flow {
        let hit = match level {
            MatchLevel::GraphemeCluster => next_grapheme(self.subject, self.pos) == Some(text),
            MatchLevel::UnicodeScalar => self.subject[self.pos..].starts_with(text),
        };
        if hit {
            self.consume(text.len(), tracer)
        } else {
            self.reject(tracer)
        }
    }

    fn exec_match_sequence<T: Tracer>(
        &mut self,
        program: &Program,
        string: StringId,
        level: MatchLevel,
        tracer: &mut T,
    ) -> Flow {
        let text = program.string(string);
        let mut hit = self.subject[self.pos..].starts_with(text);
        if hit && level.is_grapheme() {
            hit = is_grapheme_boundary(self.subject, self.pos + text.len());
        }
        if hit {
            self.consume(text.len(), tracer)
        } else {
            self.reject(tracer)
        }
    }

    fn exec_consume<T: Tracer>(
        &mut self,
        predicate: &ClassPredicate,
        level: MatchLevel,
        tracer: &mut T,
    ) -> Flow {
        let len = if level.is_grapheme() || predicate.consumes_grapheme() {
            next_grapheme(self.subject, self.pos)
                .filter(|g| predicate.matches_grapheme(g))
                .map(str::len)
        } else {
            next_scalar(self.subject, self.pos)
                .filter(|c| predicate.matches_scalar(*c))
                .map(char::len_utf8)
        };
        match len {
            Some(len) => self.consume(len, tracer),
            None => self.reject(tracer),
        }
    }

    fn exec_cond_branch(&mut self, to: Address, register: IntRegister) -> Flow {
        let r = register.index();
        if self.registers[r] == 0 {
            return self.jump(to);
        }
        self.registers[r] -= 1;
        self.next()
    }

    /// Leave the loop when the pass since the mark consumed nothing.
    fn exec_check_progress(&mut self, exit: Address, register: PosRegister) -> Flow {
        if self.marks[register.index()] == Some(self.pos) {
            return self.jump(exit);
        }
        self.next()
    }

    fn exec_accept<T: Tracer>(&mut self, tracer: &mut T) -> Flow {
        if self.accept_at_end && self.pos != self.subject.len() {
            return self.reject(tracer);
        }
        tracer.trace_accept(self.pos);
        Flow::Done(Some(self.pos))
    }

    fn exec_cut<T: Tracer>(&mut self, restore: bool, tracer: &mut T) -> Flow {
        let (fence, dropped) = ensure_fence(self.checkpoints.cut_to_fence(), self.ip);
        if restore {
            self.pos = fence.pos;
        }
        tracer.trace_cut(dropped, self.pos);
        self.next()
    }
}
