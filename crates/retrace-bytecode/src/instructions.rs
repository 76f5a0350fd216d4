//! The instruction set.
//!
//! Control flow is explicit: every instruction falls through to the next
//! one unless it branches, fails or accepts.

use std::fmt;

use retrace_core::{ClassPredicate, MatchLevel};

use crate::ids::{Address, IntRegister, PosRegister, StringId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Consume `n` grapheme clusters; fail if fewer remain.
    Advance(u32),
    /// Consume one unit iff it equals `text`.
    ///
    /// At grapheme level the unit is the next cluster; at scalar level `text`
    /// must be a prefix of the remaining input.
    Match { text: String, level: MatchLevel },
    /// Consume iff the remaining input starts with the constant string.
    ///
    /// At grapheme level the match must also end on a cluster boundary.
    MatchSequence { string: StringId, level: MatchLevel },
    /// Consume one unit iff `predicate` accepts it.
    Consume {
        predicate: ClassPredicate,
        level: MatchLevel,
    },
    /// Push a checkpoint resuming at the address.
    Save(Address),
    /// Push a checkpoint that only gets discarded when backtracked into.
    SavePlaceholder,
    /// Unconditional jump.
    Branch(Address),
    /// Jump if the register is zero, else decrement it and fall through.
    CondBranch { to: Address, register: IntRegister },
    /// Push a checkpoint resuming at `saving`, then jump to `to`.
    Split { to: Address, saving: Address },
    /// Drop the most recent checkpoint.
    Clear,
    /// Restore a register to its initial value.
    Reset(IntRegister),
    /// Record the input position.
    Mark(PosRegister),
    /// Forget the recorded position.
    Unmark(PosRegister),
    /// Jump if the input has not moved since the register was marked.
    CheckProgress { exit: Address, register: PosRegister },
    /// Push a barrier checkpoint for a later `Cut`.
    Fence,
    /// Drop every checkpoint above and including the nearest fence.
    ///
    /// With `restore`, also rewind the input to where the fence was pushed.
    Cut { restore: bool },
    /// Backtrack.
    Fail,
    /// Stop with a successful match.
    Accept,
}

impl Instruction {
    /// Rewrite every address through `f`.
    pub(crate) fn map_addresses(self, mut f: impl FnMut(Address) -> Address) -> Self {
        match self {
            Instruction::Save(a) => Instruction::Save(f(a)),
            Instruction::Branch(a) => Instruction::Branch(f(a)),
            Instruction::CondBranch { to, register } => Instruction::CondBranch {
                to: f(to),
                register,
            },
            Instruction::Split { to, saving } => Instruction::Split {
                to: f(to),
                saving: f(saving),
            },
            Instruction::CheckProgress { exit, register } => Instruction::CheckProgress {
                exit: f(exit),
                register,
            },
            other => other,
        }
    }

    /// Whether this instruction pushes a checkpoint.
    pub fn is_checkpoint_push(&self) -> bool {
        matches!(
            self,
            Instruction::Save(_)
                | Instruction::SavePlaceholder
                | Instruction::Split { .. }
                | Instruction::Fence
        )
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Advance(_) => "advance",
            Instruction::Match { .. } => "match",
            Instruction::MatchSequence { .. } => "match_seq",
            Instruction::Consume { .. } => "consume",
            Instruction::Save(_) => "save",
            Instruction::SavePlaceholder => "save_placeholder",
            Instruction::Branch(_) => "branch",
            Instruction::CondBranch { .. } => "cond_branch",
            Instruction::Split { .. } => "split",
            Instruction::Clear => "clear",
            Instruction::Reset(_) => "reset",
            Instruction::Mark(_) => "mark",
            Instruction::Unmark(_) => "unmark",
            Instruction::CheckProgress { .. } => "check_progress",
            Instruction::Fence => "fence",
            Instruction::Cut { .. } => "cut",
            Instruction::Fail => "fail",
            Instruction::Accept => "accept",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.mnemonic();
        match self {
            Instruction::Advance(n) => write!(f, "{name} {n}"),
            Instruction::Match { text, level } => write!(f, "{name} {text:?}{}", level_suffix(*level)),
            Instruction::MatchSequence { string, level } => {
                write!(f, "{name} {string}{}", level_suffix(*level))
            }
            Instruction::Consume { predicate, level } => {
                write!(f, "{name} {predicate}{}", level_suffix(*level))
            }
            Instruction::Save(a) | Instruction::Branch(a) => write!(f, "{name} {a}"),
            Instruction::CondBranch { to, register } => write!(f, "{name} {register}, {to}"),
            Instruction::Split { to, saving } => write!(f, "{name} {to}, save {saving}"),
            Instruction::Reset(register) => write!(f, "{name} {register}"),
            Instruction::Mark(register) | Instruction::Unmark(register) => {
                write!(f, "{name} {register}")
            }
            Instruction::CheckProgress { exit, register } => {
                write!(f, "{name} {register}, {exit}")
            }
            Instruction::Cut { restore: true } => write!(f, "{name} restore"),
            Instruction::SavePlaceholder
            | Instruction::Clear
            | Instruction::Fence
            | Instruction::Cut { restore: false }
            | Instruction::Fail
            | Instruction::Accept => f.write_str(name),
        }
    }
}

fn level_suffix(level: MatchLevel) -> &'static str {
    match level {
        MatchLevel::GraphemeCluster => "",
        MatchLevel::UnicodeScalar => " @scalar",
    }
}
