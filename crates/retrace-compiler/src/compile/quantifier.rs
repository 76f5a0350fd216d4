//! Unified quantifier lowering.
//!
//! Every repetition is one loop of four blocks:
//!
//! ```text
//!   min-trips:    if %min is zero goto exit-policy, else decrement
//!   loop-body:    [mark %pos]
//!                 <child>
//!                 goto min-trips
//!   exit-policy:  [if input did not move since %pos goto exit]
//!                 if %extra is zero goto exit, else decrement
//!                 eager:      split loop-body, save exit
//!                 possessive: clear; split loop-body, save exit
//!                 reluctant:  save loop-body
//!   exit:
//! ```
//!
//! Blocks collapse when bounds are trivial: `min` of 0 or 1 and `extra`
//! of 0 or unbounded need no register. Registers are reset on loop entry
//! so a loop nested in another loop starts every outer pass fresh.
//!
//! An unbounded loop whose body can match empty also gets the bracketed
//! position check. `%pos` is unmarked on loop entry and marked at the top of
//! every pass, and exit-policy leaves the loop once a pass consumed nothing,
//! so such a loop always terminates.
//!
//! Possessive loops push a placeholder checkpoint on entry and fence each
//! pass of the body, so the `clear` at the head of exit-policy always drops
//! this loop's own checkpoint: the placeholder on the first visit, the
//! previous `split` afterwards.

use retrace_syntax::{Ast, Atom, GroupKind, QuantKind, Quantification};

use super::compiler::Compiler;
use super::error::CompileResult;

impl Compiler<'_> {
    pub(super) fn emit_quantification(&mut self, quant: &Quantification) -> CompileResult<()> {
        let (low, high) = quant.amount.bounds();
        match high {
            // Degenerate bounds match nothing.
            Some(0) => Ok(()),
            Some(high) if low > high => Ok(()),
            _ => self.compile_quantification(low, high, quant.kind, &quant.child),
        }
    }

    fn compile_quantification(
        &mut self,
        low: u32,
        high: Option<u32>,
        kind: QuantKind,
        child: &Ast,
    ) -> CompileResult<()> {
        debug_assert!(high != Some(0));
        debug_assert!(high.is_none_or(|high| low <= high));

        let extra_trips = high.map(|high| high - low);
        let possessive = kind == QuantKind::Possessive;

        let min_trips_control = self.builder.make_address();
        let loop_body = self.builder.make_address();
        let exit_policy = self.builder.make_address();
        let exit = self.builder.make_address();

        let min_trips_reg = (low > 1).then(|| self.builder.make_int_register(low));
        let extra_trips_reg = match extra_trips {
            Some(extra) if extra > 0 => Some(self.builder.make_int_register(extra)),
            _ => None,
        };

        let progress_reg =
            (high.is_none() && can_match_empty(child)).then(|| self.builder.make_pos_register());

        for register in min_trips_reg.iter().chain(extra_trips_reg.iter()) {
            self.builder.build_reset(*register);
        }
        if let Some(register) = progress_reg {
            self.builder.build_unmark(register);
        }

        if possessive {
            self.builder.build_save_placeholder();
        }

        self.builder.label(min_trips_control);
        match min_trips_reg {
            None if low == 0 => self.builder.build_branch(exit_policy),
            None => {}
            Some(register) => self.builder.build_cond_branch(exit_policy, register),
        }

        self.builder.label(loop_body);
        if let Some(register) = progress_reg {
            self.builder.build_mark(register);
        }
        if possessive {
            self.builder.build_fence();
        }
        self.emit_node(child)?;
        if possessive {
            self.builder.build_cut(false);
        }
        if low > 1 {
            self.builder.build_branch(min_trips_control);
        }

        self.builder.label(exit_policy);
        if possessive {
            self.builder.build_clear();
        }
        if let Some(register) = progress_reg {
            self.builder.build_check_progress(exit, register);
        }
        match (extra_trips, extra_trips_reg) {
            (Some(0), _) => self.builder.build_branch(exit),
            (_, Some(register)) => self.builder.build_cond_branch(exit, register),
            _ => {}
        }

        match kind {
            QuantKind::Eager | QuantKind::Possessive => self.builder.build_split(loop_body, exit),
            QuantKind::Reluctant => self.builder.build_save(loop_body),
        }

        self.builder.label(exit);
        Ok(())
    }
}

/// Whether `node` might succeed without consuming input.
///
/// Errs on the side of `true`: zero-width assertions and backreferences
/// count as possibly empty.
fn can_match_empty(node: &Ast) -> bool {
    match node {
        Ast::Alternation(children) => children.iter().any(can_match_empty),
        Ast::Concatenation(children) => children.iter().all(can_match_empty),
        Ast::Group(group) | Ast::GroupTransform(group, _) => match group.kind {
            GroupKind::Lookahead
            | GroupKind::NegativeLookahead
            | GroupKind::NonAtomicLookahead
            | GroupKind::Lookbehind
            | GroupKind::NegativeLookbehind
            | GroupKind::NonAtomicLookbehind => true,
            _ => can_match_empty(&group.child),
        },
        Ast::Quantification(quant) => match quant.amount.bounds() {
            (0, _) => true,
            (low, Some(high)) if low > high => true,
            _ => can_match_empty(&quant.child),
        },
        Ast::Quote(text) => text.is_empty(),
        Ast::Trivia(_) | Ast::Empty => true,
        Ast::Atom(Atom::Anchor(_) | Atom::Backreference(_)) => true,
        Ast::Atom(_) | Ast::CharacterClass(_) | Ast::CustomCharacterClass(_) => false,
    }
}
