use retrace_core::{ClassPredicate, MatchLevel};

use crate::{Address, Instruction, ProgramBuilder};

#[test]
fn forward_and_backward_labels_resolve() {
    let mut b = ProgramBuilder::new();
    let top = b.make_address();
    let done = b.make_address();

    b.label(top);
    b.build_split(done, top);
    b.build_branch(top);
    b.label(done);
    b.build_accept();

    let program = b.assemble();
    assert_eq!(
        program.instructions(),
        &[
            Instruction::Split {
                to: Address::new(2),
                saving: Address::new(0),
            },
            Instruction::Branch(Address::new(0)),
            Instruction::Accept,
        ]
    );
}

#[test]
fn label_may_mark_the_end() {
    let mut b = ProgramBuilder::new();
    let end = b.make_address();
    b.build_save(end);
    b.label(end);

    let program = b.assemble();
    assert_eq!(program.instructions(), &[Instruction::Save(Address::new(1))]);
}

#[test]
fn registers_keep_initial_values() {
    let mut b = ProgramBuilder::new();
    let r0 = b.make_int_register(3);
    let r1 = b.make_int_register(0);
    assert_eq!(b.register_count(), 2);

    let exit = b.make_address();
    b.build_reset(r1);
    b.build_cond_branch(exit, r0);
    b.label(exit);
    b.build_accept();

    let program = b.assemble();
    assert_eq!(program.initial_registers(), &[3, 0]);
    assert_eq!(
        program.instructions()[1],
        Instruction::CondBranch {
            to: Address::new(2),
            register: r0,
        }
    );
}

#[test]
fn sequences_are_interned() {
    let mut b = ProgramBuilder::new();
    b.build_match_sequence("abc", MatchLevel::GraphemeCluster);
    b.build_match_sequence("xyz", MatchLevel::GraphemeCluster);
    b.build_match_sequence("abc", MatchLevel::UnicodeScalar);

    let program = b.assemble();
    assert_eq!(program.strings(), &["abc".to_string(), "xyz".to_string()]);

    let Instruction::MatchSequence { string, level } = program.instructions()[2] else {
        panic!("expected match_seq");
    };
    assert_eq!(program.string(string), "abc");
    assert_eq!(level, MatchLevel::UnicodeScalar);
}

#[test]
fn counts_checkpoint_pushes() {
    let mut b = ProgramBuilder::new();
    let a = b.make_address();
    b.build_save(a);
    b.build_save_placeholder();
    b.build_fence();
    b.build_split(a, a);
    b.build_consume(ClassPredicate::any_scalar(), MatchLevel::UnicodeScalar);
    b.build_cut(false);
    b.build_clear();
    b.label(a);
    b.build_accept();

    let program = b.assemble();
    assert_eq!(program.count(Instruction::is_checkpoint_push), 4);
    assert_eq!(program.count(|i| matches!(i, Instruction::Accept)), 1);
}

#[test]
#[should_panic(expected = "was never placed")]
fn unplaced_address_panics() {
    let mut b = ProgramBuilder::new();
    let nowhere = b.make_address();
    b.build_branch(nowhere);
    let _ = b.assemble();
}

#[test]
#[should_panic(expected = "already placed")]
fn double_label_panics() {
    let mut b = ProgramBuilder::new();
    let a = b.make_address();
    b.label(a);
    b.build_fail();
    b.label(a);
}

#[test]
#[should_panic(expected = "was not made by this builder")]
fn foreign_register_panics() {
    let mut other = ProgramBuilder::new();
    let register = other.make_int_register(1);

    let mut b = ProgramBuilder::new();
    b.build_reset(register);
}

#[test]
fn progress_check_resolves_its_exit() {
    let mut b = ProgramBuilder::new();
    let p0 = b.make_pos_register();
    let exit = b.make_address();

    b.build_unmark(p0);
    b.build_mark(p0);
    b.build_check_progress(exit, p0);
    b.build_fail();
    b.label(exit);
    b.build_accept();

    let program = b.assemble();
    assert_eq!(program.pos_register_count(), 1);
    assert_eq!(program.register_count(), 0);
    assert_eq!(
        program.instructions()[2],
        Instruction::CheckProgress {
            exit: Address::new(4),
            register: p0,
        }
    );
}

#[test]
#[should_panic(expected = "was not made by this builder")]
fn foreign_pos_register_panics() {
    let mut other = ProgramBuilder::new();
    let p0 = other.make_pos_register();

    let mut b = ProgramBuilder::new();
    b.build_mark(p0);
}
