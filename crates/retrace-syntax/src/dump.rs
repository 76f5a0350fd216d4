//! Indented tree printer.
//!
//! One node per line, children indented two spaces under their parent.

use std::fmt::Write;

use crate::ast::{Ast, ClassMember, CustomCharacterClass};

impl Ast {
    pub fn dump(&self) -> String {
        let mut out = String::new();
        dump_node(self, 0, &mut out);
        out
    }
}

fn dump_node(node: &Ast, depth: usize, out: &mut String) {
    line(out, depth, &node.dump_base());

    match node {
        Ast::Alternation(children) | Ast::Concatenation(children) => {
            for child in children {
                dump_node(child, depth + 1, out);
            }
        }
        Ast::Group(group) | Ast::GroupTransform(group, _) => dump_node(&group.child, depth + 1, out),
        Ast::Quantification(q) => dump_node(&q.child, depth + 1, out),
        Ast::CustomCharacterClass(cc) => dump_members(cc, depth + 1, out),
        Ast::Quote(_)
        | Ast::Trivia(_)
        | Ast::Atom(_)
        | Ast::CharacterClass(_)
        | Ast::Empty => {}
    }
}

fn dump_members(cc: &CustomCharacterClass, depth: usize, out: &mut String) {
    for member in &cc.members {
        match member {
            ClassMember::Atom(atom) => line(out, depth, &atom.dump_base()),
            ClassMember::Range(low, high) => line(
                out,
                depth,
                &format!("range {} - {}", low.dump_base(), high.dump_base()),
            ),
            ClassMember::Custom(nested) => {
                line(out, depth, &nested.dump_base());
                dump_members(nested, depth + 1, out);
            }
            ClassMember::Posix(set) => {
                let caret = if set.inverted { "^" } else { "" };
                line(out, depth, &format!("posix [:{caret}{}:]", set.name));
            }
            ClassMember::Quote(text) => line(out, depth, &format!("quote {text:?}")),
        }
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    let _ = writeln!(out, "{:indent$}{text}", "", indent = depth * 2);
}
