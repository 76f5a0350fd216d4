//! Show the pattern tree.

use super::pattern::PatternInput;

pub struct AstArgs {
    pub input: PatternInput,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let ast = args.input.parse(args.color);

    // Show match-level tags where the tree supports them.
    match ast.with_match_level(args.input.level) {
        Ok(tagged) => print!("{}", tagged.dump()),
        Err(e) => {
            eprintln!("warning: {}; showing the untagged tree", e);
            print!("{}", ast.dump());
        }
    }
}
