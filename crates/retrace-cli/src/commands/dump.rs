use retrace_lib::{Colors, dump};

use super::pattern::PatternInput;

pub struct DumpArgs {
    pub input: PatternInput,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    // Fuel only matters when running.
    let regex = args.input.compile(0, args.color);
    let colors = Colors::new(args.color);
    print!("{}", dump(regex.program(), colors));
}
