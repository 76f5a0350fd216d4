//! Trace execution for debugging.

use std::path::PathBuf;

use retrace_lib::{Colors, PrintTracer, Verbosity};

use super::exec::format_match;
use super::pattern::{PatternInput, require_subject};

pub struct TraceArgs {
    pub input: PatternInput,
    pub subject_text: Option<String>,
    pub subject_path: Option<PathBuf>,
    pub fuel: u32,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let subject = require_subject(args.subject_text.as_deref(), args.subject_path.as_deref());
    let regex = args.input.compile(args.fuel, args.color);
    let colors = Colors::new(args.color);

    // One traced attempt per start position, like `exec`.
    for (i, start) in regex.start_positions(&subject).into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}start @{}{}", colors.blue, start, colors.reset);

        let mut tracer = PrintTracer::new(regex.program(), args.verbosity, colors);
        let result = regex.trace_at(&subject, start, &mut tracer);
        tracer.print();

        match result {
            Ok(Some(end)) => {
                println!("{}---{}", colors.dim, colors.reset);
                println!("{}", format_match(&subject, start..end, colors));
                return;
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(2);
            }
        }
    }

    eprintln!("no match");
    std::process::exit(1);
}
