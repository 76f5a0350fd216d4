//! Run a pattern against a subject.

use std::ops::Range;
use std::path::PathBuf;

use retrace_lib::Colors;

use super::pattern::{PatternInput, require_subject};

pub struct ExecArgs {
    pub input: PatternInput,
    pub subject_text: Option<String>,
    pub subject_path: Option<PathBuf>,
    pub fuel: u32,
    pub whole: bool,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    let subject = require_subject(args.subject_text.as_deref(), args.subject_path.as_deref());
    let regex = args.input.compile(args.fuel, args.color);
    let colors = Colors::new(args.color);

    let result = if args.whole {
        regex
            .whole_match(&subject)
            .map(|hit| hit.then_some(0..subject.len()))
    } else {
        regex.find(&subject)
    };

    match result {
        Ok(Some(range)) => println!("{}", format_match(&subject, range, colors)),
        Ok(None) => {
            eprintln!("no match");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}

/// `start..end "text"`, with the matched text in green.
pub fn format_match(subject: &str, range: Range<usize>, colors: Colors) -> String {
    let (start, end) = (range.start, range.end);
    format!(
        "{start}..{end} {}{:?}{}",
        colors.green,
        &subject[range],
        colors.reset
    )
}
