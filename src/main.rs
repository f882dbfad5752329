use std::{fs, io};

use clap::Parser;
use mython::run;

/// mython is an interpreter for a small indentation-structured
/// object-oriented language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mython to interpret a file instead of inline program text.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = run(&source, &mut stdout) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
