//! GIFT-Boolean canonicalizer CLI.

use std::io::BufRead;

use gift_ir::StringInterner;
use giftc::options::USAGE;
use giftc::{init_tracing, parse_args, process, render_outcome, CommandError};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    if cli.help {
        println!("{USAGE}");
        return;
    }

    init_tracing();

    let sources: Vec<String> = if cli.expressions.is_empty() {
        let mut lines = Vec::new();
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => lines.push(line),
                Err(err) => {
                    eprintln!("error: cannot read standard input: {err}");
                    std::process::exit(1);
                }
            }
        }
        lines
    } else {
        cli.expressions.clone()
    };

    let interner = StringInterner::new();
    let mut failed = false;
    for (i, source) in sources.iter().enumerate() {
        if i > 0 && !cli.quiet {
            println!();
        }
        match process(source, &interner, cli.canon, cli.grouping) {
            Ok(outcome) => print!("{}", render_outcome(&outcome, &interner, &cli)),
            Err(CommandError::Parse { report, .. }) => {
                eprint!("{report}");
                failed = true;
            }
            Err(err) => {
                eprintln!("error: {err}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
