// Fibonacci
//
// Reads one integer from stdin and prints fib(n). Inputs below -1 print -1.

use clap::Parser;
use std::io;
use std::process::ExitCode;
use value_demos::error::{exit_status, should_use_colors};
use value_demos::{fib, logging};

#[derive(Parser, Debug)]
#[command(version, about = "Print the naive recursive Fibonacci value of an integer read from stdin")]
struct Args {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let color = should_use_colors();
    colored::control::set_override(color);

    let result = fib::run(io::stdin().lock(), io::stdout().lock());
    ExitCode::from(exit_status(result, io::stderr().lock(), color))
}
