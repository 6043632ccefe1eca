// Copy semantics demo
//
// Builds a populated record, hands it to a function by value (which cannot
// touch the caller's copy), then overwrites a zeroed record through `&mut`
// and prints its nested `h` field. Prints 189 unless --record says otherwise.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use value_demos::config::DemoConfig;
use value_demos::error::{exit_status, should_use_colors};
use value_demos::{logging, record, AppError};

#[derive(Parser, Debug)]
#[command(version, about = "Show that by-value calls cannot mutate the caller's record")]
struct Args {
    /// TOML file with a [record] table replacing the built-in sample
    #[arg(long, value_name = "FILE")]
    record: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = match &args.record {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    record::run(config.record, io::stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let color = should_use_colors();
    colored::control::set_override(color);

    ExitCode::from(exit_status(run(&args), io::stderr().lock(), color))
}
