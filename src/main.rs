use clap::Parser;
use std::process;
use svnbdiff::cli::{handle_cli, init_logging, Cli};

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    if let Err(e) = handle_cli(args) {
        eprintln!("svnbdiff: error: {}", e);
        process::exit(1);
    }
}
