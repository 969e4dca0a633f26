use clap::Parser;
use etherealtrades::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
