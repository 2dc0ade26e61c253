use clap::Parser;

mod args;
mod cli;

use args::Cli;

fn main() {
    if let Err(e) = cli::run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
