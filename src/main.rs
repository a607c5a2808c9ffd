mod cli;
mod ellipsoid;
mod error;
mod geodetic;
mod sez;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the S, E, Z lines
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    cli::run(&cli.values, &mut stdout.lock())
}
