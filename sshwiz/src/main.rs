mod candidates;
mod cli;
mod connect;
mod domain;
mod picker;
mod store;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
