//! wordtint - print the opening lines of a text file with words colored by frequency

use anyhow::Result;
use clap::Parser;

use wordtint::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
