use anyhow::Result;
use clap::Parser;
use texttools_cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
