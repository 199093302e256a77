use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = ctfd_provision::cli::Cli::parse();
    cli.run()
}
