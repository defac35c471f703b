use clap::Parser;
use miette::Result;
use chop::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    chop::cli::run(cli)?;
    Ok(())
}
