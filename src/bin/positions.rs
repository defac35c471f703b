use clap::Parser;
use miette::Result;
use chop::cli::positions::PositionsCli;

fn main() -> Result<()> {
    let cli = PositionsCli::parse();
    chop::cli::positions::run(cli)?;
    Ok(())
}
