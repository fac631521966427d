use clap::Parser;
use dispersal_processor::cli::{run, Cli};
use dispersal_processor::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
