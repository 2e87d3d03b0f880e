// src/bin/cli.rs
use color_eyre::eyre::Result;
use shelfscan::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = log::init(log::Sink::Stderr);

    cli::run()?;
    Ok(())
}
