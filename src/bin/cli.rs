// src/bin/cli.rs
use color_eyre::eyre::eyre;
use matchboard::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().map_err(|e| eyre!("{e}"))
}
