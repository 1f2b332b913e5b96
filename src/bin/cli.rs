// src/bin/cli.rs
use clap::Parser;
use review_deck::{cli::{self, CliArgs}, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    log::init(&args.options.log_level, args.options.log_file.as_deref())?;

    print!("{}", cli::run(&args)?);
    Ok(())
}
