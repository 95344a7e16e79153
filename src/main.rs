use anyhow::Context;
use clap::Parser;
use greeting_cli::logging;
use greeting_cli::models::greeting::GreetingConfig;
use greeting_cli::ui::{cli::Args, output};
use std::io;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let cfg = GreetingConfig::from(args);

    let stdout = io::stdout();
    output::run(&cfg, &mut stdout.lock()).context("failed to write greeting to stdout")
}
