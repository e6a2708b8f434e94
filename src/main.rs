//! CLI entry point for the portrait card generator

use clap::Parser;
use pixelbobo::io::cli::{CardProcessor, Cli};
use pixelbobo::io::logging::{init_logging, log_level};
use std::io::IsTerminal;

fn main() -> pixelbobo::Result<()> {
    let cli = Cli::parse();
    init_logging(
        log_level(cli.verbose, cli.quiet),
        std::io::stderr().is_terminal(),
    );
    let mut processor = CardProcessor::new(cli);
    processor.process()?;
    Ok(())
}
