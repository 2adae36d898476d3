//! Usage:
//!   routelog [OPTIONS] <LEVEL> <MESSAGE>...
//!
//! Emits one message through a logger built from the user's config,
//! with flags overriding config values.

use clap::Parser;
use routelog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
