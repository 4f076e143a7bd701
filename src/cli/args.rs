//! CLI argument definitions
//!
//! The tool takes no options; clap still supplies `--help` and `--version`.

use clap::Parser;

#[derive(Parser)]
#[command(name = "fossilize-status")]
#[command(
    about = "Show which Steam game fossilize_replay is processing shaders for",
    version
)]
pub(crate) struct Cli {}
