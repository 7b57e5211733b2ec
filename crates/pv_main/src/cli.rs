use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about = "Render HTML select lists")]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Render select lists described by YAML files
    Render {
        /// Files holding one config or a list of configs
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the colour picker example
    Demo,
}
