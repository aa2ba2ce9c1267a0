mod completions;
mod configure;
mod generate;
mod tree;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use configure::ConfigureCommand;
use eyre::Result;
use generate::GenerateCommand;
use tree::TreeCommand;

use crate::logging::init_logging;

/// Extension trait for exiting on model errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gosugen_model::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gosugen")]
#[command(version)]
#[command(about = "Generate Gosu source code from design models")]
pub(crate) struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        init_logging(self.verbose);

        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Configure(cmd) => cmd.run(),
            Commands::Tree(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Gosu sources from a model
    Generate(GenerateCommand),

    /// Edit generation preferences
    Configure(ConfigureCommand),

    /// Show the packages and types of a model
    Tree(TreeCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
