use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gosugen_model::ModelFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TreeCommand {
    /// Model file, TOML or JSON (defaults to ./model.toml)
    #[arg(short, long, default_value = "model.toml")]
    pub model: PathBuf,
}

impl TreeCommand {
    pub fn run(&self) -> Result<()> {
        let model_file = ModelFile::open(&self.model).unwrap_or_exit();
        ops::tree(model_file.model()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
