use std::path::PathBuf;

use clap::Args;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use eyre::{Context, Result, eyre};
use gosugen_core::{PREFERENCES_FILE, Preferences};
use gosugen_model::{ElementId, Model, ModelFile};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateRequest, OptionChanges, Outcome},
    reports::{CancelledReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Model file, TOML or JSON (defaults to ./model.toml)
    #[arg(short, long, default_value = "model.toml")]
    pub model: PathBuf,

    /// Qualified name of the element to generate, e.g. `shop.model` (prompted when omitted)
    #[arg(short, long)]
    pub root: Option<String>,

    /// Output directory (prompted when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preferences file
    #[arg(short, long, default_value = PREFERENCES_FILE)]
    pub config: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Leave out doc comments
    #[arg(long)]
    pub no_doc: bool,

    /// Indent with tabs
    #[arg(long)]
    pub tab: bool,

    /// Spaces per indent level
    #[arg(long, value_name = "N")]
    pub indent_spaces: Option<usize>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let model_file = ModelFile::open(&self.model).unwrap_or_exit();
        let model = model_file.model();

        let mut options = Preferences::load(&self.config)
            .wrap_err("Failed to load preferences")?
            .generation;
        self.overrides().apply_to(&mut options);

        let base = match self.resolve_root(model)? {
            Outcome::Completed(id) => id,
            Outcome::Cancelled => return Self::cancelled(),
        };
        let output = match &self.output {
            Some(dir) => dir.clone(),
            None => match Self::prompt_output()? {
                Outcome::Completed(dir) => dir,
                Outcome::Cancelled => return Self::cancelled(),
            },
        };

        let report = ops::generate(GenerateRequest {
            model,
            base,
            output: &output,
            options,
            dry_run: self.dry_run,
        })?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn overrides(&self) -> OptionChanges {
        OptionChanges {
            gosu_doc: self.no_doc.then_some(false),
            use_tab: self.tab.then_some(true),
            indent_spaces: self.indent_spaces,
        }
    }

    fn resolve_root(&self, model: &Model) -> Result<Outcome<ElementId>> {
        match &self.root {
            Some(name) => model
                .find(name)
                .map(Outcome::Completed)
                .ok_or_else(|| eyre!("No element named '{}' in {}", name, self.model.display())),
            None => Self::prompt_root(model),
        }
    }

    fn prompt_root(model: &Model) -> Result<Outcome<ElementId>> {
        let packages = model.packages();
        if packages.is_empty() {
            return Err(eyre!("The model has no packages to generate"));
        }
        let names: Vec<String> = packages.iter().map(|&id| model.qualified_name(id)).collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select the package to generate")
            .items(&names)
            .default(0)
            .interact_opt()
            .wrap_err("Failed to get package selection")?;

        Ok(match selection {
            Some(index) => Outcome::Completed(packages[index]),
            None => Outcome::Cancelled,
        })
    }

    fn prompt_output() -> Result<Outcome<PathBuf>> {
        let dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Output directory")
            .allow_empty(true)
            .interact_text()
            .wrap_err("Failed to read output directory")?;

        let dir = dir.trim();
        Ok(if dir.is_empty() {
            Outcome::Cancelled
        } else {
            Outcome::Completed(PathBuf::from(dir))
        })
    }

    fn cancelled() -> Result<()> {
        CancelledReport {
            action: "Generation",
        }
        .render(&mut TerminalOutput::new());
        Ok(())
    }
}
