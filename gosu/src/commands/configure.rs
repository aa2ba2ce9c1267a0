use std::path::PathBuf;

use clap::Args;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use eyre::{Context, Result};
use gosugen_core::{PREFERENCES_FILE, Preferences};

use crate::{
    ops::{self, OptionChanges, Outcome},
    reports::{CancelledReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConfigureCommand {
    /// Preferences file
    #[arg(short, long, default_value = PREFERENCES_FILE)]
    pub config: PathBuf,

    /// Emit doc comments
    #[arg(long, value_name = "BOOL")]
    pub doc: Option<bool>,

    /// Indent with tabs
    #[arg(long, value_name = "BOOL")]
    pub tab: Option<bool>,

    /// Spaces per indent level
    #[arg(long, value_name = "N")]
    pub indent_spaces: Option<usize>,
}

impl ConfigureCommand {
    /// Apply the given flags, or ask for every option when none is given.
    pub fn run(&self) -> Result<()> {
        let changes = OptionChanges {
            gosu_doc: self.doc,
            use_tab: self.tab,
            indent_spaces: self.indent_spaces,
        };
        let changes = if changes.is_empty() {
            match self.prompt_changes()? {
                Outcome::Completed(changes) => changes,
                Outcome::Cancelled => {
                    CancelledReport {
                        action: "Configuration",
                    }
                    .render(&mut TerminalOutput::new());
                    return Ok(());
                }
            }
        } else {
            changes
        };

        let report = ops::configure(&self.config, &changes)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn prompt_changes(&self) -> Result<Outcome<OptionChanges>> {
        let current = Preferences::load(&self.config)
            .wrap_err("Failed to load preferences")?
            .generation;
        let theme = ColorfulTheme::default();

        let Some(gosu_doc) = Confirm::with_theme(&theme)
            .with_prompt("Generate doc comments?")
            .default(current.gosu_doc)
            .interact_opt()
            .wrap_err("Failed to read answer")?
        else {
            return Ok(Outcome::Cancelled);
        };
        let Some(use_tab) = Confirm::with_theme(&theme)
            .with_prompt("Indent with tabs?")
            .default(current.use_tab)
            .interact_opt()
            .wrap_err("Failed to read answer")?
        else {
            return Ok(Outcome::Cancelled);
        };
        let indent_spaces = if use_tab {
            current.indent_spaces
        } else {
            Input::with_theme(&theme)
                .with_prompt("Spaces per indent level")
                .default(current.indent_spaces)
                .interact_text()
                .wrap_err("Failed to read indent width")?
        };

        Ok(Outcome::Completed(OptionChanges {
            gosu_doc: Some(gosu_doc),
            use_tab: Some(use_tab),
            indent_spaces: Some(indent_spaces),
        }))
    }
}
