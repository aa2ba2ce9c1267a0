//! Configure command report data structures.

use std::path::PathBuf;

use gosugen_core::GenOptions;

use super::output::{Output, Report};

/// Preferences after a configure run.
#[derive(Debug)]
pub struct ConfigureReport {
    /// File the preferences were saved to.
    pub path: PathBuf,
    pub options: GenOptions,
}

impl Report for ConfigureReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Saved", &self.path.display().to_string());
        out.newline();
        out.section("Generation");
        out.key_value("  gosuDoc", &self.options.gosu_doc.to_string());
        out.key_value("  useTab", &self.options.use_tab.to_string());
        out.key_value("  indentSpaces", &self.options.indent_spaces.to_string());
    }
}

/// Printed when the user dismisses a prompt.
#[derive(Debug)]
pub struct CancelledReport {
    /// What was abandoned, e.g. "Generation".
    pub action: &'static str,
}

impl Report for CancelledReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("{} cancelled, nothing was changed.", self.action));
    }
}
