//! Configure operation - update the preferences file.

use std::path::Path;

use eyre::{Context, Result};
use gosugen_core::{GenOptions, Preferences};

use crate::reports::ConfigureReport;

/// Option values to override; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionChanges {
    pub gosu_doc: Option<bool>,
    pub use_tab: Option<bool>,
    pub indent_spaces: Option<usize>,
}

impl OptionChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, options: &mut GenOptions) {
        if let Some(doc) = self.gosu_doc {
            options.gosu_doc = doc;
        }
        if let Some(tab) = self.use_tab {
            options.use_tab = tab;
        }
        if let Some(spaces) = self.indent_spaces {
            options.indent_spaces = spaces;
        }
    }
}

/// Apply `changes` to the preferences at `path` and save them.
pub fn configure(path: &Path, changes: &OptionChanges) -> Result<ConfigureReport> {
    let mut preferences = Preferences::load(path).wrap_err("Failed to load preferences")?;
    changes.apply_to(&mut preferences.generation);
    preferences
        .save(path)
        .wrap_err("Failed to save preferences")?;

    tracing::debug!(path = %path.display(), ?changes, "preferences saved");

    Ok(ConfigureReport {
        path: path.to_path_buf(),
        options: preferences.generation,
    })
}
