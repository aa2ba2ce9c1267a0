//! Generation options and the preferences file that stores them.

use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default preferences file name, looked up in the working directory.
pub const PREFERENCES_FILE: &str = "gosugen.toml";

/// Options controlling the layout of generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenOptions {
    /// Emit `/** ... */` doc comments.
    pub gosu_doc: bool,
    /// Indent with a tab instead of spaces.
    pub use_tab: bool,
    /// Spaces per indent level when `use_tab` is off.
    pub indent_spaces: usize,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            gosu_doc: true,
            use_tab: false,
            indent_spaces: 4,
        }
    }
}

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("failed to access preferences '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse preferences '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize preferences")]
    Serialize(#[from] toml::ser::Error),
}

/// Contents of the preferences file.
///
/// ```toml
/// [gen]
/// gosuDoc = true
/// useTab = false
/// indentSpaces = 4
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, rename = "gen")]
    pub generation: GenOptions,
}

impl Preferences {
    /// Load preferences, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PreferencesError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no preferences file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(PreferencesError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| PreferencesError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write preferences to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PreferencesError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| PreferencesError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
