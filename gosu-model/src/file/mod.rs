//! Model description files (TOML or JSON).

mod lower;
mod raw;

use std::path::{Path, PathBuf};

use crate::{
    Model,
    error::{Error, Result, SourceContext},
};

/// Encoding of a model description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Toml,
    Json,
}

impl ModelFormat {
    /// Pick the format from a file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Parse a model from a string.
pub fn parse_str(content: &str, format: ModelFormat, filename: &str) -> Result<Model> {
    let source = SourceContext::new(content, filename);
    let raw: raw::RawModel = match format {
        ModelFormat::Toml => toml::from_str(content).map_err(|e| source.toml_error(e))?,
        ModelFormat::Json => serde_json::from_str(content).map_err(|e| source.json_error(e))?,
    };
    lower::lower(raw, &source)
}

/// A model file on disk together with the model it describes.
pub struct ModelFile {
    path: PathBuf,
    model: Model,
}

impl ModelFile {
    /// Read and parse a model file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let model = parse_str(&content, ModelFormat::from_path(&path), &filename)?;

        Ok(Self { path, model })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn into_model(self) -> Model {
        self.model
    }
}
