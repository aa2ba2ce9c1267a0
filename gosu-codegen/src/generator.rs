//! Tree walker that persists generated declarations.

use std::path::{Path, PathBuf};

use gosugen_core::{FileSystem, FsError, GenOptions};
use gosugen_model::{ElementId, Repository};
use thiserror::Error;

use crate::writers::{DeclarationKind, DeclarationWriter};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Fs(#[from] FsError),
}

impl GenerateError {
    /// Path of the directory or file that could not be created.
    pub fn path(&self) -> &Path {
        match self {
            Self::Fs(err) => err.path(),
        }
    }
}

/// Paths produced by a generation run, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    /// Elements that produced no output (unnamed or unsupported kinds).
    pub skipped: usize,
}

/// Gosu code generator rooted at one model element.
///
/// Packages become directories and classifiers become files. Children are
/// generated strictly in model order and the first failure stops the run;
/// anything written before it stays on disk.
pub struct Generator<'a> {
    repo: &'a dyn Repository,
    fs: &'a dyn FileSystem,
    base: ElementId,
    options: GenOptions,
}

impl<'a> Generator<'a> {
    pub fn new(repo: &'a dyn Repository, fs: &'a dyn FileSystem, base: ElementId) -> Self {
        Self {
            repo,
            fs,
            base,
            options: GenOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate the base element into `output`.
    pub fn generate(&self, output: &Path) -> Result<GenerateReport, GenerateError> {
        let mut report = GenerateReport::default();
        tracing::debug!(
            base = %self.repo.element(self.base).name,
            output = %output.display(),
            "generating"
        );
        self.generate_element(self.base, output, &mut report)?;
        Ok(report)
    }

    fn generate_element(
        &self,
        id: ElementId,
        path: &Path,
        report: &mut GenerateReport,
    ) -> Result<(), GenerateError> {
        let element = self.repo.element(id);
        match DeclarationKind::of(element) {
            DeclarationKind::Package => {
                let dir = path.join(&element.name);
                self.fs.create_directory(&dir)?;
                report.directories.push(dir.clone());
                for &child in element.owned_elements() {
                    self.generate_element(child, &dir, report)?;
                }
            }
            DeclarationKind::Skip => {
                tracing::trace!(kind = element.kind.as_str(), "skipping element");
                report.skipped += 1;
            }
            _ => {
                let writer = DeclarationWriter::new(self.repo, &self.options);
                if let Some(source) = writer.source_file(id, self.base) {
                    let file = path.join(&source.file_name);
                    self.fs.write_text_file(&file, &source.content)?;
                    report.files.push(file);
                }
            }
        }
        Ok(())
    }
}
