//! Generate operation - Gosu sources from a model subtree.

use std::path::Path;

use eyre::{Context, Result};
use gosugen_codegen::Generator;
use gosugen_core::{FileSystem, GenOptions, LocalFileSystem, MemoryFileSystem};
use gosugen_model::{ElementId, Model};

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Inputs of the generate operation.
pub struct GenerateRequest<'a> {
    pub model: &'a Model,
    /// Element the run starts from.
    pub base: ElementId,
    /// Directory the base element is generated into.
    pub output: &'a Path,
    pub options: GenOptions,
    /// Render into memory instead of writing to disk.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(request: GenerateRequest) -> Result<GenerateReport> {
    let root = request.model.qualified_name(request.base);

    let result = if request.dry_run {
        let fs = MemoryFileSystem::new();
        let skipped = run(&request, &fs)?;
        let files = fs
            .files()
            .into_iter()
            .map(|(path, content)| PreviewFile {
                path: path.display().to_string(),
                content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files, skipped })
    } else {
        let fs = LocalFileSystem;
        let report = Generator::new(request.model, &fs, request.base)
            .with_options(request.options.clone())
            .generate(request.output)
            .wrap_err_with(|| format!("Failed to generate '{}'", root))?;
        GenerationResult::Written(WrittenResult {
            output_dir: request.output.to_path_buf(),
            directories: report.directories,
            files: report.files,
            skipped: report.skipped,
        })
    };

    Ok(GenerateReport { root, result })
}

fn run(request: &GenerateRequest, fs: &dyn FileSystem) -> Result<usize> {
    let report = Generator::new(request.model, fs, request.base)
        .with_options(request.options.clone())
        .generate(request.output)
        .wrap_err("Failed to render preview")?;
    Ok(report.skipped)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn model() -> (Model, ElementId) {
        let mut model = Model::new();
        let pkg = model.add_package(None, "app");
        model.add_class(Some(pkg), "Main");
        model.add_class(Some(pkg), "");
        (model, pkg)
    }

    #[test]
    fn test_generate_writes_files() {
        let (model, pkg) = model();
        let temp = TempDir::new().unwrap();

        let report = generate(GenerateRequest {
            model: &model,
            base: pkg,
            output: temp.path(),
            options: GenOptions::default(),
            dry_run: false,
        })
        .unwrap();

        assert_eq!(report.root, "app");
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.files, [temp.path().join("app/Main.gs")]);
        assert_eq!(written.skipped, 1);
        let content = fs::read_to_string(temp.path().join("app/Main.gs")).unwrap();
        assert!(content.starts_with("package app\n"));
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let (model, pkg) = model();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");

        let report = generate(GenerateRequest {
            model: &model,
            base: pkg,
            output: &output,
            options: GenOptions::default(),
            dry_run: true,
        })
        .unwrap();

        let GenerationResult::Preview(PreviewResult { files, skipped }) = report.result else {
            panic!("expected preview");
        };
        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("Main.gs"));
        assert_eq!(skipped, 1);
        assert!(!output.exists());
    }

    #[test]
    fn test_failure_names_the_root() {
        let (model, pkg) = model();
        let temp = TempDir::new().unwrap();
        // A file where the package directory should go.
        fs::write(temp.path().join("app"), "").unwrap();

        let err = generate(GenerateRequest {
            model: &model,
            base: pkg,
            output: temp.path(),
            options: GenOptions::default(),
            dry_run: false,
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "Failed to generate 'app'");
    }
}
