//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Qualified name of the element the run started from.
    pub root: String,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Package directories created.
    pub directories: Vec<PathBuf>,
    /// Source files written.
    pub files: Vec<PathBuf>,
    /// Elements left out because they had no name or no file form.
    pub skipped: usize,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
    pub skipped: usize,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if written.skipped > 0 {
            out.warning(&skipped_message(written.skipped));
        }

        out.key_value(
            "Generated",
            &format!("{} -> {}", self.root, written.output_dir.display()),
        );
        out.key_value("Package directories", &written.directories.len().to_string());
        out.newline();

        out.section(&format!("Files ({})", written.files.len()));
        for file in &written.files {
            let shown = file.strip_prefix(&written.output_dir).unwrap_or(file);
            out.added_item(&shown.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
        if preview.skipped > 0 {
            out.warning(&skipped_message(preview.skipped));
        }
    }
}

fn skipped_message(count: usize) -> String {
    match count {
        1 => "1 element was skipped (unnamed or not generatable)".to_string(),
        n => format!("{} elements were skipped (unnamed or not generatable)", n),
    }
}
