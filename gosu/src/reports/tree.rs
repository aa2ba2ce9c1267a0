//! Tree command report data structures.

use super::output::{Output, Report};

/// Outline of a model.
#[derive(Debug)]
pub struct TreeReport {
    /// Project name, may be empty.
    pub project: String,
    pub entries: Vec<TreeEntry>,
}

#[derive(Debug)]
pub struct TreeEntry {
    pub depth: usize,
    pub label: String,
}

impl Report for TreeReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.project.is_empty() {
            out.title(&self.project);
        }
        if self.entries.is_empty() {
            out.preformatted("(empty model)");
            return;
        }
        for entry in &self.entries {
            out.preformatted(&format!("{}{}", "  ".repeat(entry.depth), entry.label));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordedOutput;

    #[test]
    fn test_empty_model() {
        let report = TreeReport {
            project: String::new(),
            entries: Vec::new(),
        };
        let mut out = RecordedOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, ["(empty model)"]);
    }

    #[test]
    fn test_indents_by_depth() {
        let report = TreeReport {
            project: "shop".to_string(),
            entries: vec![
                TreeEntry {
                    depth: 0,
                    label: "shop/".to_string(),
                },
                TreeEntry {
                    depth: 1,
                    label: "Order [Order.gs]".to_string(),
                },
            ],
        };
        let mut out = RecordedOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        # shop
        shop/
          Order [Order.gs]
        ");
    }
}
