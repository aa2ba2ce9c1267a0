//! Indentation configuration for code generation.

use gosugen_core::GenOptions;

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(usize),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the default for Gosu sources.
    pub const GOSU: Self = Self::Spaces(4);

    /// The text of one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(*width),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GOSU
    }
}

impl From<&GenOptions> for Indent {
    fn from(options: &GenOptions) -> Self {
        if options.use_tab {
            Self::Tab
        } else {
            Self::Spaces(options.indent_spaces)
        }
    }
}
