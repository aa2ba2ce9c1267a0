//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod configure;
mod generate;
mod output;
mod tree;

pub use configure::{CancelledReport, ConfigureReport};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
pub use tree::{TreeEntry, TreeReport};
