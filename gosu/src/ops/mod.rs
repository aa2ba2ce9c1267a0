//! Core operations.
//!
//! This module contains the business logic for gosugen commands,
//! separated from CLI argument parsing, prompting and output rendering.

pub mod configure;
pub mod generate;
pub mod tree;

pub use configure::{OptionChanges, configure};
pub use generate::{GenerateRequest, generate};
pub use tree::tree;

/// Result of an interactive step the user may dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    /// The user dismissed a prompt; nothing was done.
    Cancelled,
}
