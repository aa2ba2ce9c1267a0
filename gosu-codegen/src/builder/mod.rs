//! Text layout building blocks.
//!
//! - [`CodeBuilder`] - line buffer with indentation depth
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - trait for nodes that can be converted to code fragments
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
