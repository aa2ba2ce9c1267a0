//! Gosu declaration nodes.
//!
//! Each node is a small builder that implements [`Renderable`](crate::builder::Renderable).

mod declaration;
mod field;
mod file;
mod function;

pub use declaration::{EnumDeclaration, TypeDeclaration};
pub use field::{Field, Property};
pub use file::{SourceFile, Uses};
pub use function::{Constructor, Function, Param};
