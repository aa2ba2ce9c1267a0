//! Gosu source generation from design models.
//!
//! # Module Organization
//!
//! - [`builder`] - Text layout (CodeBuilder, CodeFragment, Renderable, Indent)
//! - [`ast`] - Gosu declaration nodes (TypeDeclaration, Field, Function, SourceFile)
//! - [`mapping`] - Model-to-token rules (modifiers, type expressions, supertypes)
//! - [`naming`] - Field and property naming
//! - [`writers`] - One writer per declaration kind
//! - [`generator`] - Tree walker persisting files through a [`FileSystem`](gosugen_core::FileSystem)

pub mod ast;
pub mod builder;
pub mod generator;
pub mod mapping;
pub mod naming;
pub mod writers;

pub use generator::{GenerateError, GenerateReport, Generator};
pub use writers::{DeclarationKind, DeclarationWriter, GeneratedSource};
