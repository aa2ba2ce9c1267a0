//! Design model for the Gosu code generator.
//!
//! The generator only reads the model. This crate provides:
//!
//! - [`Model`] - an arena of [`Element`]s with non-owning parent links
//! - [`Repository`] - the read-only query interface the generator is given
//! - [`ModelFile`] - loading a model from a TOML or JSON description

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod element;
mod error;
mod feature;
mod file;
mod model;
mod relationship;
mod repository;

pub use element::{
    Classifier, Element, ElementId, ElementKind, Enumeration, Modifiers, Package, Visibility,
};
pub use error::{Error, Result, SourceContext};
pub use feature::{Attribute, Direction, Operation, Parameter, TypeRef};
pub use file::{ModelFile, ModelFormat, parse_str};
pub use model::{Model, Project};
pub use relationship::{Association, AssociationEnd, Relationship};
pub use repository::Repository;
