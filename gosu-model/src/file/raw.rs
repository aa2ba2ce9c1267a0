//! Serde shape of a model description file.

use serde::Deserialize;

use crate::{Direction, Modifiers, Visibility};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawModel {
    #[serde(default)]
    pub project: RawProject,
    #[serde(default)]
    pub elements: Vec<RawElement>,
    #[serde(default)]
    pub relationships: Vec<RawRelationship>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawProject {
    #[serde(default)]
    pub name: String,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum RawKind {
    Package,
    Class,
    Interface,
    Enumeration,
    AnnotationType,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RawVisibility {
    Public,
    Protected,
    Private,
    #[default]
    Package,
}

impl From<RawVisibility> for Visibility {
    fn from(v: RawVisibility) -> Self {
        match v {
            RawVisibility::Public => Visibility::Public,
            RawVisibility::Protected => Visibility::Protected,
            RawVisibility::Private => Visibility::Private,
            RawVisibility::Package => Visibility::Package,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RawDirection {
    #[default]
    In,
    Out,
    Inout,
    Return,
}

impl From<RawDirection> for Direction {
    fn from(d: RawDirection) -> Self {
        match d {
            RawDirection::In => Direction::In,
            RawDirection::Out => Direction::Out,
            RawDirection::Inout => Direction::InOut,
            RawDirection::Return => Direction::Return,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawModifiers {
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub leaf: bool,
    #[serde(default)]
    pub final_specialization: bool,
    #[serde(default)]
    pub read_only: bool,
}

impl From<RawModifiers> for Modifiers {
    fn from(m: RawModifiers) -> Self {
        Modifiers {
            is_static: m.is_static,
            is_abstract: m.is_abstract,
            is_leaf: m.leaf,
            is_final_specialization: m.final_specialization,
            is_read_only: m.read_only,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawElement {
    pub kind: RawKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub visibility: RawVisibility,
    #[serde(flatten)]
    pub modifiers: RawModifiers,
    pub stereotype: Option<String>,
    #[serde(default)]
    pub literals: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<RawAttribute>,
    #[serde(default)]
    pub operations: Vec<RawOperation>,
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawAttribute {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub visibility: RawVisibility,
    #[serde(flatten)]
    pub modifiers: RawModifiers,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub multiplicity: Option<String>,
    #[serde(default)]
    pub ordered: bool,
    #[serde(rename = "default")]
    pub default_value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawOperation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub visibility: RawVisibility,
    #[serde(flatten)]
    pub modifiers: RawModifiers,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawParameter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub multiplicity: Option<String>,
    #[serde(default)]
    pub ordered: bool,
    #[serde(default)]
    pub direction: RawDirection,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub(crate) enum RawRelationship {
    Generalization { source: String, target: String },
    Realization { source: String, target: String },
    Association { end1: RawEnd, end2: RawEnd },
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEnd {
    pub reference: String,
    #[serde(default)]
    pub navigable: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub visibility: RawVisibility,
    #[serde(flatten)]
    pub modifiers: RawModifiers,
    pub multiplicity: Option<String>,
    #[serde(default)]
    pub ordered: bool,
    #[serde(rename = "default")]
    pub default_value: Option<String>,
}
