//! Tree operation - outline of a model and the files it maps to.

use gosugen_codegen::DeclarationKind;
use gosugen_model::{ElementId, ElementKind, Model};

use crate::reports::{TreeEntry, TreeReport};

/// Walk the model from its top-level elements in model order.
pub fn tree(model: &Model) -> TreeReport {
    let mut entries = Vec::new();
    for &id in model.roots() {
        visit(model, id, 0, true, &mut entries);
    }

    TreeReport {
        project: model.project().name.clone(),
        entries,
    }
}

fn visit(model: &Model, id: ElementId, depth: usize, top_level: bool, out: &mut Vec<TreeEntry>) {
    let element = model.element(id);
    let kind = DeclarationKind::of(element);

    let label = match kind {
        DeclarationKind::Skip if element.name.is_empty() => {
            format!("<unnamed {}> (skipped)", element.kind.as_str())
        }
        DeclarationKind::Skip => format!("{} (skipped)", element.name),
        DeclarationKind::Package => format!("{}/", element.name),
        _ => match kind.extension().filter(|_| top_level) {
            Some(ext) => format!("{} [{}.{}]", element.name, element.name, ext),
            None => format!("{} (nested {})", element.name, kind_name(kind)),
        },
    };
    out.push(TreeEntry { depth, label });

    if kind == DeclarationKind::Skip {
        return;
    }
    let children_top_level = matches!(element.kind, ElementKind::Package(_));
    for &child in element.owned_elements() {
        visit(model, child, depth + 1, children_top_level, out);
    }
}

fn kind_name(kind: DeclarationKind) -> &'static str {
    match kind {
        DeclarationKind::Class => "class",
        DeclarationKind::Enhancement => "enhancement",
        DeclarationKind::Interface => "interface",
        DeclarationKind::Enumeration => "enum",
        DeclarationKind::AnnotationType => "annotation",
        DeclarationKind::Package | DeclarationKind::Skip => "element",
    }
}
