//! Walker source emission

use crate::constants::{DEFAULT_PROTOCOL_PATH, DEFAULT_SUFFIX, ROW_PARAM};
use crate::model::{Attribute, TypeRef, ViewKind, ViewType};
use heck::ToSnakeCase;
use std::collections::BTreeSet;

const TAB: &str = "    ";

/// Knobs for the emitted walker source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Appended to the view name to form the walker name
    pub suffix: String,
    /// Module path exporting the protocol traits
    pub protocol_path: String,
    /// Text placed verbatim above the generated code (license, notices)
    pub header: Option<String>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            protocol_path: DEFAULT_PROTOCOL_PATH.to_string(),
            header: None,
        }
    }
}

/// Name of the walker type generated for `view_name`
pub fn artifact_name(view_name: &str, suffix: &str) -> String {
    format!("{}{}", view_name, suffix)
}

/// File name of the walker generated for `view_name`, e.g. `cache_view_walker.rs`
pub fn artifact_file_name(view_name: &str, suffix: &str) -> String {
    format!("{}.rs", artifact_name(view_name, suffix).to_snake_case())
}

/// Emit the walker source for `view`.
///
/// `attributes` must come from [`crate::enumerate`]; they are emitted in
/// the order given. Identical inputs always produce identical text.
pub fn emit(view: &ViewType, attributes: &[Attribute], options: &EmitOptions) -> String {
    let walker = artifact_name(&view.name, &options.suffix);
    let row = view.row_type();
    let empty = attributes.is_empty();
    let (v, row_param) = if empty { ("_v", "_row") } else { ("v", "row") };

    let mut code: Vec<String> = Vec::new();

    if let Some(header) = &options.header {
        code.extend(header.trim_end().lines().map(str::to_string));
        code.push(String::new());
    }

    code.push("//! Generated by walkergen. Do not edit.".to_string());
    code.push(String::new());
    code.extend(imports(view, attributes, options).into_iter().map(|path| format!("use {};", path)));
    code.push(String::new());
    code.push(format!("/// Walks the attributes of [`{}`].", view.name));
    code.push(format!("pub struct {};", walker));
    code.push(String::new());
    code.push(format!("impl{} RowAttributeWalker<{}> for {} {{", impl_generics(view, attributes), row, walker));

    let schema_sig = format!("fn visit_all<V: AttributeVisitor>(&self, {}: &mut V)", v);
    if empty {
        code.push(format!("{}{} {{}}", TAB, schema_sig));
    } else {
        code.push(format!("{}{} {{", TAB, schema_sig));
        for attr in attributes {
            code.push(format!(
                "{}v.accept::<{}>({}, \"{}\");",
                TAB.repeat(2),
                attr.ty.rust_name(),
                attr.index,
                attr.name
            ));
        }
        code.push(format!("{}}}", TAB));
    }

    code.push(String::new());

    let values_sig = format!(
        "fn visit_all_values<V: AttributeWithValueVisitor>(&self, {}: &{}, {}: &mut V)",
        row_param, row, v
    );
    if empty {
        code.push(format!("{}{} {{}}", TAB, values_sig));
    } else {
        code.push(format!("{}{} {{", TAB, values_sig));
        for attr in attributes {
            code.push(format!("{}{}", TAB.repeat(2), value_call(attr)));
        }
        code.push(format!("{}}}", TAB));
    }

    code.push(String::new());
    code.push(format!("{}fn count(&self) -> usize {{", TAB));
    code.push(format!("{}{}", TAB.repeat(2), attributes.len()));
    code.push(format!("{}}}", TAB));
    code.push("}".to_string());

    let mut text = code.join("\n");
    text.push('\n');
    text
}

/// Whether a trait view's row parameter must be sized, and whether it must be
/// `Debug` because rows themselves are visited as values
fn row_requirements(view: &ViewType, attributes: &[Attribute]) -> (bool, bool) {
    attributes
        .iter()
        .filter_map(|attr| view.accessor(&attr.name))
        .fold((false, false), |(sized, debug), a| (sized || a.needs_sized_row(), debug || a.self_typed))
}

/// `<R: ?Sized + View>` for trait views, so any implementor (trait objects
/// included) can be walked; nothing for concrete types
fn impl_generics(view: &ViewType, attributes: &[Attribute]) -> String {
    if view.kind != ViewKind::Trait {
        return String::new();
    }

    let (sized, debug) = row_requirements(view, attributes);
    let mut bounds = Vec::new();
    if !sized {
        bounds.push("?Sized");
    }
    bounds.push(view.name.as_str());
    if debug {
        bounds.push("Debug");
    }

    format!("<{}: {}>", ROW_PARAM, bounds.join(" + "))
}

/// Sorted, de-duplicated `use` paths of the walker
fn imports(view: &ViewType, attributes: &[Attribute], options: &EmitOptions) -> BTreeSet<String> {
    let mut imports = BTreeSet::new();

    imports.insert(view.path());
    imports.insert(format!(
        "{}::{{AttributeVisitor, AttributeWithValueVisitor, RowAttributeWalker}}",
        options.protocol_path
    ));

    for attr in attributes {
        imports.extend(attr.ty.imports().iter().cloned());
    }

    if view.kind == ViewKind::Trait && row_requirements(view, attributes).1 {
        imports.insert("std::fmt::Debug".to_string());
    }

    imports
}

fn value_call(attr: &Attribute) -> String {
    let method = method_ident(&attr.name);
    match &attr.ty {
        TypeRef::Reference { name, .. } => {
            format!("v.accept::<{}>({}, \"{}\", &row.{}());", name, attr.index, attr.name, method)
        }
        primitive => format!(
            "v.{}({}, \"{}\", row.{}());",
            primitive.accept_method(),
            attr.index,
            attr.name,
            method
        ),
    }
}

/// Method name as callable from Rust: keywords need the `r#` prefix
fn method_ident(name: &str) -> String {
    if syn::parse_str::<syn::Ident>(name).is_ok() {
        name.to_string()
    } else {
        format!("r#{}", name)
    }
}
