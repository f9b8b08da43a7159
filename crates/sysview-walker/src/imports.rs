//! Resolution of type names to `use` paths
//!
//! Emitted walkers live in a different module than the views they walk, so
//! every bare type name an attribute mentions must be imported. Names are
//! resolved against the view file's `use` items and its own item
//! definitions. Prelude types are never imported.

use crate::constants::PRELUDE_TYPES;
use std::collections::{BTreeMap, BTreeSet};
use syn::visit::Visit;
use syn::{File, Item, Path, Type, UseTree};

/// Bare names visible in a view source file, mapped to absolute paths
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    module: Vec<String>,
    names: BTreeMap<String, String>,
}

impl ImportTable {
    /// Build the table for `file`, whose items live in `module`
    pub fn from_file(file: &File, module: &str) -> Self {
        let mut table = Self {
            module: module.split("::").map(str::to_string).collect(),
            names: BTreeMap::new(),
        };

        for item in &file.items {
            match item {
                Item::Use(item_use) => table.collect_use(&mut Vec::new(), &item_use.tree),
                Item::Struct(s) => table.define(&s.ident),
                Item::Enum(e) => table.define(&e.ident),
                Item::Union(u) => table.define(&u.ident),
                Item::Type(t) => table.define(&t.ident),
                Item::Trait(t) => table.define(&t.ident),
                _ => {}
            }
        }

        table
    }

    /// Absolute path bound to a bare name, if known
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// Sorted `use` paths needed to name `ty` from another module
    pub fn resolve(&self, ty: &Type) -> Vec<String> {
        let mut collector = Collector { table: self, found: BTreeSet::new() };
        collector.visit_type(ty);
        collector.found.into_iter().collect()
    }

    fn define(&mut self, ident: &syn::Ident) {
        let mut path = self.module.clone();
        path.push(ident.to_string());
        self.names.insert(ident.to_string(), path.join("::"));
    }

    fn collect_use(&mut self, prefix: &mut Vec<String>, tree: &UseTree) {
        match tree {
            UseTree::Path(p) => {
                prefix.push(p.ident.to_string());
                self.collect_use(prefix, &p.tree);
                prefix.pop();
            }
            UseTree::Name(n) => {
                if n.ident == "self" {
                    if let Some(last) = prefix.last().cloned() {
                        let path = self.absolute(prefix);
                        self.names.insert(last, path);
                    }
                } else {
                    prefix.push(n.ident.to_string());
                    let path = self.absolute(prefix);
                    self.names.insert(n.ident.to_string(), path);
                    prefix.pop();
                }
            }
            UseTree::Rename(r) => {
                let pushed = r.ident != "self";
                if pushed {
                    prefix.push(r.ident.to_string());
                }
                let path = self.absolute(prefix);
                self.names.insert(r.rename.to_string(), format!("{} as {}", path, r.rename));
                if pushed {
                    prefix.pop();
                }
            }
            UseTree::Group(g) => {
                for item in &g.items {
                    self.collect_use(prefix, item);
                }
            }
            // Glob imports cannot be resolved statically
            UseTree::Glob(_) => {}
        }
    }

    /// Rewrite `self::` and `super::` prefixes against the view module
    fn absolute(&self, segments: &[String]) -> String {
        let mut base: Vec<String> = Vec::new();
        let mut rest = segments;

        match rest.first().map(String::as_str) {
            Some("self") => {
                base = self.module.clone();
                rest = &rest[1..];
            }
            Some("super") => {
                base = self.module.clone();
                while rest.first().map(String::as_str) == Some("super") {
                    base.pop();
                    rest = &rest[1..];
                }
            }
            _ => {}
        }

        base.extend(rest.iter().cloned());
        base.join("::")
    }
}

struct Collector<'t> {
    table: &'t ImportTable,
    found: BTreeSet<String>,
}

impl<'ast> Visit<'ast> for Collector<'_> {
    fn visit_path(&mut self, path: &'ast Path) {
        if path.leading_colon.is_none() {
            if let Some(first) = path.segments.first() {
                let name = first.ident.to_string();
                let qualified = path.segments.len() > 1;

                if let Some(import) = self.table.lookup(&name) {
                    self.found.insert(import.to_string());
                } else if !qualified && !PRELUDE_TYPES.contains(&name.as_str()) {
                    tracing::warn!("Cannot resolve type `{}`; no import emitted", name);
                }
            }
        }

        syn::visit::visit_path(self, path);
    }
}
