//! Accessor discovery by static analysis of view source

use crate::constants::{ANNOTATION_PREFIX, ORDER_KEY};
use crate::error::{Result, WalkerError};
use crate::imports::ImportTable;
use crate::model::{AccessorDeclaration, Receiver, TypeRef, ViewKind, ViewType};
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::visit_mut::VisitMut;
use syn::{
    Attribute, Expr, ExprLit, FnArg, GenericArgument, GenericParam, Generics, ImplItem, Item,
    Lifetime, Lit, Meta, PathArguments, ReturnType, Signature, TraitItem, Type, TypeParamBound,
    Visibility, WherePredicate,
};

/// Discover the view type `name` declared in `source`.
///
/// A trait named `name` takes precedence; otherwise the public methods of all
/// inherent `impl name` blocks form the contract. `module` is the absolute
/// module path the source file is compiled as.
pub fn discover(source: &str, name: &str, module: &str) -> Result<ViewType> {
    let file = syn::parse_file(source)?;
    let imports = ImportTable::from_file(&file, module);

    let item_trait = file.items.iter().find_map(|item| match item {
        Item::Trait(t) if t.ident == name => Some(t),
        _ => None,
    });

    if let Some(item_trait) = item_trait {
        if !item_trait.generics.params.is_empty() {
            return Err(WalkerError::GenericView { name: name.to_string() });
        }

        let mut view = ViewType::new(name, ViewKind::Trait, module);
        let self_ty: Type = syn::parse_str(&view.row_type())?;
        for item in &item_trait.items {
            if let TraitItem::Fn(f) = item {
                view.accessors.push(declaration(&f.attrs, &f.sig, &self_ty, &imports)?);
            }
        }
        tracing::debug!("{}: found trait with {} methods", name, view.accessors.len());
        return Ok(view);
    }

    let declared = file.items.iter().find_map(|item| match item {
        Item::Struct(s) if s.ident == name => Some(&s.generics),
        Item::Enum(e) if e.ident == name => Some(&e.generics),
        Item::Union(u) if u.ident == name => Some(&u.generics),
        _ => None,
    });

    let impls: Vec<_> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(i) if i.trait_.is_none() && is_named(&i.self_ty, name) => Some(i),
            _ => None,
        })
        .collect();

    let lifetimes = match (declared, impls.first()) {
        (Some(generics), _) => lifetime_count(generics),
        (None, Some(item_impl)) => impl_lifetime_count(&item_impl.self_ty),
        (None, None) => return Err(WalkerError::ViewNotFound { name: name.to_string() }),
    };
    let lifetimes = lifetimes.ok_or_else(|| WalkerError::GenericView { name: name.to_string() })?;

    let mut view = ViewType::new(name, ViewKind::Type, module).with_lifetimes(lifetimes);
    let self_ty: Type = syn::parse_str(&view.row_type())?;
    for item_impl in impls {
        for item in &item_impl.items {
            if let ImplItem::Fn(f) = item {
                if matches!(f.vis, Visibility::Public(_)) {
                    view.accessors.push(declaration(&f.attrs, &f.sig, &self_ty, &imports)?);
                }
            }
        }
    }
    tracing::debug!("{}: found {} public methods", name, view.accessors.len());

    Ok(view)
}

/// Whether `ty` names the view, ignoring generic arguments
fn is_named(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(p) => p.qself.is_none() && p.path.segments.last().is_some_and(|s| s.ident == name),
        _ => false,
    }
}

/// Number of lifetime parameters, `None` if there are type or const parameters
fn lifetime_count(generics: &Generics) -> Option<usize> {
    generics
        .params
        .iter()
        .try_fold(0, |n, p| matches!(p, GenericParam::Lifetime(_)).then_some(n + 1))
}

fn impl_lifetime_count(ty: &Type) -> Option<usize> {
    let Type::Path(p) = ty else {
        return Some(0);
    };
    match p.path.segments.last().map(|s| &s.arguments) {
        Some(PathArguments::AngleBracketed(args)) => args
            .args
            .iter()
            .try_fold(0, |n, a| matches!(a, GenericArgument::Lifetime(_)).then_some(n + 1)),
        _ => Some(0),
    }
}

fn declaration(
    attrs: &[Attribute],
    sig: &Signature,
    self_ty: &Type,
    imports: &ImportTable,
) -> Result<AccessorDeclaration> {
    let name = sig.ident.unraw().to_string();

    let receiver = match sig.receiver() {
        None => Receiver::None,
        Some(r) if r.colon_token.is_some() => Receiver::Value,
        Some(r) => match (&r.reference, &r.mutability) {
            (Some(_), None) => Receiver::Ref,
            (Some(_), Some(_)) => Receiver::RefMut,
            (None, _) => Receiver::Value,
        },
    };

    let extra_inputs = sig.inputs.iter().filter(|arg| matches!(arg, FnArg::Typed(_))).count();

    let mut self_typed = false;
    let ty = match &sig.output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) if is_unit(ty) => None,
        ReturnType::Type(_, ty) => {
            let mut replacer = SelfReplacer { with: self_ty, replaced: false };
            let mut rewritten = (**ty).clone();
            replacer.visit_type_mut(&mut rewritten);
            self_typed = replacer.replaced;
            Some(type_ref(&rewritten, imports.resolve(ty)))
        }
    };

    let generic = sig.generics.params.iter().any(|p| !matches!(p, GenericParam::Lifetime(_)))
        || matches!(&sig.output, ReturnType::Type(_, ty) if matches!(**ty, Type::ImplTrait(_)));

    let order = order_annotation(&name, attrs)?;

    Ok(AccessorDeclaration {
        name,
        ty,
        order,
        receiver,
        extra_inputs,
        generic,
        sized_only: requires_sized_self(sig),
        self_typed,
    })
}

fn is_unit(ty: &Type) -> bool {
    matches!(ty, Type::Tuple(t) if t.elems.is_empty())
}

fn is_self(ty: &Type) -> bool {
    matches!(ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident("Self"))
}

/// `where Self: Sized`
fn requires_sized_self(sig: &Signature) -> bool {
    sig.generics.where_clause.iter().flat_map(|w| &w.predicates).any(|p| match p {
        WherePredicate::Type(pt) => {
            is_self(&pt.bounded_ty)
                && pt.bounds.iter().any(|b| matches!(b, TypeParamBound::Trait(t) if t.path.is_ident("Sized")))
        }
        _ => false,
    })
}

/// Rewrites a return type for use inside a walker: `Self` becomes the row
/// type and named lifetimes become `'_`
struct SelfReplacer<'a> {
    with: &'a Type,
    replaced: bool,
}

impl VisitMut for SelfReplacer<'_> {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        if is_self(ty) {
            *ty = self.with.clone();
            self.replaced = true;
            return;
        }

        // `Self::Assoc` becomes `R::Assoc`
        if let (Type::Path(p), Type::Path(with)) = (&mut *ty, self.with) {
            if let (None, Some(row)) = (&p.qself, with.path.get_ident()) {
                if p.path.segments.len() > 1 && p.path.segments[0].ident == "Self" {
                    p.path.segments[0].ident = row.clone();
                    self.replaced = true;
                }
            }
        }

        syn::visit_mut::visit_type_mut(self, ty);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident != "static" {
            *lifetime = Lifetime::new("'_", lifetime.span());
        }
    }
}

/// Classify `ty`; a reference type carries the `use` paths it needs
pub fn type_ref(ty: &Type, imports: Vec<String>) -> TypeRef {
    if let Type::Path(p) = ty {
        if p.qself.is_none() {
            if let Some(ident) = p.path.get_ident() {
                if let Some(primitive) = TypeRef::primitive(&ident.to_string()) {
                    return primitive;
                }
            }
        }
    }

    TypeRef::Reference { name: render_type(ty), imports }
}

/// Render a type the way it is usually written by hand
pub fn render_type(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();

    [
        (" :: ", "::"),
        (":: ", "::"),
        (" < ", "<"),
        ("< ", "<"),
        (" >", ">"),
        (" ,", ","),
        ("& ", "&"),
        ("( ", "("),
        (" )", ")"),
        ("[ ", "["),
        (" ]", "]"),
        (" ;", ";"),
    ]
    .iter()
    .fold(raw, |text, (from, to)| text.replace(from, to))
}

/// Explicit order from `/// walker:order=N`
fn order_annotation(accessor: &str, attrs: &[Attribute]) -> Result<Option<i32>> {
    let invalid = |reason: String| WalkerError::InvalidAnnotation {
        accessor: accessor.to_string(),
        reason,
    };

    let mut order = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("doc")) {
        let Meta::NameValue(nv) = &attr.meta else {
            continue;
        };
        let Expr::Lit(ExprLit { lit: Lit::Str(doc), .. }) = &nv.value else {
            continue;
        };

        let text = doc.value();
        let Some(annotation) = text.trim().strip_prefix(ANNOTATION_PREFIX) else {
            continue;
        };

        let (key, value) = annotation
            .split_once('=')
            .ok_or_else(|| invalid(format!("expected `key=value`, found `{}`", annotation.trim())))?;

        if key.trim() != ORDER_KEY {
            return Err(invalid(format!("unknown key `{}`", key.trim())));
        }

        let value: i32 = value
            .trim()
            .parse()
            .map_err(|_| invalid(format!("order must be an integer, found `{}`", value.trim())))?;

        if order.replace(value).is_some() {
            return Err(invalid("order given more than once".to_string()));
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ty: &str) -> String {
        render_type(&syn::parse_str::<Type>(ty).unwrap())
    }

    #[test]
    fn test_render_type() {
        assert_eq!(render("String"), "String");
        assert_eq!(render("Option<String>"), "Option<String>");
        assert_eq!(render("&str"), "&str");
        assert_eq!(render("&'static str"), "&'static str");
        assert_eq!(render("std::time::Duration"), "std::time::Duration");
        assert_eq!(render("HashMap<String, Vec<u8>>"), "HashMap<String, Vec<u8>>");
        assert_eq!(render("[u8; 16]"), "[u8; 16]");
        assert_eq!(render("Vec<(u32, String)>"), "Vec<(u32, String)>");
    }

    #[test]
    fn test_order_annotation() {
        let item: syn::TraitItemFn = syn::parse_quote! {
            /// Cache identifier.
            /// walker:order=2
            fn cache_id(&self) -> i32;
        };
        assert_eq!(order_annotation("cache_id", &item.attrs).unwrap(), Some(2));
    }

    #[test]
    fn test_order_annotation_negative() {
        let item: syn::TraitItemFn = syn::parse_quote! {
            /// walker: order = -1
            fn first(&self) -> i32;
        };
        assert_eq!(order_annotation("first", &item.attrs).unwrap(), Some(-1));
    }

    #[test]
    fn test_order_annotation_invalid_value() {
        let item: syn::TraitItemFn = syn::parse_quote! {
            /// walker:order=first
            fn id(&self) -> i32;
        };
        let err = order_annotation("id", &item.attrs).unwrap_err();
        assert!(err.to_string().contains("order must be an integer"));
    }

    #[test]
    fn test_order_annotation_unknown_key() {
        let item: syn::TraitItemFn = syn::parse_quote! {
            /// walker:rank=1
            fn id(&self) -> i32;
        };
        let err = order_annotation("id", &item.attrs).unwrap_err();
        assert!(err.to_string().contains("unknown key `rank`"));
    }

    #[test]
    fn test_plain_docs_ignored() {
        let item: syn::TraitItemFn = syn::parse_quote! {
            /// Order of the walker: not an annotation.
            fn id(&self) -> i32;
        };
        assert_eq!(order_annotation("id", &item.attrs).unwrap(), None);
    }

    fn replace_self(ty: &str, with: &str) -> (String, bool) {
        let with = syn::parse_str::<Type>(with).unwrap();
        let mut ty = syn::parse_str::<Type>(ty).unwrap();
        let mut replacer = SelfReplacer { with: &with, replaced: false };
        replacer.visit_type_mut(&mut ty);
        (render_type(&ty), replacer.replaced)
    }

    #[test]
    fn test_self_replaced_by_row_type() {
        assert_eq!(replace_self("Self", "R"), ("R".to_string(), true));
        assert_eq!(replace_self("Option<Self>", "NodeView"), ("Option<NodeView>".to_string(), true));
        assert_eq!(replace_self("Vec<Self::Item>", "R"), ("Vec<R::Item>".to_string(), true));
        assert_eq!(replace_self("Option<String>", "R"), ("Option<String>".to_string(), false));
        assert_eq!(replace_self("&'a str", "R"), ("&'_ str".to_string(), false));
        assert_eq!(replace_self("&'static str", "R"), ("&'static str".to_string(), false));
    }

    #[test]
    fn test_requires_sized_self() {
        let item: syn::TraitItemFn = syn::parse_quote! {
            fn snapshot(&self) -> i32 where Self: Sized;
        };
        assert!(requires_sized_self(&item.sig));

        let item: syn::TraitItemFn = syn::parse_quote! {
            fn id(&self) -> i32;
        };
        assert!(!requires_sized_self(&item.sig));
    }

    #[test]
    fn test_lifetime_count() {
        let item: syn::ItemStruct = syn::parse_quote! { struct ConnView<'a, 'b> { a: &'a str, b: &'b str } };
        assert_eq!(lifetime_count(&item.generics), Some(2));

        let item: syn::ItemStruct = syn::parse_quote! { struct Table<T> { rows: Vec<T> } };
        assert_eq!(lifetime_count(&item.generics), None);
    }
}
