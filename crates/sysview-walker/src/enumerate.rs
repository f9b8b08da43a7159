//! Attribute enumeration and index assignment

use crate::constants::EXCLUDED_ACCESSORS;
use crate::error::{Result, WalkerError};
use crate::model::{AccessorDeclaration, Attribute, TypeRef, ViewType};

/// Enumerate the attributes of `view` in walker order.
///
/// Accessors carrying an explicit order come first, ascending by order; the
/// rest follow in ascending name order. Indices are assigned `0..n` in that
/// sequence. Two accessors sharing an explicit order are rejected.
pub fn enumerate(view: &ViewType) -> Result<Vec<Attribute>> {
    let mut ordered: Vec<(i32, &AccessorDeclaration, &TypeRef)> = Vec::new();
    let mut unordered: Vec<(&AccessorDeclaration, &TypeRef)> = Vec::new();

    for accessor in &view.accessors {
        let Some(ty) = eligible_type(view, accessor) else {
            continue;
        };

        match accessor.order {
            Some(order) => ordered.push((order, accessor, ty)),
            None => unordered.push((accessor, ty)),
        }
    }

    ordered.sort_by_key(|(order, _, _)| *order);
    unordered.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name));

    if let Some(pair) = ordered.windows(2).find(|pair| pair[0].0 == pair[1].0) {
        return Err(WalkerError::DuplicateOrder {
            view: view.name.clone(),
            order: pair[0].0,
            first: pair[0].1.name.clone(),
            second: pair[1].1.name.clone(),
        });
    }

    let attributes = ordered
        .into_iter()
        .map(|(_, accessor, ty)| (accessor, ty))
        .chain(unordered)
        .enumerate()
        .map(|(index, (accessor, ty))| Attribute { name: accessor.name.clone(), ty: ty.clone(), index })
        .collect();

    Ok(attributes)
}

/// Return type of `accessor` if it becomes an attribute
fn eligible_type<'a>(view: &ViewType, accessor: &'a AccessorDeclaration) -> Option<&'a TypeRef> {
    if accessor.is_static() {
        tracing::debug!("{}: skipping static `{}`", view.name, accessor.name);
        return None;
    }

    if EXCLUDED_ACCESSORS.contains(&accessor.name.as_str()) {
        tracing::debug!("{}: skipping excluded `{}`", view.name, accessor.name);
        return None;
    }

    let Some(ty) = accessor.ty.as_ref() else {
        tracing::debug!("{}: skipping `{}` with no return value", view.name, accessor.name);
        return None;
    };

    if !accessor.is_callable_getter() {
        tracing::debug!("{}: skipping `{}`, not a plain &self getter", view.name, accessor.name);
        return None;
    }

    Some(ty)
}
