use crate::{
    MAX_FIELD_NAME_LEN, MAX_TYPE_NAME_LEN, err,
    error::ErrorTree,
    node::{Field, TypeDef, UnionDef},
};
use std::collections::BTreeSet;

///
/// Catalog
///
/// The ordered source of truth for one generation run. Listing every type
/// and every subtype relationship explicitly keeps the generator free of
/// any runtime introspection.
///

#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    types: &'static [TypeDef],
}

impl Catalog {
    #[must_use]
    pub const fn new(types: &'static [TypeDef]) -> Self {
        Self { types }
    }

    /// All known type definitions, in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.iter()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|def| def.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Structural validation of every definition in the catalog.
    pub fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        let mut seen = BTreeSet::new();

        for def in self.types {
            let name = def.name();

            if let Err(e) = validate_type_name(name) {
                errs.add(e);
            }
            if !seen.insert(name) {
                err!(errs, "duplicate type name '{name}'");
            }

            match def {
                TypeDef::Record(record) => {
                    validate_fields(&mut errs, name, record.fields.fields);
                }
                TypeDef::Union(union) => {
                    validate_fields(&mut errs, name, union.fields.fields);
                    validate_union(&mut errs, union);
                }
                TypeDef::Enum(e) => {
                    if e.values.is_empty() {
                        err!(errs, "enum '{name}' has no values");
                    }
                }
            }
        }

        errs.result()
    }
}

/// Ensure type names are non-empty, ASCII, and within the maximum length.
fn validate_type_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("type name is empty".to_string());
    }
    if name.len() > MAX_TYPE_NAME_LEN {
        return Err(format!(
            "type name '{name}' exceeds max length {MAX_TYPE_NAME_LEN}"
        ));
    }
    if !name.is_ascii() {
        return Err(format!("type name '{name}' must be ASCII"));
    }

    Ok(())
}

fn validate_fields(errs: &mut ErrorTree, owner: &str, fields: &[Field]) {
    for field in fields {
        if field.ident.is_empty() {
            err!(errs, "type '{owner}' has a field with an empty ident");
        }
        if field.ident.len() > MAX_FIELD_NAME_LEN {
            err!(
                errs,
                "field '{owner}.{}' exceeds max length {MAX_FIELD_NAME_LEN}",
                field.ident
            );
        }
    }
}

fn validate_union(errs: &mut ErrorTree, union: &UnionDef) {
    let name = union.name;

    // a declared discriminator must resolve to an enum-typed field
    if let Some(disc) = union.discriminator {
        match union.fields.get(disc) {
            None => err!(errs, "union '{name}' discriminator '{disc}' is not a field"),
            Some(field) => {
                if !field.ty.is_some_and(|ty| ty.is_enum()) {
                    err!(
                        errs,
                        "union '{name}' discriminator '{disc}' is not enum-typed"
                    );
                }
            }
        }
    }

    for variant in union.variants {
        if variant.tag.is_empty() {
            err!(errs, "union '{name}' has a variant with an empty tag");
        }
        if matches!(variant.def, TypeDef::Enum(_)) {
            err!(
                errs,
                "union '{name}' variant '{}' is an enum, not a concrete type",
                variant.tag
            );
        }
    }
}

///
/// TESTS
///
