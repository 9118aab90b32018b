use crate::{node::EnumDef, types::Primitive};
use serde::Serialize;

///
/// TypeRef
///
/// What a field's type resolves to. Built from `&'static` parts so whole
/// catalogs can be declared as statics; `Array` and `Sequence` both emit
/// element schemas but are kept distinct to match the declared model.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub enum TypeRef {
    Primitive(Primitive),
    Enum(&'static EnumDef),
    Array(&'static TypeRef),
    Sequence(&'static TypeRef),
    Custom(&'static str),
}

impl TypeRef {
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }
}

///
/// Field
///
/// `ty` is optional because an unresolved reference can reach the catalog;
/// the generator rejects it per field rather than trusting construction.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Field {
    pub ident: &'static str,
    pub ty: Option<TypeRef>,
}

impl Field {
    #[must_use]
    pub const fn new(ident: &'static str, ty: TypeRef) -> Self {
        Self {
            ident,
            ty: Some(ty),
        }
    }
}

///
/// FieldList
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldList {
    pub fields: &'static [Field],
}

impl FieldList {
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == ident)
    }
}
