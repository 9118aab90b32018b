pub mod field;
pub mod record;
pub mod union;
pub mod r#enum;

pub use field::{Field, FieldList, TypeRef};
pub use r#enum::EnumDef;
pub use record::RecordDef;
pub use union::{UnionDef, Variant};

use serde::Serialize;

///
/// TypeDef
///
/// One entry in the catalog. Enums are listed so fields can reference them,
/// but only records and unions produce standalone documents.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub enum TypeDef {
    Record(&'static RecordDef),
    Union(&'static UnionDef),
    Enum(&'static EnumDef),
}

impl TypeDef {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Record(def) => def.name,
            Self::Union(def) => def.name,
            Self::Enum(def) => def.name,
        }
    }
}
