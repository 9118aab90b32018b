use crate::node::{Field, FieldList, TypeDef};
use serde::Serialize;

///
/// UnionDef
///
/// A polymorphic type as an explicit tagged-variant record: it names its
/// discriminator field up front and enumerates its variants, instead of the
/// generator inferring either by convention. `discriminator: None` means the
/// type has nothing to map and the generator skips it with a diagnostic.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct UnionDef {
    pub name: &'static str,
    pub fields: FieldList,
    pub discriminator: Option<&'static str>,
    pub variants: &'static [Variant],
}

impl UnionDef {
    /// The discriminator field, if the declared name resolves to one.
    #[must_use]
    pub fn discriminator_field(&self) -> Option<&Field> {
        self.fields.get(self.discriminator?)
    }
}

///
/// Variant
///
/// `tag` is the discriminator value the variant declares for itself. The
/// generator requires it to equal the variant type's name and fails fast
/// when it does not, rather than assuming the two agree.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Variant {
    pub tag: &'static str,
    pub def: &'static TypeDef,
}
