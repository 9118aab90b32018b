use crate::{
    document::{Mapping, SchemaDoc, UnionSchema},
    generate::{Diagnostic, GenerateError, Generation, object::build_object},
    naming::schema_key,
};
use typegen_catalog::node::{TypeDef, UnionDef, Variant};

/// Build a discriminated-union schema, or skip the union entirely when it
/// declares no qualifying discriminator. Variant names are marked consumed
/// only once the whole document is known good, so a failed union never
/// suppresses its variants' standalone documents.
pub fn build_union(
    union: &UnionDef,
    run: &mut Generation,
) -> Result<Option<SchemaDoc>, GenerateError> {
    let qualifying = union
        .discriminator_field()
        .filter(|field| field.ty.is_some_and(|ty| ty.is_enum()));

    let Some(field) = qualifying else {
        run.diagnostics.push(Diagnostic::NoDiscriminator {
            union: union.name.to_string(),
        });
        return Ok(None);
    };

    let mut mapping = Mapping::new();
    let mut consumed = Vec::new();
    collect_variants(union, union.variants, &mut mapping, &mut consumed)?;

    run.consumed.extend(consumed);

    Ok(Some(SchemaDoc::Union(UnionSchema {
        discriminator: schema_key(field.ident),
        mapping,
    })))
}

/// Flatten variants into the mapping, recursing through nested unions so
/// every transitively reachable concrete variant gets exactly one entry.
fn collect_variants(
    union: &UnionDef,
    variants: &[Variant],
    mapping: &mut Mapping,
    consumed: &mut Vec<&'static str>,
) -> Result<(), GenerateError> {
    for variant in variants {
        match variant.def {
            TypeDef::Record(record) => {
                // declared tags must agree with the type name they map
                if variant.tag != record.name {
                    return Err(GenerateError::TagMismatch {
                        union: union.name.to_string(),
                        variant: record.name.to_string(),
                        tag: variant.tag.to_string(),
                    });
                }

                mapping.insert(record.name.to_string(), build_object(&record.fields)?);
                consumed.push(record.name);
            }
            TypeDef::Union(nested) => {
                collect_variants(union, nested.variants, mapping, consumed)?;
            }
            TypeDef::Enum(e) => {
                return Err(GenerateError::UnsupportedVariant {
                    union: union.name.to_string(),
                    variant: e.name.to_string(),
                });
            }
        }
    }

    Ok(())
}

///
/// TESTS
///
