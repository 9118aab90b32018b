use crate::{
    classify::classify,
    document::{ObjectSchema, PropertyMap},
    generate::GenerateError,
    naming::schema_key,
};
use typegen_catalog::node::FieldList;

/// Build an object schema from a field list, in declaration order. Two
/// fields formatting to the same key collapse to the later one; the map
/// keeps the first key's position.
pub fn build_object(fields: &FieldList) -> Result<ObjectSchema, GenerateError> {
    let mut properties = PropertyMap::new();

    for field in fields.fields {
        let node = classify(field.ty.as_ref())?;
        properties.insert(schema_key(field.ident), node);
    }

    Ok(ObjectSchema { properties })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use typegen_catalog::{
        node::{Field, TypeRef},
        types::Primitive,
    };

    #[test]
    fn formats_names_and_keeps_declaration_order() {
        static FIELDS: [Field; 2] = [
            Field::new("Amount", TypeRef::Primitive(Primitive::Decimal)),
            Field::new("Source", TypeRef::Primitive(Primitive::Text)),
        ];
        let fields = FieldList { fields: &FIELDS };

        let schema = build_object(&fields).unwrap();
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "properties": {
                    "amount": {"type": "string"},
                    "source": {"type": "string"},
                }
            })
        );
        let keys: Vec<_> = schema.properties.keys().collect();
        assert_eq!(keys, vec!["amount", "source"]);
    }

    #[test]
    fn colliding_keys_overwrite_silently() {
        static FIELDS: [Field; 2] = [
            Field::new("Flag", TypeRef::Primitive(Primitive::Bool)),
            Field::new("flag", TypeRef::Primitive(Primitive::Text)),
        ];
        let fields = FieldList { fields: &FIELDS };

        let schema = build_object(&fields).unwrap();
        assert_eq!(schema.properties.len(), 1);
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({"properties": {"flag": {"type": "string"}}})
        );
    }

    #[test]
    fn absent_field_type_aborts_the_object() {
        let fields = FieldList {
            fields: &[Field {
                ident: "Broken",
                ty: None,
            }],
        };

        assert!(matches!(
            build_object(&fields),
            Err(GenerateError::InvalidTypeReference)
        ));
    }
}
