use crate::{
    document::{SchemaKind, SchemaNode},
    generate::GenerateError,
};
use typegen_catalog::{node::TypeRef, types::Primitive};

/// Map a field's type reference to its schema node. Precedence is fixed:
/// string, enum, boolean, mapped primitive, element container, then the
/// opaque custom-type fallback. An absent reference is the caller's bug
/// and fails the enclosing document.
pub fn classify(ty: Option<&TypeRef>) -> Result<SchemaNode, GenerateError> {
    let Some(ty) = ty else {
        return Err(GenerateError::InvalidTypeReference);
    };

    let node = match *ty {
        TypeRef::Primitive(Primitive::Text) => SchemaNode::string(),
        TypeRef::Enum(def) => SchemaNode::enumeration(def.values),
        TypeRef::Primitive(Primitive::Bool) => SchemaNode::boolean(),
        TypeRef::Primitive(prim) => SchemaNode::kind(primitive_kind(prim)),
        TypeRef::Array(elem) | TypeRef::Sequence(elem) => {
            SchemaNode::elements(classify(Some(elem))?)
        }
        TypeRef::Custom(name) => SchemaNode::custom(name),
    };

    Ok(node)
}

const fn primitive_kind(prim: Primitive) -> SchemaKind {
    match prim {
        Primitive::Float32 => SchemaKind::Float32,
        Primitive::Float64 => SchemaKind::Float64,
        Primitive::Int8 => SchemaKind::Int8,
        Primitive::Uint8 => SchemaKind::Uint8,
        Primitive::Int16 => SchemaKind::Int16,
        Primitive::Uint16 => SchemaKind::Uint16,
        Primitive::Int32 => SchemaKind::Int32,
        Primitive::Uint32 => SchemaKind::Uint32,
        Primitive::Timestamp => SchemaKind::Timestamp,
        // anything unlisted falls through to a plain string
        _ => SchemaKind::String,
    }
}

///
/// TESTS
///
