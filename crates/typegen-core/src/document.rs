use serde::{Serialize, Serializer, ser::SerializeMap};

///
/// SchemaKind
///
/// Wire names for primitive shapes. Serialized form is the lowercase kind
/// string consumers match on, so renames here are breaking changes.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum SchemaKind {
    Boolean,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    String,
    Timestamp,
    Uint8,
    Uint16,
    Uint32,
}

///
/// SchemaNode
///
/// One recursive unit of a document. An enum node is exactly
/// `{"enum":[...]}` and never also carries a `type` key.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Kind {
        #[serde(rename = "type")]
        ty: SchemaKind,
    },
    Enum {
        #[serde(rename = "enum")]
        values: Vec<String>,
    },
    Elements {
        elements: Box<SchemaNode>,
    },
    Custom {
        #[serde(rename = "type")]
        ty: SchemaKind,
        metadata: CustomMetadata,
    },
}

impl SchemaNode {
    #[must_use]
    pub const fn kind(ty: SchemaKind) -> Self {
        Self::Kind { ty }
    }

    #[must_use]
    pub const fn string() -> Self {
        Self::Kind {
            ty: SchemaKind::String,
        }
    }

    #[must_use]
    pub const fn boolean() -> Self {
        Self::Kind {
            ty: SchemaKind::Boolean,
        }
    }

    #[must_use]
    pub fn enumeration(values: &[&str]) -> Self {
        Self::Enum {
            values: values.iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn elements(node: Self) -> Self {
        Self::Elements {
            elements: Box::new(node),
        }
    }

    /// Opaque reference to a custom type: tagged in metadata, not expanded.
    #[must_use]
    pub fn custom(name: &str) -> Self {
        Self::Custom {
            ty: SchemaKind::String,
            metadata: CustomMetadata {
                custom_type: name.to_string(),
            },
        }
    }
}

///
/// CustomMetadata
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CustomMetadata {
    #[serde(rename = "customType")]
    pub custom_type: String,
}

///
/// OrderedMap
///
/// Insertion-ordered string map. A repeated key overwrites the value in
/// place, keeping the first insertion's position; that is the documented
/// collision behavior for formatted field names, not an error.
///

#[derive(Clone, Debug, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: String, value: V) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Formatted field name → schema node.
pub type PropertyMap = OrderedMap<SchemaNode>;

/// Variant type name → object schema.
pub type Mapping = OrderedMap<ObjectSchema>;

///
/// ObjectSchema
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ObjectSchema {
    pub properties: PropertyMap,
}

///
/// UnionSchema
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnionSchema {
    pub discriminator: String,
    pub mapping: Mapping,
}

///
/// SchemaDoc
///
/// The per-type output artifact. The serialized shape is the one contract
/// existing consumers depend on.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaDoc {
    Object(ObjectSchema),
    Union(UnionSchema),
}

impl SchemaDoc {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_nodes_serialize_to_type_key() {
        let node = SchemaNode::kind(SchemaKind::Uint16);
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({"type": "uint16"}));
    }

    #[test]
    fn enum_nodes_carry_no_type_key() {
        let node = SchemaNode::enumeration(&["Employment", "Passive"]);
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"enum": ["Employment", "Passive"]})
        );
    }

    #[test]
    fn custom_nodes_tag_the_type_name() {
        let node = SchemaNode::custom("Address");
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"type": "string", "metadata": {"customType": "Address"}})
        );
    }

    #[test]
    fn ordered_map_preserves_insertion_order() {
        let mut map = PropertyMap::new();
        map.insert("b".to_string(), SchemaNode::string());
        map.insert("a".to_string(), SchemaNode::boolean());

        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn ordered_map_overwrites_in_place() {
        let mut map = PropertyMap::new();
        map.insert("a".to_string(), SchemaNode::string());
        map.insert("b".to_string(), SchemaNode::string());
        map.insert("a".to_string(), SchemaNode::boolean());

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&SchemaNode::boolean()));
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
