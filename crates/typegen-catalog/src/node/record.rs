use crate::node::field::FieldList;
use serde::Serialize;

///
/// RecordDef
///
/// A concrete type: an ordered field list under a unique name. When a record
/// is a union variant its field list is complete — shared fields and the
/// discriminator field included — so its object schema stands alone.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct RecordDef {
    pub name: &'static str,
    pub fields: FieldList,
}
