use serde::Serialize;

///
/// EnumDef
///
/// A closed value set. Value order is declaration order and is preserved
/// all the way to the emitted document.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct EnumDef {
    pub name: &'static str,
    pub values: &'static [&'static str],
}
