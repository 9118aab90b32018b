pub mod classify;
pub mod document;
pub mod generate;
pub mod naming;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        classify::classify,
        document::{ObjectSchema, SchemaDoc, SchemaKind, SchemaNode, UnionSchema},
        generate::{Diagnostic, Document, GenerateError, Generation, generate},
        naming::{is_artifact_name, schema_key},
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] generate::GenerateError),
}
