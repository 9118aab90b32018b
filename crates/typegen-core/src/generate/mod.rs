pub mod object;
pub mod union;

pub use object::build_object;
pub use union::build_union;

use crate::{document::SchemaDoc, naming::is_artifact_name};
use std::{collections::BTreeSet, fmt};
use thiserror::Error as ThisError;
use typegen_catalog::{catalog::Catalog, node::TypeDef};

///
/// GenerateError
///
/// Failures abort only the current type's document; the driver records a
/// diagnostic and moves on to the next catalog entry.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum GenerateError {
    #[error("field type reference is absent")]
    InvalidTypeReference,

    #[error("union '{union}': variant '{variant}' declares tag '{tag}', which must match its type name")]
    TagMismatch {
        union: String,
        variant: String,
        tag: String,
    },

    #[error("union '{union}': variant '{variant}' is not a concrete type")]
    UnsupportedVariant { union: String, variant: String },
}

///
/// Diagnostic
///
/// Non-fatal findings from one run, kept on the result so callers can
/// report them however they like.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    NoDiscriminator { union: String },
    TypeFailed { name: String, message: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDiscriminator { union } => {
                write!(f, "union '{union}' has no qualifying discriminator, skipping")
            }
            Self::TypeFailed { name, message } => {
                write!(f, "type '{name}' failed to generate: {message}")
            }
        }
    }
}

///
/// Document
///

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub name: String,
    pub schema: SchemaDoc,
}

///
/// Generation
///
/// The explicit run accumulator: produced documents, the set of variant
/// names already emitted inline, and any diagnostics. Nothing about a run
/// lives outside this value.
///

#[derive(Debug, Default)]
pub struct Generation {
    pub documents: Vec<Document>,
    pub consumed: BTreeSet<&'static str>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Generation {
    #[must_use]
    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.name == name)
    }
}

/// Translate every catalog entry into at most one schema document, in
/// catalog order. Enum definitions exist to be referenced by fields and
/// never produce standalone documents.
pub fn generate(catalog: &Catalog) -> Generation {
    let mut run = Generation::default();

    for def in catalog.types() {
        let name = def.name();

        // already emitted inline under a union mapping
        if run.consumed.contains(name) {
            continue;
        }
        if !is_artifact_name(name) {
            tracing::debug!(name, "skipping non-artifact type name");
            continue;
        }

        let result = match def {
            TypeDef::Record(record) => {
                build_object(&record.fields).map(|obj| Some(SchemaDoc::Object(obj)))
            }
            TypeDef::Union(union) => build_union(union, &mut run),
            TypeDef::Enum(_) => Ok(None),
        };

        match result {
            Ok(Some(schema)) => run.documents.push(Document {
                name: name.to_string(),
                schema,
            }),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(name, %err, "type generation failed");
                run.diagnostics.push(Diagnostic::TypeFailed {
                    name: name.to_string(),
                    message: err.to_string(),
                });
            }
        }
    }

    run
}

///
/// TESTS
///
