pub mod catalog;
pub mod error;
pub mod node;
pub mod types;

/// Maximum length for type names used as artifact identifiers.
pub const MAX_TYPE_NAME_LEN: usize = 64;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        catalog::Catalog,
        err,
        error::ErrorTree,
        node::*,
        types::Primitive,
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("catalog validation failed: {0}")]
    Validation(ErrorTree),
}
