use thiserror::Error;

use crate::error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures reported by property accessors and function executors.
pub enum AccessError {
    /// The accessor was handed a target without the capability it needs.
    #[error("target of type '{target}' is not a key/value object, cannot access '{name}'")]
    UnsupportedTarget {
        /// The property name.
        name:   String,
        /// Type name of the target.
        target: String,
    },
    /// The accessor can read the target but refuses to modify it.
    #[error("property '{name}' is read-only")]
    ReadOnly {
        /// The property name.
        name: String,
    },
    /// A function could not use one of its arguments.
    #[error("invalid arguments: {details}")]
    InvalidArgument {
        /// The offending argument and why it was rejected.
        details: String,
    },
}

impl AccessError {
    /// Attaches the source position of the property reference or call that
    /// triggered the failure.
    ///
    /// `InvalidArgument` keeps its own kind; every other failure is reported
    /// as an access failure on `name`.
    #[must_use]
    pub fn at(self, name: &str, position: usize) -> RuntimeError {
        match self {
            Self::InvalidArgument { details } => {
                RuntimeError::InvalidArgument { details, position }
            },
            source @ (Self::UnsupportedTarget { .. } | Self::ReadOnly { .. }) => {
                RuntimeError::PropertyAccess { name: name.to_string(),
                                               source,
                                               position }
            },
        }
    }
}
