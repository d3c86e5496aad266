use thiserror::Error;

use crate::error::{AccessError, ErrorKind};

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur during evaluation.
///
/// Positions are byte offsets into the expression text.
pub enum RuntimeError {
    /// No accessor in the chain supports reading from the target.
    #[error("Error at position {position}: Property '{name}' cannot be found on object of type '{target}'.")]
    PropertyNotFound {
        /// The name of the property.
        name:     String,
        /// Type name of the target the property was looked up on.
        target:   String,
        /// Where the property reference starts.
        position: usize,
    },
    /// No accessor in the chain supports writing to the target.
    #[error("Error at position {position}: Property '{name}' cannot be written on object of type '{target}'.")]
    PropertyNotWritable {
        /// The name of the property.
        name:     String,
        /// Type name of the target.
        target:   String,
        /// Where the write was requested.
        position: usize,
    },
    /// An accessor accepted the target but failed to access it.
    #[error("Error at position {position}: Cannot access property '{name}': {source}.")]
    PropertyAccess {
        /// The name of the property.
        name:     String,
        /// The failure reported by the accessor.
        source:   AccessError,
        /// Where the property reference starts.
        position: usize,
    },
    /// No resolver in the chain recognized the function.
    #[error("Error at position {position}: Function {name}({arguments}) cannot be found on object of type '{target}'.")]
    FunctionNotFound {
        /// The name of the function.
        name:      String,
        /// Comma separated argument types, as offered to the resolvers.
        arguments: String,
        /// Type name of the call target.
        target:    String,
        /// Where the call starts.
        position:  usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error at position {position}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// Where the offending operator or construct starts.
        position: usize,
    },
    /// A function rejected one of its arguments.
    #[error("Error at position {position}: Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details:  String,
        /// Where the call starts.
        position: usize,
    },
    /// Attempted integer division by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Where the operator is.
        position: usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error at position {position}: Integer overflow while trying to compute result.")]
    Overflow {
        /// Where the operator is.
        position: usize,
    },
}

impl RuntimeError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PropertyNotFound { .. } | Self::PropertyNotWritable { .. } => {
                ErrorKind::PropertyNotFound
            },
            Self::PropertyAccess { .. } => ErrorKind::PropertyAccessError,
            Self::FunctionNotFound { .. } => ErrorKind::FunctionNotFound,
            Self::TypeError { .. } => ErrorKind::TypeError,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::DivisionByZero { .. } | Self::Overflow { .. } => ErrorKind::Arithmetic,
        }
    }

    /// The source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::PropertyNotFound { position, .. }
            | Self::PropertyNotWritable { position, .. }
            | Self::PropertyAccess { position, .. }
            | Self::FunctionNotFound { position, .. }
            | Self::TypeError { position, .. }
            | Self::InvalidArgument { position, .. }
            | Self::DivisionByZero { position }
            | Self::Overflow { position } => *position,
        }
    }
}
