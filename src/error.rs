/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// expression text: unexpected tokens, unbalanced parentheses, unterminated
/// strings and literals that do not fit their type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression: unresolvable properties and functions, type mismatches,
/// rejected function arguments and arithmetic failures.
pub mod runtime_error;
/// Errors raised by pluggable accessors and function executors.
///
/// These carry no source position; the evaluator attaches one when it turns
/// them into a [`RuntimeError`].
pub mod access_error;
/// Configuration loading errors.
pub mod config_error;

pub use access_error::AccessError;
pub use config_error::ConfigError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a single `parse` + `evaluate` round trip.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The expression text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed expression failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use propexpr::{Context, error::ErrorKind, get_result, interpreter::value::core::Value};
    ///
    /// let context = Context::with_defaults(Value::Null);
    ///
    /// let err = get_result("(1 + 2", &context).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ParseError);
    ///
    /// let err = get_result("MAX(1, 2)", &context).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::FunctionNotFound);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::ParseError,
            Self::Runtime(e) => e.kind(),
        }
    }
}

/// The error taxonomy reported to callers alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed expression text.
    ParseError,
    /// No accessor could resolve an identifier, or none could write it.
    PropertyNotFound,
    /// No resolver matched a call name.
    FunctionNotFound,
    /// An operator was applied to incompatible operand types.
    TypeError,
    /// A function received an unparseable or unsupported argument.
    InvalidArgument,
    /// An accessor was invoked against a target it does not support.
    PropertyAccessError,
    /// Integer division by zero or integer overflow.
    Arithmetic,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ParseError => "ParseError",
            Self::PropertyNotFound => "PropertyNotFound",
            Self::FunctionNotFound => "FunctionNotFound",
            Self::TypeError => "TypeError",
            Self::InvalidArgument => "InvalidArgument",
            Self::PropertyAccessError => "PropertyAccessError",
            Self::Arithmetic => "Arithmetic",
        };
        write!(f, "{name}")
    }
}
