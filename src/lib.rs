//! # propexpr
//!
//! propexpr is a small expression evaluator written in Rust. Expressions are
//! evaluated against a key/value root object whose string values are coerced
//! to numbers on read, and function calls are resolved through pluggable
//! resolvers. The stock resolver provides `SUM`, which accepts numbers and
//! comma separated number lists alike.
//!
//! ```
//! use propexpr::{Context, get_result, interpreter::value::core::Value};
//!
//! let root = propexpr::config::parse_properties("a=1\nb=2.5\nlist=3,4").unwrap();
//! let context = Context::with_defaults(root.into());
//!
//! assert_eq!(get_result("SUM(a, b, list)", &context).unwrap(), Value::Real(10.5));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expression,
    error::{Error, ParseError, RuntimeError},
    interpreter::{accessor::core::PropertyAccessor, resolver::core::FunctionResolver},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree, and the `Expression`
/// wrapper that keeps the tree together with its source text.
///
/// # Responsibilities
/// - Defines node types for every construct of the language.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Loads `.properties` files into a key/value root.
///
/// # Responsibilities
/// - Parses the classic properties format, including continuation lines and
///   escapes.
/// - Reports unreadable files with their path.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating an expression, the errors pluggable accessors report, and
/// configuration loading errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches source positions and detailed messages for context.
/// - Classifies failures into a small set of error kinds.
pub mod error;
/// Orchestrates parsing and evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the pluggable accessor and resolver chains.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Defines the extension traits hosts implement to expose their data.
pub mod interpreter;
/// The line-oriented interactive loop.
pub mod session;

pub use interpreter::{evaluator::core::Context, value::core::Value};

/// Builds a context from a root value and explicit capability chains.
///
/// The first accessor that can read a property handles it, and the first
/// resolver that recognizes a call handles it.
///
/// # Example
/// ```
/// use propexpr::{
///     build_context, get_result,
///     interpreter::{
///         accessor::map::MapAccessor,
///         value::{core::Value, object::PropertyMap},
///     },
/// };
///
/// // No resolvers: every call fails to resolve.
/// let context = build_context(PropertyMap::from_iter([("x", "1")]).into(),
///                             vec![Box::new(MapAccessor)],
///                             Vec::new());
///
/// assert_eq!(get_result("x", &context).unwrap(), Value::Integer(1));
/// assert!(get_result("SUM(x)", &context).is_err());
/// ```
#[must_use]
pub fn build_context(root: Value,
                     accessors: Vec<Box<dyn PropertyAccessor>>,
                     resolvers: Vec<Box<dyn FunctionResolver>>)
                     -> Context {
    Context::new(root, accessors, resolvers)
}

/// Parses expression text without evaluating it.
///
/// # Errors
/// Returns a `ParseError` describing the offending token and its position.
pub fn parse(source: &str) -> Result<Expression, ParseError> {
    Expression::parse(source)
}

/// Evaluates a parsed expression against a context.
///
/// # Errors
/// Returns a `RuntimeError` if any property, function or operator fails.
pub fn evaluate(expression: &Expression, context: &Context) -> Result<Value, RuntimeError> {
    expression.evaluate(context)
}

/// Parses and evaluates `source` in one step.
///
/// # Errors
/// Returns an error if parsing or evaluation fails; [`Error::kind`] tells
/// which.
///
/// # Examples
/// ```
/// use propexpr::{Context, get_result, interpreter::value::core::Value};
///
/// let context = Context::with_defaults(Value::Null);
///
/// // Simple expression: the result will be calculated and no error should occur.
/// assert_eq!(get_result("2 + 2", &context).unwrap(), Value::Integer(4));
///
/// // Example with an intentional error: `x` cannot be read from a null root.
/// assert!(get_result("x + 1", &context).is_err());
/// ```
pub fn get_result(source: &str, context: &Context) -> Result<Value, Error> {
    let expression = parse(source)?;
    Ok(evaluate(&expression, context)?)
}
