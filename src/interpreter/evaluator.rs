/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// string concatenation, comparisons and the short-circuiting connectives.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the `Context` type, its constructors and the main dispatch over
/// expression nodes.
pub mod core;

/// Evaluation of the individual expression nodes.
pub mod utils;

/// Property reads and writes through the accessor chain.
pub mod property;

/// Function calls through the resolver chain.
pub mod function;

/// Instrumentation hooks.
///
/// An observer attached to a context is told about every property access and
/// function call. The evaluator itself never logs.
pub mod observer;
