/// Core parsing logic.
///
/// Contains the entry points (`parse_source`, `parse_expression`), the
/// ternary level of the grammar and shared result types.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, identifiers, function calls,
/// parenthesized groups and the postfix `.name` / `.name(...)` chain.
pub mod unary;

/// Binary operator parsing.
///
/// Implements one function per precedence level, from logical OR down to
/// exponentiation.
pub mod binary;

/// Parser utility functions.
///
/// Provides helpers for comma separated lists and expected tokens.
pub mod utils;
