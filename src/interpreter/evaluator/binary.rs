/// Operator dispatch.
pub mod core;
/// Arithmetic, exponentiation and string concatenation.
pub mod arithmetic;
/// Equality and ordering.
pub mod comparison;
/// The short-circuiting connectives `and` / `or`.
pub mod logic;
