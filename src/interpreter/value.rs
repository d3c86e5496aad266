/// Core value representation.
///
/// Defines the `Value` enum returned by every property read, function call and
/// operator, together with its payload-free `ValueType` tag and the numeric
/// conversions used by the evaluator.
pub mod core;
/// Objects exposed to expressions.
///
/// Declares the `Object` and `KeyValue` capability traits that accessors check
/// structurally, and `PropertyMap`, the stock key/value root object.
pub mod object;
/// Numeric-string coercion.
///
/// Best-effort conversion of raw stored strings into integers or reals,
/// applied when properties are read.
pub mod coerce;
