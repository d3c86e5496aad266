/// The accessor trait and its result type.
pub mod core;
/// The stock accessor for key/value objects.
pub mod map;
