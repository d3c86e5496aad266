/// The resolver and executor traits.
pub mod core;
/// The aggregate resolver providing `SUM`.
pub mod aggregate;
