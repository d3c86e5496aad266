use crate::{error::AccessError, interpreter::value::core::Value};

/// Result type returned by accessors and function executors.
pub type AccessResult<T> = Result<T, AccessError>;

/// Reads and writes named properties on a target value.
///
/// A context asks its accessors in order; the first one that
/// [`supports`](PropertyAccessor::supports) the target and agrees to the
/// operation handles it. Accessors hold no per-evaluation state.
pub trait PropertyAccessor {
    /// Returns `true` if this accessor knows how to handle `target` at all.
    fn supports(&self, target: &Value) -> bool;

    /// Returns `true` if `name` can be read from `target`.
    fn can_read(&self, target: &Value, name: &str) -> bool;

    /// Reads `name` from `target`.
    fn read(&self, target: &Value, name: &str) -> AccessResult<Value>;

    /// Returns `true` if `name` can be written on `target`.
    fn can_write(&self, _target: &Value, _name: &str) -> bool {
        false
    }

    /// Writes `value` under `name` on `target`.
    fn write(&self, _target: &Value, name: &str, _value: Value) -> AccessResult<()> {
        Err(AccessError::ReadOnly { name: name.to_string() })
    }

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
