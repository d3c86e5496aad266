use crate::interpreter::value::core::{Value, ValueType};

/// Callbacks fired while an expression is evaluated.
///
/// Every method has an empty default, so an observer only implements what it
/// cares about. Callbacks run synchronously, in evaluation order.
pub trait EvalObserver {
    /// A property was read; `value` is the coerced result.
    fn property_read(&self, _name: &str, _value: &Value) {}

    /// A property was written through [`Context::assign`].
    ///
    /// [`Context::assign`]: crate::interpreter::evaluator::core::Context::assign
    fn property_written(&self, _name: &str, _value: &Value) {}

    /// A resolver produced an executor for a call.
    fn function_resolved(&self, _name: &str, _arg_types: &[ValueType]) {}

    /// An executor returned successfully.
    fn function_returned(&self, _name: &str, _result: &Value) {}
}

/// Observer that forwards every callback to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl EvalObserver for TracingObserver {
    fn property_read(&self, name: &str, value: &Value) {
        tracing::debug!(property = name, %value, "property read");
    }

    fn property_written(&self, name: &str, value: &Value) {
        tracing::debug!(property = name, %value, "property written");
    }

    fn function_resolved(&self, name: &str, arg_types: &[ValueType]) {
        tracing::debug!(function = name, ?arg_types, "function resolved");
    }

    fn function_returned(&self, name: &str, result: &Value) {
        tracing::debug!(function = name, %result, "function returned");
    }
}
