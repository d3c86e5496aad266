use crate::interpreter::{
    accessor::core::AccessResult,
    value::core::{Value, ValueType},
};

/// Maps a function call to something that can execute it.
///
/// Resolution happens after the arguments have been evaluated, so a resolver
/// may choose an implementation based on their types. A context asks its
/// resolvers in order and uses the first executor returned.
pub trait FunctionResolver {
    /// Returns an executor for `name` called on `target` with arguments of
    /// the given types, or `None` if this resolver does not handle the call.
    fn resolve(&self,
               target: &Value,
               name: &str,
               arg_types: &[ValueType])
               -> Option<Box<dyn FunctionExecutor>>;
}

/// A resolved function, ready to run against evaluated arguments.
pub trait FunctionExecutor {
    /// Runs the function.
    fn execute(&self, target: &Value, args: &[Value]) -> AccessResult<Value>;
}
