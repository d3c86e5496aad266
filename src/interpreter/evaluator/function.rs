use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Value, ValueType},
    },
};

impl Context {
    /// Calls `name` on `target` with already evaluated arguments.
    ///
    /// Resolvers are asked in order with the target and the argument types;
    /// the first executor returned runs. Nothing is executed if no resolver
    /// matches.
    ///
    /// # Parameters
    /// - `target`: The call target; the root object for plain calls.
    /// - `name`: Function name.
    /// - `args`: Evaluated arguments.
    /// - `position`: Source position of the call.
    ///
    /// # Errors
    /// - `FunctionNotFound` listing the argument types if nothing resolves.
    /// - The executor's own failure, positioned at `position`.
    ///
    /// # Example
    /// ```
    /// use propexpr::{Context, interpreter::value::core::Value};
    ///
    /// let context = Context::with_defaults(Value::Null);
    /// let args = [Value::Integer(1), Value::from("2,3")];
    ///
    /// assert_eq!(context.call_function(&Value::Null, "SUM", &args, 0).unwrap(),
    ///            Value::Real(6.0));
    /// assert!(context.call_function(&Value::Null, "sum", &args, 0).is_err());
    /// ```
    pub fn call_function(&self,
                         target: &Value,
                         name: &str,
                         args: &[Value],
                         position: usize)
                         -> EvalResult<Value> {
        let arg_types: Vec<ValueType> = args.iter().map(Value::value_type).collect();

        let Some(executor) = self.resolvers()
                                 .iter()
                                 .find_map(|r| r.resolve(target, name, &arg_types))
        else {
            let arguments = arg_types.iter()
                                     .map(ToString::to_string)
                                     .collect::<Vec<_>>()
                                     .join(", ");
            return Err(RuntimeError::FunctionNotFound { name: name.to_string(),
                                                        arguments,
                                                        target: target.type_name(),
                                                        position });
        };

        if let Some(observer) = self.observer() {
            observer.function_resolved(name, &arg_types);
        }

        let result = executor.execute(target, args)
                             .map_err(|e| e.at(name, position))?;

        if let Some(observer) = self.observer() {
            observer.function_returned(name, &result);
        }

        Ok(result)
    }
}
