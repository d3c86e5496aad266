use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Reads `name` from `target` through the accessor chain.
    ///
    /// The first accessor that supports the target and agrees to read the
    /// name performs the read. Later accessors are never consulted, even if
    /// the chosen one fails.
    ///
    /// # Errors
    /// - `PropertyNotFound` if no accessor is capable.
    /// - The accessor's own failure, positioned at `position`.
    ///
    /// # Example
    /// ```
    /// use propexpr::{
    ///     Context,
    ///     error::RuntimeError,
    ///     interpreter::value::{core::Value, object::PropertyMap},
    /// };
    ///
    /// let context = Context::with_defaults(PropertyMap::from_iter([("n", "7")]).into());
    ///
    /// assert_eq!(context.read_property(context.root(), "n", 0).unwrap(),
    ///            Value::Integer(7));
    /// assert!(matches!(context.read_property(&Value::Integer(1), "n", 0),
    ///                  Err(RuntimeError::PropertyNotFound { .. })));
    /// ```
    pub fn read_property(&self, target: &Value, name: &str, position: usize) -> EvalResult<Value> {
        let accessor = self.accessors()
                           .iter()
                           .find(|a| a.supports(target) && a.can_read(target, name))
                           .ok_or_else(|| RuntimeError::PropertyNotFound { name: name.to_string(),
                                                                           target: target.type_name(),
                                                                           position })?;

        let value = accessor.read(target, name)
                            .map_err(|e| e.at(name, position))?;

        if let Some(observer) = self.observer() {
            observer.property_read(name, &value);
        }

        Ok(value)
    }

    /// Writes `value` under `name` on `target` through the accessor chain.
    ///
    /// Mirrors [`Context::read_property`], using `can_write` instead of
    /// `can_read`. The value is stored as given.
    ///
    /// # Errors
    /// - `PropertyNotWritable` if no accessor is capable.
    /// - The accessor's own failure, positioned at `position`.
    pub fn write_property(&self,
                          target: &Value,
                          name: &str,
                          value: Value,
                          position: usize)
                          -> EvalResult<()> {
        let accessor = self.accessors()
                           .iter()
                           .find(|a| a.supports(target) && a.can_write(target, name))
                           .ok_or_else(|| RuntimeError::PropertyNotWritable { name: name.to_string(),
                                                                              target: target.type_name(),
                                                                              position })?;

        if let Some(observer) = self.observer() {
            observer.property_written(name, &value);
        }

        accessor.write(target, name, value)
                .map_err(|e| e.at(name, position))
    }

    /// Stores `value` under `name` on the root object.
    ///
    /// There is no assignment syntax in the language; this is how a host
    /// updates the root between evaluations.
    ///
    /// # Example
    /// ```
    /// use propexpr::{
    ///     Context, get_result,
    ///     interpreter::value::{core::Value, object::PropertyMap},
    /// };
    ///
    /// let context = Context::with_defaults(PropertyMap::new().into());
    /// context.assign("limit", Value::Integer(10)).unwrap();
    ///
    /// assert_eq!(get_result("limit * 2", &context).unwrap(), Value::Integer(20));
    /// ```
    pub fn assign(&self, name: &str, value: Value) -> EvalResult<()> {
        self.write_property(self.root(), name, value, 0)
    }
}
