use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation for integers (checked) and reals.
    /// - `Not`: boolean negation.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use propexpr::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// // Negation
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 0).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// // Boolean not
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Bool(false), 0).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// // Overflow
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Value::Integer(i64::MIN), 0).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, position: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { position }),
                Value::Real(r) => Ok(Value::Real(-r)),
                other => {
                    Err(RuntimeError::TypeError { details: format!("cannot negate {} '{other}'",
                                                                   other.type_name()),
                                                  position })
                },
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(position)?)),
        }
    }
}
