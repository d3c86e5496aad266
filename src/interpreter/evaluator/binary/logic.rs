use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The left operand is evaluated first and must be a boolean. The right
    /// operand is only evaluated when it can change the outcome, and must then
    /// be a boolean too.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or`.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    /// - `position`: Source position of the operator.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Example
    /// ```
    /// use propexpr::{Context, get_result, interpreter::value::core::Value};
    ///
    /// let context = Context::with_defaults(Value::Null);
    ///
    /// // `missing` is never looked up.
    /// assert_eq!(get_result("false and missing", &context).unwrap(),
    ///            Value::Bool(false));
    /// assert_eq!(get_result("1 < 2 or missing", &context).unwrap(),
    ///            Value::Bool(true));
    /// ```
    pub fn eval_logic(&self,
                      op: BinaryOperator,
                      left: &Expr,
                      right: &Expr,
                      position: usize)
                      -> EvalResult<Value> {
        let lval = self.eval(left)?.as_bool(position)?;

        let decided = match op {
            BinaryOperator::And => !lval,
            BinaryOperator::Or => lval,
            _ => {
                let rval = self.eval(right)?;
                return Self::eval_binary(op, &Value::Bool(lval), &rval, position);
            },
        };
        if decided {
            return Ok(Value::Bool(lval));
        }

        Ok(Value::Bool(self.eval(right)?.as_bool(position)?))
    }
}
