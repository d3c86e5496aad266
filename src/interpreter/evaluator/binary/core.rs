use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. `+` concatenates when either side is a string and adds
    /// otherwise. The other arithmetic operators call `eval_arithmetic`, power
    /// calls `eval_pow`. Relational and equality operators use
    /// `eval_comparison`. `and` / `or` require booleans on both sides.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use propexpr::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 0);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &"n=".into(), &right, 0);
    /// assert_eq!(result.unwrap(), Value::from("n=4"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        match op {
            Add => Self::eval_add(left, right, position),
            Sub | Mul | Div | Mod => Self::eval_arithmetic(op, left, right, position),
            Pow => Self::eval_pow(left, right, position),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, position)
            },
            And => Ok(Value::Bool(left.as_bool(position)? && right.as_bool(position)?)),
            Or => Ok(Value::Bool(left.as_bool(position)? || right.as_bool(position)?)),
        }
    }
}
