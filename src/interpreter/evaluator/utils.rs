use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a literal expression.
    ///
    /// Converts the literal value directly into a `Value` and returns it.
    /// Literals never produce errors.
    ///
    /// # Example
    /// ```
    /// use propexpr::{
    ///     ast::LiteralValue,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::eval_literal(&7.into()), Value::Integer(7));
    /// assert_eq!(Context::eval_literal(&LiteralValue::Null), Value::Null);
    /// ```
    #[must_use]
    pub fn eval_literal(value: &LiteralValue) -> Value {
        Value::from(value)
    }

    /// Resolves a bare identifier as a property of the root object.
    ///
    /// # Errors
    /// `PropertyNotFound` if no accessor handles the root, or whatever the
    /// accessor that handles it reports.
    pub fn eval_identifier(&self, name: &str, position: usize) -> EvalResult<Value> {
        self.read_property(self.root(), name, position)
    }

    /// Evaluates `target` and reads `name` from the result.
    pub fn eval_property(&self, target: &Expr, name: &str, position: usize) -> EvalResult<Value> {
        let target = self.eval(target)?;
        self.read_property(&target, name, position)
    }

    /// Evaluates a function call expression against the root object.
    ///
    /// Arguments are evaluated from left to right before any resolver is
    /// consulted, so an argument error is reported even for an unknown
    /// function.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Expression arguments.
    /// - `position`: Source position of the call.
    ///
    /// # Returns
    /// Result of the function.
    pub fn eval_function_call(&self,
                              name: &str,
                              arguments: &[Expr],
                              position: usize)
                              -> EvalResult<Value> {
        let args = self.eval_arguments(arguments)?;
        self.call_function(self.root(), name, &args, position)
    }

    /// Evaluates a call with an explicit target, such as `limits.SUM(1)`.
    ///
    /// The target is evaluated first, then the arguments, then the call is
    /// resolved with the target value in place of the root.
    pub fn eval_method_call(&self,
                            target: &Expr,
                            name: &str,
                            arguments: &[Expr],
                            position: usize)
                            -> EvalResult<Value> {
        let target = self.eval(target)?;
        let args = self.eval_arguments(arguments)?;
        self.call_function(&target, name, &args, position)
    }

    fn eval_arguments(&self, arguments: &[Expr]) -> EvalResult<Vec<Value>> {
        arguments.iter().map(|arg| self.eval(arg)).collect()
    }

    /// Evaluates a unary operation node.
    pub fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr, position: usize) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        Self::eval_unary(op, &value, position)
    }

    /// Evaluates a binary operation node.
    ///
    /// `and` / `or` are handed to [`Context::eval_logic`] unevaluated so the
    /// right side can be skipped; every other operator evaluates the left
    /// operand, then the right, then applies [`Context::eval_binary`].
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          position: usize)
                          -> EvalResult<Value> {
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.eval_logic(op, left, right, position);
        }

        let lval = self.eval(left)?;
        let rval = self.eval(right)?;

        Self::eval_binary(op, &lval, &rval, position)
    }

    /// Evaluates `condition ? then_branch : else_branch`.
    ///
    /// Only the selected branch is evaluated.
    ///
    /// # Errors
    /// `TypeError` if the condition is not a boolean.
    pub fn eval_ternary(&self,
                        condition: &Expr,
                        then_branch: &Expr,
                        else_branch: &Expr)
                        -> EvalResult<Value> {
        if self.eval(condition)?.as_bool(condition.position())? {
            self.eval(then_branch)
        } else {
            self.eval(else_branch)
        }
    }
}
