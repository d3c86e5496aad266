use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Language-level equality.
///
/// Numbers compare by value across integer and real (`3 == 3.0`); everything
/// else compares structurally, so values of different kinds are simply not
/// equal. Never fails.
///
/// # Example
/// ```
/// use propexpr::interpreter::{evaluator::binary::comparison::loose_eq, value::core::Value};
///
/// assert!(loose_eq(&Value::Integer(3), &Value::Real(3.0)));
/// assert!(!loose_eq(&Value::Integer(3), &Value::from("3")));
/// assert!(loose_eq(&Value::Null, &Value::Null));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(a), Value::Real(b)) | (Value::Real(b), Value::Integer(a)) => *a as f64 == *b,
        _ => left == right,
    }
}

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` use [`loose_eq`]. The relational operators accept two
    /// numbers (integers are compared exactly, mixed operands as reals) or two
    /// strings (lexicographic by code point).
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `position`: Source position used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Errors
    /// `TypeError` if a relational operator gets anything other than two
    /// numbers or two strings.
    ///
    /// # Example
    /// ```
    /// use propexpr::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Integer(3);
    /// let b = Value::Real(5.0);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, 0);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &Value::Null, 0);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        if matches!(op, Equal | NotEqual) {
            return Ok(Value::Bool(loose_eq(left, right) == matches!(op, Equal)));
        }

        let ordering = Self::order(op, left, right, position)?;

        Ok(Value::Bool(match op {
                           Less => ordering.is_some_and(Ordering::is_lt),
                           Greater => ordering.is_some_and(Ordering::is_gt),
                           LessEqual => ordering.is_some_and(Ordering::is_le),
                           GreaterEqual => ordering.is_some_and(Ordering::is_ge),
                           _ => false,
                       }))
    }

    /// Orders two comparable values. `None` means unordered (a NaN operand).
    fn order(op: BinaryOperator,
             left: &Value,
             right: &Value,
             position: usize)
             -> EvalResult<Option<Ordering>> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Some(a.cmp(b))),
            (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
            _ if left.is_numeric() && right.is_numeric() => {
                Ok(left.as_real(position)?
                       .partial_cmp(&right.as_real(position)?))
            },
            _ => {
                Err(RuntimeError::TypeError { details: format!("cannot compare {} '{left}' {op} {} '{right}'",
                                                               left.type_name(),
                                                               right.type_name()),
                                              position })
            },
        }
    }
}
