use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `+`.
    ///
    /// If either operand is a string, the result is the concatenation of both
    /// operands' display forms (`'n=' + 4` is `"n=4"`). Otherwise both must be
    /// numbers and are added like the other arithmetic operators.
    pub fn eval_add(left: &Value, right: &Value, position: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::Str(format!("{left}{right}"))),
            _ => Self::eval_arithmetic(BinaryOperator::Add, left, right, position),
        }
    }

    /// Evaluates a numeric arithmetic operation.
    ///
    /// Two integers stay integers: the operation is checked, division
    /// truncates toward zero and `%` takes the sign of the dividend. If either
    /// side is real, the other is promoted and IEEE semantics apply, so real
    /// division by zero yields an infinity or NaN.
    ///
    /// The operator must be one of `Add`, `Sub`, `Mul`, `Div` or `Mod`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` for an integer `/` or `%` by zero.
    /// - `Overflow` if an integer result does not fit in `i64`.
    /// - `TypeError` if either operand is not a number.
    ///
    /// # Example
    /// ```
    /// use propexpr::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let x = Value::Integer(7);
    /// let y = Value::Integer(2);
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Div, &x, &y, 0).unwrap();
    /// assert_eq!(result, Value::Integer(3));
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Div, &x, &Value::Real(2.0), 0).unwrap();
    /// assert_eq!(result, Value::Real(3.5));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                let (a, b) = (*a, *b);
                if matches!(op, Div | Mod) && b == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Div => a.checked_div(b),
                    Mod => a.checked_rem(b),
                    _ => return Err(operand_error(op, left, right, position)),
                };
                result.map(Value::Integer)
                      .ok_or(RuntimeError::Overflow { position })
            },
            _ if left.is_numeric() && right.is_numeric() => {
                let (l, r) = left.clone().promote_to_real(right, position)?;
                let a = l.as_real(position)?;
                let b = r.as_real(position)?;

                Ok(Value::Real(match op {
                                   Add => a + b,
                                   Sub => a - b,
                                   Mul => a * b,
                                   Div => a / b,
                                   Mod => a % b,
                                   _ => return Err(operand_error(op, left, right, position)),
                               }))
            },
            _ => Err(operand_error(op, left, right, position)),
        }
    }

    /// Evaluates `^`.
    ///
    /// An integer raised to a non-negative integer exponent is computed
    /// exactly and checked for overflow. Every other numeric combination is
    /// computed as a real with `powf`, so `2 ^ -1` is `0.5`.
    ///
    /// # Example
    /// ```
    /// use propexpr::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// assert_eq!(Context::eval_pow(&Value::Integer(2), &Value::Integer(10), 0).unwrap(),
    ///            Value::Integer(1024));
    /// assert_eq!(Context::eval_pow(&Value::Integer(2), &Value::Integer(-1), 0).unwrap(),
    ///            Value::Real(0.5));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, position: usize) -> EvalResult<Value> {
        match (base, exponent) {
            (Value::Integer(b), Value::Integer(e)) if *e >= 0 => {
                u32::try_from(*e).ok()
                                 .and_then(|e| b.checked_pow(e))
                                 .map(Value::Integer)
                                 .ok_or(RuntimeError::Overflow { position })
            },
            _ if base.is_numeric() && exponent.is_numeric() => {
                Ok(Value::Real(base.as_real(position)?.powf(exponent.as_real(position)?)))
            },
            _ => Err(operand_error(BinaryOperator::Pow, base, exponent, position)),
        }
    }
}

fn operand_error(op: BinaryOperator, left: &Value, right: &Value, position: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} '{left}' and {} '{right}'",
                                               left.type_name(),
                                               right.type_name()),
                              position }
}
