use crate::{
    error::AccessError,
    interpreter::{
        accessor::core::AccessResult,
        resolver::core::{FunctionExecutor, FunctionResolver},
        value::{
            coerce::parse_real,
            core::{Value, ValueType},
        },
    },
};

/// Name under which [`SumExecutor`] is registered.
pub const SUM: &str = "SUM";

/// Resolver for the aggregate functions.
///
/// Only `SUM` is provided. Matching is exact and case-sensitive; the target
/// and the argument types do not influence resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateResolver;

impl FunctionResolver for AggregateResolver {
    fn resolve(&self,
               _target: &Value,
               name: &str,
               _arg_types: &[ValueType])
               -> Option<Box<dyn FunctionExecutor>> {
        (name == SUM).then(|| Box::new(SumExecutor) as Box<dyn FunctionExecutor>)
    }
}

/// Sums any mix of numbers and comma separated number lists.
///
/// Every argument is flattened into one or more `f64` values:
/// - integers and reals contribute themselves,
/// - a string containing `,` is split and every trimmed piece is parsed as a
///   real number.
///
/// Anything else, including a string without a comma, is rejected with
/// `InvalidArgument`. The result is always a real; no arguments sum to `0.0`.
///
/// # Example
/// ```
/// use propexpr::interpreter::{
///     resolver::{aggregate::SumExecutor, core::FunctionExecutor},
///     value::core::Value,
/// };
///
/// let args = [Value::Integer(1), Value::Real(2.5), Value::from("3,4")];
///
/// assert_eq!(SumExecutor.execute(&Value::Null, &args).unwrap(),
///            Value::Real(10.5));
/// assert!(SumExecutor.execute(&Value::Null, &[Value::from("7")]).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SumExecutor;

impl FunctionExecutor for SumExecutor {
    fn execute(&self, _target: &Value, args: &[Value]) -> AccessResult<Value> {
        Ok(Value::Real(sum(args)?))
    }
}

/// Adds up the flattened arguments from left to right.
pub fn sum(args: &[Value]) -> AccessResult<f64> {
    let mut total = 0.0;
    for arg in args {
        for n in expand(arg)? {
            total += n;
        }
    }
    Ok(total)
}

/// Flattens one argument into the numbers it stands for.
///
/// Empty pieces at the end of a list are dropped, so `"1,2,"` is `[1, 2]` and
/// `",,"` is empty. Empty pieces anywhere else are invalid.
///
/// # Errors
/// `InvalidArgument` naming the argument if it is not a number or a comma
/// separated list of numbers.
#[allow(clippy::cast_precision_loss)]
pub fn expand(arg: &Value) -> AccessResult<Vec<f64>> {
    match arg {
        Value::Integer(n) => Ok(vec![*n as f64]),
        Value::Real(r) => Ok(vec![*r]),
        Value::Str(s) if s.contains(',') => {
            let list = s.trim_end_matches(',');
            if list.is_empty() {
                return Ok(Vec::new());
            }
            list.split(',')
                .map(|piece| parse_real(piece).ok_or_else(|| invalid(arg)))
                .collect()
        },
        other => Err(invalid(other)),
    }
}

fn invalid(arg: &Value) -> AccessError {
    AccessError::InvalidArgument { details: arg.to_string() }
}
