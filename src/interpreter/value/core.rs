use std::rc::Rc;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::object::{KeyValue, Object, PropertyMap},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum is the uniform result of property reads, function calls and
/// operators. Host data enters the evaluator either as one of the scalar
/// variants or as an [`Object`].
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value. Reading a key that is not present in a
    /// key/value object yields `Null`.
    Null,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and logical operations, and required
    /// as the condition of a ternary expression.
    Bool(bool),
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A string value.
    Str(String),
    /// A host object, such as the key/value root of a context.
    Object(Rc<dyn Object>),
}

/// The type tag of a [`Value`], without its payload.
///
/// Function resolvers receive the tags of the evaluated arguments so they can
/// pick an implementation before anything is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Tag of [`Value::Null`].
    Null,
    /// Tag of [`Value::Bool`].
    Bool,
    /// Tag of [`Value::Integer`].
    Integer,
    /// Tag of [`Value::Real`].
    Real,
    /// Tag of [`Value::Str`].
    Str,
    /// Tag of [`Value::Object`].
    Object,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Str => "string",
            Self::Object => "object",
        };
        write!(f, "{name}")
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<PropertyMap> for Value {
    fn from(map: PropertyMap) -> Self {
        Self::Object(Rc::new(map))
    }
}

impl From<Rc<PropertyMap>> for Value {
    fn from(map: Rc<PropertyMap>) -> Self {
        Self::Object(map)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Null => Self::Null,
            LiteralValue::Real(n) => (*n).into(),
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Str(s) => s.as_str().into(),
        }
    }
}

impl Value {
    /// Returns the type tag of the value.
    ///
    /// # Example
    /// ```
    /// use propexpr::interpreter::value::core::{Value, ValueType};
    ///
    /// assert_eq!(Value::Integer(3).value_type(), ValueType::Integer);
    /// assert_eq!(Value::from("3").value_type(), ValueType::Str);
    /// ```
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Bool(_) => ValueType::Bool,
            Self::Integer(_) => ValueType::Integer,
            Self::Real(_) => ValueType::Real,
            Self::Str(_) => ValueType::Str,
            Self::Object(_) => ValueType::Object,
        }
    }

    /// Returns a human readable type name, used in error messages.
    ///
    /// Objects report their own [`Object::type_name`]; everything else reports
    /// its [`ValueType`].
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Object(object) => object.type_name().to_string(),
            other => other.value_type().to_string(),
        }
    }

    /// Returns the key/value view of the value, if it has one.
    ///
    /// Only objects that opt into the capability through
    /// [`Object::as_key_value`] return `Some`.
    #[must_use]
    pub fn as_key_value(&self) -> Option<&dyn KeyValue> {
        match self {
            Self::Object(object) => object.as_key_value(),
            _ => None,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`. Integers beyond 2^53 lose
    /// precision the same way an `as` conversion does.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is real or integer.
    /// - `Err(RuntimeError::TypeError)`: If not numeric.
    ///
    /// # Example
    /// ```
    /// use propexpr::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(0).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// assert!(Value::from("10").as_real(0).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            other => {
                Err(RuntimeError::TypeError { details: format!("expected a number, found {} '{other}'",
                                                               other.type_name()),
                                              position })
            },
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for ternary conditions and logical operations.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    pub fn as_bool(&self, position: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => {
                Err(RuntimeError::TypeError { details: format!("expected a boolean, found {} '{other}'",
                                                               other.type_name()),
                                              position })
            },
        }
    }

    /// Promotes an integer to a real value for mixed math, or returns values
    /// as-is if already matching.
    ///
    /// - If one side is an integer and the other is a real, the integer is
    ///   converted to a real.
    /// - Otherwise, both values are returned unchanged.
    ///
    /// # Parameters
    /// - `other`: The value to promote with.
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok((Self, Self))`: Promoted values.
    /// - `Err(RuntimeError)`: If conversion fails.
    pub fn promote_to_real(self, other: &Self, position: usize) -> EvalResult<(Self, Self)> {
        use Value::{Integer, Real};

        match (&self, other) {
            (Real(_), Integer(_)) => Ok((self, Self::Real(other.as_real(position)?))),
            (Integer(_), Real(_)) => Ok((Real(self.as_real(position)?), other.clone())),
            _ => Ok((self, other.clone())),
        }
    }

    /// Returns `true` if the value is [`Value::Integer`] or [`Value::Real`].
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Real(..))
    }
}

/// Structural equality.
///
/// Integers and reals are distinct here (`Integer(3) != Real(3.0)`); the `==`
/// operator of the language promotes numbers before comparing. Objects are
/// equal only when they are the same allocation.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            // Debug keeps the fractional part (`6.0`) and uses exponents (`1e20`) for very large or small magnitudes.
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Object(o) => write!(f, "{o}"),
        }
    }
}
