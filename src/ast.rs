use std::str::FromStr;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        parser::core::parse_source,
        value::core::Value,
    },
};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// expression text: numbers, strings, booleans and `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `null` literal.
    Null,
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A quoted string literal, with quote escapes already resolved.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the byte offset in the source text at which the
/// construct starts, so runtime errors can point back at it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or `null`).
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A bare identifier, resolved as a property of the root object.
    Identifier {
        /// Name of the property.
        name:     String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// Member access on an evaluated target (e.g. `limits.max`).
    Property {
        /// The expression producing the object being accessed.
        target:   Box<Self>,
        /// Name of the property.
        name:     String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// Function call against the root object (e.g. `SUM(a, b)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, evaluated left to right.
        arguments: Vec<Self>,
        /// Byte offset in the source text.
        position:  usize,
    },
    /// Function call with an explicit target (e.g. `limits.SUM(1, 2)`).
    MethodCall {
        /// The expression producing the call target.
        target:    Box<Self>,
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, evaluated left to right.
        arguments: Vec<Self>,
        /// Byte offset in the source text.
        position:  usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source text.
        position: usize,
    },
    /// Conditional expression `condition ? then : else`.
    Ternary {
        /// The condition; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is true.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is false.
        else_branch: Box<Self>,
        /// Byte offset of the `?` in the source text.
        position:    usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use propexpr::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name:     "x".to_string(),
    ///                               position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Identifier { position, .. }
            | Self::Property { position, .. }
            | Self::FunctionCall { position, .. }
            | Self::MethodCall { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Ternary { position, .. } => *position,
        }
    }
}

/// A parsed expression together with the text it was parsed from.
///
/// Expressions are immutable once parsed and may be evaluated any number of
/// times against different contexts.
///
/// # Example
/// ```
/// use propexpr::{Context, ast::Expression, interpreter::value::core::Value};
///
/// let expression: Expression = "2 * (3 + 4)".parse().unwrap();
/// let context = Context::with_defaults(Value::Null);
///
/// assert_eq!(expression.evaluate(&context).unwrap(), Value::Integer(14));
/// assert_eq!(expression.evaluate(&context).unwrap(), Value::Integer(14));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root:   Expr,
}

impl Expression {
    /// Parses `source` into an expression tree without evaluating anything.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let root = parse_source(source)?;
        Ok(Self { source: source.to_string(),
                  root })
    }

    /// The text this expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The root node of the tree.
    #[must_use]
    pub const fn root(&self) -> &Expr {
        &self.root
    }

    /// Evaluates the expression against `context`.
    pub fn evaluate(&self, context: &Context) -> EvalResult<Value> {
        context.eval(&self.root)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logical connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`and`, `&&`)
    And,
    /// Logical or (`or`, `||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x` or `not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
