use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        accessor::{core::PropertyAccessor, map::MapAccessor},
        evaluator::observer::EvalObserver,
        resolver::{aggregate::AggregateResolver, core::FunctionResolver},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// A context bundles the root object that bare identifiers resolve against
/// with the ordered accessor and resolver chains. For each lookup the chains
/// are walked front to back and the first capable entry wins.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating any number of
/// expressions. Evaluation takes `&self`; the only state that can change is
/// the root mapping itself, through an explicit
/// [`assign`](Context::assign).
///
/// `Context` is not `Send`: the root is shared through `Rc`.
///
/// # Example
/// ```
/// use propexpr::{
///     Context, get_result,
///     interpreter::value::{core::Value, object::PropertyMap},
/// };
///
/// let root = PropertyMap::from_iter([("a", "2"), ("b", "3.5")]);
/// let context = Context::with_defaults(root.into());
///
/// assert_eq!(get_result("a + b", &context).unwrap(), Value::Real(5.5));
/// assert_eq!(get_result("SUM(a, '1,2')", &context).unwrap(), Value::Real(5.0));
/// ```
pub struct Context {
    root:      Value,
    accessors: Vec<Box<dyn PropertyAccessor>>,
    resolvers: Vec<Box<dyn FunctionResolver>>,
    observer:  Option<Box<dyn EvalObserver>>,
}

impl Context {
    /// Creates a context from a root value and explicit capability chains.
    ///
    /// The order of both vectors is the lookup order.
    #[must_use]
    pub fn new(root: Value,
               accessors: Vec<Box<dyn PropertyAccessor>>,
               resolvers: Vec<Box<dyn FunctionResolver>>)
               -> Self {
        Self { root,
               accessors,
               resolvers,
               observer: None }
    }

    /// Creates a context with the stock chains: [`MapAccessor`] for
    /// properties and [`AggregateResolver`] for functions.
    #[must_use]
    pub fn with_defaults(root: Value) -> Self {
        Self::new(root,
                  vec![Box::new(MapAccessor)],
                  vec![Box::new(AggregateResolver)])
    }

    /// Attaches an observer, replacing any previous one.
    #[must_use]
    pub fn with_observer(mut self, observer: impl EvalObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The root object bare identifiers resolve against.
    #[must_use]
    pub const fn root(&self) -> &Value {
        &self.root
    }

    pub(crate) fn accessors(&self) -> &[Box<dyn PropertyAccessor>] {
        &self.accessors
    }

    pub(crate) fn resolvers(&self) -> &[Box<dyn FunctionResolver>] {
        &self.resolvers
    }

    pub(crate) fn observer(&self) -> Option<&dyn EvalObserver> {
        self.observer.as_deref()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, identifiers, member access, function and method calls,
    /// unary and binary operations and conditional expressions.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value the expression produces.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Identifier { name, position } => self.eval_identifier(name, *position),
            Expr::Property { target,
                             name,
                             position, } => self.eval_property(target, name, *position),
            Expr::FunctionCall { name,
                                 arguments,
                                 position, } => self.eval_function_call(name, arguments, *position),
            Expr::MethodCall { target,
                               name,
                               arguments,
                               position, } => {
                self.eval_method_call(target, name, arguments, *position)
            },
            Expr::UnaryOp { op, expr, position } => self.eval_unary_op(*op, expr, *position),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position),
            Expr::Ternary { condition,
                            then_branch,
                            else_branch,
                            .. } => self.eval_ternary(condition, then_branch, else_branch),
        }
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let accessors: Vec<_> = self.accessors.iter().map(|a| a.name()).collect();

        f.debug_struct("Context")
         .field("root", &self.root)
         .field("accessors", &accessors)
         .field("resolvers", &self.resolvers.len())
         .field("observed", &self.observer.is_some())
         .finish()
    }
}
