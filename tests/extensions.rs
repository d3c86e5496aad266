use std::{cell::RefCell, rc::Rc};

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use propexpr::{
    Context, build_context,
    error::{AccessError, Error, ErrorKind, RuntimeError},
    get_result,
    interpreter::{
        accessor::{
            core::{AccessResult, PropertyAccessor},
            map::MapAccessor,
        },
        evaluator::observer::EvalObserver,
        resolver::{
            aggregate::{AggregateResolver, expand, sum},
            core::{FunctionExecutor, FunctionResolver},
        },
        value::{
            coerce::coerce,
            core::{Value, ValueType},
            object::{KeyValue, PropertyMap},
        },
    },
};

/// Answers `answer` with 42 on any target.
struct ConstantAccessor;

impl PropertyAccessor for ConstantAccessor {
    fn supports(&self, _target: &Value) -> bool {
        true
    }

    fn can_read(&self, _target: &Value, name: &str) -> bool {
        name == "answer"
    }

    fn read(&self, _target: &Value, _name: &str) -> AccessResult<Value> {
        Ok(Value::Integer(42))
    }
}

/// Claims it can write but keeps the default `write`.
struct LockedAccessor;

impl PropertyAccessor for LockedAccessor {
    fn supports(&self, _target: &Value) -> bool {
        true
    }

    fn can_read(&self, _target: &Value, _name: &str) -> bool {
        true
    }

    fn read(&self, target: &Value, name: &str) -> AccessResult<Value> {
        Err(AccessError::UnsupportedTarget { name:   name.to_string(),
                                             target: target.type_name(), })
    }

    fn can_write(&self, _target: &Value, _name: &str) -> bool {
        true
    }
}

/// Resolves `UPPER(string)`.
struct UpperResolver;

struct Upper;

impl FunctionResolver for UpperResolver {
    fn resolve(&self,
               _target: &Value,
               name: &str,
               arg_types: &[ValueType])
               -> Option<Box<dyn FunctionExecutor>> {
        (name == "UPPER" && arg_types == [ValueType::Str]).then(|| Box::new(Upper) as Box<dyn FunctionExecutor>)
    }
}

impl FunctionExecutor for Upper {
    fn execute(&self, _target: &Value, args: &[Value]) -> AccessResult<Value> {
        match args {
            [Value::Str(s)] => Ok(Value::Str(s.to_uppercase())),
            _ => Err(AccessError::InvalidArgument { details: "expected one string".to_string() }),
        }
    }
}

/// Resolves every `SUM` call to zero.
struct ZeroSum;

impl FunctionResolver for ZeroSum {
    fn resolve(&self,
               _target: &Value,
               name: &str,
               _arg_types: &[ValueType])
               -> Option<Box<dyn FunctionExecutor>> {
        (name == "SUM").then(|| Box::new(ZeroSum) as Box<dyn FunctionExecutor>)
    }
}

impl FunctionExecutor for ZeroSum {
    fn execute(&self, _target: &Value, _args: &[Value]) -> AccessResult<Value> {
        Ok(Value::Integer(0))
    }
}

#[derive(Default, Clone)]
struct Recorder {
    events: Rc<RefCell<Vec<String>>>,
}

impl EvalObserver for Recorder {
    fn property_read(&self, name: &str, value: &Value) {
        self.events.borrow_mut().push(format!("read {name}={value}"));
    }

    fn property_written(&self, name: &str, value: &Value) {
        self.events.borrow_mut().push(format!("write {name}={value}"));
    }

    fn function_resolved(&self, name: &str, arg_types: &[ValueType]) {
        self.events.borrow_mut().push(format!("resolve {name}{arg_types:?}"));
    }

    fn function_returned(&self, name: &str, result: &Value) {
        self.events.borrow_mut().push(format!("return {name}={result}"));
    }
}

fn sample_root() -> PropertyMap {
    PropertyMap::from_iter([("a", "2"), ("b", "3.5"), ("name", "Ada")])
}

#[test]
fn coercion_order_is_integer_then_real_then_text() {
    assert_eq!(coerce("3".into()), Value::Integer(3));
    assert_eq!(coerce("-3".into()), Value::Integer(-3));
    assert_eq!(coerce("3.0".into()), Value::Real(3.0));
    assert_eq!(coerce(" 7 ".into()), Value::Real(7.0));
    assert_eq!(coerce("1e2".into()), Value::Real(100.0));
    assert_eq!(coerce("abc".into()), Value::from("abc"));
    assert_eq!(coerce("1,2".into()), Value::from("1,2"));
    assert_eq!(coerce("".into()), Value::from(""));
    assert_eq!(coerce("99999999999999999999".into()), Value::Real(1e20));
    assert!(matches!(coerce("NaN".into()), Value::Real(r) if r.is_nan()));
    assert_eq!(coerce(Value::Null), Value::Null);
}

#[test]
fn map_accessor_reads_coerced_values() {
    let root: Value = sample_root().into();

    assert!(MapAccessor.supports(&root));
    assert!(!MapAccessor.supports(&Value::Integer(1)));
    assert_eq!(MapAccessor.read(&root, "a").unwrap(), Value::Integer(2));
    assert_eq!(MapAccessor.read(&root, "name").unwrap(), Value::from("Ada"));
    assert_eq!(MapAccessor.read(&root, "nope").unwrap(), Value::Null);
    assert_eq!(MapAccessor.read(&Value::Null, "a").unwrap_err(),
               AccessError::UnsupportedTarget { name:   "a".to_string(),
                                                target: "null".to_string(), });
}

#[test]
fn writes_are_stored_raw_and_coerced_on_the_next_read() {
    let root = Rc::new(sample_root());
    let context = Context::with_defaults(Rc::clone(&root).into());

    context.assign("x", Value::from("5")).unwrap();
    context.assign("a", Value::Integer(10)).unwrap();

    assert_eq!(root.get("x"), Some(Value::from("5")));
    assert_eq!(get_result("x + 1", &context).unwrap(), Value::Integer(6));
    assert_eq!(get_result("a * 2", &context).unwrap(), Value::Integer(20));
}

#[test]
fn non_map_roots_have_no_properties() {
    let context = Context::with_defaults(Value::Integer(1));

    let err = get_result("x", &context).unwrap_err();
    assert_eq!(err,
               Error::Runtime(RuntimeError::PropertyNotFound { name:     "x".to_string(),
                                                               target:   "integer".to_string(),
                                                               position: 0, }));

    let err = context.assign("x", Value::Integer(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PropertyNotFound);
}

#[test]
fn first_capable_accessor_wins() {
    let constant_first = build_context(sample_root().into(),
                                       vec![Box::new(ConstantAccessor), Box::new(MapAccessor)],
                                       vec![Box::new(AggregateResolver)]);
    assert_eq!(get_result("answer", &constant_first).unwrap(), Value::Integer(42));
    assert_eq!(get_result("a", &constant_first).unwrap(), Value::Integer(2));
    assert_eq!(get_result("b.answer", &constant_first).unwrap(), Value::Integer(42));

    let map_first = build_context(sample_root().into(),
                                  vec![Box::new(MapAccessor), Box::new(ConstantAccessor)],
                                  vec![Box::new(AggregateResolver)]);
    assert_eq!(get_result("answer", &map_first).unwrap(), Value::Null);
}

#[test]
fn accessor_failures_keep_their_kind() {
    let context = build_context(Value::Null, vec![Box::new(LockedAccessor)], Vec::new());

    let err = get_result("1 + x", &context).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PropertyAccessError);
    assert_eq!(err.to_string(),
               "Error at position 4: Cannot access property 'x': target of type 'null' is not a key/value object, cannot access 'x'.");

    let err = context.assign("x", Value::Integer(1)).unwrap_err();
    assert_eq!(err,
               RuntimeError::PropertyAccess { name:     "x".to_string(),
                                              source:   AccessError::ReadOnly { name: "x".to_string() },
                                              position: 0, });
}

#[test]
fn custom_resolvers_are_consulted_in_order() {
    let context = build_context(sample_root().into(),
                                vec![Box::new(MapAccessor)],
                                vec![Box::new(UpperResolver), Box::new(AggregateResolver)]);

    assert_eq!(get_result("UPPER(name)", &context).unwrap(), Value::from("ADA"));
    assert_eq!(get_result("SUM(a, b)", &context).unwrap(), Value::Real(5.5));

    let err = get_result("UPPER(a)", &context).unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 0: Function UPPER(integer) cannot be found on object of type 'PropertyMap'.");

    let shadowed = build_context(Value::Null,
                                 Vec::new(),
                                 vec![Box::new(ZeroSum), Box::new(AggregateResolver)]);
    assert_eq!(get_result("SUM(1, 2)", &shadowed).unwrap(), Value::Integer(0));
}

#[test]
fn method_calls_and_nested_objects() {
    let root = sample_root();
    root.set("limits", PropertyMap::from_iter([("max", "10"), ("range", "1,9")]).into());
    let context = Context::with_defaults(root.into());

    assert_eq!(get_result("limits.max", &context).unwrap(), Value::Integer(10));
    assert_eq!(get_result("limits.max - a", &context).unwrap(), Value::Integer(8));
    assert_eq!(get_result("limits.SUM(limits.range, 1)", &context).unwrap(),
               Value::Real(11.0));
    assert_eq!(get_result("limits.missing", &context).unwrap(), Value::Null);
    assert_eq!(get_result("limits.max.deeper", &context).unwrap_err().kind(),
               ErrorKind::PropertyNotFound);
}

#[test]
fn observer_sees_events_in_evaluation_order() {
    let recorder = Recorder::default();
    let context = Context::with_defaults(sample_root().into()).with_observer(recorder.clone());

    get_result("SUM(a, b) + 1", &context).unwrap();
    context.assign("c", Value::Bool(true)).unwrap();

    assert_eq!(*recorder.events.borrow(),
               vec!["read a=2".to_string(),
                    "read b=3.5".to_string(),
                    "resolve SUM[Integer, Real]".to_string(),
                    "return SUM=5.5".to_string(),
                    "write c=true".to_string()]);
}

#[test]
fn failed_resolution_executes_nothing() {
    let recorder = Recorder::default();
    let context = Context::with_defaults(sample_root().into()).with_observer(recorder.clone());

    assert!(get_result("MAX(a)", &context).is_err());
    assert_eq!(*recorder.events.borrow(), vec!["read a=2".to_string()]);
}

#[test]
fn unparseable_expressions_evaluate_nothing() {
    let recorder = Recorder::default();
    let context = Context::with_defaults(sample_root().into()).with_observer(recorder.clone());

    for src in ["SUM(a, b", "a + (b", "a + SUM(a) +"] {
        let err = get_result(src, &context).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError, "while evaluating {src:?}");
    }
    assert!(recorder.events.borrow().is_empty());
}

#[test]
fn sum_helpers() {
    assert_eq!(expand(&Value::from("1, 2.5 ,3")).unwrap(), vec![1.0, 2.5, 3.0]);
    assert_eq!(expand(&Value::Integer(4)).unwrap(), vec![4.0]);
    assert_eq!(expand(&Value::from("1,,2")).unwrap_err(),
               AccessError::InvalidArgument { details: "1,,2".to_string() });
    assert_eq!(expand(&Value::from(",1")).unwrap_err(),
               AccessError::InvalidArgument { details: ",1".to_string() });
    assert_eq!(expand(&Value::from("1,2,,")).unwrap(), vec![1.0, 2.0]);
    assert_eq!(expand(&Value::from(",,")).unwrap(), Vec::<f64>::new());
    assert!(expand(&Value::from("1, ")).is_err());
    assert!(sum(&[]).unwrap().abs() < f64::EPSILON);
}

proptest! {
    #[test]
    fn integer_strings_coerce_to_integers(n in any::<i64>()) {
        prop_assert_eq!(coerce(n.to_string().into()), Value::Integer(n));
    }

    #[test]
    fn real_strings_coerce_to_reals(r in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        prop_assert_eq!(coerce(format!("{r:?}").into()), Value::Real(r));
    }

    #[test]
    fn comma_lists_sum_like_separate_arguments(numbers in prop::collection::vec(-1000i64..1000, 1..12)) {
        let context = Context::with_defaults(Value::Null);
        let list = numbers.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        let separate = numbers.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");

        #[allow(clippy::cast_precision_loss)]
        let expected = numbers.iter().sum::<i64>() as f64;
        let as_list = get_result(&format!("SUM('{list},')"), &context).unwrap();
        let as_args = get_result(&format!("SUM({separate})"), &context).unwrap();

        prop_assert_eq!(as_list, Value::Real(expected));
        prop_assert_eq!(as_args, Value::Real(expected));
        prop_assert_eq!(get_result(&format!("SUM('{list}', 0)"), &context).ok(),
                        (numbers.len() > 1).then_some(Value::Real(expected)));
    }
}
