use pretty_assertions::assert_eq;
use propexpr::{
    Context,
    ast::{BinaryOperator, Expr, Expression, LiteralValue, UnaryOperator},
    error::{ErrorKind, ParseError},
    get_result, parse,
    interpreter::{
        parser::core::MAX_NESTING_DEPTH,
        value::{core::Value, object::PropertyMap},
    },
};

fn context() -> Context {
    let root = PropertyMap::from_iter([("a", "2"),
                                       ("b", "3.5"),
                                       ("name", "Ada"),
                                       ("list", "1,2,3"),
                                       ("flag", "true")]);
    Context::with_defaults(root.into())
}

fn assert_value(src: &str, expected: Value) {
    match get_result(src, &context()) {
        Ok(value) => assert_eq!(value, expected, "while evaluating {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match get_result(src, &context()) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "while evaluating {src:?}: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", Value::Integer(3));
    assert_value("7 * 9", Value::Integer(63));
    assert_value("8 - 5", Value::Integer(3));
    assert_value("10 / 4", Value::Integer(2));
    assert_value("10 / 4.0", Value::Real(2.5));
    assert_value("-7 % 3", Value::Integer(-1));
    assert_value("7.5 % 2", Value::Real(1.5));
    assert_value("1.5e3", Value::Real(1500.0));
}

#[test]
fn precedence_and_associativity() {
    assert_value("2 * 3 + 4", Value::Integer(10));
    assert_value("2 * (3 + 4)", Value::Integer(14));
    assert_value("10 - 4 - 3", Value::Integer(3));
    assert_value("2 ^ 3 ^ 2", Value::Integer(512));
    assert_value("-2 ^ 2", Value::Integer(4));
    assert_value("2 ^ -1", Value::Real(0.5));
    assert_value("1 + 2 == 3", Value::Bool(true));
    assert_value("(1 < 2) == (2 < 3)", Value::Bool(true));
    assert_value("1 < 2 == true", Value::Bool(true));
}

#[test]
fn properties_are_coerced_on_read() {
    assert_value("a", Value::Integer(2));
    assert_value("b", Value::Real(3.5));
    assert_value("a + b", Value::Real(5.5));
    assert_value("a * 2", Value::Integer(4));
    assert_value("name", Value::from("Ada"));
    assert_value("flag", Value::from("true"));
    assert_value("flag == 'true'", Value::Bool(true));
}

#[test]
fn missing_properties_read_as_null() {
    assert_value("missing", Value::Null);
    assert_value("missing == null", Value::Bool(true));
    assert_value("missing != 0", Value::Bool(true));
}

#[test]
fn strings_and_concatenation() {
    assert_value("'it''s'", Value::from("it's"));
    assert_value("\"say \"\"hi\"\"\"", Value::from("say \"hi\""));
    assert_value("name + '!'", Value::from("Ada!"));
    assert_value("'x' + 1", Value::from("x1"));
    assert_value("1 + 2 + 'x'", Value::from("3x"));
    assert_value("'n=' + b", Value::from("n=3.5"));
    assert_value("'a' < 'b'", Value::Bool(true));
    assert_value("'b' >= 'ba'", Value::Bool(false));
}

#[test]
fn comparisons_promote_numbers() {
    assert_value("3 == 3.0", Value::Bool(true));
    assert_value("1 != 2", Value::Bool(true));
    assert_value("'3' == 3", Value::Bool(false));
    assert_value("a >= 2", Value::Bool(true));
    assert_value("b < a", Value::Bool(false));
    assert_value("true == true", Value::Bool(true));
}

#[test]
fn logical_operators() {
    assert_value("true and not false", Value::Bool(true));
    assert_value("!(1 > 2) && 2 > 1", Value::Bool(true));
    assert_value("false or missing == null", Value::Bool(true));
    assert_value("false and undefined.thing", Value::Bool(false));
    assert_value("true or 1", Value::Bool(true));
    assert_value("true || false && false", Value::Bool(true));
}

#[test]
fn conditional_expressions() {
    assert_value("a > 1 ? 'big' : 'small'", Value::from("big"));
    assert_value("false ? 1 : true ? 2 : 3", Value::Integer(2));
    assert_value("true ? 1 : 1 / 0", Value::Integer(1));
}

#[test]
fn sum_function() {
    assert_value("SUM(1, 2, 3)", Value::Real(6.0));
    assert_value("SUM(list, a)", Value::Real(8.0));
    assert_value("SUM()", Value::Real(0.0));
    assert_value("SUM('1, 2')", Value::Real(3.0));
    assert_value("SUM('1,2,')", Value::Real(3.0));
    assert_value("SUM(',,')", Value::Real(0.0));
    assert_value("SUM(b, '0.5,1e1')", Value::Real(14.0));
    assert_value("SUM(SUM(1, 2), list)", Value::Real(9.0));
    assert_value("a.SUM(1)", Value::Real(1.0));
}

#[test]
fn literals() {
    assert_value("null", Value::Null);
    assert_value("true", Value::Bool(true));
    assert_value("42", Value::Integer(42));
    assert_value("0.25", Value::Real(0.25));
    assert_value("9223372036854775807", Value::Integer(i64::MAX));
}

#[test]
fn real_division_follows_ieee() {
    assert_value("1 / 0.0", Value::Real(f64::INFINITY));
    assert_value("-1 / 0.0", Value::Real(f64::NEG_INFINITY));
}

#[test]
fn parse_errors() {
    assert_failure("(1 + 2", ErrorKind::ParseError);
    assert_failure("1 +", ErrorKind::ParseError);
    assert_failure("1 2", ErrorKind::ParseError);
    assert_failure("", ErrorKind::ParseError);
    assert_failure("   ", ErrorKind::ParseError);
    assert_failure("#", ErrorKind::ParseError);
    assert_failure("'open", ErrorKind::ParseError);
    assert_failure("99999999999999999999", ErrorKind::ParseError);
    assert_failure("SUM(1,", ErrorKind::ParseError);
    assert_failure("SUM(1 2)", ErrorKind::ParseError);
    assert_failure("a.", ErrorKind::ParseError);
    assert_failure("a.1", ErrorKind::ParseError);
    assert_failure("true ? 1", ErrorKind::ParseError);
    assert_failure(")", ErrorKind::ParseError);
}

#[test]
fn runtime_errors() {
    assert_failure("1 / 0", ErrorKind::Arithmetic);
    assert_failure("1 % 0", ErrorKind::Arithmetic);
    assert_failure("9223372036854775807 + 1", ErrorKind::Arithmetic);
    assert_failure("2 ^ 64", ErrorKind::Arithmetic);
    assert_failure("MAX(1)", ErrorKind::FunctionNotFound);
    assert_failure("sum(1)", ErrorKind::FunctionNotFound);
    assert_failure("SUM(name)", ErrorKind::InvalidArgument);
    assert_failure("SUM('1,x')", ErrorKind::InvalidArgument);
    assert_failure("SUM('1,,2')", ErrorKind::InvalidArgument);
    assert_failure("SUM(',1')", ErrorKind::InvalidArgument);
    assert_failure("SUM(true)", ErrorKind::InvalidArgument);
    assert_failure("SUM(missing)", ErrorKind::InvalidArgument);
    assert_failure("1 + true", ErrorKind::TypeError);
    assert_failure("name - 1", ErrorKind::TypeError);
    assert_failure("1 < 'a'", ErrorKind::TypeError);
    assert_failure("1 and true", ErrorKind::TypeError);
    assert_failure("true and 1", ErrorKind::TypeError);
    assert_failure("1 ? 2 : 3", ErrorKind::TypeError);
    assert_failure("-'x'", ErrorKind::TypeError);
    assert_failure("not 1", ErrorKind::TypeError);
    assert_failure("a.b", ErrorKind::PropertyNotFound);
    assert_failure("missing.b", ErrorKind::PropertyNotFound);
}

#[test]
fn arguments_are_evaluated_before_resolution() {
    assert_failure("MAX(1 / 0)", ErrorKind::Arithmetic);
}

#[test]
fn error_messages_carry_positions() {
    let err = get_result("(1 + 2", &context()).unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 0: Expected closing parenthesis ')' but none found.");

    let err = get_result("1 + 2 )", &context()).unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 6: Extra tokens after expression. Check your input: )");

    let err = get_result("a + MAX(a, name)", &context()).unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 4: Function MAX(integer, string) cannot be found on object of type 'PropertyMap'.");

    let err = get_result("SUM(1, 'x')", &context()).unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 0: Invalid argument: x.");
}

#[test]
fn parse_builds_expected_tree() {
    let expression = parse("-limits.max * SUM(1, 'a')").unwrap();

    let negated = Expr::UnaryOp { op:       UnaryOperator::Negate,
                                  expr:     Box::new(Expr::Property { target:   Box::new(Expr::Identifier { name:     "limits".to_string(),
                                                                                                             position: 1, }),
                                                                      name:     "max".to_string(),
                                                                      position: 8, }),
                                  position: 0, };
    let call = Expr::FunctionCall { name:      "SUM".to_string(),
                                    arguments: vec![Expr::Literal { value:    LiteralValue::Integer(1),
                                                                    position: 18, },
                                                    Expr::Literal { value:    "a".into(),
                                                                    position: 21, }],
                                    position:  14, };

    assert_eq!(expression.root(),
               &Expr::BinaryOp { left:     Box::new(negated),
                                 op:       BinaryOperator::Mul,
                                 right:    Box::new(call),
                                 position: 12, });
    assert_eq!(expression.source(), "-limits.max * SUM(1, 'a')");
}

#[test]
fn method_calls_parse_with_their_target() {
    let expression = parse("limits.SUM()").unwrap();

    assert_eq!(expression.root(),
               &Expr::MethodCall { target:    Box::new(Expr::Identifier { name:     "limits".to_string(),
                                                                          position: 0, }),
                                   name:      "SUM".to_string(),
                                   arguments: Vec::new(),
                                   position:  7, });
}

#[test]
fn parsing_is_deterministic_and_reusable() {
    let first: Expression = "SUM(list) + a * 2".parse().unwrap();
    let second = parse("SUM(list) + a * 2").unwrap();
    assert_eq!(first, second);

    let context = context();
    assert_eq!(first.evaluate(&context).unwrap(), Value::Real(10.0));
    assert_eq!(first.evaluate(&context).unwrap(), Value::Real(10.0));
}

#[test]
fn parse_error_variants() {
    assert_eq!(parse("").unwrap_err(), ParseError::EmptyExpression);
    assert_eq!(parse("'abc").unwrap_err(),
               ParseError::UnterminatedString { position: 0 });
    assert_eq!(parse("1 + @").unwrap_err(),
               ParseError::InvalidToken { text:     "@".to_string(),
                                          position: 4, });
    assert!(matches!(parse("1 +").unwrap_err(),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse("12345678901234567890").unwrap_err(),
                     ParseError::LiteralTooLarge { position: 0, .. }));
}

#[test]
fn nesting_is_limited() {
    let nested = |open: &str, close: &str, depth: usize| {
        format!("{}1{}", open.repeat(depth), close.repeat(depth))
    };

    assert_value(&nested("(", ")", 100), Value::Integer(1));
    assert_value(&nested("-", "", 100), Value::Integer(1));
    assert_value(&format!("1{}", " + 1".repeat(100)), Value::Integer(101));

    for src in [nested("(", ")", 5_000),
                nested("-", "", 5_000),
                nested("SUM(", ")", 5_000),
                nested("1 ? ", " : 0", 5_000),
                format!("a{}", ".b".repeat(5_000)),
                format!("1{}", " ^ 1".repeat(5_000)),
                format!("1{}", " + 1".repeat(5_000)),
                "(".repeat(20_000)]
    {
        assert_failure(&src, ErrorKind::ParseError);
    }

    assert_eq!(parse(&nested("(", ")", 5_000)).unwrap_err(),
               ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                            position: MAX_NESTING_DEPTH, });
    // The 129th `+` sits at byte 2 + 4 * 128.
    assert_eq!(parse(&format!("1{}", " + 1".repeat(200))).unwrap_err(),
               ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                            position: 514, });
}

#[test]
fn reals_display_with_a_fractional_part_or_exponent() {
    assert_eq!(Value::Real(6.0).to_string(), "6.0");
    assert_eq!(Value::Real(0.5).to_string(), "0.5");
    assert_eq!(Value::Real(1e20).to_string(), "1e20");
    assert_eq!(Value::Real(1.5e-7).to_string(), "1.5e-7");
    assert_eq!(get_result("SUM(1e10, 1e10) * 5e9", &context()).unwrap().to_string(),
               "1e20");
}
