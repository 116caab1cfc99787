use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        lexer::Lexer,
        parser::core::Parser,
        value::{core::Value, hash_key::HashKey},
    },
};

fn eval_source(source: &str) -> EvalResult<Option<Value>> {
    let mut output = Vec::new();
    eval_source_with_output(source, &mut output)
}

fn eval_source_with_output(source: &str, output: &mut Vec<u8>) -> EvalResult<Option<Value>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(),
            "parser errors for {source:?}: {:?}",
            parser.errors());

    let env = Environment::new();
    let mut evaluator = Evaluator::new(output);
    evaluator.eval_program(&program, &env)
}

fn eval_value(source: &str) -> Value {
    eval_source(source).unwrap_or_else(|error| panic!("runtime error for {source:?}: {error}"))
                       .unwrap_or_else(|| panic!("no value for {source:?}"))
}

fn eval_error(source: &str) -> RuntimeError {
    match eval_source(source) {
        Err(error) => error,
        Ok(value) => panic!("expected runtime error for {source:?}, got {value:?}"),
    }
}

fn assert_integer(source: &str, expected: i64) {
    assert_eq!(eval_value(source), Value::Integer(expected), "source: {source}");
}

fn assert_bool(source: &str, expected: bool) {
    assert_eq!(eval_value(source), Value::Bool(expected), "source: {source}");
}

fn assert_error(source: &str, expected_message: &str) {
    assert_eq!(eval_error(source).to_string(), expected_message, "source: {source}");
}

#[test]
fn integer_expressions() {
    assert_integer("5", 5);
    assert_integer("10", 10);
    assert_integer("-5", -5);
    assert_integer("-10", -10);
    assert_integer("5 + 5 + 5 + 5 - 10", 10);
    assert_integer("2 * 2 * 2 * 2 * 2", 32);
    assert_integer("-50 + 100 + -50", 0);
    assert_integer("5 * 2 + 10", 20);
    assert_integer("5 + 2 * 10", 25);
    assert_integer("20 + 2 * -10", 0);
    assert_integer("50 / 2 * 2 + 10", 60);
    assert_integer("2 * (5 + 10)", 30);
    assert_integer("3 * 3 * 3 + 10", 37);
    assert_integer("3 * (3 * 3) + 10", 37);
    assert_integer("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50);
    assert_integer("5 + 5 * 2;", 15);
}

#[test]
fn boolean_expressions() {
    assert_bool("true", true);
    assert_bool("false", false);
    assert_bool("1 < 2", true);
    assert_bool("1 > 2", false);
    assert_bool("1 < 1", false);
    assert_bool("1 > 1", false);
    assert_bool("1 == 1", true);
    assert_bool("1 != 1", false);
    assert_bool("1 == 2", false);
    assert_bool("1 != 2", true);
    assert_bool("true == true", true);
    assert_bool("false == false", true);
    assert_bool("true == false", false);
    assert_bool("true != false", true);
    assert_bool("false != true", true);
    assert_bool("(1 < 2) == true", true);
    assert_bool("(1 < 2) == false", false);
    assert_bool("(1 > 2) == true", false);
    assert_bool("(1 > 2) == false", true);
}

#[test]
fn bang_operator_negates_truthiness() {
    assert_bool("!true", false);
    assert_bool("!false", true);
    assert_bool("!5", false);
    assert_bool("!!true", true);
    assert_bool("!!false", false);
    assert_bool("!!5", true);
}

#[test]
fn if_expressions_pick_the_truthy_branch() {
    assert_integer("if (true) { 10 }", 10);
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
    assert_eq!(eval_value("if (false) { 10 }"), Value::Null);
    assert_eq!(eval_value("if (1 > 2) { 10 }"), Value::Null);
}

#[test]
fn let_statements_bind_and_resolve() {
    assert_integer("let a = 5; a;", 5);
    assert_integer("let a = 5 * 5; a;", 25);
    assert_integer("let a = 5; let b = a; b;", 5);
    assert_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
    assert_integer("let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };", 10);
}

#[test]
fn a_trailing_let_produces_no_value() {
    assert_eq!(eval_source("let a = 5;").unwrap(), None);
}

#[test]
fn return_statements_stop_the_program() {
    assert_integer("return 10;", 10);
    assert_integer("return 10; 9;", 10);
    assert_integer("return 2 * 5; 9;", 10);
    assert_integer("9; return 2 * 5; 9;", 10);
}

#[test]
fn returns_bubble_through_nested_blocks_unwrapped_once() {
    assert_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);
    assert_integer("let f = fn(x) { return x; x + 10; }; f(10);", 10);
    assert_integer("let f = fn(x) { let result = x + 10; return result; return 10; }; f(20);",
                   30);
}

#[test]
fn a_return_only_terminates_the_innermost_function() {
    assert_integer("let inner = fn() { return 5; }; let outer = fn() { inner() + 1 }; outer();",
                   6);
}

#[test]
fn runtime_errors_carry_the_contract_messages() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("foobar", "identifier not found: foobar");
    assert_error("\"Hello\" - \"World\"", "unknown operator: STRING - STRING");
    assert_error("\"Hello\" == \"World\"", "unknown operator: STRING == STRING");
    assert_error("{\"name\": \"Monkey\"}[fn(x) { x }];", "unusable as hash key: FUNCTION");
    assert_error("{fn(x) { x }: 1}", "unusable as hash key: FUNCTION");
}

#[test]
fn errors_short_circuit_everything_containing_them() {
    assert_error("let a = foobar; a;", "identifier not found: foobar");
    assert_error("[1, foobar, 3]", "identifier not found: foobar");
    assert_error("len(foobar)", "identifier not found: foobar");
    assert_error("fn(x) { x }(foobar)", "identifier not found: foobar");
    assert_error("(5 + true) + 1", "type mismatch: INTEGER + BOOLEAN");
    assert_error("return 5 + true;", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn division_semantics() {
    assert_integer("50 / 2", 25);
    assert_integer("-7 / 2", -3);
    assert_error("5 / 0", "division by zero");
    assert_error("let x = 0; 5 / x", "division by zero");
}

#[test]
fn integer_arithmetic_is_checked() {
    assert_error("9223372036854775807 + 1",
                 "integer overflow: 9223372036854775807 + 1");
    assert_error("-9223372036854775807 - 2",
                 "integer overflow: -9223372036854775807 - 2");
    assert_error("9223372036854775807 * 2",
                 "integer overflow: 9223372036854775807 * 2");
}

#[test]
fn function_values_carry_parameters_and_body() {
    match eval_value("fn(x) { x + 2; };") {
        Value::Function(function) => {
            assert_eq!(function.parameters, vec!["x"]);
            assert_eq!(function.body.to_string(), "(x + 2)");
        },
        other => panic!("expected function value, got {other:?}"),
    }
}

#[test]
fn function_application() {
    assert_integer("let identity = fn(x) { x; }; identity(5);", 5);
    assert_integer("let identity = fn(x) { return x; }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5, 5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20);
    assert_integer("fn(x) { x; }(5)", 5);
}

#[test]
fn a_body_without_value_or_return_produces_null() {
    assert_eq!(eval_value("fn() { let x = 1; }()"), Value::Null);
    assert_eq!(eval_value("fn() {}()"), Value::Null);
}

#[test]
fn call_arity_is_checked_exactly() {
    assert_error("fn(x) { x }(1, 2)", "wrong number of arguments: got 2, want 1");
    assert_error("fn(x, y) { x }(1)", "wrong number of arguments: got 1, want 2");
    assert_error("fn() { 1 }(1)", "wrong number of arguments: got 1, want 0");
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert_error("let x = 5; x(1)", "not a function: INTEGER");
    assert_error("\"no\"()", "not a function: STRING");
}

#[test]
fn closures_capture_their_defining_environment() {
    assert_integer("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); \
                    addTwo(3);",
                   5);
    // Rebinding in the caller's scope does not touch the captured scope.
    assert_integer("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); \
                    let x = 100; addTwo(3);",
                   5);
}

#[test]
fn recursive_closures_resolve_themselves() {
    assert_integer("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; \
                    fib(10);",
                   55);
    assert_integer("let countdown = fn(n) { if (n == 0) { 0 } else { countdown(n - 1) } }; \
                    countdown(50);",
                   0);
}

#[test]
fn string_literals_and_concatenation() {
    assert_eq!(eval_value("\"Hello World!\""), Value::from("Hello World!"));
    assert_eq!(eval_value("\"Hello\" + \" \" + \"World\""), Value::from("Hello World"));
}

#[test]
fn array_literals_evaluate_their_elements() {
    assert_eq!(eval_value("[1, 2 * 2, 3 + 3]"),
               Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]));
}

#[test]
fn array_indexing() {
    assert_integer("[1, 2, 3][0]", 1);
    assert_integer("[1, 2, 3][1]", 2);
    assert_integer("[1, 2, 3][2]", 3);
    assert_integer("let i = 0; [1][i];", 1);
    assert_integer("[1, 2, 3][1 + 1];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[2];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6);
    assert_integer("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", 2);
    assert_eq!(eval_value("[1, 2, 3][3]"), Value::Null);
    assert_eq!(eval_value("[1, 2, 3][-1]"), Value::Null);
}

#[test]
fn index_operator_type_errors() {
    assert_error("5[0]", "index operator not supported: INTEGER");
    assert_error("true[0]", "index operator not supported: BOOLEAN");
    assert_error("[1][true]", "index operator not supported: ARRAY");
}

#[test]
fn hash_literals_evaluate_keys_and_values() {
    let source = "let two = \"two\";
{
    \"one\": 10 - 9,
    two: 1 + 1,
    \"thr\" + \"ee\": 6 / 2,
    4: 4,
    true: 5,
    false: 6
}";
    let pairs = match eval_value(source) {
        Value::Hash(pairs) => pairs,
        other => panic!("expected hash value, got {other:?}"),
    };

    let expected = [(HashKey::Str("one".into()), 1),
                    (HashKey::Str("two".into()), 2),
                    (HashKey::Str("three".into()), 3),
                    (HashKey::Integer(4), 4),
                    (HashKey::Bool(true), 5),
                    (HashKey::Bool(false), 6)];
    assert_eq!(pairs.len(), expected.len());
    for (key, value) in expected {
        assert_eq!(pairs.get(&key), Some(&Value::Integer(value)), "key: {key}");
    }
}

#[test]
fn hash_indexing() {
    assert_integer("{\"foo\": 5}[\"foo\"]", 5);
    assert_integer("let key = \"foo\"; {\"foo\": 5}[key]", 5);
    assert_integer("{5: 5}[5]", 5);
    assert_integer("{true: 5}[true]", 5);
    assert_integer("{false: 5}[false]", 5);
    assert_integer("let two = \"two\"; {\"one\": 10 - 9, two: 1 + 1, \"thr\" + \"ee\": 6 / 2, \
                    4: 4, true: 5, false: 6}[two]",
                   2);
    assert_eq!(eval_value("{\"foo\": 5}[\"bar\"]"), Value::Null);
    assert_eq!(eval_value("{}[\"foo\"]"), Value::Null);
}

#[test]
fn repeated_hash_keys_keep_the_last_value() {
    assert_integer("{\"a\": 1, \"a\": 2}[\"a\"]", 2);
}

#[test]
fn equality_outside_scalars_is_by_identity() {
    assert_bool("[1, 2] == [1, 2]", false);
    assert_bool("let a = [1, 2]; a == a", true);
    assert_bool("let a = [1, 2]; a != a", false);
    assert_bool("fn(x) { x } == fn(x) { x }", false);
    assert_bool("5 == true", false);
    assert_bool("5 != true", true);
    assert_bool("(if (false) { 1 }) == (if (false) { 2 })", true);
}

#[test]
fn builtin_len() {
    assert_integer("len(\"\")", 0);
    assert_integer("len(\"four\")", 4);
    assert_integer("len(\"hello world\")", 11);
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);
    assert_error("len(1)", "argument to 'len' not supported. Got INTEGER");
    assert_error("len(\"one\", \"two\")", "wrong number of arguments. got=2, want=1");
    assert_error("len()", "wrong number of arguments. got=0, want=1");
}

#[test]
fn builtin_first_last_rest() {
    assert_integer("first([1, 2, 3])", 1);
    assert_integer("last([1, 2, 3])", 3);
    assert_eq!(eval_value("first([])"), Value::Null);
    assert_eq!(eval_value("last([])"), Value::Null);
    assert_eq!(eval_value("rest([])"), Value::Null);
    assert_eq!(eval_value("rest([1, 2, 3])"),
               Value::from(vec![Value::Integer(2), Value::Integer(3)]));
    assert_eq!(eval_value("rest([1])"), Value::from(vec![]));
    assert_error("first(1)", "argument to 'first' must be ARRAY. Got INTEGER");
    assert_error("last(\"abc\")", "argument to 'last' must be ARRAY. Got STRING");
    assert_error("rest(true)", "argument to 'rest' must be ARRAY. Got BOOLEAN");
}

#[test]
fn builtin_push_leaves_the_original_untouched() {
    assert_eq!(eval_value("push([1], 2)"),
               Value::from(vec![Value::Integer(1), Value::Integer(2)]));
    assert_integer("let a = [1]; let b = push(a, 2); len(a)", 1);
    assert_integer("let a = [1]; let b = push(a, 2); len(b)", 2);
    assert_error("push(1, 1)", "argument to 'push' must be ARRAY. Got INTEGER");
    assert_error("push([1])", "wrong number of arguments. got=1, want=2");
}

#[test]
fn builtin_puts_writes_each_argument_on_its_own_line() {
    let mut output = Vec::new();
    let result = eval_source_with_output("puts(\"hello\", 5, [1, 2])", &mut output);
    assert_eq!(result.unwrap(), Some(Value::Null));
    assert_eq!(String::from_utf8(output).unwrap(), "hello\n5\n[1, 2]\n");
}

#[test]
fn a_builtin_is_a_first_class_value() {
    match eval_value("len") {
        Value::Builtin(builtin) => assert_eq!(builtin.name(), "len"),
        other => panic!("expected builtin value, got {other:?}"),
    }
    assert_eq!(eval_value("puts").to_string(), "builtin function");
}

#[test]
fn a_let_binding_shadows_a_builtin() {
    assert_integer("let len = fn(x) { 42 }; len([1]);", 42);
}

#[test]
fn map_implemented_in_the_language() {
    let source = "let map = fn(arr, f) {
    let iter = fn(arr, acc) {
        if (len(arr) == 0) {
            acc
        } else {
            iter(rest(arr), push(acc, f(first(arr))))
        }
    };
    iter(arr, []);
};
map([1, 2, 3], fn(x) { x * 2 });";
    assert_eq!(eval_value(source).to_string(), "[2, 4, 6]");
}
