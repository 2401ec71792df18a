use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
    sync::{Arc, Mutex, PoisonError},
};

use arrowlang::{
    Interpreter, eval,
    error::{Error, RuntimeError},
    interpreter::{evaluator::function::builtin::BUILTIN_FUNCTIONS, value::core::Value},
    parse, parse_expression,
};
use pretty_assertions::assert_eq;
use tracing_subscriber::fmt::MakeWriter;

/// An output sink the test keeps a handle to.
#[derive(Debug, Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A thread-safe log sink for a scoped `tracing` subscriber.
#[derive(Debug, Clone, Default)]
struct TraceBuffer(Arc<Mutex<Vec<u8>>>);

impl TraceBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl<'a> MakeWriter<'a> for TraceBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl Write for TraceBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs a program and returns its result together with everything it wrote.
fn run_capturing(source: &str) -> (Result<i64, RuntimeError>, String) {
    let parsed = parse(source).unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"));
    let buffer = SharedBuffer::default();
    let result = Interpreter::with_output(Box::new(buffer.clone())).run(&parsed.program);

    (result, buffer.contents())
}

fn run_ok(source: &str) -> i64 {
    match run_capturing(source).0 {
        Ok(code) => code,
        Err(e) => panic!("Program failed: {e}\n{source}"),
    }
}

fn run_err(source: &str) -> RuntimeError {
    match run_capturing(source).0 {
        Ok(code) => panic!("Program returned {code} but was expected to fail\n{source}"),
        Err(e) => e,
    }
}

fn eval_ok(source: &str) -> Value {
    eval(source).unwrap_or_else(|e| panic!("Failed to evaluate {source:?}: {e}"))
}

fn eval_err(source: &str) -> RuntimeError {
    match eval(source) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error for {source:?}, got {other:?}"),
    }
}

const ADD: &str = "int add :: int a, int b { ret a + b; }\n";

#[test]
fn arithmetic_follows_operand_kinds() {
    assert_eq!(eval_ok("7 / 2"), Value::Int(3));
    assert_eq!(eval_ok("-7 / 2"), Value::Int(-3));
    assert_eq!(eval_ok("7.0 / 2"), Value::Float(3.5));
    assert_eq!(eval_ok("1 / 0.0"), Value::Float(f64::INFINITY));
    assert_eq!(eval_ok("true + false"), Value::Int(1));
    assert_eq!(eval_ok("true * 2.5"), Value::Float(2.5));
    assert_eq!(eval_ok("2 - 0.5"), Value::Float(1.5));
}

#[test]
fn strings_concatenate_and_repeat() {
    assert_eq!(eval_ok("\"foo\" + \"bar\""), Value::from("foobar"));
    assert_eq!(eval_ok("\"n\" + 1"), Value::from("n1"));
    assert_eq!(eval_ok("1.5 + \"x\""), Value::from("1.5x"));
    assert_eq!(eval_ok("\"is \" + true"), Value::from("is true"));
    assert_eq!(eval_ok("\"ha\" * 3"), Value::from("hahaha"));
    assert_eq!(eval_ok("3 * \"ha\""), Value::from("hahaha"));
    assert_eq!(eval_ok("\"ha\" * 0"), Value::from(""));
}

#[test]
fn invalid_string_arithmetic() {
    assert!(matches!(eval_err("\"ha\" * -1"), RuntimeError::NegativeRepeat { count: -1, .. }));
    assert!(matches!(eval_err("\"a\" - \"b\""), RuntimeError::UnsupportedOperator { .. }));
    assert!(matches!(eval_err("\"a\" / 2"), RuntimeError::UnsupportedOperator { .. }));
    assert!(matches!(eval_err("\"a\" * 2.0"), RuntimeError::UnsupportedOperator { .. }));
    assert!(matches!(eval_err("\"a\" * \"b\""), RuntimeError::UnsupportedOperator { .. }));
}

#[test]
fn integer_arithmetic_is_checked() {
    assert!(matches!(eval_err("9223372036854775807 + 1"), RuntimeError::Overflow { .. }));
    assert!(matches!(eval_err("-9223372036854775807 - 2"), RuntimeError::Overflow { .. }));
    assert!(matches!(eval_err("4611686018427387904 * 2"), RuntimeError::Overflow { .. }));
    assert!(matches!(eval_err("1 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(eval_err("1 / false"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn string_repetition_size_is_checked() {
    assert!(matches!(eval_err("\"ha\" * 5000000000000000000"), RuntimeError::Overflow { .. }));
    assert!(matches!(eval_err("5000000000000000000 * \"ha\""), RuntimeError::Overflow { .. }));
    assert!(matches!(eval_err("\"abc\" * 9223372036854775807"), RuntimeError::Overflow { .. }));
    assert_eq!(eval_ok("\"\" * 5000000000000000000"), Value::from(""));
}

#[test]
fn comparisons() {
    assert_eq!(eval_ok("1 < 2"), Value::Bool(true));
    assert_eq!(eval_ok("2 <= 2.0"), Value::Bool(true));
    assert_eq!(eval_ok("3 > 2.5"), Value::Bool(true));
    assert_eq!(eval_ok("1 == true"), Value::Bool(true));
    assert_eq!(eval_ok("0.1 != 0.1"), Value::Bool(false));
    assert_eq!(eval_ok("9007199254740993 == 9007199254740992"), Value::Bool(false));
}

/// Strings are ordered by length, not by content. This is long-standing
/// language behavior that programs may rely on.
#[test]
fn strings_compare_by_length() {
    assert_eq!(eval_ok("\"ab\" == \"cd\""), Value::Bool(true));
    assert_eq!(eval_ok("\"b\" < \"aa\""), Value::Bool(true));
    assert_eq!(eval_ok("\"zzz\" >= \"aaa\""), Value::Bool(true));
    assert_eq!(eval_ok("\"é\" == \"e\""), Value::Bool(true));
    assert_eq!(eval_ok("\"\" != \"x\""), Value::Bool(true));
}

#[test]
fn strings_and_numbers_do_not_compare() {
    assert!(matches!(eval_err("\"1\" == 1"), RuntimeError::UnsupportedOperator { .. }));
    assert!(matches!(eval_err("true < \"a\""), RuntimeError::UnsupportedOperator { .. }));
}

#[test]
fn logical_operators() {
    assert_eq!(eval_ok("true && false"), Value::Bool(false));
    assert_eq!(eval_ok("0 || 2.5"), Value::Bool(true));
    assert_eq!(eval_ok("\"\" || \"x\""), Value::Bool(true));
    assert_eq!(eval_ok("\"\" && 1"), Value::Bool(false));
    assert!(matches!(eval_err("stdout && true"), RuntimeError::UnsupportedOperator { .. }));
}

#[test]
fn unary_operators() {
    assert_eq!(eval_ok("-2.5"), Value::Float(-2.5));
    assert_eq!(eval_ok("-true"), Value::Int(-1));
    assert_eq!(eval_ok("--3"), Value::Int(3));
    assert_eq!(eval_ok("!0"), Value::Bool(true));
    assert_eq!(eval_ok("!!2"), Value::Bool(true));
    assert!(matches!(eval_err("-\"a\""), RuntimeError::UnsupportedUnaryOperator { .. }));
    assert!(matches!(eval_err("!stdout"), RuntimeError::UnsupportedUnaryOperator { .. }));
}

#[test]
fn unknown_names() {
    let error = eval_err("1 + missing");

    assert_eq!(error.to_string(), "Error at 1:5: Unknown identifier 'missing'.");
}

#[test]
fn builtins_are_values() {
    assert!(matches!(eval_ok("stdout"), Value::Callable(_)));
    assert_eq!(BUILTIN_FUNCTIONS, ["stdout", "increment"]);
}

#[test]
fn stdout_writes_without_a_newline() {
    let source = "int main { (\"Hello, \") -> stdout; (\"world\") -> stdout; ret 0; }";
    let (result, output) = run_capturing(source);

    assert_eq!(result, Ok(0));
    assert_eq!(output, "Hello, world");
}

#[test]
fn stdout_coerces_its_argument() {
    let (_, output) =
        run_capturing("int main { (42) -> stdout; (1.5) -> stdout; (true) -> stdout; ret 0; }");

    assert_eq!(output, "421.5true");
}

#[test]
fn main_result_is_the_program_result() {
    assert_eq!(run_ok("int main { ret 3; }"), 3);
    assert_eq!(run_ok("int main { ret 2.9; }"), 2);
    assert_eq!(run_ok("int main { }"), 0);
}

#[test]
fn main_must_exist_and_return_int() {
    assert_eq!(run_err("int other { ret 0; }"), RuntimeError::MissingMain);
    assert!(matches!(run_err("string main { ret \"x\"; }"),
                     RuntimeError::InvalidMainResult { ref found, .. } if found == "string"));
    assert!(matches!(run_err("void main { }"),
                     RuntimeError::InvalidMainResult { ref found, .. } if found == "none"));
}

#[test]
fn functions_cannot_be_redefined() {
    let error = run_err("void stdout :: string s { } int main { ret 0; }");
    assert!(matches!(error, RuntimeError::BuiltinFunctionRedefinition { ref name, .. } if name == "stdout"));

    let error = run_err("int f { ret 1; } int f { ret 2; } int main { ret 0; }");
    assert!(matches!(error, RuntimeError::FunctionAlreadyDefined { ref name, .. } if name == "f"));
}

#[test]
fn calls_with_the_wrong_number_of_arguments() {
    let error = run_err(&format!("{ADD}int main {{ ret (1) -> add; }}"));

    assert!(matches!(error,
                     RuntimeError::ArgumentCountMismatch { ref name, expected: 2, found: 1, .. }
                     if name == "add"));
}

#[test]
fn only_callables_can_be_called() {
    let error = run_err("int main { 1 => int x; ret (1) -> x; }");

    assert!(matches!(error, RuntimeError::NotCallable { ref found, .. } if found == "int"));
}

#[test]
fn recursion() {
    let source = "int fact :: int n {
                      if (n <= 1) { ret 1; }
                      ret (n - 1) -> fact * n;
                  }
                  int main { ret (10) -> fact; }";

    assert_eq!(run_ok(source), 3_628_800);
}

#[test]
fn identifiers_are_passed_by_reference() {
    let source = "void bump :: mut int x { x + 1 => x; }
                  int main { 1 => mut int a; (a) -> bump; (a) -> bump; ret a; }";

    assert_eq!(run_ok(source), 3);
}

#[test]
fn other_expressions_are_passed_by_value() {
    let source = "void bump :: mut int x { x + 1 => x; }
                  int main { 1 => mut int a; (a + 0) -> bump; (a * 1) -> bump; ret a; }";

    assert_eq!(run_ok(source), 1);
}

#[test]
fn values_are_coerced_into_parameter_types() {
    let source = "int half :: int x { ret x / 2; }
                  int main { ret (7.9) -> half; }";

    assert_eq!(run_ok(source), 3);
}

#[test]
fn references_must_match_the_parameter_type() {
    let source = "void f :: mut int x { }
                  int main { 1.5 => mut flt a; (a) -> f; ret 0; }";

    assert!(matches!(run_err(source),
                     RuntimeError::ReferenceTypeMismatch { ref name, ref expected, ref found, .. }
                     if name == "x" && expected == "mut int" && found == "mut flt"));
}

#[test]
fn immutable_variables_cannot_reach_mutable_parameters() {
    let source = "void bump :: mut int x { x + 1 => x; }
                  int main { 1 => int a; (a) -> bump; ret a; }";

    assert!(matches!(run_err(source),
                     RuntimeError::ImmutableReference { ref name, .. } if name == "a"));
}

#[test]
fn immutable_parameters_are_read_only_views() {
    let source = "void f :: int x { 2 => x; }
                  int main { 1 => mut int a; (a) -> f; ret a; }";

    assert!(matches!(run_err(source),
                     RuntimeError::ImmutableAssignment { ref name, .. } if name == "x"));
}

#[test]
fn references_see_later_changes() {
    let source = "int read :: int x { ret x; }
                  int main { 1 => mut int a; (a) ->> read => [int::] get; 5 => a; ret () -> get; }";

    assert_eq!(run_ok(source), 5);
}

#[test]
fn bind_front_captures_by_reference() {
    let source = format!("{ADD}int main {{
                              1 => mut int n;
                              (n) ->> add => [int::int] f;
                              10 => n;
                              ret (5) -> f;
                          }}");

    assert_eq!(run_ok(&source), 15);
}

#[test]
fn bind_front_of_literals() {
    let source = format!("{ADD}int main {{ ret (2) -> (40) ->> add; }}");

    assert_eq!(run_ok(&source), 42);
}

#[test]
fn closures_outlive_their_frame() {
    let source = format!("{ADD}[int::int] adder :: int n {{ ret (n) ->> add; }}
                          int main {{ (3) -> adder => [int::int] add3; ret (4) -> add3; }}");

    assert_eq!(run_ok(&source), 7);
}

#[test]
fn calls_can_produce_the_callee() {
    let source = format!("{ADD}[int::int] adder :: int n {{ ret (n) ->> add; }}
                          int main {{ ret (4) -> (3) -> adder; }}");

    assert_eq!(run_ok(&source), 7);
}

#[test]
fn decoration_binds_the_decorator_first() {
    let source = "int twice :: [int::int] f, int x { ret ((x) -> f) -> f; }
                  int inc :: int x { ret x + 1; }
                  int main { inc @ twice => [int::int] h; ret (5) -> h; }";

    assert_eq!(run_ok(source), 7);
}

#[test]
fn decorated_calls() {
    let source = "int twice :: [int::int] f, int x { ret ((x) -> f) -> f; }
                  int double :: int x { ret x * 2; }
                  int main { ret (3) -> double @ twice; }";

    assert_eq!(run_ok(source), 12);
}

#[test]
fn builtins_can_be_bound() {
    let source = "int main { (\"hi\") ->> stdout => [void::] say; () -> say; () -> say; ret 0; }";
    let (result, output) = run_capturing(source);

    assert_eq!(result, Ok(0));
    assert_eq!(output, "hihi");
}

#[test]
fn callables_only_fit_matching_function_types() {
    let source = format!("{ADD}int main {{ add => [int::int] f; ret 0; }}");

    assert!(matches!(run_err(&source), RuntimeError::InvalidCast { .. }));
}

#[test]
fn missing_returns_yield_defaults() {
    let source = "int i { } flt f { } string s { } bool b { }
                  int main {
                      if (() -> s == \"\" && !(() -> b) && () -> f == 0.0) { ret () -> i + 7; }
                      ret 1;
                  }";

    assert_eq!(run_ok(source), 7);
}

#[test]
fn void_functions_return_none() {
    let source = "void f { ret 1; }
                  int main { () -> f => int x; ret x; }";

    assert!(matches!(run_err(source),
                     RuntimeError::InvalidCast { ref from, .. } if from == "none"));
}

#[test]
fn inner_blocks_may_shadow() {
    let source = "int main { 1 => int x; if (true) { 2 => int x; } ret x; }";

    assert_eq!(run_ok(source), 1);
}

#[test]
fn parameters_may_be_shadowed() {
    let source = "int f :: int x { x * 10 => int x; ret x; }
                  int main { ret (4) -> f; }";

    assert_eq!(run_ok(source), 40);
}

#[test]
fn declarations_are_unique_per_block() {
    let source = "int main { 1 => int x; 2 => int x; ret x; }";

    assert!(matches!(run_err(source),
                     RuntimeError::VariableAlreadyDeclared { ref name, .. } if name == "x"));
}

#[test]
fn assignment_rules() {
    assert!(matches!(run_err("int main { 1 => int x; 2 => x; ret x; }"),
                     RuntimeError::ImmutableAssignment { .. }));
    assert!(matches!(run_err("int main { 2 => x; ret 0; }"),
                     RuntimeError::UndeclaredAssignment { .. }));
    assert!(matches!(run_err("int main { 1 => void x; ret 0; }"),
                     RuntimeError::VoidVariable { .. }));
    assert!(matches!(run_err("int main { \"12\" => int x; ret x; }"),
                     RuntimeError::InvalidCast { .. }));
}

#[test]
fn reassignment_keeps_the_declared_type() {
    let source = "int main { 0 => mut int x; 2.75 => x; ret x * 10; }";

    assert_eq!(run_ok(source), 20);
}

#[test]
fn flt_declarations_hold_floats() {
    let source = "int main { 1 => flt x; ret x / 2 * 4; }";

    assert_eq!(run_ok(source), 2);
}

#[test]
fn conditions_use_truthiness() {
    let source = "int main {
                      0 => mut int r;
                      if (\"\") { 1 => r; } elif (0.0) { 2 => r; } elif (\"x\") { 3 => r; } else { 4 => r; }
                      ret r;
                  }";

    assert_eq!(run_ok(source), 3);
}

#[test]
fn while_loops() {
    let source = "int main {
                      0 => mut int i;
                      1 => mut int p;
                      while (i < 10) { p * 2 => p; i + 1 => i; }
                      ret p;
                  }";

    assert_eq!(run_ok(source), 1024);
}

#[test]
fn returning_from_a_loop() {
    let source = "int main {
                      0 => mut int i;
                      while (true) { if (i == 5) { ret i; } (i) -> increment; }
                      ret -1;
                  }";

    assert_eq!(run_ok(source), 5);
}

#[test]
fn for_loops_call_on_iter_with_the_iterator() {
    let source = "void step :: mut int i { i + 3 => i; }
                  int main {
                      0 => mut int total;
                      for (0 => mut int i; i < 10) { total + i => total; } -> step;
                      ret total;
                  }";

    assert_eq!(run_ok(source), 18);
}

#[test]
fn for_loops_over_an_existing_variable() {
    let source = "int main {
                      0 => mut int i;
                      for (i; i < 4) { } -> increment;
                      ret i;
                  }";

    assert_eq!(run_ok(source), 4);
}

#[test]
fn for_loops_accept_bound_callables() {
    let source = "void advance :: int by, mut int i { i + by => i; }
                  int main {
                      0 => mut int count;
                      for (0 => mut int i; i < 10) { (count) -> increment; } -> (5) ->> advance;
                      ret count;
                  }";

    assert_eq!(run_ok(source), 2);
}

#[test]
fn for_loop_iterators_are_scoped_to_the_loop() {
    let source = "int main {
                      for (0 => mut int i; i < 2) { } -> increment;
                      for (0 => mut int i; i < 3) { } -> increment;
                      ret i;
                  }";

    assert!(matches!(run_err(source),
                     RuntimeError::UnknownIdentifier { ref name, .. } if name == "i"));
}

#[test]
fn for_loops_trace_every_iteration() {
    let log = TraceBuffer::default();
    let subscriber = tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE)
                                              .with_ansi(false)
                                              .with_writer(log.clone())
                                              .finish();

    let code = tracing::subscriber::with_default(subscriber, || {
        run_ok("int main { 0 => mut int n; for (0 => mut int i; i < 3) { } -> increment; ret 0; }")
    });

    assert_eq!(code, 0);
    assert_eq!(log.contents().matches("for loop iteration").count(), 3);
}

#[test]
fn for_loops_need_a_callable() {
    let source = "int main { for (0 => mut int i; i < 2) { } -> (1 + 1); ret 0; }";

    assert!(matches!(run_err(source), RuntimeError::NotCallable { .. }));
}

#[test]
fn operands_are_evaluated_left_to_right() {
    let source = "int a { (\"a\") -> stdout; ret 1; }
                  int b { (\"b\") -> stdout; ret 2; }
                  int main { ret (() -> a, () -> b) -> add; }
                  int add :: int x, int y { ret x * 10 + y; }";
    let (result, output) = run_capturing(source);

    assert_eq!(result, Ok(12));
    assert_eq!(output, "ab");
}

#[test]
fn logical_operators_do_not_short_circuit() {
    let source = "bool loud { (\"!\") -> stdout; ret true; }
                  int main { ret false && () -> loud; }";
    let (result, output) = run_capturing(source);

    assert_eq!(result, Ok(0));
    assert_eq!(output, "!");
}

#[test]
fn increment_checks_for_overflow() {
    let source = "int main { 9223372036854775807 => mut int x; (x) -> increment; ret 0; }";

    assert!(matches!(run_err(source), RuntimeError::Overflow { .. }));
}

#[test]
fn contexts_evaluate_standalone_expressions() {
    let mut context = Interpreter::new();
    let expr = parse_expression("(2, 3) ->> stdout").unwrap();

    assert!(matches!(context.eval(&expr), Ok(Value::Callable(_))));
}
