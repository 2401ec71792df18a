use arrowlang::{eval, interpreter::value::core::Value, parse, run, tokenize};
use proptest::prelude::*;

fn eval_value(source: &str) -> Value {
    eval(source).unwrap_or_else(|e| panic!("Failed to evaluate {source:?}: {e}"))
}

proptest! {
    #[test]
    fn addition_matches_the_host(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(eval_value(&format!("{a} + {b}")),
                        Value::Int(i64::from(a) + i64::from(b)));
    }

    #[test]
    fn subtraction_matches_the_host(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(eval_value(&format!("{a} - {b}")),
                        Value::Int(i64::from(a) - i64::from(b)));
    }

    #[test]
    fn multiplication_matches_the_host(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(eval_value(&format!("{a} * {b}")),
                        Value::Int(i64::from(a) * i64::from(b)));
    }

    #[test]
    fn integer_division_truncates_like_the_host(a in any::<i32>(),
                                               b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
        prop_assert_eq!(eval_value(&format!("{a} / {b}")),
                        Value::Int(i64::from(a) / i64::from(b)));
    }

    #[test]
    fn comparisons_match_the_host(a in -1000_i64..1000, b in -1000_i64..1000) {
        prop_assert_eq!(eval_value(&format!("{a} < {b}")), Value::Bool(a < b));
        prop_assert_eq!(eval_value(&format!("{a} >= {b}")), Value::Bool(a >= b));
        prop_assert_eq!(eval_value(&format!("{a} == {b}")), Value::Bool(a == b));
    }

    #[test]
    fn grouping_does_not_change_values(a in any::<i32>()) {
        prop_assert_eq!(eval_value(&format!("((({a})))")), Value::Int(i64::from(a)));
    }

    #[test]
    fn strings_concatenate(a in "[a-z ]{0,8}", b in "[a-z ]{0,8}") {
        prop_assert_eq!(eval_value(&format!("\"{a}\" + \"{b}\"")), Value::String(format!("{a}{b}")));
    }

    #[test]
    fn string_repetition_is_commutative(s in "[a-z]{0,5}", n in 0_usize..10) {
        let expected = Value::String(s.repeat(n));

        prop_assert_eq!(eval_value(&format!("\"{s}\" * {n}")), expected.clone());
        prop_assert_eq!(eval_value(&format!("{n} * \"{s}\"")), expected);
    }

    #[test]
    fn calls_match_inline_arithmetic(a in any::<i32>(), b in any::<i32>()) {
        let source = format!("int add :: int x, int y {{ ret x + y; }}
                              int main {{ ret ({a}, {b}) -> add; }}");

        prop_assert_eq!(run(&source).unwrap(), i64::from(a) + i64::from(b));
    }

    #[test]
    fn bind_front_matches_a_direct_call(a in any::<i32>(), b in any::<i32>()) {
        let source = format!("int sub :: int x, int y {{ ret x - y; }}
                              int main {{ ret ({b}) -> ({a}) ->> sub; }}");

        prop_assert_eq!(run(&source).unwrap(), i64::from(a) - i64::from(b));
    }

    #[test]
    fn the_lexer_never_panics(source in "\\PC{0,64}") {
        let _ = tokenize(&source);
    }

    #[test]
    fn the_parser_never_panics(source in "[a-z0-9(){};,=>:@ +*/<!&|\\[\\]\"-]{0,64}") {
        let _ = parse(&source);
    }
}
