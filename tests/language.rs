use std::fs;

use arrowlang::{diagnostic::render, interpreter::source::Position, run};
use walkdir::WalkDir;

#[test]
fn sample_programs_behave_as_annotated() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "arw"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expectation = source.lines()
                                .next()
                                .and_then(|line| line.strip_prefix("// expect:"))
                                .map(str::trim)
                                .unwrap_or_else(|| panic!("{path:?} has no '// expect:' line"));

        count += 1;
        match (expectation, run(&source)) {
            ("error", Err(_)) => {},
            ("error", Ok(code)) => panic!("{path:?} returned {code} but was expected to fail"),
            (expected, Ok(code)) => {
                let expected: i64 = expected.parse()
                                            .unwrap_or_else(|e| panic!("{path:?}: bad expectation: {e}"));
                assert_eq!(code, expected, "{path:?} returned the wrong value");
            },
            (_, Err(e)) => panic!("{path:?} failed:\n{e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn assert_returns(src: &str, expected: i64) {
    match run(src) {
        Ok(code) => assert_eq!(code, expected, "Program returned the wrong value:\n{src}"),
        Err(e) => panic!("Program failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(code) = run(src) {
        panic!("Program returned {code} but was expected to fail:\n{src}")
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_returns("int main { 1 + 2 => int x; ret x; }", 3);
    assert_returns("int main { 7 * 9 => int x; ret x; }", 63);
    assert_returns("int main { 8 - 5 => int x; ret x; }", 3);
    assert_returns("int main { 10 / 2 => int x; ret x; }", 5);
    assert_returns("int main { ret (1 + 2) * (3 + 4); }", 21);
}

#[test]
fn calls_and_bind_front() {
    let add = "int add :: int a, int b { ret a + b; }";

    assert_returns(&format!("{add} int main {{ ret (1, 2) -> add; }}"), 3);
    assert_returns(&format!("{add} int main {{ ret (2) -> (1) ->> add; }}"), 3);
    assert_returns(&format!("{add} int main {{ (1) ->> add => [int::int] inc; ret (41) -> inc; }}"),
                   42);
    assert_returns(&format!("{add} int main {{ (1, 2) ->> add => [int::] three; ret () -> three; }}"),
                   3);
}

#[test]
fn functions_are_values() {
    assert_returns("int one { ret 1; }
                    int call :: [int::] f { ret () -> f; }
                    int main { ret (one) -> call; }",
                   1);
    assert_returns("int one { ret 1; }
                    int main { one => [int::] f; ret () -> f; }",
                   1);
}

#[test]
fn if_elif_else() {
    let classify = "int classify :: int n {
                        if (n < 0) { ret -1; } elif (n == 0) { ret 0; } else { ret 1; }
                    }";

    assert_returns(&format!("{classify} int main {{ ret (-5) -> classify; }}"), -1);
    assert_returns(&format!("{classify} int main {{ ret (0) -> classify; }}"), 0);
    assert_returns(&format!("{classify} int main {{ ret (5) -> classify; }}"), 1);
}

#[test]
fn comments_are_ignored() {
    assert_returns("// leading\nint main { // trailing\n ret 4; // after\n}\n// end", 4);
}

#[test]
fn syntax_errors_fail() {
    assert_failure("int main { ret 1 }");
    assert_failure("int main { 1 < 2 < 3 => bool b; ret 0; }");
    assert_failure("int main { _ => int x; ret 0; }");
    assert_failure("int main { ret 0; ");
    assert_failure("main { ret 0; }");
    assert_failure("void f :: void x { } int main { ret 0; }");
}

#[test]
fn lexical_errors_fail() {
    assert_failure("int main { ret 1 # 2; }");
    assert_failure("int main { 1 = int x; ret 0; }");
}

#[test]
fn runtime_errors_fail() {
    assert_failure("int main { ret 1 / 0; }");
    assert_failure("int main { ret \"a\" - 1; }");
    assert_failure("int main { ret (1) -> nothing; }");
    assert_failure("int main { 1 => int x; (x) -> increment; ret x; }");
}

#[test]
fn diagnostics_show_the_surrounding_lines() {
    let source = "int main {\n    ret x;\n}";

    assert_eq!(render("Oops.", Position::new(1, 5), Some(source)),
               "Oops.\n>  1 | int main {\n     |     ^\n   2 |     ret x;");
    assert_eq!(render("Oops.", Position::new(3, 1), Some(source)),
               "Oops.\n   2 |     ret x;\n>  3 | }\n     | ^");
    assert_eq!(render("Oops.", Position::new(9, 1), Some(source)), "Oops.");
    assert_eq!(render("Oops.", Position::new(1, 1), None), "Oops.");
}
