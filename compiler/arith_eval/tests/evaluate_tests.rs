// End-to-end tests for the text -> tokens -> tree -> value pipeline

use arith_eval::{evaluate, Error, EvalError, Value};

const TOLERANCE: f64 = 1e-12;

fn assert_close(text: &str, expected: f64) {
    let actual = evaluate(text).unwrap().as_f64();
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{text}: expected {expected}, got {actual}"
    );
}

#[test]
fn test_reference_expressions() {
    assert_eq!(evaluate("127").unwrap(), Value::Int(127));
    assert_eq!(evaluate("2 + 3").unwrap(), Value::Int(5));
    assert_eq!(evaluate("2 - 3 - 4").unwrap(), Value::Int(-5));
    assert_eq!(evaluate("10 * 5 / 2").unwrap(), Value::Int(25));
    assert_eq!(evaluate("2 / 2 + 3 * 4 - 6").unwrap(), Value::Int(7));
    assert_eq!(
        evaluate("2 + 3 * 4 / 3 - 6 / 3 * 3 + 8").unwrap(),
        Value::Int(8)
    );
    assert_close("1.1 + 2.2 + 3.3", 6.6);
    assert_close("1.1 * 2.2 * 3.3", 7.986);
}

#[test]
fn test_parentheses_group() {
    assert_eq!(evaluate("(2+3)*4").unwrap(), Value::Int(20));
    assert_eq!(evaluate("2+3*4").unwrap(), Value::Int(14));
    // Redundant parentheses change nothing.
    assert_eq!(evaluate("(2)+((3)*(4))").unwrap(), Value::Int(14));
    assert_eq!(evaluate("( 2 + 3 ) * 4").unwrap(), Value::Int(20));
}

#[test]
fn test_unary_minus() {
    assert_eq!(evaluate("-5").unwrap(), Value::Int(-5));
    assert_eq!(evaluate("-2+3").unwrap(), Value::Int(1));
    assert_eq!(evaluate("2--3").unwrap(), Value::Int(5));
    assert_eq!(evaluate("2 - -3").unwrap(), Value::Int(5));
    assert_eq!(evaluate("--5").unwrap(), Value::Int(5));
    assert_eq!(evaluate("-(2+3)").unwrap(), Value::Int(-5));
}

#[test]
fn test_space_after_unary_minus_is_an_error() {
    assert!(matches!(evaluate("- 5"), Err(Error::Syntax(_))));
    assert!(matches!(evaluate("2 - - 3"), Err(Error::Syntax(_))));
}

#[test]
fn test_division_semantics() {
    assert_eq!(evaluate("10/4").unwrap(), Value::Float(2.5));
    assert_eq!(evaluate("10/2").unwrap(), Value::Int(5));
    assert_close("1.0/4", 0.25);
}

#[test]
fn test_division_by_zero_is_an_explicit_error() {
    assert_eq!(evaluate("1/0"), Err(Error::Eval(EvalError::DivisionByZero)));
    assert_eq!(
        evaluate("5/0.0"),
        Err(Error::Eval(EvalError::DivisionByZero))
    );
    assert_eq!(
        evaluate("1/(2-2)"),
        Err(Error::Eval(EvalError::DivisionByZero))
    );
}

#[test]
fn test_malformed_input() {
    match evaluate("2 + @") {
        Err(Error::Tokenizer(err)) => {
            assert_eq!(err.position, 4);
            assert_eq!(err.length, 5);
            assert_eq!(err.input, "2 + @");
        }
        other => panic!("expected a tokenizer error, got {other:?}"),
    }
    assert!(matches!(evaluate("(2 + 3"), Err(Error::Syntax(_))));
    assert!(matches!(evaluate("2 +"), Err(Error::Syntax(_))));
    assert!(matches!(evaluate("2 3"), Err(Error::Syntax(_))));
    assert!(matches!(evaluate(""), Err(Error::Syntax(_))));
}

#[test]
fn test_multi_digit_floats_are_rejected_by_the_lexer() {
    // The float pattern allows a single digit before the dot.
    match evaluate("12.5") {
        Err(Error::Tokenizer(err)) => assert_eq!(err.position, 2),
        other => panic!("expected a tokenizer error, got {other:?}"),
    }
}

#[test]
fn test_integer_overflow() {
    assert_eq!(
        evaluate("9223372036854775807 + 1"),
        Err(Error::Eval(EvalError::Overflow))
    );
}

#[test]
fn test_independent_evaluations_do_not_interact() {
    // No state survives a call; interleaved evaluations agree with
    // fresh ones.
    let first = evaluate("1 + 2").unwrap();
    let _ = evaluate("bad input &&");
    assert_eq!(evaluate("1 + 2").unwrap(), first);
}
