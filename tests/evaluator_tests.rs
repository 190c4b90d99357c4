// tests/evaluator_tests.rs

use plotexpr::ast::{Function, Instruction, Operator, Postfix};
use plotexpr::evaluator::{DEFAULT_DIVISION_THRESHOLD, EvalError, Evaluator};
use plotexpr::lexer::Lexer;
use plotexpr::parser::Parser;
use std::f64::consts::PI;

fn eval_at(input: &str, x: f64) -> Option<f64> {
    let tokens = Lexer::new(input).tokenize();
    let postfix = Parser::new(&tokens).parse().unwrap();
    Evaluator::new().evaluate(&postfix, x).unwrap()
}

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("expected a value");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_addition() {
    assert_eq!(eval_at("x + 2", 3.0), Some(5.0));
}

#[test]
fn test_operand_order() {
    assert_eq!(eval_at("10 - x", 3.0), Some(7.0));
    assert_eq!(eval_at("x - 10", 3.0), Some(-7.0));
    assert_eq!(eval_at("12 / x", 3.0), Some(4.0));
}

#[test]
fn test_power_uses_earlier_operand_as_base() {
    assert_eq!(eval_at("2 ^ x", 3.0), Some(8.0));
    assert_eq!(eval_at("x ^ 2", 3.0), Some(9.0));
}

#[test]
fn test_power_chain_is_right_associative() {
    assert_eq!(eval_at("2 ^ 3 ^ 2", 0.0), Some(512.0));
}

#[test]
fn test_left_chains() {
    assert_eq!(eval_at("8 - 4 - 2", 0.0), Some(2.0));
    assert_eq!(eval_at("8 / 4 / 2", 0.0), Some(1.0));
}

#[test]
fn test_basic_polynomial() {
    // x^2 - 2x
    assert_eq!(eval_at("x ^ 2 - 2 * x", 4.0), Some(8.0));
    assert_eq!(eval_at("x ^ 2 - 2 * x", 1.0), Some(-1.0));
}

#[test]
fn test_brackets() {
    assert_close(eval_at("3.576 * ( x - x ^ 2 )", 2.0), 3.576 * (2.0 - 4.0));
}

// ============================================================================
// Functions and Constants
// ============================================================================

#[test]
fn test_functions() {
    assert_close(eval_at("sin( x )", PI / 2.0), 1.0);
    assert_close(eval_at("cos( x )", 0.0), 1.0);
    assert_close(eval_at("tg( x )", PI / 4.0), 1.0);
    assert_close(eval_at("exp( x )", 1.0), std::f64::consts::E);
}

#[test]
fn test_constant() {
    assert_close(eval_at("x * PI", 2.0), 2.0 * PI);
}

#[test]
fn test_composite_expression() {
    let x: f64 = 0.3;
    let expected = 2.0 * (1.0 / ((3.0 * x).exp() + 1.0) - (x + PI / 2.0).tan()).sin();
    assert_close(
        eval_at("2 * sin( 1 / ( exp( 3 * x ) + 1 ) - tg( x + PI / 2 ) )", x),
        expected,
    );
}

// ============================================================================
// Division Guard
// ============================================================================

#[test]
fn test_division_by_zero_is_undefined() {
    assert_eq!(eval_at("1 / x", 0.0), None);
}

#[test]
fn test_division_by_small_divisor_is_undefined() {
    assert_eq!(eval_at("1 / x", 0.005), None);
    assert_eq!(eval_at("1 / x", -0.009), None);
    assert_eq!(eval_at("x / ( x - 1 )", 1.001), None);
}

#[test]
fn test_division_at_threshold_is_defined() {
    assert_close(eval_at("1 / x", 0.01), 100.0);
    assert_close(eval_at("1 / x", -0.5), -2.0);
}

#[test]
fn test_guard_ignores_dividend() {
    assert_eq!(eval_at("0 / x", 2.0), Some(0.0));
}

#[test]
fn test_guard_inside_function() {
    assert_eq!(eval_at("sin( 1 / x ) + 5", 0.0), None);
}

#[test]
fn test_custom_threshold() {
    let postfix = Parser::new(&["1", "/", "x"]).parse().unwrap();

    let strict = Evaluator::new().with_division_threshold(1.0);
    assert_eq!(strict.evaluate(&postfix, 0.5).unwrap(), None);
    assert_eq!(strict.evaluate(&postfix, 2.0).unwrap(), Some(0.5));

    let lenient = Evaluator::new().with_division_threshold(0.0);
    assert_eq!(lenient.evaluate(&postfix, 0.25).unwrap(), Some(4.0));
    assert_eq!(lenient.evaluate(&postfix, 0.0).unwrap(), Some(f64::INFINITY));
}

#[test]
fn test_nan_threshold_keeps_guard() {
    let postfix = Parser::new(&["1", "/", "x"]).parse().unwrap();

    let evaluator = Evaluator::new().with_division_threshold(f64::NAN);
    assert_eq!(evaluator.division_threshold(), DEFAULT_DIVISION_THRESHOLD);
    assert_eq!(evaluator.evaluate(&postfix, 0.0).unwrap(), None);

    let strict = Evaluator::new()
        .with_division_threshold(1.0)
        .with_division_threshold(f64::NAN);
    assert_eq!(strict.evaluate(&postfix, 0.5).unwrap(), None);
}

// ============================================================================
// Malformed Sequences
// ============================================================================

#[test]
fn test_underflow_on_operator() {
    let postfix = Postfix::new(vec![Instruction::Variable, Instruction::Operator(Operator::Add)]);
    assert_eq!(
        Evaluator::new().evaluate(&postfix, 1.0),
        Err(EvalError::StackUnderflow {
            instruction: "+".to_string(),
            index: 1
        })
    );
}

#[test]
fn test_underflow_on_function() {
    let postfix = Postfix::new(vec![Instruction::Function(Function::Cos)]);
    assert!(matches!(
        Evaluator::new().evaluate(&postfix, 1.0),
        Err(EvalError::StackUnderflow { index: 0, .. })
    ));
}

#[test]
fn test_leftover_values() {
    let tokens = Lexer::new("x x").tokenize();
    let postfix = Parser::new(&tokens).parse().unwrap();
    assert!(!postfix.is_well_formed());
    assert_eq!(
        Evaluator::new().evaluate(&postfix, 1.0),
        Err(EvalError::UnbalancedStack { remaining: 2 })
    );
}

#[test]
fn test_empty_sequence() {
    assert_eq!(
        Evaluator::new().evaluate(&Postfix::default(), 1.0),
        Err(EvalError::UnbalancedStack { remaining: 0 })
    );
}

#[test]
fn test_dangling_operator_from_parser() {
    let tokens = Lexer::new("x +").tokenize();
    let postfix = Parser::new(&tokens).parse().unwrap();
    assert!(Evaluator::new().evaluate(&postfix, 1.0).is_err());
}
