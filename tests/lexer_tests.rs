// tests/lexer_tests.rs

use plotexpr::ast::{Constant, Function, Operator, Token};
use plotexpr::lexer::{self, Lexer, classify};

// ============================================================================
// Whitespace Splitting
// ============================================================================

#[test]
fn test_split_on_spaces() {
    let tokens = Lexer::new("x ^ 2 - 2 * x").tokenize();
    assert_eq!(tokens, vec!["x", "^", "2", "-", "2", "*", "x"]);
}

#[test]
fn test_split_keeps_function_delimiter() {
    let tokens = Lexer::new("2 * sin( 1 / ( exp( 3 * x ) + 1 )").tokenize();
    assert_eq!(
        tokens,
        vec!["2", "*", "sin(", "1", "/", "(", "exp(", "3", "*", "x", ")", "+", "1", ")"]
    );
}

#[test]
fn test_split_empty_input() {
    assert!(Lexer::new("").tokenize().is_empty());
    assert!(Lexer::new(" \t\n ").tokenize().is_empty());
}

#[test]
fn test_next_token_stops_at_end() {
    let mut lexer = Lexer::new("x +");
    assert_eq!(lexer.next_token().as_deref(), Some("x"));
    assert_eq!(lexer.next_token().as_deref(), Some("+"));
    assert_eq!(lexer.next_token(), None);
    assert_eq!(lexer.next_token(), None);
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn test_classify_symbols() {
    let test_cases = vec![
        ("x", Token::Variable),
        ("PI", Token::Constant(Constant::Pi)),
        ("+", Token::Operator(Operator::Add)),
        ("-", Token::Operator(Operator::Subtract)),
        ("*", Token::Operator(Operator::Multiply)),
        ("/", Token::Operator(Operator::Divide)),
        ("^", Token::Operator(Operator::Power)),
        ("(", Token::OpenGroup),
        (")", Token::CloseGroup),
    ];

    for (input, expected) in test_cases {
        assert_eq!(classify(input), Ok(expected), "Failed for input: {}", input);
    }
}

#[test]
fn test_classify_functions() {
    let test_cases = vec![
        ("sin(", Function::Sin),
        ("cos(", Function::Cos),
        ("tg(", Function::Tan),
        ("tan(", Function::Tan),
        ("exp(", Function::Exp),
    ];

    for (input, function) in test_cases {
        assert_eq!(
            classify(input),
            Ok(Token::Function { function, open_included: true }),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_classify_split_function() {
    assert_eq!(
        classify("sin"),
        Ok(Token::Function { function: Function::Sin, open_included: false })
    );
}

#[test]
fn test_classify_numbers() {
    let test_cases = vec![
        ("2", 2.0),
        ("3.576", 3.576),
        ("0.5", 0.5),
        (".5", 0.5),
        ("5.", 5.0),
        ("-1.5", -1.5),
        ("+4", 4.0),
        ("1e3", 1000.0),
        ("2.5E-2", 0.025),
    ];

    for (input, expected) in test_cases {
        assert_eq!(classify(input), Ok(Token::Number(expected)), "Failed for input: {}", input);
    }
}

#[test]
fn test_reject_partial_numbers() {
    for input in ["3abc", "1.2.3", "1e", "e5", ".", "--2", "2-", "0x10"] {
        assert!(classify(input).is_err(), "Accepted {}", input);
    }
}

#[test]
fn test_reject_non_decimal_floats() {
    for input in ["inf", "-inf", "NaN", "nan", "infinity"] {
        assert!(classify(input).is_err(), "Accepted {}", input);
    }
}

#[test]
fn test_reject_unknown_words() {
    for input in ["y", "X", "pi", "sinh(", "log(", "sin((", "[", "%"] {
        let err = classify(input).unwrap_err();
        assert_eq!(err.token, input);
    }
}

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn test_predicates_are_exclusive() {
    let samples = ["x", "PI", "+", "^", "sin(", "tg(", "(", ")", "2", "3.5e1"];

    for token in samples {
        let matches = [
            lexer::is_number(token),
            lexer::is_variable(token),
            lexer::is_constant(token),
            lexer::is_operator(token),
            lexer::is_function(token),
            lexer::is_group(token),
        ]
        .iter()
        .filter(|m| **m)
        .count();
        assert_eq!(matches, 1, "Token {} matched {} categories", token, matches);
    }
}

#[test]
fn test_group_predicates() {
    assert!(lexer::is_open_group("("));
    assert!(!lexer::is_open_group(")"));
    assert!(lexer::is_close_group(")"));
    assert!(lexer::is_group("("));
    assert!(lexer::is_group(")"));
    assert!(!lexer::is_group("sin("));
}
