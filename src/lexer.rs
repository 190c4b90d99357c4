use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{Constant, Function, Operator, Token};

/// Whole-token decimal floating-point grammar: optional sign, digits with an
/// optional fractional part, optional exponent.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("Invalid number pattern")
});

/// Splits a raw expression string into whitespace-separated tokens.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                break;
            }
            result.push(ch);
            self.advance();
        }
        result
    }

    /// Returns the next raw token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<String> {
        self.skip_whitespace();
        match self.current_char() {
            None => None,
            Some(_) => Some(self.read_word()),
        }
    }

    /// Consumes the rest of the input.
    pub fn tokenize(mut self) -> Vec<String> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

/// A token that matches no recognized category.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub token: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unrecognized token '{}'", self.token)
    }
}

impl std::error::Error for LexError {}

/// Classifies one token.
///
/// Symbols are checked before numbers, so a name like `PI` or `exp(` is
/// never handed to the number grammar.
pub fn classify(token: &str) -> Result<Token, LexError> {
    if is_open_group(token) {
        return Ok(Token::OpenGroup);
    }
    if is_close_group(token) {
        return Ok(Token::CloseGroup);
    }
    if is_variable(token) {
        return Ok(Token::Variable);
    }
    if let Some(constant) = Constant::from_name(token) {
        return Ok(Token::Constant(constant));
    }
    if let Some((function, open_included)) = split_function(token) {
        return Ok(Token::Function { function, open_included });
    }
    if let Some(op) = Operator::from_symbol(token) {
        return Ok(Token::Operator(op));
    }
    if let Some(value) = parse_number(token) {
        return Ok(Token::Number(value));
    }
    Err(LexError { token: token.to_string() })
}

fn split_function(token: &str) -> Option<(Function, bool)> {
    match token.strip_suffix('(') {
        Some(name) => Function::from_name(name).map(|f| (f, true)),
        None => Function::from_name(token).map(|f| (f, false)),
    }
}

/// Matches the literal grammar and parses to a finite value.
pub fn is_number(token: &str) -> bool {
    parse_number(token).is_some()
}

// `1e400` fits the grammar but overflows to infinity.
fn parse_number(token: &str) -> Option<f64> {
    if !NUMBER.is_match(token) {
        return None;
    }
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn is_variable(token: &str) -> bool {
    token == "x"
}

pub fn is_constant(token: &str) -> bool {
    Constant::from_name(token).is_some()
}

pub fn is_operator(token: &str) -> bool {
    Operator::from_symbol(token).is_some()
}

pub fn is_function(token: &str) -> bool {
    split_function(token).is_some()
}

pub fn is_open_group(token: &str) -> bool {
    token == "("
}

pub fn is_close_group(token: &str) -> bool {
    token == ")"
}

pub fn is_group(token: &str) -> bool {
    is_open_group(token) || is_close_group(token)
}

#[test]
fn test_whitespace_split() {
    let tokens = Lexer::new("  sin(  x\t^ 2\n) ").tokenize();
    assert_eq!(tokens, vec!["sin(", "x", "^", "2", ")"]);
}

#[test]
fn test_classify_order() {
    assert_eq!(classify("PI"), Ok(Token::Constant(Constant::Pi)));
    assert_eq!(
        classify("exp("),
        Ok(Token::Function { function: Function::Exp, open_included: true })
    );
    assert_eq!(classify("-"), Ok(Token::Operator(Operator::Subtract)));
    assert_eq!(classify("-2"), Ok(Token::Number(-2.0)));
}

#[test]
fn test_overflowing_literal() {
    assert!(classify("1e400").is_err());
    assert!(!is_number("1e400"));
    assert!(classify("-1e400").is_err());
    assert_eq!(classify("1e300"), Ok(Token::Number(1e300)));
}
