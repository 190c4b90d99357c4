use std::fmt;

use log::debug;

use crate::{
    ast::{Associativity, Function, Instruction, Operator, Postfix, Token},
    lexer::classify,
};

/// Errors that abort infix-to-postfix conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No tokens at all
    EmptyExpression,

    /// A token that is not a number, `x`, a constant, an operator, a
    /// function or a parenthesis
    UnexpectedToken { token: String, position: usize },

    /// `)` with no matching `(` or function opener
    UnbalancedGroup { position: usize },

    /// `(` still open at end of input
    UnclosedGroup,

    /// Split-form function name not followed by `(`
    ExpectedOpenGroup { function: Function, position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyExpression => write!(f, "Empty expression"),
            ParseError::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{}' at position {}", token, position + 1)
            }
            ParseError::UnbalancedGroup { position } => {
                write!(f, "Unmatched ')' at position {}", position + 1)
            }
            ParseError::UnclosedGroup => write!(f, "Unclosed '(' at end of expression"),
            ParseError::ExpectedOpenGroup { function, position } => write!(
                f,
                "Expected '(' after '{}' at position {}",
                function.name(),
                position + 1
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Entries of the shunting-yard operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Group,
    Function(Function),
    Operator(Operator),
}

/// Infix-to-postfix converter.
///
/// Runs the shunting-yard algorithm over pre-split tokens. A function token
/// such as `sin(` opens its own argument group and is emitted after its
/// argument when the group closes.
///
/// # Examples
///
/// ```
/// use plotexpr::Parser;
///
/// let postfix = Parser::new(&["2", "^", "3", "^", "2"]).parse().unwrap();
/// assert_eq!(postfix.to_string(), "2 3 2 ^ ^");
/// ```
pub struct Parser<'a> {
    tokens: Vec<&'a str>,
    position: usize,
    stack: Vec<Pending>,
    output: Postfix,
}

impl<'a> Parser<'a> {
    pub fn new<S: AsRef<str>>(tokens: &'a [S]) -> Self {
        Parser {
            tokens: tokens.iter().map(AsRef::as_ref).collect(),
            position: 0,
            stack: Vec::new(),
            output: Postfix::default(),
        }
    }

    fn current(&self) -> Option<&'a str> {
        self.tokens.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Converts the whole token sequence. Any error discards the partial
    /// output.
    pub fn parse(mut self) -> Result<Postfix, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }
        debug!("Input: {}", self.tokens.join(" "));

        while let Some(raw) = self.current() {
            let position = self.position;
            let token = classify(raw).map_err(|e| ParseError::UnexpectedToken {
                token: e.token,
                position,
            })?;
            self.advance();

            match token {
                Token::Number(_) | Token::Variable | Token::Constant(_) => {
                    if let Some(instruction) = Instruction::from_token(&token, raw) {
                        self.output.push(instruction);
                    }
                }
                Token::OpenGroup => self.stack.push(Pending::Group),
                Token::Function { function, open_included } => {
                    if !open_included {
                        self.expect_open_group(function, position)?;
                    }
                    self.stack.push(Pending::Function(function));
                }
                Token::CloseGroup => self.close_group(position)?,
                Token::Operator(op) => self.push_operator(op),
            }
        }

        self.drain()?;
        debug!("RPN: {}", self.output);
        Ok(self.output)
    }

    fn expect_open_group(&mut self, function: Function, position: usize) -> Result<(), ParseError> {
        match self.current() {
            Some("(") => {
                self.advance();
                Ok(())
            }
            _ => Err(ParseError::ExpectedOpenGroup { function, position }),
        }
    }

    /// Pops operators until the nearest group or function opener. A function
    /// is emitted, a plain group is dropped.
    fn close_group(&mut self, position: usize) -> Result<(), ParseError> {
        loop {
            match self.stack.pop() {
                Some(Pending::Operator(op)) => self.output.push(Instruction::Operator(op)),
                Some(Pending::Group) => return Ok(()),
                Some(Pending::Function(function)) => {
                    self.output.push(Instruction::Function(function));
                    return Ok(());
                }
                None => return Err(ParseError::UnbalancedGroup { position }),
            }
        }
    }

    fn push_operator(&mut self, incoming: Operator) {
        while let Some(Pending::Operator(top)) = self.stack.last().copied() {
            let pops = top.precedence() > incoming.precedence()
                || (top.precedence() == incoming.precedence()
                    && incoming.associativity() == Associativity::Left);
            if !pops {
                break;
            }
            self.stack.pop();
            self.output.push(Instruction::Operator(top));
        }
        self.stack.push(Pending::Operator(incoming));
    }

    /// Flushes the stack at end of input. An unclosed function call is
    /// accepted and emitted; an unclosed plain group is not.
    fn drain(&mut self) -> Result<(), ParseError> {
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Operator(op) => self.output.push(Instruction::Operator(op)),
                Pending::Function(function) => self.output.push(Instruction::Function(function)),
                Pending::Group => return Err(ParseError::UnclosedGroup),
            }
        }
        Ok(())
    }
}

/// Converts pre-split infix tokens to postfix.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Postfix, ParseError> {
    Parser::new(tokens).parse()
}
