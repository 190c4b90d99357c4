use std::fmt;

use crate::ast::{Constant, Function, Operator, Token};

/// One step of a postfix program.
///
/// Grouping markers have no variant here, so a [`Postfix`] can never carry
/// one.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Push a literal. `text` is the literal as written, `2.50` stays `2.50`.
    Number { value: f64, text: String },
    /// Push the substituted variable value
    Variable,
    /// Push a constant's value
    Constant(Constant),
    /// Pop two values, push the result
    Operator(Operator),
    /// Pop one value, push the result
    Function(Function),
}

impl Instruction {
    /// Converts an operand, operator or function token. Grouping tokens have
    /// no postfix form.
    ///
    /// `source` is the raw token the value was classified from; it is kept as
    /// a number's display text.
    pub fn from_token(token: &Token, source: &str) -> Option<Self> {
        match token {
            Token::Number(value) => Some(Instruction::Number {
                value: *value,
                text: source.to_string(),
            }),
            Token::Variable => Some(Instruction::Variable),
            Token::Constant(c) => Some(Instruction::Constant(*c)),
            Token::Operator(op) => Some(Instruction::Operator(*op)),
            Token::Function { function, .. } => Some(Instruction::Function(*function)),
            Token::OpenGroup | Token::CloseGroup => None,
        }
    }

    /// Net change in evaluation stack depth.
    pub fn stack_effect(&self) -> isize {
        match self {
            Instruction::Number { .. } | Instruction::Variable | Instruction::Constant(_) => 1,
            Instruction::Operator(_) => -1,
            Instruction::Function(_) => 0,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Number { text, .. } => f.write_str(text),
            Instruction::Variable => f.write_str("x"),
            Instruction::Constant(c) => write!(f, "{}", c),
            Instruction::Operator(op) => write!(f, "{}", op),
            Instruction::Function(func) => write!(f, "{}", func),
        }
    }
}

/// An expression in Reverse-Polish order.
///
/// Displays as its instructions joined by single spaces:
///
/// ```
/// use plotexpr::{Lexer, Parser};
///
/// let tokens = Lexer::new("x ^ 2 - 2 * x").tokenize();
/// let postfix = Parser::new(&tokens).parse().unwrap();
/// assert_eq!(postfix.to_string(), "x 2 ^ 2 x * -");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix {
    instructions: Vec<Instruction>,
}

impl Postfix {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Postfix { instructions }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// True when evaluation would leave exactly one value and never
    /// underflow.
    pub fn is_well_formed(&self) -> bool {
        let mut depth: isize = 0;
        for instruction in &self.instructions {
            let needed = match instruction {
                Instruction::Operator(_) => 2,
                Instruction::Function(_) => 1,
                _ => 0,
            };
            if depth < needed {
                return false;
            }
            depth += instruction.stack_effect();
        }
        depth == 1
    }

    pub(crate) fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instruction) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
