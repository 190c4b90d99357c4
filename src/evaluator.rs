use std::fmt;

use log::trace;

use crate::ast::{Instruction, Operator, Postfix};

/// Divisors with a smaller magnitude make a sample undefined.
pub const DEFAULT_DIVISION_THRESHOLD: f64 = 0.01;

/// Errors raised by a postfix sequence that is not well formed.
///
/// Sequences produced by [`crate::Parser`] from balanced input never raise
/// these; they indicate a malformed expression such as `x +` or `x x`.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operator or function found too few values on the stack
    StackUnderflow { instruction: String, index: usize },

    /// The sequence did not leave exactly one value
    UnbalancedStack { remaining: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::StackUnderflow { instruction, index } => write!(
                f,
                "Malformed expression: '{}' at postfix position {} is missing an operand",
                instruction,
                index + 1
            ),
            EvalError::UnbalancedStack { remaining } => write!(
                f,
                "Malformed expression: evaluation left {} values instead of 1",
                remaining
            ),
        }
    }
}

impl std::error::Error for EvalError {}

/// Postfix stack machine.
///
/// Each call to [`Evaluator::evaluate`] starts from an empty stack, so one
/// evaluator can be reused for any number of sample points.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    division_threshold: f64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator {
            division_threshold: DEFAULT_DIVISION_THRESHOLD,
        }
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the divisor magnitude below which a division yields no value.
    ///
    /// The sign is ignored. NaN would disable the guard, so it leaves the
    /// current threshold in place.
    pub fn with_division_threshold(mut self, threshold: f64) -> Self {
        if !threshold.is_nan() {
            self.division_threshold = threshold.abs();
        }
        self
    }

    pub fn division_threshold(&self) -> f64 {
        self.division_threshold
    }

    /// Evaluates `postfix` with the variable bound to `x`.
    ///
    /// Returns `Ok(None)` when a divisor falls under the division threshold.
    /// Binary operators apply as `earlier ⊕ later`, including `^`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plotexpr::{Evaluator, Parser};
    ///
    /// let postfix = Parser::new(&["x", "+", "2"]).parse().unwrap();
    /// let y = Evaluator::new().evaluate(&postfix, 3.0).unwrap();
    /// assert_eq!(y, Some(5.0));
    ///
    /// let postfix = Parser::new(&["1", "/", "x"]).parse().unwrap();
    /// assert_eq!(Evaluator::new().evaluate(&postfix, 0.0).unwrap(), None);
    /// ```
    pub fn evaluate(&self, postfix: &Postfix, x: f64) -> Result<Option<f64>, EvalError> {
        let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

        for (index, instruction) in postfix.into_iter().enumerate() {
            match instruction {
                Instruction::Number { value, .. } => stack.push(*value),
                Instruction::Variable => stack.push(x),
                Instruction::Constant(c) => stack.push(c.value()),
                Instruction::Operator(op) => {
                    let a = pop(&mut stack, instruction, index)?;
                    let b = pop(&mut stack, instruction, index)?;

                    if *op == Operator::Divide && a.abs() < self.division_threshold {
                        trace!("x = {}: divisor {} under threshold, sample skipped", x, a);
                        return Ok(None);
                    }
                    stack.push(apply_operator(*op, b, a));
                }
                Instruction::Function(function) => {
                    let a = pop(&mut stack, instruction, index)?;
                    stack.push(function.apply(a));
                }
            }
        }

        match stack.as_slice() {
            [value] => Ok(Some(*value)),
            _ => Err(EvalError::UnbalancedStack {
                remaining: stack.len(),
            }),
        }
    }
}

fn pop(stack: &mut Vec<f64>, instruction: &Instruction, index: usize) -> Result<f64, EvalError> {
    stack.pop().ok_or_else(|| EvalError::StackUnderflow {
        instruction: instruction.to_string(),
        index,
    })
}

/// `earlier` was pushed first.
fn apply_operator(op: Operator, earlier: f64, later: f64) -> f64 {
    match op {
        Operator::Add => earlier + later,
        Operator::Subtract => earlier - later,
        Operator::Multiply => earlier * later,
        Operator::Divide => earlier / later,
        Operator::Power => earlier.powf(later),
    }
}
