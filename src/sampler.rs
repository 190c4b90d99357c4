//! Range sampling of a single-variable expression.
//!
//! The expression is converted once, then evaluated at
//! `from, from + step, from + 2·step, ...` while `x < to`. The sample
//! position accumulates by repeated addition, so over long ranges `x` drifts
//! from the exact grid `from + i·step` by ordinary floating-point error.

use std::fmt;

use log::debug;

use crate::{
    ast::Postfix,
    evaluator::{EvalError, Evaluator},
    parser::{ParseError, Parser},
};

/// Errors that abort a whole sampling run.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    /// `from` is not strictly below `to`
    EmptyRange { from: f64, to: f64 },

    /// `step` is zero, negative or not finite
    InvalidStep(f64),

    /// `from` or `to` is NaN or infinite
    NonFiniteBound(f64),

    /// The expression did not convert
    Parse(ParseError),

    /// The converted expression is malformed
    Eval(EvalError),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::EmptyRange { from, to } => {
                write!(f, "Empty range: from ({}) must be less than to ({})", from, to)
            }
            SampleError::InvalidStep(step) => {
                write!(f, "Invalid step {}: must be a positive finite number", step)
            }
            SampleError::NonFiniteBound(bound) => write!(f, "Range bound {} is not finite", bound),
            SampleError::Parse(e) => write!(f, "Parse error: {}", e),
            SampleError::Eval(e) => write!(f, "Evaluation error: {}", e),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::Parse(e) => Some(e),
            SampleError::Eval(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for SampleError {
    fn from(e: ParseError) -> Self {
        SampleError::Parse(e)
    }
}

impl From<EvalError> for SampleError {
    fn from(e: EvalError) -> Self {
        SampleError::Eval(e)
    }
}

/// Sampled points as two parallel sequences of equal length.
///
/// Points are only added in pairs, through [`Samples::push`] or by
/// collecting `(x, y)` tuples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Samples {
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.xs, self.ys)
    }
}

impl FromIterator<(f64, f64)> for Samples {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut samples = Samples::default();
        for (x, y) in iter {
            samples.push(x, y);
        }
        samples
    }
}

/// A converted expression ready to be sampled over any number of ranges.
#[derive(Debug, Clone)]
pub struct Sampler {
    postfix: Postfix,
    evaluator: Evaluator,
}

impl Sampler {
    /// Converts `tokens` once.
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ParseError> {
        Ok(Sampler::from_postfix(Parser::new(tokens).parse()?))
    }

    pub fn from_postfix(postfix: Postfix) -> Self {
        Sampler {
            postfix,
            evaluator: Evaluator::new(),
        }
    }

    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    /// Evaluates at every `x` in `[from, to)` on a `step` grid, keeping only
    /// defined points.
    pub fn sample(&self, from: f64, to: f64, step: f64) -> Result<Samples, SampleError> {
        check_range(from, to, step)?;

        let mut samples = Samples::default();
        let mut skipped = 0usize;
        let mut x = from;
        while x < to {
            match self.evaluator.evaluate(&self.postfix, x)? {
                Some(y) => samples.push(x, y),
                None => skipped += 1,
            }
            let next = x + step;
            // A step below the spacing of floats at `x` would never reach `to`.
            if next <= x {
                return Err(SampleError::InvalidStep(step));
            }
            x = next;
        }

        debug!(
            "Sampled [{}, {}) step {}: {} points kept, {} skipped",
            from,
            to,
            step,
            samples.len(),
            skipped
        );
        Ok(samples)
    }
}

fn check_range(from: f64, to: f64, step: f64) -> Result<(), SampleError> {
    for bound in [from, to] {
        if !bound.is_finite() {
            return Err(SampleError::NonFiniteBound(bound));
        }
    }
    if from >= to {
        return Err(SampleError::EmptyRange { from, to });
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(SampleError::InvalidStep(step));
    }
    Ok(())
}

/// Converts `tokens` and samples it over `[from, to)`.
///
/// # Examples
///
/// ```
/// use plotexpr::sample;
///
/// let samples = sample(0.0, 1.0, 0.25, &["x", "*", "2"]).unwrap();
/// assert_eq!(samples.xs(), &[0.0, 0.25, 0.5, 0.75]);
/// assert_eq!(samples.ys(), &[0.0, 0.5, 1.0, 1.5]);
/// ```
pub fn sample<S: AsRef<str>>(
    from: f64,
    to: f64,
    step: f64,
    tokens: &[S],
) -> Result<Samples, SampleError> {
    check_range(from, to, step)?;
    Sampler::new(tokens)?.sample(from, to, step)
}
