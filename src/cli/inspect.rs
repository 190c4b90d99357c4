//! Inspect a single expression: its postfix form, or its value at one point

use super::{CliError, evaluator_for};
use crate::{
    OutputFormat, Parser, DEFAULT_DIVISION_THRESHOLD,
    output::{format_value, postfix_to_json},
};

/// Options for the rpn command
#[derive(Debug, Clone, Default)]
pub struct RpnOptions {
    pub tokens: Vec<String>,
    pub format: OutputFormat,
}

/// Converts the expression and renders the postfix sequence.
pub fn execute_rpn(options: &RpnOptions) -> Result<String, CliError> {
    let postfix = Parser::new(options.tokens.as_slice()).parse()?;
    let rendered = match options.format {
        OutputFormat::Csv => postfix.to_string(),
        OutputFormat::Json => serde_json::to_string(&postfix_to_json(&postfix))?,
    };
    Ok(rendered)
}

/// Options for the eval command
#[derive(Debug, Clone)]
pub struct EvalOptions {
    pub tokens: Vec<String>,
    /// Variable value
    pub x: f64,
    pub min_divisor: f64,
    pub precision: Option<u32>,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            tokens: Vec::new(),
            x: 0.0,
            min_divisor: DEFAULT_DIVISION_THRESHOLD,
            precision: None,
        }
    }
}

/// Evaluates the expression at one point. An undefined point renders as
/// `undefined`.
pub fn execute_eval(options: &EvalOptions) -> Result<String, CliError> {
    let evaluator = evaluator_for(options.min_divisor)?;
    let postfix = Parser::new(options.tokens.as_slice()).parse()?;

    match evaluator.evaluate(&postfix, options.x)? {
        Some(y) => Ok(format_value(y, options.precision)),
        None => Ok("undefined".to_string()),
    }
}
