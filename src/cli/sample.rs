//! Sample an expression over a range and render the points

use super::{CliError, evaluator_for};
use crate::{
    OutputFormat, Sampler, DEFAULT_DIVISION_THRESHOLD,
    output::{to_csv, to_json},
};

/// Options for the sample command
#[derive(Debug, Clone)]
pub struct SampleOptions {
    /// Expression tokens
    pub tokens: Vec<String>,
    /// Range start
    pub from: f64,
    /// Range end (exclusive)
    pub to: f64,
    /// Distance between sample points
    pub step: f64,
    /// Divisors below this magnitude make a point undefined
    pub min_divisor: f64,
    pub format: OutputFormat,
    /// Decimal places for printed values
    pub precision: Option<u32>,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for SampleOptions {
    fn default() -> Self {
        SampleOptions {
            tokens: Vec::new(),
            from: 0.0,
            to: 6.5,
            step: 0.01,
            min_divisor: DEFAULT_DIVISION_THRESHOLD,
            format: OutputFormat::Csv,
            precision: None,
            pretty: false,
        }
    }
}

/// Execute a sample operation, returning the rendered points
pub fn execute_sample(options: &SampleOptions) -> Result<String, CliError> {
    if options.tokens.is_empty() {
        return Err(CliError::NoInput);
    }

    let evaluator = evaluator_for(options.min_divisor)?;
    let sampler = Sampler::new(options.tokens.as_slice())?.with_evaluator(evaluator);
    let samples = sampler.sample(options.from, options.to, options.step)?;

    let rendered = match options.format {
        OutputFormat::Csv => to_csv(&samples, options.precision),
        OutputFormat::Json => to_json(&samples, options.precision, options.pretty)?,
    };
    Ok(rendered)
}
