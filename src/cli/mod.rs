//! CLI support for plotexpr
//!
//! Provides programmatic access to the `plotexpr` commands so the binary
//! stays a thin argument parser.

mod docs;
mod inspect;
mod logger;
mod sample;

pub use docs::get_symbols_overview;
pub use inspect::{execute_eval, execute_rpn, EvalOptions, RpnOptions};
pub use logger::init_logger;
pub use sample::{execute_sample, SampleOptions};

use std::io;

use crate::{Evaluator, Lexer};

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Expression did not convert
    Parse(crate::ParseError),
    /// Malformed expression at evaluation time
    Eval(crate::EvalError),
    /// Invalid range or failed sampling
    Sample(crate::SampleError),
    /// JSON serialization error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No expression provided
    NoInput,
    /// Unknown output format
    UnknownFormat(String),
    /// `--min-divisor` is NaN or infinite
    InvalidDivisor(f64),
    /// Logger was already installed
    Logger(log::SetLoggerError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Eval(e) => write!(f, "Evaluation error: {}", e),
            CliError::Sample(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(
                f,
                "No expression provided. Pass tokens as arguments or pipe them to stdin."
            ),
            CliError::UnknownFormat(name) => {
                write!(f, "Unknown format: '{}'\nSupported formats: csv, json", name)
            }
            CliError::Logger(e) => write!(f, "Logger error: {}", e),
            CliError::InvalidDivisor(value) => {
                write!(f, "Invalid minimum divisor {}: must be a finite number", value)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Eval(e) => Some(e),
            CliError::Sample(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Logger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::EvalError> for CliError {
    fn from(e: crate::EvalError) -> Self {
        CliError::Eval(e)
    }
}

impl From<crate::SampleError> for CliError {
    fn from(e: crate::SampleError) -> Self {
        CliError::Sample(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<log::SetLoggerError> for CliError {
    fn from(e: log::SetLoggerError) -> Self {
        CliError::Logger(e)
    }
}

/// Splits expression arguments into tokens.
///
/// Arguments may be pre-split (`sin( x )` as three arguments) or quoted
/// (`"sin( x )"` as one); both give the same tokens.
pub fn tokens_from_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<String>, CliError> {
    let joined = args
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    let tokens = Lexer::new(&joined).tokenize();
    if tokens.is_empty() {
        return Err(CliError::NoInput);
    }
    Ok(tokens)
}

/// Builds the evaluator for a `--min-divisor` value.
pub(crate) fn evaluator_for(min_divisor: f64) -> Result<Evaluator, CliError> {
    if !min_divisor.is_finite() {
        return Err(CliError::InvalidDivisor(min_divisor));
    }
    Ok(Evaluator::new().with_division_threshold(min_divisor))
}
