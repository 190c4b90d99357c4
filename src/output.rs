//! Serialization of sampled points for an external plotting process.
//!
//! # Formats
//!
//! - **CSV** via [`to_csv()`] - two lines, the x values then the y values,
//!   each comma-joined. This is the argument format the plotting script
//!   expects (`plot.py <xs> <ys>`).
//! - **JSON** via [`to_json()`] - an object `{"x": [...], "y": [...]}`.
//!
//! Both accept an optional decimal precision. Rounding goes through
//! [`rust_decimal::Decimal`] so printed values are exact decimals rather
//! than binary artifacts like `0.30000000000000004`.
//!
//! # Examples
//!
//! ```
//! use plotexpr::Samples;
//! use plotexpr::output::to_csv;
//!
//! let samples: Samples = [(0.0, 1.0), (0.1, 1.1), (0.2, 1.2)].into_iter().collect();
//! assert_eq!(to_csv(&samples, None), "0,0.1,0.2\n1,1.1,1.2");
//! ```

use rust_decimal::{Decimal, prelude::FromPrimitive, prelude::ToPrimitive};
use serde_json::{Map, Number, Value};

use crate::{ast::Postfix, sampler::Samples};

/// Output formats for sampled data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    /// Parse format name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" | "text" | "comma" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Rounds to `precision` decimal places. Values that do not fit a
/// `Decimal` (NaN, infinities, huge magnitudes) pass through unchanged.
pub fn round(value: f64, precision: Option<u32>) -> f64 {
    match precision {
        Some(dp) => Decimal::from_f64(value)
            .map(|d| d.round_dp(dp))
            .and_then(|d| d.to_f64())
            .unwrap_or(value),
        None => value,
    }
}

/// Formats one value, trailing zeros trimmed.
pub fn format_value(value: f64, precision: Option<u32>) -> String {
    match precision {
        Some(dp) => match Decimal::from_f64(value) {
            Some(d) => d.round_dp(dp).normalize().to_string(),
            None => value.to_string(),
        },
        None => value.to_string(),
    }
}

fn join(values: &[f64], precision: Option<u32>) -> String {
    values
        .iter()
        .map(|v| format_value(*v, precision))
        .collect::<Vec<_>>()
        .join(",")
}

/// Two comma-joined lines: x values, then y values.
pub fn to_csv(samples: &Samples, precision: Option<u32>) -> String {
    format!(
        "{}\n{}",
        join(samples.xs(), precision),
        join(samples.ys(), precision)
    )
}

fn to_json_array(values: &[f64], precision: Option<u32>) -> Value {
    Value::Array(
        values
            .iter()
            .map(|v| {
                Number::from_f64(round(*v, precision))
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            })
            .collect(),
    )
}

/// Builds `{"x": [...], "y": [...]}`. Non-finite values become `null`.
pub fn to_json_value(samples: &Samples, precision: Option<u32>) -> Value {
    let mut obj = Map::new();
    obj.insert("x".to_string(), to_json_array(samples.xs(), precision));
    obj.insert("y".to_string(), to_json_array(samples.ys(), precision));
    Value::Object(obj)
}

pub fn to_json(
    samples: &Samples,
    precision: Option<u32>,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let value = to_json_value(samples, precision);
    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}

/// The postfix sequence as a JSON array of token strings.
pub fn postfix_to_json(postfix: &Postfix) -> Value {
    Value::Array(
        postfix
            .into_iter()
            .map(|instruction| Value::String(instruction.to_string()))
            .collect(),
    )
}
