//! Parsing of prefixed magnitudes like `5u` or `100 m`.

use super::prefix::MetricPrefix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors produced while parsing a prefixed magnitude.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty value")]
    Empty,
    #[error("invalid number in value {0:?}")]
    InvalidNumber(String),
    #[error("unrecognized metric prefix in value {0:?}")]
    UnknownPrefix(String),
}

/// A non-negative magnitude with its SI prefix.
///
/// Immutable once parsed; use [`MetricValue::si_value`] to obtain the value
/// in base units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    magnitude: f64,
    prefix: MetricPrefix,
}

impl MetricValue {
    /// Creates a value from a magnitude and prefix.
    pub fn new(magnitude: f64, prefix: MetricPrefix) -> Self {
        Self { magnitude, prefix }
    }

    /// The number as written, before scaling.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The prefix as written.
    #[inline]
    pub fn prefix(&self) -> MetricPrefix {
        self.prefix
    }

    /// The value in SI base units.
    #[inline]
    pub fn si_value(&self) -> f64 {
        self.magnitude * self.prefix.factor()
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.prefix.symbol())
    }
}

impl FromStr for MetricValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let number_end = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(trimmed.len());
        let (number, rest) = trimmed.split_at(number_end);

        if !number.chars().any(|c| c.is_ascii_digit()) {
            return Err(ParseError::InvalidNumber(s.to_string()));
        }
        let magnitude: f64 = number
            .parse()
            .map_err(|_| ParseError::InvalidNumber(s.to_string()))?;

        let mut suffix = rest.trim_start().chars();
        let prefix = match (suffix.next(), suffix.next()) {
            (None, _) => MetricPrefix::None,
            (Some(symbol), None) => MetricPrefix::from_symbol(symbol)
                .ok_or_else(|| ParseError::UnknownPrefix(s.to_string()))?,
            (Some(_), Some(_)) => return Err(ParseError::UnknownPrefix(s.to_string())),
        };

        Ok(Self { magnitude, prefix })
    }
}

/// Parses a prefixed magnitude and returns it in SI base units.
///
/// ```
/// use smallspot_safety::units::parse_value;
///
/// assert_eq!(parse_value("100").unwrap(), 100.0);
/// assert!((parse_value("5u").unwrap() - 5e-6).abs() < 1e-18);
/// assert!(parse_value("abc").is_err());
/// ```
pub fn parse_value(s: &str) -> Result<f64, ParseError> {
    s.parse::<MetricValue>().map(|v| v.si_value())
}
