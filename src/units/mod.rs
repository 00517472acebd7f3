//! Metric-prefixed magnitudes.
//!
//! Converts user-facing text such as `5u`, `100m` or `59M` into values in
//! SI base units. Only a bare number with an optional single prefix letter
//! is accepted; unit symbols (`W`, `s`) are not part of the grammar.

mod parse;
mod prefix;

pub use parse::{parse_value, MetricValue, ParseError};
pub use prefix::MetricPrefix;
