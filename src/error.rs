//! Crate-level error type.

use crate::config::ConfigError;
use crate::hazard::InputError;
use crate::report::ReportError;
use crate::units::ParseError;

/// Any failure on the way from user text to a rendered report.
///
/// Hazard evaluation itself is infallible; these come from parsing,
/// validation, configuration and rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {field}: {source}")]
    Parse {
        field: &'static str,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl Error {
    /// Attaches the argument name to a parse failure.
    pub fn parse(field: &'static str) -> impl FnOnce(ParseError) -> Self {
        move |source| Self::Parse { field, source }
    }
}
