//! Small-Spot Laser Safety Library
//!
//! Evaluates whether a single-wavelength laser exposure is safe under the
//! small-spot (0.03 mm aperture) ocular hazard limits for 400–500 nm.
//!
//! # Architecture
//!
//! ```text
//! units (text → SI) → hazard::evaluate ← spectral (R/B weights)
//!                            ↓
//!                        HazardResult → report (text / JSON)
//! ```
//!
//! The evaluation is a pure function over constant tables: it performs no
//! I/O and never fails. Zero exposures are reported with an explicit
//! infinite margin instead of a division error.
//!
//! # Example
//!
//! ```
//! use smallspot_safety::{parse_value, ExposureInput, GoverningHazard, HazardEvaluator};
//!
//! let power = parse_value("5u").unwrap();
//! let dwell = parse_value("100m").unwrap();
//!
//! let input = ExposureInput::new(430.0, power, dwell);
//! let result = HazardEvaluator::default().evaluate(&input);
//!
//! assert_eq!(result.governing, GoverningHazard::Photochemical);
//! assert!(result.is_within_limits());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod hazard;
pub mod report;
pub mod spectral;
pub mod units;

// Re-export commonly used types at crate root
pub use config::FileConfig;
pub use error::Error;
pub use hazard::{
    evaluate, ExposureInput, GoverningHazard, HazardEvaluator, HazardResult, Margin,
    StoppedBeamTime, WavelengthPolicy,
};
pub use report::{render, ReportFormat};
pub use spectral::{SpectralTable, WavelengthEntry};
pub use units::{parse_value, MetricValue, ParseError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
