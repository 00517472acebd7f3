//! Spectral weighting functions for the 400–500 nm band.
//!
//! R(λ) weights power and energy for the thermal (burn) limits; B(λ) weights
//! irradiance for the photochemical (blue-light) limit. Both share a single
//! wavelength grid, so one lookup yields both coefficients.

mod table;

pub use table::{SpectralTable, WavelengthEntry};
