//! Exposure limits and fixed geometry for small-spot evaluation.

use std::f64::consts::PI;

/// Limiting aperture diameter in mm.
pub const SPOT_DIAMETER_MM: f64 = 0.03;

/// Single-pulse weighted energy limit in J.
pub const SINGLE_PULSE_LIMIT_J: f64 = 40e-9;

/// Thermal limit coefficient in mJ; the limit is `1.7 · t^0.75` mJ.
pub const THERMAL_COEFFICIENT_MJ: f64 = 1.7;

/// Time exponent of the thermal limit.
pub const THERMAL_TIME_EXPONENT: f64 = 0.75;

/// Photochemical dose limit in J/cm².
pub const PHOTOCHEMICAL_LIMIT_J_PER_CM2: f64 = 2.2;

/// Dwell time above which thermal and photochemical limits apply, in s.
pub const EXTENDED_EXPOSURE_THRESHOLD_S: f64 = 6.2e-4;

/// Pulses shorter than this (s) raise R(λ) below 1.0 up to 1.0.
pub const ULTRASHORT_PULSE_S: f64 = 1e-11;

/// Dwell times longer than this (s) cap R(λ) above 1.0 at 1.0.
pub const LONG_STARE_S: f64 = 10.0;

/// Default pulse repetition rate in Hz.
pub const DEFAULT_REP_RATE_HZ: f64 = 59e6;

/// Default pulse duration in s.
pub const DEFAULT_PULSE_DURATION_S: f64 = 6e-12;

/// Radius of the limiting aperture in cm.
pub fn aperture_radius_cm() -> f64 {
    (SPOT_DIAMETER_MM / 2.0) / 10.0
}

/// Area of the limiting aperture in cm² (about 7.07e-6).
pub fn aperture_area_cm2() -> f64 {
    PI * aperture_radius_cm().powi(2)
}

/// Thermal weighted-energy limit in J for the given dwell time.
pub fn thermal_limit_j(dwell_time_s: f64) -> f64 {
    THERMAL_COEFFICIENT_MJ * dwell_time_s.powf(THERMAL_TIME_EXPONENT) * 1e-3
}
