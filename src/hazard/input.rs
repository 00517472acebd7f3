//! Exposure parameters supplied to the evaluator.

use super::limits::{DEFAULT_PULSE_DURATION_S, DEFAULT_REP_RATE_HZ};
use crate::spectral::SpectralTable;
use serde::{Deserialize, Serialize};

/// How wavelengths outside the tabulated band are handled during validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WavelengthPolicy {
    /// Accept and resolve to the nearest band edge.
    #[default]
    Clamp,
    /// Reject with [`InputError::WavelengthOutOfRange`].
    Reject,
}

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("repetition rate must be greater than zero")]
    ZeroRepRate,
    #[error("wavelength {value} nm is outside the {min}-{max} nm band")]
    WavelengthOutOfRange { value: f64, min: u32, max: u32 },
}

/// A single-wavelength laser exposure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureInput {
    /// Wavelength in nm.
    pub wavelength_nm: f64,
    /// Power at the pupil in W.
    pub power_pupil_w: f64,
    /// Total exposure (dwell) time in s.
    pub dwell_time_s: f64,
    /// Pulse repetition rate in Hz.
    pub rep_rate_hz: f64,
    /// Pulse duration in s.
    pub pulse_duration_s: f64,
}

impl ExposureInput {
    /// Creates an input with the default repetition rate (59 MHz) and
    /// pulse duration (6 ps).
    pub fn new(wavelength_nm: f64, power_pupil_w: f64, dwell_time_s: f64) -> Self {
        Self {
            wavelength_nm,
            power_pupil_w,
            dwell_time_s,
            rep_rate_hz: DEFAULT_REP_RATE_HZ,
            pulse_duration_s: DEFAULT_PULSE_DURATION_S,
        }
    }

    /// Overrides the repetition rate.
    pub fn with_rep_rate(mut self, rep_rate_hz: f64) -> Self {
        self.rep_rate_hz = rep_rate_hz;
        self
    }

    /// Overrides the pulse duration.
    pub fn with_pulse_duration(mut self, pulse_duration_s: f64) -> Self {
        self.pulse_duration_s = pulse_duration_s;
        self
    }

    /// Checks the input invariants.
    ///
    /// Evaluation itself never fails; this is for callers that want to
    /// refuse physically meaningless input up front.
    pub fn validate(&self, policy: WavelengthPolicy) -> Result<(), InputError> {
        let fields = [
            ("wavelength", self.wavelength_nm),
            ("power", self.power_pupil_w),
            ("dwell time", self.dwell_time_s),
            ("repetition rate", self.rep_rate_hz),
            ("pulse duration", self.pulse_duration_s),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field, value });
            }
        }
        // Wavelength may be anything; out-of-band handling is the policy's job.
        for &(field, value) in &fields[1..] {
            if value < 0.0 {
                return Err(InputError::Negative { field, value });
            }
        }
        if self.rep_rate_hz == 0.0 {
            return Err(InputError::ZeroRepRate);
        }

        let table = SpectralTable::standard();
        if policy == WavelengthPolicy::Reject && !table.contains(self.wavelength_nm) {
            return Err(InputError::WavelengthOutOfRange {
                value: self.wavelength_nm,
                min: table.min_nm(),
                max: table.max_nm(),
            });
        }
        Ok(())
    }
}
