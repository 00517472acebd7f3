//! Structured evaluation output.

use super::input::ExposureInput;
use super::margin::{Margin, StoppedBeamTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The hazard mechanism that binds the exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoverningHazard {
    /// Dwell time too short for photochemical accumulation.
    ThermalOnly,
    /// Thermal margin is the smaller one.
    Thermal,
    /// Photochemical margin is the smaller one.
    Photochemical,
    /// No extended-exposure margin was available.
    Indeterminate,
}

impl GoverningHazard {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ThermalOnly => "Thermal only (photochemical not applicable)",
            Self::Thermal => "Thermal",
            Self::Photochemical => "Photochemical",
            Self::Indeterminate => "Indeterminate",
        }
    }
}

impl fmt::Display for GoverningHazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weighting coefficients actually applied, after substitution rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedWeights {
    /// Thermal weighting R(λ).
    pub r: f64,
    /// Photochemical weighting B(λ).
    pub b: f64,
    /// R was raised to 1.0 for an ultrashort pulse.
    pub ultrashort_override: bool,
    /// R was capped at 1.0 for a long stare.
    pub long_stare_override: bool,
}

/// Single-pulse energy check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SinglePulseAssessment {
    /// Energy per pulse in J.
    pub energy_j: f64,
    /// R-weighted energy per pulse in J.
    pub weighted_energy_j: f64,
    /// Limit in J.
    pub limit_j: f64,
    pub margin: Margin,
}

/// Thermal (burn) hazard over the whole dwell time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalAssessment {
    /// R-weighted energy in J.
    pub weighted_energy_j: f64,
    /// Limit in J.
    pub limit_j: f64,
    pub margin: Margin,
}

/// Photochemical (blue-light) hazard over the whole dwell time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhotochemicalAssessment {
    /// B-weighted radiant exposure in J/cm².
    pub dose_j_per_cm2: f64,
    /// Limit in J/cm².
    pub limit_j_per_cm2: f64,
    pub margin: Margin,
}

/// Result of one small-spot evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardResult {
    /// The exposure as supplied.
    pub input: ExposureInput,
    /// Tabulated wavelength used for weighting, in nm.
    pub resolved_nm: u32,
    /// The supplied wavelength was outside the tabulated band.
    pub wavelength_clamped: bool,
    pub weights: AppliedWeights,
    pub single_pulse: SinglePulseAssessment,
    /// Present only for dwell times above 6.2e-4 s.
    pub thermal: Option<ThermalAssessment>,
    /// Present only for dwell times above 6.2e-4 s.
    pub photochemical: Option<PhotochemicalAssessment>,
    /// B-weighted irradiance over the aperture in W/cm².
    pub photochemical_irradiance_w_per_cm2: f64,
    pub governing: GoverningHazard,
    pub safe_stopped_beam_time: StoppedBeamTime,
}

impl HazardResult {
    /// All margins that were computed, single pulse first.
    pub fn margins(&self) -> impl Iterator<Item = Margin> + '_ {
        std::iter::once(self.single_pulse.margin)
            .chain(self.thermal.map(|t| t.margin))
            .chain(self.photochemical.map(|p| p.margin))
    }

    /// The smallest computed margin.
    pub fn limiting_margin(&self) -> Margin {
        self.margins()
            .fold(Margin::Infinite, |tightest, m| {
                if m.is_tighter_than(&tightest) {
                    m
                } else {
                    tightest
                }
            })
    }

    /// Returns true if no computed margin is below 1.
    pub fn is_within_limits(&self) -> bool {
        !self.margins().any(|m| m.is_exceeded())
    }
}
