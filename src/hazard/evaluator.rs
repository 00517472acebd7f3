//! Small-spot hazard evaluation pipeline.

use super::input::ExposureInput;
use super::limits::{
    aperture_area_cm2, thermal_limit_j, EXTENDED_EXPOSURE_THRESHOLD_S, LONG_STARE_S,
    PHOTOCHEMICAL_LIMIT_J_PER_CM2, SINGLE_PULSE_LIMIT_J, ULTRASHORT_PULSE_S,
};
use super::margin::{Margin, StoppedBeamTime};
use super::result::{
    AppliedWeights, GoverningHazard, HazardResult, PhotochemicalAssessment,
    SinglePulseAssessment, ThermalAssessment,
};
use crate::spectral::{SpectralTable, WavelengthEntry};

/// Evaluates exposures against the small-spot limits.
///
/// Holds only a reference to the weighting table; evaluation is a pure
/// function of the input.
#[derive(Debug, Clone, Copy)]
pub struct HazardEvaluator {
    table: &'static SpectralTable,
}

impl HazardEvaluator {
    /// Creates an evaluator over the given weighting table.
    pub fn new(table: &'static SpectralTable) -> Self {
        Self { table }
    }

    /// Runs the full evaluation. Never fails; zero exposures produce
    /// infinite margins.
    pub fn evaluate(&self, input: &ExposureInput) -> HazardResult {
        let entry = self.table.resolve(input.wavelength_nm);
        let wavelength_clamped = !self.table.contains(input.wavelength_nm);
        if wavelength_clamped {
            tracing::warn!(
                requested_nm = input.wavelength_nm,
                resolved_nm = entry.nm,
                "Wavelength outside tabulated band, using nearest edge"
            );
        }

        let weights = apply_substitutions(&entry, input);
        tracing::debug!(
            nm = entry.nm,
            r = weights.r,
            b = weights.b,
            ultrashort = weights.ultrashort_override,
            long_stare = weights.long_stare_override,
            "Resolved spectral weights"
        );

        let extended = input.dwell_time_s > EXTENDED_EXPOSURE_THRESHOLD_S;

        let single_pulse = assess_single_pulse(input, weights.r);
        let thermal = extended.then(|| assess_thermal(input, weights.r));

        let irradiance = input.power_pupil_w * weights.b / aperture_area_cm2();
        let photochemical = extended.then(|| assess_photochemical(input, irradiance));

        let governing = if extended {
            governing_hazard(
                thermal.as_ref().map(|t| t.margin),
                photochemical.as_ref().map(|p| p.margin),
            )
        } else {
            GoverningHazard::ThermalOnly
        };

        let safe_stopped_beam_time =
            StoppedBeamTime::from_irradiance(PHOTOCHEMICAL_LIMIT_J_PER_CM2, irradiance);

        tracing::trace!(
            single = %single_pulse.margin,
            thermal = ?thermal.map(|t| t.margin.value()),
            photochemical = ?photochemical.map(|p| p.margin.value()),
            governing = %governing,
            "Evaluation complete"
        );

        HazardResult {
            input: *input,
            resolved_nm: entry.nm,
            wavelength_clamped,
            weights,
            single_pulse,
            thermal,
            photochemical,
            photochemical_irradiance_w_per_cm2: irradiance,
            governing,
            safe_stopped_beam_time,
        }
    }
}

impl Default for HazardEvaluator {
    fn default() -> Self {
        Self::new(SpectralTable::standard())
    }
}

/// Evaluates one exposure against the standard table.
///
/// ```
/// use smallspot_safety::{evaluate, GoverningHazard};
///
/// let result = evaluate(430.0, 5e-6, 0.1, 59e6, 6e-12);
/// assert_eq!(result.resolved_nm, 430);
/// assert_eq!(result.governing, GoverningHazard::Photochemical);
/// ```
pub fn evaluate(
    wavelength_nm: f64,
    power_pupil_w: f64,
    dwell_time_s: f64,
    rep_rate_hz: f64,
    pulse_duration_s: f64,
) -> HazardResult {
    let input = ExposureInput::new(wavelength_nm, power_pupil_w, dwell_time_s)
        .with_rep_rate(rep_rate_hz)
        .with_pulse_duration(pulse_duration_s);
    HazardEvaluator::default().evaluate(&input)
}

/// Applies the R(λ) overrides for ultrashort pulses and long stares, in that order.
fn apply_substitutions(entry: &WavelengthEntry, input: &ExposureInput) -> AppliedWeights {
    let mut r = entry.r;
    let mut ultrashort_override = false;
    let mut long_stare_override = false;

    if input.pulse_duration_s < ULTRASHORT_PULSE_S && r < 1.0 {
        r = 1.0;
        ultrashort_override = true;
    }
    if input.dwell_time_s > LONG_STARE_S && r > 1.0 {
        r = 1.0;
        long_stare_override = true;
    }

    AppliedWeights {
        r,
        b: entry.b,
        ultrashort_override,
        long_stare_override,
    }
}

fn assess_single_pulse(input: &ExposureInput, r: f64) -> SinglePulseAssessment {
    let energy_j = input.power_pupil_w / input.rep_rate_hz;
    let weighted_energy_j = r * energy_j;
    SinglePulseAssessment {
        energy_j,
        weighted_energy_j,
        limit_j: SINGLE_PULSE_LIMIT_J,
        margin: Margin::from_ratio(SINGLE_PULSE_LIMIT_J, weighted_energy_j),
    }
}

fn assess_thermal(input: &ExposureInput, r: f64) -> ThermalAssessment {
    let weighted_energy_j = r * input.power_pupil_w * input.dwell_time_s;
    let limit_j = thermal_limit_j(input.dwell_time_s);
    ThermalAssessment {
        weighted_energy_j,
        limit_j,
        margin: Margin::from_ratio(limit_j, weighted_energy_j),
    }
}

fn assess_photochemical(input: &ExposureInput, irradiance: f64) -> PhotochemicalAssessment {
    let dose_j_per_cm2 = irradiance * input.dwell_time_s;
    PhotochemicalAssessment {
        dose_j_per_cm2,
        limit_j_per_cm2: PHOTOCHEMICAL_LIMIT_J_PER_CM2,
        margin: Margin::from_ratio(PHOTOCHEMICAL_LIMIT_J_PER_CM2, dose_j_per_cm2),
    }
}

/// Picks the mechanism with the smaller margin; ties go to thermal.
fn governing_hazard(thermal: Option<Margin>, photochemical: Option<Margin>) -> GoverningHazard {
    match (thermal, photochemical) {
        (Some(t), Some(p)) if p.is_tighter_than(&t) => GoverningHazard::Photochemical,
        (Some(_), Some(_)) => GoverningHazard::Thermal,
        (Some(_), None) => GoverningHazard::Thermal,
        (None, Some(_)) => GoverningHazard::Photochemical,
        (None, None) => GoverningHazard::Indeterminate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::limits::DEFAULT_REP_RATE_HZ;

    fn assert_rel(actual: f64, expected: f64, rel: f64) {
        assert!(
            ((actual - expected) / expected).abs() <= rel,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_peak_wavelength_scenario() {
        let result = evaluate(430.0, 5e-6, 0.1, 59e6, 6e-12);

        assert_eq!(result.resolved_nm, 430);
        assert_eq!(result.weights.r, 2.0);
        assert_eq!(result.weights.b, 0.98);
        assert!(!result.wavelength_clamped);

        assert_rel(result.single_pulse.energy_j, 5e-6 / 59e6, 1e-12);
        assert_rel(result.single_pulse.margin.value().unwrap(), 236_000.0, 1e-9);

        let thermal = result.thermal.unwrap();
        assert_rel(thermal.weighted_energy_j, 1e-6, 1e-12);
        assert_rel(thermal.margin.value().unwrap(), 302.31, 1e-4);

        let photo = result.photochemical.unwrap();
        assert_rel(result.photochemical_irradiance_w_per_cm2, 0.693_21, 1e-4);
        assert_rel(photo.dose_j_per_cm2, 0.069_321, 1e-4);
        assert_rel(photo.margin.value().unwrap(), 31.736, 1e-4);

        assert_eq!(result.governing, GoverningHazard::Photochemical);
        assert_rel(result.safe_stopped_beam_time.seconds().unwrap(), 3.1736, 1e-4);
        assert!(result.is_within_limits());
    }

    #[test]
    fn test_short_dwell_is_thermal_only() {
        let result = evaluate(400.0, 1e-3, 1e-5, 59e6, 6e-12);

        assert_eq!(result.governing, GoverningHazard::ThermalOnly);
        assert!(result.thermal.is_none());
        assert!(result.photochemical.is_none());
        // Stopped-beam time does not depend on the dwell gate.
        assert!(result.safe_stopped_beam_time.seconds().is_some());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let at = evaluate(430.0, 5e-6, EXTENDED_EXPOSURE_THRESHOLD_S, 59e6, 6e-12);
        assert_eq!(at.governing, GoverningHazard::ThermalOnly);
        assert!(at.thermal.is_none());

        let above = evaluate(430.0, 5e-6, 6.3e-4, 59e6, 6e-12);
        assert!(above.thermal.is_some());
        assert!(above.photochemical.is_some());
    }

    #[test]
    fn test_long_stare_caps_r() {
        let result = evaluate(430.0, 5e-6, 20.0, DEFAULT_REP_RATE_HZ, 6e-12);

        assert_eq!(result.weights.r, 1.0);
        assert!(result.weights.long_stare_override);
        assert_rel(result.single_pulse.weighted_energy_j, 5e-6 / 59e6, 1e-12);
        assert_rel(result.thermal.unwrap().weighted_energy_j, 5e-6 * 20.0, 1e-12);
    }

    #[test]
    fn test_ultrashort_pulse_leaves_r_above_one() {
        let result = evaluate(430.0, 5e-6, 0.1, 59e6, 1e-12);

        assert_eq!(result.weights.r, 2.0);
        assert!(!result.weights.ultrashort_override);
        assert_rel(
            result.single_pulse.weighted_energy_j,
            2.0 * 5e-6 / 59e6,
            1e-12,
        );
    }

    #[test]
    fn test_ultrashort_pulse_raises_low_r() {
        let entry = WavelengthEntry {
            nm: 430,
            r: 0.5,
            b: 0.98,
        };
        let input = ExposureInput::new(430.0, 5e-6, 0.1).with_pulse_duration(1e-12);
        let weights = apply_substitutions(&entry, &input);
        assert_eq!(weights.r, 1.0);
        assert!(weights.ultrashort_override);

        let slow = ExposureInput::new(430.0, 5e-6, 0.1).with_pulse_duration(1e-9);
        assert_eq!(apply_substitutions(&entry, &slow).r, 0.5);
    }

    #[test]
    fn test_zero_power_gives_infinite_margins() {
        let result = evaluate(430.0, 0.0, 1.0, 59e6, 6e-12);

        assert_eq!(result.single_pulse.margin, Margin::Infinite);
        assert_eq!(result.thermal.unwrap().margin, Margin::Infinite);
        assert_eq!(result.photochemical.unwrap().margin, Margin::Infinite);
        assert_eq!(result.safe_stopped_beam_time, StoppedBeamTime::Unlimited);
        // Both infinite: photochemical is not tighter, so thermal governs.
        assert_eq!(result.governing, GoverningHazard::Thermal);
        assert_eq!(result.limiting_margin(), Margin::Infinite);
    }

    #[test]
    fn test_thermal_governs_at_low_blue_weight() {
        // B(400) = 0.06 makes the photochemical term small.
        let result = evaluate(400.0, 5e-6, 0.1, 59e6, 6e-12);
        let thermal = result.thermal.unwrap().margin;
        let photo = result.photochemical.unwrap().margin;
        assert!(thermal.is_tighter_than(&photo));
        assert_eq!(result.governing, GoverningHazard::Thermal);
    }

    #[test]
    fn test_exceeded_exposure() {
        let result = evaluate(430.0, 1e-3, 1.0, 59e6, 6e-12);
        assert!(!result.is_within_limits());
        assert!(result.limiting_margin().is_exceeded());
    }

    #[test]
    fn test_out_of_band_flagged() {
        let result = evaluate(532.0, 1e-6, 0.1, 59e6, 6e-12);
        assert!(result.wavelength_clamped);
        assert_eq!(result.resolved_nm, 500);
    }

    #[test]
    fn test_governing_selection() {
        let small = Some(Margin::Finite(2.0));
        let large = Some(Margin::Finite(5.0));
        assert_eq!(governing_hazard(large, small), GoverningHazard::Photochemical);
        assert_eq!(governing_hazard(small, large), GoverningHazard::Thermal);
        assert_eq!(governing_hazard(small, small), GoverningHazard::Thermal);
        assert_eq!(governing_hazard(None, small), GoverningHazard::Photochemical);
        assert_eq!(governing_hazard(small, None), GoverningHazard::Thermal);
        assert_eq!(governing_hazard(None, None), GoverningHazard::Indeterminate);
    }
}
