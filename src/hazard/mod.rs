//! Small-spot ocular hazard evaluation.
//!
//! Combines the spectral weights with the fixed 0.03 mm aperture to check
//! an exposure against three mechanisms:
//!
//! - **Single pulse**: R-weighted energy per pulse against 40 nJ.
//! - **Thermal**: R-weighted energy over the dwell time against
//!   `1.7 · t^0.75` mJ (only for dwell times above 6.2e-4 s).
//! - **Photochemical**: B-weighted radiant exposure against 2.2 J/cm²
//!   (same dwell condition).
//!
//! The mechanism with the smaller margin governs. Margins are ratios of
//! limit to exposure, so a value below 1 means the limit is exceeded.

mod evaluator;
mod input;
pub mod limits;
mod margin;
mod result;

pub use evaluator::{evaluate, HazardEvaluator};
pub use input::{ExposureInput, InputError, WavelengthPolicy};
pub use margin::{Margin, StoppedBeamTime};
pub use result::{
    AppliedWeights, GoverningHazard, HazardResult, PhotochemicalAssessment,
    SinglePulseAssessment, ThermalAssessment,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HazardResult>();
        assert_send_sync::<HazardEvaluator>();
        assert_send_sync::<ExposureInput>();
    }
}
