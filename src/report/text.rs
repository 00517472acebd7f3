//! Plain-text report.

use crate::hazard::limits::SPOT_DIAMETER_MM;
use crate::hazard::{HazardResult, Margin};
use std::fmt;

const RULE: &str = "============================================================";

/// Renders a result as aligned plain-text sections.
pub fn render_text(result: &HazardResult) -> String {
    TextReport(result).to_string()
}

struct TextReport<'a>(&'a HazardResult);

struct MarginLine(Margin);

impl fmt::Display for MarginLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Margin::Infinite => f.write_str("infinite (no exposure)"),
            m if m.is_exceeded() => write!(f, "{m} × (LIMIT EXCEEDED)"),
            m => write!(f, "{m} × below limit"),
        }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        let input = &r.input;

        writeln!(f, "=== Small-Spot Laser Safety Evaluation ===")?;
        if r.wavelength_clamped {
            writeln!(
                f,
                "Wavelength (nm):           {} (requested {}, outside table)",
                r.resolved_nm, input.wavelength_nm
            )?;
        } else {
            writeln!(f, "Wavelength (nm):           {}", r.resolved_nm)?;
        }
        writeln!(f, "Pulse duration (s):        {:.2e}", input.pulse_duration_s)?;
        writeln!(f, "Exposure time (s):         {:.3e}", input.dwell_time_s)?;
        writeln!(f, "Power at pupil (W):        {:.3e}", input.power_pupil_w)?;
        writeln!(f, "Repetition rate (Hz):      {:.3e}", input.rep_rate_hz)?;
        writeln!(f, "Spot diameter (mm):        {SPOT_DIAMETER_MM} (fixed small-spot)")?;

        writeln!(f)?;
        writeln!(f, "--- Spectral weighting ---")?;
        writeln!(f, "R(λ):                      {}", r.weights.r)?;
        writeln!(f, "B(λ):                      {}", r.weights.b)?;

        let pulse = &r.single_pulse;
        writeln!(f)?;
        writeln!(f, "--- Single-pulse check ---")?;
        writeln!(f, "Pulse energy (J):          {:.3e}", pulse.energy_j)?;
        writeln!(f, "Weighted pulse (J):        {:.3e}", pulse.weighted_energy_j)?;
        writeln!(f, "Limit (J):                 {:.2e}", pulse.limit_j)?;
        writeln!(f, "Margin:                    {}", MarginLine(pulse.margin))?;

        if let Some(thermal) = &r.thermal {
            writeln!(f)?;
            writeln!(f, "--- Thermal hazard ---")?;
            writeln!(f, "Weighted energy (J):       {:.3e}", thermal.weighted_energy_j)?;
            writeln!(f, "Thermal limit (J):         {:.3e}", thermal.limit_j)?;
            writeln!(f, "Margin:                    {}", MarginLine(thermal.margin))?;
        }

        if let Some(photo) = &r.photochemical {
            writeln!(f)?;
            writeln!(f, "--- Photochemical hazard ---")?;
            writeln!(
                f,
                "E_photo (W/cm²):           {:.3e}",
                r.photochemical_irradiance_w_per_cm2
            )?;
            writeln!(f, "Dose (J/cm²):              {:.3e}", photo.dose_j_per_cm2)?;
            writeln!(f, "Limit (J/cm²):             {:.2}", photo.limit_j_per_cm2)?;
            writeln!(f, "Margin:                    {}", MarginLine(photo.margin))?;
            writeln!(f)?;
            writeln!(f, "Governing hazard:          {}", r.governing)?;
            writeln!(f, "Safe stopped-beam time(s): {}", r.safe_stopped_beam_time)?;
        } else {
            writeln!(f)?;
            writeln!(
                f,
                "Exposure below 6.2 × 10⁻⁴ s → Photochemical hazard not applicable"
            )?;
            writeln!(f, "Governing hazard:          {}", r.governing)?;
        }
        write!(f, "{RULE}")
    }
}
