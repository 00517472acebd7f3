//! Tabulated R(λ) and B(λ) weights.

use serde::{Deserialize, Serialize};

/// One tabulated wavelength and its weighting coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WavelengthEntry {
    /// Tabulated wavelength in nm.
    pub nm: u32,
    /// Thermal weighting R(λ).
    pub r: f64,
    /// Photochemical (blue-light) weighting B(λ).
    pub b: f64,
}

const fn entry(nm: u32, r: f64, b: f64) -> WavelengthEntry {
    WavelengthEntry { nm, r, b }
}

/// Ascending by wavelength. R is flat across the band; B peaks at 430 nm.
static STANDARD_ENTRIES: [WavelengthEntry; 12] = [
    entry(400, 2.0, 0.060),
    entry(410, 2.0, 0.180),
    entry(420, 2.0, 0.900),
    entry(430, 2.0, 0.980),
    entry(440, 2.0, 0.970),
    entry(450, 2.0, 0.940),
    entry(455, 2.0, 0.900),
    entry(460, 2.0, 0.800),
    entry(470, 2.0, 0.630),
    entry(480, 2.0, 0.550),
    entry(490, 2.0, 0.420),
    entry(500, 2.0, 0.320),
];

static STANDARD: SpectralTable = SpectralTable {
    entries: &STANDARD_ENTRIES,
};

/// A read-only wavelength-indexed weighting table.
///
/// Entries must be non-empty and sorted ascending by wavelength.
#[derive(Debug, Clone, Copy)]
pub struct SpectralTable {
    entries: &'static [WavelengthEntry],
}

impl SpectralTable {
    /// The small-spot weighting table for 400–500 nm.
    pub fn standard() -> &'static SpectralTable {
        &STANDARD
    }

    /// All tabulated entries in ascending order.
    pub fn entries(&self) -> &'static [WavelengthEntry] {
        self.entries
    }

    /// Shortest tabulated wavelength.
    pub fn min_nm(&self) -> u32 {
        self.entries[0].nm
    }

    /// Longest tabulated wavelength.
    pub fn max_nm(&self) -> u32 {
        self.entries[self.entries.len() - 1].nm
    }

    /// Returns true if the wavelength lies inside the tabulated band.
    pub fn contains(&self, wavelength_nm: f64) -> bool {
        wavelength_nm >= f64::from(self.min_nm()) && wavelength_nm <= f64::from(self.max_nm())
    }

    /// Resolves a wavelength to the nearest tabulated entry.
    ///
    /// Equidistant candidates resolve to the shorter wavelength, and input
    /// outside the band resolves to the nearest endpoint. There is no
    /// interpolation between grid points.
    pub fn resolve(&self, wavelength_nm: f64) -> WavelengthEntry {
        // min_by keeps the first of equal elements.
        *self
            .entries
            .iter()
            .min_by(|a, b| {
                let da = (f64::from(a.nm) - wavelength_nm).abs();
                let db = (f64::from(b.nm) - wavelength_nm).abs();
                da.total_cmp(&db)
            })
            .unwrap_or(&self.entries[0])
    }
}
