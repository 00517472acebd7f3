//! JSON report envelope.

use super::ReportError;
use crate::hazard::HazardResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A result wrapped with the tool version and evaluation time.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    /// Crate version that produced the report.
    pub version: &'static str,
    /// When the report was produced.
    pub evaluated_at: DateTime<Utc>,
    /// Whether every computed margin is at least 1.
    pub within_limits: bool,
    pub result: &'a HazardResult,
}

impl<'a> JsonReport<'a> {
    /// Wraps a result, stamping the current time.
    pub fn new(result: &'a HazardResult) -> Self {
        Self {
            version: crate::VERSION,
            evaluated_at: Utc::now(),
            within_limits: result.is_within_limits(),
            result,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::evaluate;

    #[test]
    fn test_json_structure() {
        let result = evaluate(430.0, 5e-6, 0.1, 59e6, 6e-12);
        let json = JsonReport::new(&result).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], crate::VERSION);
        assert_eq!(value["within_limits"], true);
        assert_eq!(value["result"]["resolved_nm"], 430);
        assert_eq!(value["result"]["governing"], "Photochemical");
        assert!(value["result"]["thermal"]["margin"]["Finite"].is_f64());
        assert!(value["evaluated_at"].is_string());
    }

    #[test]
    fn test_json_absent_sections_are_null() {
        let result = evaluate(400.0, 1e-3, 1e-5, 59e6, 6e-12);
        let json = JsonReport::new(&result).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["result"]["thermal"].is_null());
        assert!(value["result"]["photochemical"].is_null());
        assert_eq!(value["result"]["governing"], "ThermalOnly");
    }

    #[test]
    fn test_json_infinite_margin() {
        let result = evaluate(430.0, 0.0, 1.0, 59e6, 6e-12);
        let json = JsonReport::new(&result).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["result"]["single_pulse"]["margin"], "Infinite");
        assert_eq!(value["result"]["safe_stopped_beam_time"], "Unlimited");
    }
}
