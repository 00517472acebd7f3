//! Safety margins and the stopped-beam time.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Ratio of a regulatory limit to the computed exposure.
///
/// A zero (or negative) exposure has no finite margin and is reported as
/// [`Margin::Infinite`] rather than as a float infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Margin {
    /// limit / exposure.
    Finite(f64),
    /// The exposure term is zero.
    Infinite,
}

impl Margin {
    /// Computes `limit / exposure`, or [`Margin::Infinite`] if exposure is not positive.
    pub fn from_ratio(limit: f64, exposure: f64) -> Self {
        if exposure > 0.0 {
            Self::Finite(limit / exposure)
        } else {
            Self::Infinite
        }
    }

    /// The finite ratio, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(*v),
            Self::Infinite => None,
        }
    }

    /// Returns true for a zero exposure.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Returns true if the exposure is over its limit (margin below 1).
    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Finite(v) if *v < 1.0)
    }

    /// Returns true if this margin is strictly more restrictive than `other`.
    pub fn is_tighter_than(&self, other: &Margin) -> bool {
        self.partial_cmp(other) == Some(Ordering::Less)
    }
}

impl PartialOrd for Margin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.partial_cmp(b),
            (Self::Finite(_), Self::Infinite) => Some(Ordering::Less),
            (Self::Infinite, Self::Finite(_)) => Some(Ordering::Greater),
            (Self::Infinite, Self::Infinite) => Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v:.1}"),
            Self::Infinite => f.write_str("inf"),
        }
    }
}

/// Longest continuous exposure before the photochemical dose limit is reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StoppedBeamTime {
    /// Seconds until the dose limit is reached.
    Seconds(f64),
    /// Zero irradiance; the limit is never reached.
    Unlimited,
}

impl StoppedBeamTime {
    /// Computes `dose_limit / irradiance`, or [`StoppedBeamTime::Unlimited`]
    /// if irradiance is not positive.
    pub fn from_irradiance(dose_limit: f64, irradiance: f64) -> Self {
        if irradiance > 0.0 {
            Self::Seconds(dose_limit / irradiance)
        } else {
            Self::Unlimited
        }
    }

    /// The finite time in seconds, if any.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            Self::Seconds(s) => Some(*s),
            Self::Unlimited => None,
        }
    }
}

impl fmt::Display for StoppedBeamTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(s) => write!(f, "{s:.3e}"),
            Self::Unlimited => f.write_str("unlimited"),
        }
    }
}
