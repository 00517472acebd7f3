//! SI metric prefixes.

use serde::{Deserialize, Serialize};

/// A recognized SI prefix and its scale factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricPrefix {
    /// T, 1e12.
    Tera,
    /// G, 1e9.
    Giga,
    /// M, 1e6.
    Mega,
    /// k, 1e3.
    Kilo,
    /// No prefix.
    #[default]
    None,
    /// m, 1e-3.
    Milli,
    /// u or µ, 1e-6.
    Micro,
    /// n, 1e-9.
    Nano,
    /// p, 1e-12.
    Pico,
    /// f, 1e-15.
    Femto,
}

impl MetricPrefix {
    /// Multiplier that converts a prefixed magnitude into SI base units.
    pub fn factor(self) -> f64 {
        match self {
            Self::Tera => 1e12,
            Self::Giga => 1e9,
            Self::Mega => 1e6,
            Self::Kilo => 1e3,
            Self::None => 1.0,
            Self::Milli => 1e-3,
            Self::Micro => 1e-6,
            Self::Nano => 1e-9,
            Self::Pico => 1e-12,
            Self::Femto => 1e-15,
        }
    }

    /// Maps a prefix letter to its prefix.
    ///
    /// Letters are case-insensitive except for `m` (milli) and `M` (mega),
    /// which differ only by case. Both the micro sign `µ` (U+00B5) and the
    /// Greek small letter mu `μ` (U+03BC) are accepted for micro.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'M' => Some(Self::Mega),
            'm' => Some(Self::Milli),
            'µ' | 'μ' => Some(Self::Micro),
            other => match other.to_ascii_lowercase() {
                't' => Some(Self::Tera),
                'g' => Some(Self::Giga),
                'k' => Some(Self::Kilo),
                'u' => Some(Self::Micro),
                'n' => Some(Self::Nano),
                'p' => Some(Self::Pico),
                'f' => Some(Self::Femto),
                _ => None,
            },
        }
    }

    /// Canonical symbol, or an empty string for [`MetricPrefix::None`].
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Tera => "T",
            Self::Giga => "G",
            Self::Mega => "M",
            Self::Kilo => "k",
            Self::None => "",
            Self::Milli => "m",
            Self::Micro => "u",
            Self::Nano => "n",
            Self::Pico => "p",
            Self::Femto => "f",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_letters() {
        assert_eq!(MetricPrefix::from_symbol('K'), Some(MetricPrefix::Kilo));
        assert_eq!(MetricPrefix::from_symbol('U'), Some(MetricPrefix::Micro));
        assert_eq!(MetricPrefix::from_symbol('t'), Some(MetricPrefix::Tera));
        assert_eq!(MetricPrefix::from_symbol('P'), Some(MetricPrefix::Pico));
    }

    #[test]
    fn test_mega_and_milli_distinguished_by_case() {
        assert_eq!(MetricPrefix::from_symbol('M'), Some(MetricPrefix::Mega));
        assert_eq!(MetricPrefix::from_symbol('m'), Some(MetricPrefix::Milli));
    }

    #[test]
    fn test_micro_sign_variants() {
        assert_eq!(MetricPrefix::from_symbol('µ'), Some(MetricPrefix::Micro));
        assert_eq!(MetricPrefix::from_symbol('μ'), Some(MetricPrefix::Micro));
    }

    #[test]
    fn test_unknown_letter() {
        assert_eq!(MetricPrefix::from_symbol('x'), None);
        assert_eq!(MetricPrefix::from_symbol('W'), None);
    }

    #[test]
    fn test_symbol_round_trips_through_lookup() {
        for prefix in [
            MetricPrefix::Tera,
            MetricPrefix::Giga,
            MetricPrefix::Mega,
            MetricPrefix::Kilo,
            MetricPrefix::Milli,
            MetricPrefix::Micro,
            MetricPrefix::Nano,
            MetricPrefix::Pico,
            MetricPrefix::Femto,
        ] {
            let symbol = prefix.symbol().chars().next().unwrap();
            assert_eq!(MetricPrefix::from_symbol(symbol), Some(prefix));
        }
    }
}
