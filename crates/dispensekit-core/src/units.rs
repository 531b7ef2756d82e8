//! Measurement units declared by imported coordinate files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coordinate units of a drill file (millimeters or inches)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    /// Millimeters (metric)
    MM,
    /// Inches (imperial)
    INCH,
}

impl Units {
    /// Multiplier that converts a value in these units to millimeters
    pub fn factor_to_mm(&self) -> f64 {
        match self {
            Units::MM => 1.0,
            Units::INCH => 25.4,
        }
    }

    /// Convert a value expressed in these units to millimeters
    pub fn to_mm(&self, value: f64) -> f64 {
        value * self.factor_to_mm()
    }
}

impl Default for Units {
    fn default() -> Self {
        Units::MM
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::MM => write!(f, "mm"),
            Units::INCH => write!(f, "in"),
        }
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm" | "metric" => Ok(Units::MM),
            "in" | "inch" | "imperial" => Ok(Units::INCH),
            _ => Err(format!("Unknown units: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_to_millimeters() {
        assert_eq!(Units::MM.to_mm(1.5), 1.5);
        assert_eq!(Units::INCH.to_mm(1.0), 25.4);
        assert_eq!(Units::INCH.to_mm(0.5), 12.7);
    }

    #[test]
    fn test_display() {
        assert_eq!(Units::MM.to_string(), "mm");
        assert_eq!(Units::INCH.to_string(), "in");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("mm".parse::<Units>(), Ok(Units::MM));
        assert_eq!("INCH".parse::<Units>(), Ok(Units::INCH));
        assert!("furlong".parse::<Units>().is_err());
    }
}
