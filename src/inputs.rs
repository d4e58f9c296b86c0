//! User Input Types
//!
//! Typed representation of the lifestyle form: electricity usage (in one of
//! three billing units), weekly driving distance, and diet type.
//!
//! The numeric fields are caller-sanitized: the calculator core treats
//! negative values as out of domain, so the boundary (CLI parsing, form
//! handling) clamps them to zero before construction. `FromStr` on the two
//! tag enums is the only fallible surface in this module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Parse error for input tags and numbers arriving as strings
#[derive(Debug, Error, PartialEq)]
pub enum ParseInputError {
    #[error("unknown electricity unit '{0}' (expected kwh, rupees, or bulbs)")]
    UnknownElectricityUnit(String),

    #[error("unknown diet type '{0}' (expected veg, non-veg, or mixed)")]
    UnknownDietType(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

/// Billing unit the electricity usage figure is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectricityUnit {
    /// Monthly consumption in kWh ("units" on an Indian bill)
    Kwh,
    /// Monthly bill amount in rupees
    Rupees,
    /// Count of light bulbs in the household (not a monthly figure)
    Bulbs,
}

impl ElectricityUnit {
    /// Canonical string tag, matching the serialized form
    pub fn as_tag(&self) -> &'static str {
        match self {
            ElectricityUnit::Kwh => "kwh",
            ElectricityUnit::Rupees => "rupees",
            ElectricityUnit::Bulbs => "bulbs",
        }
    }

    /// Form label shown next to the usage field for this unit
    pub fn input_label(&self) -> &'static str {
        match self {
            ElectricityUnit::Kwh => "Monthly Electricity Usage (kWh)",
            ElectricityUnit::Rupees => "Monthly Electricity Bill (₹)",
            ElectricityUnit::Bulbs => "Number of Light Bulbs",
        }
    }
}

impl fmt::Display for ElectricityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for ElectricityUnit {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kwh" => Ok(ElectricityUnit::Kwh),
            "rupees" => Ok(ElectricityUnit::Rupees),
            "bulbs" => Ok(ElectricityUnit::Bulbs),
            other => Err(ParseInputError::UnknownElectricityUnit(other.to_string())),
        }
    }
}

/// Household diet classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietType {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
    #[serde(rename = "mixed")]
    Mixed,
}

impl DietType {
    /// Canonical string tag, matching the serialized form
    pub fn as_tag(&self) -> &'static str {
        match self {
            DietType::Veg => "veg",
            DietType::NonVeg => "non-veg",
            DietType::Mixed => "mixed",
        }
    }

    /// Human-readable name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            DietType::Veg => "Vegetarian",
            DietType::NonVeg => "Non-Vegetarian",
            DietType::Mixed => "Mixed Diet",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for DietType {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veg" => Ok(DietType::Veg),
            "non-veg" => Ok(DietType::NonVeg),
            "mixed" => Ok(DietType::Mixed),
            other => Err(ParseInputError::UnknownDietType(other.to_string())),
        }
    }
}

/// One complete input record, immutable per calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInputs {
    pub electricity_usage: f64,
    pub electricity_unit: ElectricityUnit,
    /// Weekly driving distance in km
    pub driving_distance: f64,
    pub diet_type: DietType,
}

impl Default for UserInputs {
    fn default() -> Self {
        Self {
            electricity_usage: 0.0,
            electricity_unit: ElectricityUnit::Kwh,
            driving_distance: 0.0,
            diet_type: DietType::Mixed,
        }
    }
}

/// Clamp a raw numeric field into the calculator's domain.
///
/// NaN, infinities, and negatives all collapse to zero, matching the form
/// behavior of treating unparseable or blank entries as no usage.
pub fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a numeric CLI/form field, clamping into the non-negative domain
pub fn parse_non_negative(s: &str) -> Result<f64, ParseInputError> {
    let value: f64 = s
        .parse()
        .map_err(|_| ParseInputError::InvalidNumber(s.to_string()))?;
    Ok(clamp_non_negative(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_tags_round_trip() {
        for unit in [
            ElectricityUnit::Kwh,
            ElectricityUnit::Rupees,
            ElectricityUnit::Bulbs,
        ] {
            let parsed: ElectricityUnit = unit.as_tag().parse().unwrap();
            assert_eq!(parsed, unit);
        }
    }

    #[test]
    fn test_diet_tags_round_trip() {
        for diet in [DietType::Veg, DietType::NonVeg, DietType::Mixed] {
            let parsed: DietType = diet.as_tag().parse().unwrap();
            assert_eq!(parsed, diet);
        }
    }

    #[test]
    fn test_unknown_tags_rejected() {
        assert_eq!(
            "solar".parse::<ElectricityUnit>(),
            Err(ParseInputError::UnknownElectricityUnit("solar".to_string()))
        );
        assert_eq!(
            "vegan".parse::<DietType>(),
            Err(ParseInputError::UnknownDietType("vegan".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_hyphenated_diet_tag() {
        let json = serde_json::to_string(&DietType::NonVeg).unwrap();
        assert_eq!(json, "\"non-veg\"");

        let back: DietType = serde_json::from_str("\"non-veg\"").unwrap();
        assert_eq!(back, DietType::NonVeg);
    }

    #[test]
    fn test_inputs_serde_round_trip() {
        let inputs = UserInputs {
            electricity_usage: 200.0,
            electricity_unit: ElectricityUnit::Rupees,
            driving_distance: 150.0,
            diet_type: DietType::NonVeg,
        };

        let json = serde_json::to_string(&inputs).unwrap();
        assert!(json.contains("\"electricity_unit\":\"rupees\""));
        assert!(json.contains("\"diet_type\":\"non-veg\""));

        let back: UserInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inputs);
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(clamp_non_negative(42.5), 42.5);
        assert_eq!(clamp_non_negative(0.0), 0.0);
        assert_eq!(clamp_non_negative(-3.0), 0.0);
        assert_eq!(clamp_non_negative(f64::NAN), 0.0);
        assert_eq!(clamp_non_negative(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("120.5").unwrap(), 120.5);
        assert_eq!(parse_non_negative("-7").unwrap(), 0.0);
        assert!(parse_non_negative("twelve").is_err());
    }

    #[test]
    fn test_input_labels_track_unit() {
        assert_eq!(
            ElectricityUnit::Kwh.input_label(),
            "Monthly Electricity Usage (kWh)"
        );
        assert_eq!(
            ElectricityUnit::Bulbs.input_label(),
            "Number of Light Bulbs"
        );
    }
}
