use crate::session::Calculation;

/// JSON formatter for calculation reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a calculation as pretty-printed JSON
    pub fn format(calculation: &Calculation) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(calculation)
    }

    /// Format a calculation as compact JSON (no whitespace)
    pub fn format_compact(calculation: &Calculation) -> Result<String, serde_json::Error> {
        serde_json::to_string(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{DietType, ElectricityUnit, UserInputs};

    fn sample() -> Calculation {
        Calculation::run(UserInputs {
            electricity_usage: 200.0,
            electricity_unit: ElectricityUnit::Kwh,
            driving_distance: 150.0,
            diet_type: DietType::NonVeg,
        })
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&sample()).unwrap();

        assert!(json.contains("\"total\": 4441.0"));
        assert!(json.contains("\"diet_type\": \"non-veg\""));
        assert!(json.contains("\"tips\""));
    }

    #[test]
    fn test_format_round_trips() {
        let original = sample();
        let json = JsonFormatter::format(&original).unwrap();
        let back: Calculation = serde_json::from_str(&json).unwrap();

        assert_eq!(back.footprint, original.footprint);
        assert_eq!(back.recommendation.tips.len(), original.recommendation.tips.len());
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&sample()).unwrap();
        assert!(!json.contains("\n  "));
    }
}
