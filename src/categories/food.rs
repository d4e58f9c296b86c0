//! CATEGORY: FOOD
//!
//! Converts the household diet classification into annual kg CO₂ using fixed
//! per-day factors. Unlike the other categories this takes no magnitude
//! input; the diet tag alone selects the factor.

use crate::inputs::DietType;

/// Daily footprint of a vegetarian diet (kg CO₂/day)
pub const VEG_KG_CO2_PER_DAY: f64 = 1.7;

/// Daily footprint of a non-vegetarian diet (kg CO₂/day)
pub const NON_VEG_KG_CO2_PER_DAY: f64 = 2.5;

/// Daily footprint of a mixed diet (kg CO₂/day)
pub const MIXED_KG_CO2_PER_DAY: f64 = 2.1;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Per-day emission factor for a diet type
pub fn daily_factor(diet: DietType) -> f64 {
    match diet {
        DietType::Veg => VEG_KG_CO2_PER_DAY,
        DietType::NonVeg => NON_VEG_KG_CO2_PER_DAY,
        DietType::Mixed => MIXED_KG_CO2_PER_DAY,
    }
}

/// Raw annual food emissions in kg CO₂ (unrounded)
pub fn annual_emissions(diet: DietType) -> f64 {
    daily_factor(diet) * DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_factors_round_to_reference_values() {
        assert_eq!(annual_emissions(DietType::Veg).round(), 621.0);
        assert_eq!(annual_emissions(DietType::Mixed).round(), 767.0);
        assert_eq!(annual_emissions(DietType::NonVeg).round(), 913.0);
    }

    #[test]
    fn test_factor_ordering() {
        // veg < mixed < non-veg, always
        assert!(daily_factor(DietType::Veg) < daily_factor(DietType::Mixed));
        assert!(daily_factor(DietType::Mixed) < daily_factor(DietType::NonVeg));
    }
}
