//! CATEGORY: ELECTRICITY
//!
//! Converts household electricity usage into annual kg CO₂ via a fixed grid
//! emission factor. Three billing units are supported:
//!   - `kwh`:    monthly consumption, annualized ×12
//!   - `rupees`: monthly bill amount, converted to kWh at a fixed price
//!               estimate, annualized ×12
//!   - `bulbs`:  a bulb count (not a monthly figure, so no ×12); each bulb
//!               contributes a fixed annual kWh draw

use crate::inputs::ElectricityUnit;

/// Grid emission factor: kg CO₂ per kWh (regional average estimate)
pub const KG_CO2_PER_KWH: f64 = 0.82;

/// Price conversion estimate: kWh purchased per rupee
pub const KWH_PER_RUPEE: f64 = 0.15;

/// Annual kWh drawn by one bulb: 5 W × 30 days × 12 h/day, in kWh
pub const ANNUAL_KWH_PER_BULB: f64 = 5.0 * 30.0 * 12.0 / 1000.0;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Raw annual electricity emissions in kg CO₂ (unrounded).
///
/// `usage` is interpreted per `unit`; see the module docs for the three
/// interpretations. Inputs are assumed non-negative.
pub fn annual_emissions(usage: f64, unit: ElectricityUnit) -> f64 {
    match unit {
        ElectricityUnit::Kwh => usage * MONTHS_PER_YEAR * KG_CO2_PER_KWH,
        ElectricityUnit::Rupees => usage * MONTHS_PER_YEAR * KG_CO2_PER_KWH * KWH_PER_RUPEE,
        ElectricityUnit::Bulbs => usage * ANNUAL_KWH_PER_BULB * KG_CO2_PER_KWH,
    }
}
