//! Footprint Estimator - Main coordinator over the category modules
//!
//! Maps one input record to a complete annual footprint. Pure and total:
//! deterministic, no side effects, and no failure path over the documented
//! domain (non-negative numbers, enumerated tags). Callers sanitize inputs
//! before this runs; the estimator performs no validation.

use crate::categories::{electricity, food, transport};
use crate::inputs::UserInputs;
use serde::{Deserialize, Serialize};

/// Annual CO₂ absorbed by one mature tree (kg), used for offset equivalences
pub const KG_CO2_PER_TREE_PER_YEAR: f64 = 22.0;

/// Emission category of a footprint component or a reduction tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electricity,
    Transport,
    Food,
}

impl Category {
    /// Human-readable name for chart labels and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Transport => "Transport",
            Category::Food => "Food",
        }
    }

    /// Display icon shown next to the category name
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Electricity => "⚡",
            Category::Transport => "🚗",
            Category::Food => "🍽️",
        }
    }

    /// Chart bar color for this category
    pub fn color(&self) -> &'static str {
        match self {
            Category::Electricity => "#f59e0b",
            Category::Transport => "#3b82f6",
            Category::Food => "#f97316",
        }
    }
}

/// Annual footprint result (kg CO₂/year, whole-kg values)
///
/// Recomputed wholesale on each trigger and never partially updated. All
/// four fields are non-negative whenever the inputs are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonFootprint {
    pub electricity: f64,
    pub transport: f64,
    pub food: f64,
    /// Sum of the three already-rounded category values (see `estimate`)
    pub total: f64,
}

impl CarbonFootprint {
    /// Category values in fixed display order
    pub fn categories(&self) -> [(Category, f64); 3] {
        [
            (Category::Electricity, self.electricity),
            (Category::Transport, self.transport),
            (Category::Food, self.food),
        ]
    }

    /// Share of the total for one component, as a whole percentage.
    /// Zero-total footprints report 0% everywhere.
    pub fn percent_of_total(&self, value: f64) -> f64 {
        if self.total > 0.0 {
            (value / self.total * 100.0).round()
        } else {
            0.0
        }
    }

    /// How many trees it would take to absorb this footprint in a year
    pub fn trees_equivalent(&self) -> f64 {
        (self.total / KG_CO2_PER_TREE_PER_YEAR).round()
    }
}

/// Compute the annual footprint for one input record.
///
/// Each category is rounded to the nearest whole kg independently and the
/// total is the sum of the rounded values. The total can therefore differ
/// from `round(raw sum)` by a kilogram or two; that quirk is part of the
/// contract and must not be "fixed" by rounding the sum instead.
pub fn estimate(inputs: &UserInputs) -> CarbonFootprint {
    let electricity =
        electricity::annual_emissions(inputs.electricity_usage, inputs.electricity_unit).round();
    let transport = transport::annual_emissions(inputs.driving_distance).round();
    let food = food::annual_emissions(inputs.diet_type).round();

    let total = electricity + transport + food;

    CarbonFootprint {
        electricity,
        transport,
        food,
        total,
    }
}
