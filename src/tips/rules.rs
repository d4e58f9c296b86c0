//! Tip rule table
//!
//! Candidate generation is a fixed, ordered list of threshold-gated rules.
//! Each rule is evaluated independently against the current inputs and
//! footprint (non-exclusive: several may fire at once), which keeps every
//! rule testable on its own. The generator sorts and truncates afterwards;
//! table order is only the tie-break.

use crate::estimator::{CarbonFootprint, Category, KG_CO2_PER_TREE_PER_YEAR};
use crate::inputs::{DietType, UserInputs};
use crate::tips::types::{Difficulty, Tip};

/// Electricity footprint above which the cheap electricity tips fire (kg CO₂/year)
const HIGH_ELECTRICITY_KG: f64 = 500.0;

/// Electricity footprint above which an appliance upgrade is worth suggesting
const VERY_HIGH_ELECTRICITY_KG: f64 = 1000.0;

/// Transport footprint above which mode-shift tips fire (kg CO₂/year)
const HIGH_TRANSPORT_KG: f64 = 300.0;

/// Weekly driving distance above which commuting is worth attacking (km)
const LONG_COMMUTE_KM: f64 = 100.0;

/// One candidate rule: a gate and a tip builder
pub struct TipRule {
    pub applies: fn(&UserInputs, &CarbonFootprint) -> bool,
    pub build: fn(&UserInputs, &CarbonFootprint) -> Tip,
}

/// All candidate rules, in fixed evaluation order
pub static RULES: &[TipRule] = &[
    TipRule {
        applies: high_electricity,
        build: switch_to_led_bulbs,
    },
    TipRule {
        applies: high_electricity,
        build: unplug_electronics,
    },
    TipRule {
        applies: very_high_electricity,
        build: energy_efficient_appliances,
    },
    TipRule {
        applies: high_transport,
        build: use_public_transport,
    },
    TipRule {
        applies: high_transport,
        build: combine_errands,
    },
    TipRule {
        applies: long_commute,
        build: work_from_home,
    },
    TipRule {
        applies: non_veg_diet,
        build: meatless_mondays,
    },
    TipRule {
        applies: non_veg_diet,
        build: choose_local_seasonal,
    },
    TipRule {
        applies: mixed_diet,
        build: reduce_meat_portions,
    },
    TipRule {
        applies: always,
        build: plant_trees,
    },
];

// ============================================================================
// Gates
// ============================================================================

fn high_electricity(_inputs: &UserInputs, footprint: &CarbonFootprint) -> bool {
    footprint.electricity > HIGH_ELECTRICITY_KG
}

fn very_high_electricity(_inputs: &UserInputs, footprint: &CarbonFootprint) -> bool {
    footprint.electricity > VERY_HIGH_ELECTRICITY_KG
}

fn high_transport(_inputs: &UserInputs, footprint: &CarbonFootprint) -> bool {
    footprint.transport > HIGH_TRANSPORT_KG
}

fn long_commute(inputs: &UserInputs, _footprint: &CarbonFootprint) -> bool {
    inputs.driving_distance > LONG_COMMUTE_KM
}

fn non_veg_diet(inputs: &UserInputs, _footprint: &CarbonFootprint) -> bool {
    inputs.diet_type == DietType::NonVeg
}

fn mixed_diet(inputs: &UserInputs, _footprint: &CarbonFootprint) -> bool {
    inputs.diet_type == DietType::Mixed
}

fn always(_inputs: &UserInputs, _footprint: &CarbonFootprint) -> bool {
    true
}

// ============================================================================
// Builders
// ============================================================================
//
// Savings are rounded to whole kg at generation time; the impact line is the
// user-facing phrasing of the same number.

fn save_annually(savings_kg: f64) -> String {
    format!("Save {} kg CO₂ annually", savings_kg)
}

fn switch_to_led_bulbs(_inputs: &UserInputs, footprint: &CarbonFootprint) -> Tip {
    let savings_kg = (footprint.electricity * 0.15).round();
    Tip {
        title: "Switch to LED Bulbs".to_string(),
        description: "Replace incandescent bulbs with LED bulbs to reduce electricity consumption by up to 80%".to_string(),
        impact: save_annually(savings_kg),
        savings_kg,
        difficulty: Difficulty::Easy,
        category: Category::Electricity,
    }
}

fn unplug_electronics(_inputs: &UserInputs, footprint: &CarbonFootprint) -> Tip {
    let savings_kg = (footprint.electricity * 0.1).round();
    Tip {
        title: "Unplug Electronics".to_string(),
        description: "Unplug devices when not in use to eliminate phantom power consumption"
            .to_string(),
        impact: save_annually(savings_kg),
        savings_kg,
        difficulty: Difficulty::Easy,
        category: Category::Electricity,
    }
}

fn energy_efficient_appliances(_inputs: &UserInputs, footprint: &CarbonFootprint) -> Tip {
    let savings_kg = (footprint.electricity * 0.25).round();
    Tip {
        title: "Energy-Efficient Appliances".to_string(),
        description: "Upgrade to 5-star rated appliances for significant energy savings"
            .to_string(),
        impact: save_annually(savings_kg),
        savings_kg,
        difficulty: Difficulty::Hard,
        category: Category::Electricity,
    }
}

fn use_public_transport(_inputs: &UserInputs, footprint: &CarbonFootprint) -> Tip {
    let savings_kg = (footprint.transport * 0.2).round();
    Tip {
        title: "Use Public Transport".to_string(),
        description: "Replace 20% of car trips with public transport or carpooling".to_string(),
        impact: save_annually(savings_kg),
        savings_kg,
        difficulty: Difficulty::Medium,
        category: Category::Transport,
    }
}

fn combine_errands(_inputs: &UserInputs, footprint: &CarbonFootprint) -> Tip {
    let savings_kg = (footprint.transport * 0.15).round();
    Tip {
        title: "Combine Errands".to_string(),
        description: "Plan trips efficiently to reduce total driving distance by 15%".to_string(),
        impact: save_annually(savings_kg),
        savings_kg,
        difficulty: Difficulty::Easy,
        category: Category::Transport,
    }
}

fn work_from_home(inputs: &UserInputs, _footprint: &CarbonFootprint) -> Tip {
    // 30% of the raw annual driving footprint, from the distance input
    // rather than the rounded transport figure
    let savings_kg = (inputs.driving_distance * 52.0 * 0.2 * 0.3).round();
    Tip {
        title: "Work from Home".to_string(),
        description: "Work from home 1-2 days per week to reduce commuting".to_string(),
        impact: save_annually(savings_kg),
        savings_kg,
        difficulty: Difficulty::Medium,
        category: Category::Transport,
    }
}

fn meatless_mondays(_inputs: &UserInputs, _footprint: &CarbonFootprint) -> Tip {
    // One vegetarian day per week: the veg/non-veg daily gap × 52
    let savings_kg: f64 = ((2.5 - 1.7) * 52.0_f64).round();
    Tip {
        title: "Meatless Mondays".to_string(),
        description: "Go vegetarian one day per week to reduce your food carbon footprint"
            .to_string(),
        impact: save_annually(savings_kg),
        savings_kg,
        difficulty: Difficulty::Easy,
        category: Category::Food,
    }
}

fn choose_local_seasonal(_inputs: &UserInputs, footprint: &CarbonFootprint) -> Tip {
    let savings_kg = (footprint.food * 0.1).round();
    Tip {
        title: "Choose Local & Seasonal".to_string(),
        description: "Buy locally grown, seasonal produce to reduce transportation emissions"
            .to_string(),
        impact: save_annually(savings_kg),
        savings_kg,
        difficulty: Difficulty::Medium,
        category: Category::Food,
    }
}

fn reduce_meat_portions(_inputs: &UserInputs, _footprint: &CarbonFootprint) -> Tip {
    // 30% of the mixed/veg annual gap
    let savings_kg: f64 = ((2.1 - 1.7) * 365.0 * 0.3_f64).round();
    Tip {
        title: "Reduce Meat Portions".to_string(),
        description: "Reduce meat consumption by 30% and increase plant-based meals".to_string(),
        impact: save_annually(savings_kg),
        savings_kg,
        difficulty: Difficulty::Medium,
        category: Category::Food,
    }
}

fn plant_trees(_inputs: &UserInputs, footprint: &CarbonFootprint) -> Tip {
    // Trees are suggested in units of one per ~220 kg (a tenth of the
    // footprint's tree equivalence), so the offset is a whole-tree multiple.
    let trees = (footprint.total / KG_CO2_PER_TREE_PER_YEAR / 10.0).ceil();
    let savings_kg = KG_CO2_PER_TREE_PER_YEAR * trees;
    Tip {
        title: "Plant Trees".to_string(),
        description: "Plant native trees in your area - each tree absorbs ~22kg CO₂ annually"
            .to_string(),
        impact: format!("Offset {} kg CO₂ with {} trees", savings_kg, trees),
        savings_kg,
        difficulty: Difficulty::Medium,
        category: Category::Electricity,
    }
}
