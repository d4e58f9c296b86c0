//! Tip Generator - evaluates the rule table and assembles the recommendation
//!
//! Runs every rule independently, ranks the candidates by estimated savings,
//! and surfaces at most `MAX_TIPS`. The headline numbers (potential savings,
//! percent reduction) are computed from the surfaced tips only.

use crate::estimator::CarbonFootprint;
use crate::inputs::UserInputs;
use crate::tips::rules::RULES;
use crate::tips::types::{Recommendation, Tip};
use smallvec::SmallVec;

/// Maximum number of tips surfaced per calculation
pub const MAX_TIPS: usize = 6;

/// Generate ranked reduction tips for one calculation.
///
/// Pure and total, like the estimator: deterministic over the documented
/// input domain with no failure path. The returned list is sorted by
/// `savings_kg` descending; ties keep rule-table order (stable sort).
pub fn recommend(inputs: &UserInputs, footprint: &CarbonFootprint) -> Recommendation {
    // Every rule sees the same inputs/footprint pair; several may fire
    let mut candidates: SmallVec<[Tip; 10]> = SmallVec::new();
    for rule in RULES {
        if (rule.applies)(inputs, footprint) {
            candidates.push((rule.build)(inputs, footprint));
        }
    }

    candidates.sort_by(|a, b| b.savings_kg.total_cmp(&a.savings_kg));
    candidates.truncate(MAX_TIPS);

    let tips: Vec<Tip> = candidates.into_vec();
    let potential_savings_kg: f64 = tips.iter().map(|tip| tip.savings_kg).sum();
    let reduction_percent = footprint.percent_of_total(potential_savings_kg);

    Recommendation {
        tips,
        potential_savings_kg,
        reduction_percent,
    }
}
