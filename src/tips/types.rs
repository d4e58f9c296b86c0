//! Reduction tip types
//!
//! Plain display records produced by the recommender. Tips are generated
//! fresh on each calculation and never mutated afterwards.

use crate::estimator::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How hard a tip is to adopt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Badge background/text colors for HTML rendering (bg, fg)
    pub fn badge_colors(&self) -> (&'static str, &'static str) {
        match self {
            Difficulty::Easy => ("#dcfce7", "#166534"),
            Difficulty::Medium => ("#fef9c3", "#854d0e"),
            Difficulty::Hard => ("#fee2e2", "#991b1b"),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// One recommended behavior change with its estimated annual savings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub description: String,
    /// Pre-formatted impact line, e.g. "Save 492 kg CO₂ annually"
    pub impact: String,
    /// Estimated annual savings in whole kg CO₂
    pub savings_kg: f64,
    pub difficulty: Difficulty,
    pub category: Category,
}

/// The surfaced tip list plus its headline numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// At most `MAX_TIPS` tips, sorted by savings descending
    pub tips: Vec<Tip>,
    /// Sum of the surfaced tips' savings only (not all candidates)
    pub potential_savings_kg: f64,
    /// Whole-percent reduction the surfaced tips represent (0 for a zero total)
    pub reduction_percent: f64,
}
