//! Reduction tip modules
//!
//! Rule-driven recommendation: a declarative candidate table (`rules`),
//! the ranking/truncation pass (`generator`), and the display records
//! (`types`).

pub mod generator;
pub mod rules;
pub mod types;

// Re-export the recommender surface
pub use generator::{recommend, MAX_TIPS};
pub use rules::{TipRule, RULES};
pub use types::{Difficulty, Recommendation, Tip};
