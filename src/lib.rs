//! Carbon Footprint Calculator
//!
//! Estimates a household's annual CO₂ emissions from electricity, transport,
//! and diet inputs, generates ranked reduction tips, and renders the
//! breakdown as bar charts and reports.
//!
//! - `inputs`: Typed input record and unit/diet tags
//! - `categories`: Per-category emission factors and raw annual formulas
//! - `estimator`: Footprint computation (rounded categories, summed total)
//! - `tips`: Rule-driven reduction tips ranked by estimated savings
//! - `chart`: Bar-chart presenters (SVG and terminal text)
//! - `report`: Markdown / JSON / HTML calculation reports
//! - `session`: Caller-owned session state around the pure core

pub mod categories;
pub mod chart;
pub mod estimator;
pub mod inputs;
pub mod report;
pub mod session;
pub mod tips;

// Re-export commonly used types
pub use estimator::{estimate, CarbonFootprint, Category};
pub use inputs::{DietType, ElectricityUnit, UserInputs};
pub use session::{Calculation, CalculatorSession};
pub use tips::{recommend, Difficulty, Recommendation, Tip};
