//! Session State
//!
//! Caller-owned state for one interactive session: the current inputs and,
//! once a calculation has been explicitly triggered, the current result
//! pair. The estimator and recommender themselves stay pure; everything
//! stateful lives here so both remain unit-testable without any rendering
//! environment.

use crate::estimator::{estimate, CarbonFootprint};
use crate::inputs::UserInputs;
use crate::tips::{recommend, Recommendation};
use serde::{Deserialize, Serialize};

/// One completed calculation: the inputs it ran on, the footprint, and the
/// tips generated from it. Created whole, replaced whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculation {
    pub inputs: UserInputs,
    pub footprint: CarbonFootprint,
    pub recommendation: Recommendation,
}

impl Calculation {
    /// Run the estimator then the recommender over one input record,
    /// synchronously.
    pub fn run(inputs: UserInputs) -> Self {
        let footprint = estimate(&inputs);
        let recommendation = recommend(&inputs, &footprint);
        Self {
            inputs,
            footprint,
            recommendation,
        }
    }
}

/// Interactive calculator session.
///
/// "Has a calculation been run yet" is the presence of `current`; editing
/// the inputs drops it, so stale results can never be displayed against new
/// inputs.
#[derive(Debug, Clone, Default)]
pub struct CalculatorSession {
    inputs: UserInputs,
    current: Option<Calculation>,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &UserInputs {
        &self.inputs
    }

    /// Replace the inputs; any previous result no longer matches and is
    /// discarded.
    pub fn set_inputs(&mut self, inputs: UserInputs) {
        self.inputs = inputs;
        self.current = None;
    }

    pub fn is_calculated(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Calculation> {
        self.current.as_ref()
    }

    /// Explicit trigger: recompute and replace the whole result pair
    pub fn calculate(&mut self) -> &Calculation {
        self.current.insert(Calculation::run(self.inputs.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{DietType, ElectricityUnit};

    fn sample_inputs() -> UserInputs {
        UserInputs {
            electricity_usage: 200.0,
            electricity_unit: ElectricityUnit::Kwh,
            driving_distance: 150.0,
            diet_type: DietType::NonVeg,
        }
    }

    #[test]
    fn test_starts_uncalculated() {
        let session = CalculatorSession::new();
        assert!(!session.is_calculated());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_calculate_sets_result() {
        let mut session = CalculatorSession::new();
        session.set_inputs(sample_inputs());

        let calculation = session.calculate();
        assert_eq!(calculation.footprint.total, 4441.0);
        assert!(session.is_calculated());
    }

    #[test]
    fn test_editing_inputs_invalidates_result() {
        let mut session = CalculatorSession::new();
        session.set_inputs(sample_inputs());
        session.calculate();
        assert!(session.is_calculated());

        let mut edited = sample_inputs();
        edited.driving_distance = 80.0;
        session.set_inputs(edited);
        assert!(!session.is_calculated());
    }

    #[test]
    fn test_recalculation_replaces_result_wholesale() {
        let mut session = CalculatorSession::new();
        session.set_inputs(sample_inputs());
        let first_total = session.calculate().footprint.total;

        let mut edited = sample_inputs();
        edited.driving_distance = 0.0;
        session.set_inputs(edited);
        let second = session.calculate();

        assert!(second.footprint.total < first_total);
        assert_eq!(second.footprint.transport, 0.0);
        // The result pair is self-consistent: tips were generated from the
        // same footprint now held
        assert_eq!(second.inputs.driving_distance, 0.0);
    }

    #[test]
    fn test_calculation_run_is_pure_composition() {
        let a = Calculation::run(sample_inputs());
        let b = Calculation::run(sample_inputs());
        assert_eq!(a.footprint, b.footprint);
        assert_eq!(
            a.recommendation.potential_savings_kg,
            b.recommendation.potential_savings_kg
        );
    }
}
