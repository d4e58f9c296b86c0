use crate::session::Calculation;

/// Markdown formatter for calculation reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a calculation as markdown
    pub fn format(calculation: &Calculation) -> String {
        let footprint = &calculation.footprint;
        let recommendation = &calculation.recommendation;
        let mut md = String::with_capacity(2048);

        // Headline numbers
        md.push_str("# Carbon Footprint Report\n\n");
        md.push_str(&format!(
            "**Annual CO₂ Emissions:** {} kg\n\n",
            footprint.total
        ));
        md.push_str(&format!(
            "🌳 Equivalent to {} trees needed annually\n\n",
            footprint.trees_equivalent()
        ));

        // Inputs
        md.push_str("## Your Inputs\n\n");
        md.push_str("| Field | Value |\n");
        md.push_str("|-------|-------|\n");
        md.push_str(&format!(
            "| {} | {} |\n",
            calculation.inputs.electricity_unit.input_label(),
            calculation.inputs.electricity_usage
        ));
        md.push_str(&format!(
            "| Weekly Driving Distance (km) | {} |\n",
            calculation.inputs.driving_distance
        ));
        md.push_str(&format!(
            "| Diet Type | {} |\n\n",
            calculation.inputs.diet_type.display_name()
        ));

        // Breakdown
        md.push_str("## Emissions Breakdown\n\n");
        md.push_str("| Category | Annual Emissions | Share |\n");
        md.push_str("|----------|------------------|-------|\n");
        for (category, value) in footprint.categories() {
            md.push_str(&format!(
                "| {} {} | {} kg | {}% |\n",
                category.icon(),
                category.display_name(),
                value,
                footprint.percent_of_total(value)
            ));
        }
        md.push('\n');

        // Tips
        md.push_str("## Personalized Reduction Tips\n\n");
        md.push_str(&format!(
            "**Potential Impact:** {} kg CO₂ ({}% reduction)\n\n",
            recommendation.potential_savings_kg, recommendation.reduction_percent
        ));

        for (i, tip) in recommendation.tips.iter().enumerate() {
            md.push_str(&format!(
                "### {}. {} [{}]\n\n",
                i + 1,
                tip.title,
                tip.difficulty
            ));
            md.push_str(&format!("{}  \n", tip.description));
            md.push_str(&format!("*{}*\n\n", tip.impact));
        }

        // Motivation footer
        md.push_str("---\n\n");
        md.push_str(
            "**Every small action counts!** Start with the easy changes and gradually \
             work towards the bigger ones.\n",
        );

        md
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
    fn test_format_basic() {
        let md = MarkdownFormatter::format(&sample());

        assert!(md.contains("# Carbon Footprint Report"));
        assert!(md.contains("**Annual CO₂ Emissions:** 4441 kg"));
        assert!(md.contains("Equivalent to 202 trees needed annually"));
        assert!(md.contains("## Emissions Breakdown"));
        assert!(md.contains("| ⚡ Electricity | 1968 kg | 44% |"));
        assert!(md.contains("## Personalized Reduction Tips"));
    }

    #[test]
    fn test_tips_are_numbered_and_badged() {
        let md = MarkdownFormatter::format(&sample());

        assert!(md.contains("### 1. Energy-Efficient Appliances [Hard]"));
        assert!(md.contains("*Save 492 kg CO₂ annually*"));
    }

    #[test]
    fn test_inputs_section_uses_unit_label() {
        let md = MarkdownFormatter::format(&sample());
        assert!(md.contains("| Monthly Electricity Usage (kWh) | 200 |"));
        assert!(md.contains("| Diet Type | Non-Vegetarian |"));
    }
}
