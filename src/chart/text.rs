//! Terminal bar chart
//!
//! Proportional Unicode bars for the CLI, one line per non-zero category
//! with the rounded kg value and share of the total. The "tooltip" content
//! of the SVG chart is simply inlined on each line here.

use crate::estimator::CarbonFootprint;

/// Width of the longest bar in characters
const BAR_WIDTH: usize = 30;

const CHART_TITLE: &str = "Annual CO₂ Emissions by Category";

/// Terminal bar-chart renderer
pub struct TextChart;

impl TextChart {
    /// Render the footprint breakdown as plain text.
    ///
    /// Rebuilt in full on every call, like the SVG renderer.
    pub fn render(footprint: &CarbonFootprint) -> String {
        let bars: Vec<_> = footprint
            .categories()
            .into_iter()
            .filter(|(_, value)| *value > 0.0)
            .collect();
        let max_value = bars
            .iter()
            .map(|(_, value)| *value)
            .fold(0.0_f64, f64::max);

        let mut out = String::with_capacity(512);
        out.push_str(CHART_TITLE);
        out.push('\n');
        out.push('\n');

        for (category, value) in &bars {
            let filled = (value / max_value * BAR_WIDTH as f64).round() as usize;
            let label = format!("{} {}", category.icon(), category.display_name());

            out.push_str(&format!(
                "{:<14} {:<width$} {} kg ({}%)\n",
                label,
                "█".repeat(filled.max(1)),
                value,
                footprint.percent_of_total(*value),
                width = BAR_WIDTH
            ));
        }

        out.push('\n');
        out.push_str(&format!(
            "Total: {} kg CO₂/year (≈ {} trees to offset)\n",
            footprint.total,
            footprint.trees_equivalent()
        ));

        out
    }
}
