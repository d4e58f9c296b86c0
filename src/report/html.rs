use crate::chart::SvgChart;
use crate::session::Calculation;

/// HTML formatter for calculation reports
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format a calculation as standalone HTML with embedded CSS and chart
    pub fn format(calculation: &Calculation) -> String {
        let footprint = &calculation.footprint;
        let recommendation = &calculation.recommendation;
        let mut html = String::with_capacity(8192);

        // HTML header with CSS
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<title>Carbon Footprint Report</title>\n");
        html.push_str("<style>\n");
        html.push_str("body { font-family: system-ui, sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; line-height: 1.6; }\n");
        html.push_str(".total { font-size: 2.5em; font-weight: bold; color: #1f2937; }\n");
        html.push_str(".subtitle { color: #6b7280; font-size: 1.1em; }\n");
        html.push_str(".trees { display: inline-block; border: 1px solid #059669; color: #059669; border-radius: 12px; padding: 2px 12px; margin-top: 8px; }\n");
        html.push_str("h1 { color: #1f2937; margin-bottom: 10px; }\n");
        html.push_str("h2 { color: #374151; border-bottom: 2px solid #ecf0f1; padding-bottom: 5px; margin-top: 30px; }\n");
        html.push_str(".tip { border-left: 4px solid #22c55e; background: #f9fafb; padding: 15px; margin: 15px 0; border-radius: 4px; }\n");
        html.push_str(".tip h3 { margin-top: 0; }\n");
        html.push_str(".badge { border-radius: 10px; padding: 1px 10px; font-size: 0.85em; margin-left: 8px; }\n");
        html.push_str(".impact { color: #15803d; font-weight: 500; }\n");
        html.push_str(".summary { background: #f0fdf4; border: 1px solid #bbf7d0; border-radius: 8px; padding: 15px; }\n");
        html.push_str(".footer { text-align: center; color: #374151; background: #eff6ff; border: 1px solid #bfdbfe; border-radius: 8px; padding: 15px; margin-top: 30px; }\n");
        html.push_str("</style>\n</head>\n<body>\n");

        // Headline numbers
        html.push_str("<h1>Carbon Footprint Report</h1>\n");
        html.push_str(&format!(
            "<p><span class=\"total\">{} kg</span><br>\n<span class=\"subtitle\">Annual CO₂ Emissions</span><br>\n\
             <span class=\"trees\">🌳 Equivalent to {} trees needed annually</span></p>\n",
            footprint.total,
            footprint.trees_equivalent()
        ));

        // Chart
        html.push_str("<h2>Emissions Breakdown</h2>\n");
        html.push_str(&SvgChart::render(footprint));

        // Tips
        html.push_str("<h2>Personalized Reduction Tips</h2>\n");
        html.push_str(&format!(
            "<div class=\"summary\"><strong>Potential Impact:</strong> by following these tips, \
             you could save {} kg CO₂ annually ({}% reduction).</div>\n",
            recommendation.potential_savings_kg, recommendation.reduction_percent
        ));

        for tip in &recommendation.tips {
            let (badge_bg, badge_fg) = tip.difficulty.badge_colors();
            html.push_str("<div class=\"tip\">\n");
            html.push_str(&format!(
                "<h3>{} {}<span class=\"badge\" style=\"background: {}; color: {};\">{}</span></h3>\n",
                tip.category.icon(),
                tip.title,
                badge_bg,
                badge_fg,
                tip.difficulty
            ));
            html.push_str(&format!("<p>{}</p>\n", tip.description));
            html.push_str(&format!("<p class=\"impact\">❤ {}</p>\n", tip.impact));
            html.push_str("</div>\n");
        }

        // Motivation footer
        html.push_str(
            "<div class=\"footer\"><strong>Every small action counts!</strong> Your commitment to \
             reducing carbon emissions helps protect our planet for future generations.</div>\n",
        );

        html.push_str("</body>\n</html>\n");
        html
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
    fn test_format_is_standalone_document() {
        let html = HtmlFormatter::format(&sample());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Carbon Footprint Report</title>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_embeds_svg_chart() {
        let html = HtmlFormatter::format(&sample());
        assert!(html.contains("<svg"));
        assert!(html.contains("Annual CO₂ Emissions by Category"));
    }

    #[test]
    fn test_tips_rendered_with_badges() {
        let html = HtmlFormatter::format(&sample());
        assert!(html.contains("Energy-Efficient Appliances"));
        assert!(html.contains("class=\"badge\""));
        assert!(html.contains("Save 492 kg CO₂ annually"));
    }
}
