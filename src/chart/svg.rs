//! SVG bar chart
//!
//! Standalone SVG document: one proportionally-scaled bar per non-zero
//! category, labeled with its rounded kg value and category icon/name, a
//! kg-labeled value axis, and native hover tooltips (`<title>` elements)
//! carrying the category name, value, and share of the total. Bars grow from
//! the baseline via a CSS animation on first paint.

use crate::estimator::CarbonFootprint;

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 300.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 60.0;
const MARGIN_LEFT: f64 = 60.0;

/// Inner-bar padding fraction of the band step
const BAND_PADDING: f64 = 0.3;

const TICK_COUNT: usize = 4;

const CHART_TITLE: &str = "Annual CO₂ Emissions by Category";

/// SVG bar-chart renderer
pub struct SvgChart;

impl SvgChart {
    /// Render the footprint breakdown as a complete SVG document.
    ///
    /// Every call rebuilds the chart from scratch; render again whenever the
    /// footprint changes. A zero-total footprint produces the chart frame
    /// with no bars.
    pub fn render(footprint: &CarbonFootprint) -> String {
        let chart_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let chart_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

        let bars: Vec<_> = footprint
            .categories()
            .into_iter()
            .filter(|(_, value)| *value > 0.0)
            .collect();
        let max_value = bars
            .iter()
            .map(|(_, value)| *value)
            .fold(0.0_f64, f64::max);

        let mut svg = String::with_capacity(4096);

        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\" font-family=\"system-ui, sans-serif\">\n",
            WIDTH, HEIGHT, WIDTH, HEIGHT
        ));

        // Grow-from-baseline animation for the value bars
        svg.push_str("<style>\n");
        svg.push_str("@keyframes grow { from { transform: scaleY(0); } to { transform: scaleY(1); } }\n");
        svg.push_str(".bar-value { animation: grow 1s ease-out; transform-box: fill-box; transform-origin: center bottom; }\n");
        svg.push_str(".bar:hover .bar-value { opacity: 0.8; }\n");
        svg.push_str("</style>\n");

        svg.push_str(&format!(
            "<g transform=\"translate({},{})\">\n",
            MARGIN_LEFT, MARGIN_TOP
        ));

        // Title
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"-5\" text-anchor=\"middle\" fill=\"#1f2937\" \
             font-size=\"16\" font-weight=\"bold\">{}</text>\n",
            chart_width / 2.0,
            CHART_TITLE
        ));

        // Value axis: baseline, ticks, kg labels
        svg.push_str(&format!(
            "<line x1=\"0\" y1=\"0\" x2=\"0\" y2=\"{}\" stroke=\"#d1d5db\"/>\n",
            chart_height
        ));
        if max_value > 0.0 {
            for tick in 0..=TICK_COUNT {
                let tick_value = max_value * tick as f64 / TICK_COUNT as f64;
                let y = chart_height - tick_value / max_value * chart_height;
                svg.push_str(&format!(
                    "<line x1=\"-6\" y1=\"{y:.1}\" x2=\"0\" y2=\"{y:.1}\" stroke=\"#d1d5db\"/>\n"
                ));
                svg.push_str(&format!(
                    "<text x=\"-8\" y=\"{:.1}\" text-anchor=\"end\" fill=\"#6b7280\" \
                     font-size=\"12\">{} kg</text>\n",
                    y + 4.0,
                    tick_value.round()
                ));
            }
        }

        // Bars
        let step = if bars.is_empty() {
            chart_width
        } else {
            chart_width / bars.len() as f64
        };
        let band_width = step * (1.0 - 2.0 * BAND_PADDING);

        for (i, (category, value)) in bars.iter().enumerate() {
            let x = i as f64 * step + step * BAND_PADDING;
            let bar_height = value / max_value * chart_height;
            let y = chart_height - bar_height;
            let center = x + band_width / 2.0;
            let percent = footprint.percent_of_total(*value);

            svg.push_str("<g class=\"bar\">\n");

            // Background track behind the bar
            svg.push_str(&format!(
                "<rect x=\"{x:.1}\" y=\"0\" width=\"{band_width:.1}\" height=\"{chart_height:.1}\" \
                 fill=\"#f3f4f6\" rx=\"4\"/>\n"
            ));

            // Value bar
            svg.push_str(&format!(
                "<rect class=\"bar-value\" x=\"{x:.1}\" y=\"{y:.1}\" width=\"{band_width:.1}\" \
                 height=\"{bar_height:.1}\" fill=\"{}\" rx=\"4\" stroke=\"white\" stroke-width=\"2\"/>\n",
                category.color()
            ));

            // Hover tooltip: name, value, share of total
            svg.push_str(&format!(
                "<title>{}\n{} kg CO₂ annually\n{}% of total emissions</title>\n",
                category.display_name(),
                value,
                percent
            ));

            // Value label just inside the top of the bar
            svg.push_str(&format!(
                "<text x=\"{center:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"white\" \
                 font-size=\"14\" font-weight=\"bold\">{} kg</text>\n",
                y + 20.0,
                value
            ));

            // Category label below the baseline
            svg.push_str(&format!(
                "<text x=\"{center:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"#374151\" \
                 font-size=\"12\" font-weight=\"600\">{} {}</text>\n",
                chart_height + 20.0,
                category.icon(),
                category.display_name()
            ));

            svg.push_str("</g>\n");
        }

        svg.push_str("</g>\n</svg>\n");
        svg
    }
}
