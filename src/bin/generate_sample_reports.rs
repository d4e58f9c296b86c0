//! Generate Sample Reports
//!
//! Runs the calculator for 3 sample households and saves markdown, HTML,
//! and JSON reports to the reports folder.
//!
//! Run with: cargo run --bin generate_sample_reports

use anyhow::{Context, Result};
use carbon_calculator_rust::inputs::{DietType, ElectricityUnit, UserInputs};
use carbon_calculator_rust::report::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
use carbon_calculator_rust::session::Calculation;
use std::fs;
use std::path::Path;

const OUTPUT_DIR: &str = "reports/samples";

const SAMPLE_HOUSEHOLDS: &[(&str, f64, ElectricityUnit, f64, DietType, &str)] = &[
    (
        "urban_flat",
        120.0,
        ElectricityUnit::Kwh,
        40.0,
        DietType::Mixed,
        "Urban flat - moderate usage, short commute",
    ),
    (
        "suburban_family",
        200.0,
        ElectricityUnit::Kwh,
        150.0,
        DietType::NonVeg,
        "Suburban family - car commute, non-veg diet",
    ),
    (
        "rural_household",
        900.0,
        ElectricityUnit::Rupees,
        60.0,
        DietType::Veg,
        "Rural household - billed in rupees, vegetarian diet",
    ),
];

fn main() -> Result<()> {
    println!("Generating Sample Carbon Reports\n");
    println!("================================\n");

    let output_dir =
        std::env::var("REPORT_OUTPUT_DIR").unwrap_or_else(|_| OUTPUT_DIR.to_string());
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output dir: {}", output_dir))?;

    for (name, usage, unit, km, diet, description) in SAMPLE_HOUSEHOLDS {
        println!("Household: {} ({})", name, description);

        let calculation = Calculation::run(UserInputs {
            electricity_usage: *usage,
            electricity_unit: *unit,
            driving_distance: *km,
            diet_type: *diet,
        });
        println!(
            "  Footprint: {} kg CO₂/year ({} tips)",
            calculation.footprint.total,
            calculation.recommendation.tips.len()
        );

        let base = Path::new(&output_dir).join(name);

        let md_path = base.with_extension("md");
        fs::write(&md_path, MarkdownFormatter::format(&calculation))
            .with_context(|| format!("Failed to write {:?}", md_path))?;

        let html_path = base.with_extension("html");
        fs::write(&html_path, HtmlFormatter::format(&calculation))
            .with_context(|| format!("Failed to write {:?}", html_path))?;

        let json_path = base.with_extension("json");
        fs::write(&json_path, JsonFormatter::format(&calculation)?)
            .with_context(|| format!("Failed to write {:?}", json_path))?;

        println!("  Saved: {:?} (.md/.html/.json)\n", base);
    }

    println!("Done. Reports in: {}", output_dir);
    Ok(())
}
