//! Calculate a Household Footprint
//!
//! Runs one calculation from CLI arguments and prints the emissions chart
//! and ranked reduction tips.
//!
//! Run with: cargo run --bin calculate -- 200 kwh 150 non-veg

use anyhow::{bail, Context, Result};
use carbon_calculator_rust::chart::TextChart;
use carbon_calculator_rust::inputs::{parse_non_negative, DietType, ElectricityUnit, UserInputs};
use carbon_calculator_rust::session::Calculation;

const USAGE: &str = "usage: calculate <electricity-usage> <kwh|rupees|bulbs> <weekly-km> <veg|non-veg|mixed>";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 4 {
        bail!("{}", USAGE);
    }

    // Boundary sanitization: numbers are clamped to the non-negative domain,
    // tags must be one of the enumerated values
    let electricity_usage =
        parse_non_negative(&args[0]).context("bad electricity usage")?;
    let electricity_unit: ElectricityUnit =
        args[1].parse().context("bad electricity unit")?;
    let driving_distance = parse_non_negative(&args[2]).context("bad weekly distance")?;
    let diet_type: DietType = args[3].parse().context("bad diet type")?;

    let inputs = UserInputs {
        electricity_usage,
        electricity_unit,
        driving_distance,
        diet_type,
    };

    println!("\nCalculating carbon footprint...");
    println!("  {}: {}", electricity_unit.input_label(), electricity_usage);
    println!("  Weekly Driving Distance (km): {}", driving_distance);
    println!("  Diet Type: {}", diet_type.display_name());
    println!();

    let calculation = Calculation::run(inputs);

    println!("{}", TextChart::render(&calculation.footprint));

    let recommendation = &calculation.recommendation;
    println!("Personalized Reduction Tips");
    println!("===========================");
    println!(
        "Potential impact: {} kg CO₂ annually ({}% reduction)\n",
        recommendation.potential_savings_kg, recommendation.reduction_percent
    );
    for (i, tip) in recommendation.tips.iter().enumerate() {
        println!(
            "{}. {} {} [{}]",
            i + 1,
            tip.category.icon(),
            tip.title,
            tip.difficulty
        );
        println!("   {}", tip.description);
        println!("   {}\n", tip.impact);
    }

    Ok(())
}
