//! Sweep one input across a range and report how the outcome moves
//!
//! Usage: sensitivity --home-price 450000 --monthly-rent 2200 \
//!            --parameter investmentReturnRate --from 0.03 --to 0.10 --steps 8

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rent_buy_projection::{
    parameters::load_request,
    scenario::{linear_steps, ScenarioRunner, SweepParameter},
    AnalysisRequest, CountryTable,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sensitivity", about = "Break-even sensitivity to a single input")]
struct Cli {
    /// JSON file holding the base request
    #[arg(long)]
    request: Option<PathBuf>,

    #[arg(long, default_value = "US")]
    country: String,

    /// Country reference CSV; shipped or built-in table when omitted
    #[arg(long)]
    countries: Option<PathBuf>,

    #[arg(long)]
    home_price: Option<f64>,

    #[arg(long)]
    monthly_rent: Option<f64>,

    /// Input to vary (e.g. investmentReturnRate, homeAppreciationRate, interestRate)
    #[arg(long)]
    parameter: String,

    #[arg(long)]
    from: f64,

    #[arg(long)]
    to: f64,

    #[arg(long, default_value_t = 5)]
    steps: usize,

    /// Print the sweep as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let parameter = SweepParameter::from_name(&cli.parameter).ok_or_else(|| {
        let known: Vec<&str> = SweepParameter::ALL.iter().map(|p| p.name()).collect();
        anyhow!("unknown parameter '{}'; expected one of {}", cli.parameter, known.join(", "))
    })?;

    let base = match &cli.request {
        Some(path) => load_request(path)
            .with_context(|| format!("failed to load request from {}", path.display()))?,
        None => {
            let table = CountryTable::resolve(cli.countries.as_deref())
                .context("failed to load country reference data")?;
            let country = table.require(&cli.country)?;
            let home_price = cli.home_price.context("--home-price is required without --request")?;
            let monthly_rent = cli.monthly_rent.context("--monthly-rent is required without --request")?;
            AnalysisRequest::for_country(country, home_price, monthly_rent)
        }
    };

    let runner = ScenarioRunner::new(base);
    let values = linear_steps(cli.from, cli.to, cli.steps);
    let points = runner
        .sweep(parameter, &values)
        .with_context(|| format!("sweep over {} failed", parameter.name()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("Sensitivity to {}", parameter.name());
    println!("{:>10} {:>12} {:>16} {:>16} {:>14}", "Value", "Break-even", "Renter NW", "Owner NW", "Recommend");
    println!("{}", "-".repeat(72));
    for point in &points {
        let break_even = point
            .result
            .break_even
            .exact_point
            .map(|years| format!("{:.2} yrs", years))
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{:>10.4} {:>12} {:>16.0} {:>16.0} {:>14}",
            point.value,
            break_even,
            point.result.summary.final_renter_net_worth,
            point.result.summary.final_owner_net_worth,
            point.result.summary.recommendation.as_str(),
        );
    }

    Ok(())
}
