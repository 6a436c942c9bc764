//! Rent vs Buy CLI
//!
//! Runs one analysis from a JSON request or from country defaults and prints
//! the yearly comparison, break-even point and recommendation.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use rent_buy_projection::{
    calculate_rent_vs_buy,
    mortgage::amortization_schedule,
    parameters::load_request,
    AnalysisRequest, AnalysisResult, CountryConfig, CountryTable,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "rent-vs-buy", version, about = "Compare renting and buying a home over time")]
struct Cli {
    /// JSON file holding a complete analysis request
    #[arg(long)]
    request: Option<PathBuf>,

    /// Country whose closing costs, taxes and currency apply
    #[arg(long, default_value = "US")]
    country: String,

    /// Purchase price (required without --request)
    #[arg(long)]
    home_price: Option<f64>,

    /// Starting monthly rent (required without --request)
    #[arg(long)]
    monthly_rent: Option<f64>,

    /// Country reference CSV; built-in table when omitted
    #[arg(long)]
    countries: Option<PathBuf>,

    /// Override the analysis horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write the yearly series to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also print the annual amortization schedule
    #[arg(long)]
    schedule: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let table = CountryTable::resolve(cli.countries.as_deref())
        .context("failed to load country reference data")?;
    let country = table
        .require(&cli.country)
        .with_context(|| format!("available countries: {}", table.codes().join(", ")))?;

    let mut request = build_request(&cli, country)?;
    if let Some(years) = cli.years {
        request.years_to_analyze = years;
    }

    let result = calculate_rent_vs_buy(&request).context("analysis failed")?;
    info!(
        "analysis complete: {} points, recommendation {}",
        result.data_points.len(),
        result.summary.recommendation.as_str()
    );

    if let Some(path) = &cli.csv {
        write_series_csv(path, &result)?;
        println!("Yearly series written to: {}", path.display());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_report(&request, &result, country);

    if cli.schedule {
        print_schedule(&request, country)?;
    }

    Ok(())
}

fn build_request(cli: &Cli, country: &CountryConfig) -> Result<AnalysisRequest> {
    if let Some(path) = &cli.request {
        if cli.home_price.is_some() || cli.monthly_rent.is_some() {
            warn!("--home-price and --monthly-rent are ignored when --request is given");
        }
        return load_request(path)
            .with_context(|| format!("failed to load request from {}", path.display()));
    }

    match (cli.home_price, cli.monthly_rent) {
        (Some(home_price), Some(monthly_rent)) => {
            Ok(AnalysisRequest::for_country(country, home_price, monthly_rent))
        }
        _ => bail!("either --request or both --home-price and --monthly-rent are required"),
    }
}

fn write_series_csv(path: &Path, result: &AnalysisResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("unable to create {}", path.display()))?;
    for point in &result.data_points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_report(request: &AnalysisRequest, result: &AnalysisResult, country: &CountryConfig) {
    let money = |amount: f64| country.format_amount(amount);

    println!("Rent vs Buy ({})", country.code);
    println!("================\n");
    println!("  Home price:    {}", money(request.purchase.home_price));
    println!("  Down payment:  {}", money(request.down_payment()));
    println!("  Loan:          {}", money(request.loan_amount()));
    println!("  Monthly rent:  {}", money(request.rental.monthly_rent));
    println!("  Horizon:       {} years", request.years_to_analyze);
    println!();

    println!(
        "{:>4} {:>16} {:>16} {:>16} {:>16} {:>16}",
        "Year", "Renter NW", "Owner NW", "Home value", "Balance", "Equity"
    );
    println!("{}", "-".repeat(89));
    for point in &result.data_points {
        println!(
            "{:>4} {:>16} {:>16} {:>16} {:>16} {:>16}",
            point.year,
            money(point.renter_net_worth),
            money(point.owner_net_worth),
            money(point.home_value),
            money(point.mortgage_balance),
            money(point.home_equity),
        );
    }

    println!("\nSummary:");
    println!("  Total renter cost:      {}", money(result.summary.total_renter_cost));
    println!("  Total owner cost:       {}", money(result.summary.total_owner_cost));
    println!("  Final renter net worth: {}", money(result.summary.final_renter_net_worth));
    println!("  Final owner net worth:  {}", money(result.summary.final_owner_net_worth));

    match (result.break_even.year, result.break_even.month) {
        (Some(year), Some(month)) => println!(
            "  Break-even:             year {} (month {} of the crossing year)",
            year,
            month + 1
        ),
        _ => println!("  Break-even:             buying never overtakes renting in this horizon"),
    }
    println!("  Recommendation:         {}", result.summary.recommendation.as_str());
}

fn print_schedule(request: &AnalysisRequest, country: &CountryConfig) -> Result<()> {
    let schedule = amortization_schedule(
        request.loan_amount(),
        request.purchase.interest_rate,
        request.purchase.loan_term_years as f64,
    )?;

    println!("\nAmortization schedule:");
    println!("{:>4} {:>14} {:>14} {:>14} {:>16}", "Year", "Payments", "Principal", "Interest", "Balance");
    for year in &schedule {
        println!(
            "{:>4} {:>14} {:>14} {:>14} {:>16}",
            year.year,
            country.format_amount(year.payments),
            country.format_amount(year.principal_paid),
            country.format_amount(year.interest_paid),
            country.format_amount(year.ending_balance),
        );
    }
    Ok(())
}
