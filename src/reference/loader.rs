//! CSV-based country reference loader
//!
//! Columns: code, currency_symbol, closing_cost_rate, property_tax_rate,
//! broker_fee_months, default_marginal_tax_rate

use super::CountryConfig;
use crate::error::ReferenceError;
use csv::Reader;
use std::path::Path;

/// Default path to the shipped country table
pub const DEFAULT_COUNTRIES_PATH: &str = "data/countries.csv";

/// Raw CSV row matching countries.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    code: String,
    currency_symbol: String,
    closing_cost_rate: f64,
    property_tax_rate: f64,
    broker_fee_months: f64,
    default_marginal_tax_rate: f64,
}

impl From<CsvRow> for CountryConfig {
    fn from(row: CsvRow) -> Self {
        CountryConfig::new(
            row.code.trim(),
            row.currency_symbol.trim(),
            row.closing_cost_rate,
            row.property_tax_rate,
            row.broker_fee_months,
            row.default_marginal_tax_rate,
        )
    }
}

/// Load all countries from a CSV file
pub fn load_countries<P: AsRef<Path>>(path: P) -> Result<Vec<CountryConfig>, ReferenceError> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load countries from any reader (e.g., string buffer)
pub fn load_countries_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<CountryConfig>, ReferenceError> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<CountryConfig>, ReferenceError> {
    let mut countries = Vec::new();
    // Line numbers are 1-based and count the header
    for (index, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        check_row(&row, index as u64 + 2)?;
        countries.push(row.into());
    }
    Ok(countries)
}

fn check_row(row: &CsvRow, line: u64) -> Result<(), ReferenceError> {
    let invalid = |reason: &str| ReferenceError::InvalidRow {
        line,
        reason: reason.to_string(),
    };
    if row.code.trim().is_empty() {
        return Err(invalid("code is empty"));
    }
    let rates = [
        row.closing_cost_rate,
        row.property_tax_rate,
        row.broker_fee_months,
        row.default_marginal_tax_rate,
    ];
    if rates.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(invalid("rates and fee months must be finite and non-negative"));
    }
    Ok(())
}
