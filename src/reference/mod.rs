//! Country reference data: currency and jurisdiction rates
//!
//! The table is built once (from the built-in defaults or a CSV file) and
//! only read afterwards. The engine never looks anything up here; callers
//! resolve a country into an [`AnalysisRequest`](crate::AnalysisRequest)
//! first.

mod defaults;
pub mod loader;

pub use defaults::RequestDefaults;
pub use loader::{load_countries, load_countries_from_reader, DEFAULT_COUNTRIES_PATH};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::ReferenceError;

/// Jurisdiction defaults for one country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryConfig {
    /// ISO 3166-1 alpha-2 code, upper case
    pub code: String,
    pub currency_symbol: String,
    pub closing_cost_rate: f64,
    pub property_tax_rate: f64,
    pub broker_fee_months: f64,
    /// Rate at which mortgage interest reduces tax; 0 where interest is not deductible
    pub default_marginal_tax_rate: f64,
}

impl CountryConfig {
    pub fn new(
        code: &str,
        currency_symbol: &str,
        closing_cost_rate: f64,
        property_tax_rate: f64,
        broker_fee_months: f64,
        default_marginal_tax_rate: f64,
    ) -> Self {
        Self {
            code: code.to_ascii_uppercase(),
            currency_symbol: currency_symbol.to_string(),
            closing_cost_rate,
            property_tax_rate,
            broker_fee_months,
            default_marginal_tax_rate,
        }
    }

    /// Format a whole-unit amount with the currency symbol and thousands separators
    pub fn format_amount(&self, amount: f64) -> String {
        let rounded = amount.round();
        let digits = format!("{:.0}", rounded.abs());
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!("{}{}{}", sign, self.currency_symbol, grouped)
    }
}

/// Immutable lookup from country code to jurisdiction defaults
#[derive(Debug, Clone)]
pub struct CountryTable {
    countries: HashMap<String, CountryConfig>,
}

impl CountryTable {
    /// Build a table from configs; a later duplicate code replaces an earlier one
    pub fn from_configs<I: IntoIterator<Item = CountryConfig>>(configs: I) -> Self {
        let countries = configs
            .into_iter()
            .map(|config| (config.code.to_ascii_uppercase(), config))
            .collect();
        Self { countries }
    }

    /// Defaults compiled into the crate
    pub fn builtin() -> Self {
        Self::from_configs(vec![
            CountryConfig::new("US", "$", 0.03, 0.011, 0.0, 0.24),
            CountryConfig::new("CA", "C$", 0.015, 0.01, 0.0, 0.0),
            CountryConfig::new("GB", "£", 0.05, 0.006, 0.0, 0.0),
            CountryConfig::new("DE", "€", 0.10, 0.003, 2.38, 0.0),
            CountryConfig::new("FR", "€", 0.08, 0.008, 1.0, 0.0),
            CountryConfig::new("ES", "€", 0.10, 0.005, 1.0, 0.0),
            CountryConfig::new("NL", "€", 0.04, 0.001, 1.0, 0.37),
            CountryConfig::new("AU", "A$", 0.05, 0.004, 0.0, 0.0),
        ])
    }

    /// Load from a CSV file (see [`DEFAULT_COUNTRIES_PATH`])
    pub fn from_csv_path(path: &Path) -> Result<Self, ReferenceError> {
        Ok(Self::from_configs(load_countries(path)?))
    }

    /// Table used by the command-line tools
    ///
    /// An explicit path must load. Without one, the shipped
    /// [`DEFAULT_COUNTRIES_PATH`] is used when present, else the built-in table.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ReferenceError> {
        match path {
            Some(path) => Self::from_csv_path(path),
            None => {
                let shipped = Path::new(DEFAULT_COUNTRIES_PATH);
                if shipped.exists() {
                    Self::from_csv_path(shipped)
                } else {
                    Ok(Self::builtin())
                }
            }
        }
    }

    /// Case-insensitive lookup
    pub fn get(&self, code: &str) -> Option<&CountryConfig> {
        self.countries.get(&code.to_ascii_uppercase())
    }

    /// Lookup that reports unknown codes as an error
    pub fn require(&self, code: &str) -> Result<&CountryConfig, ReferenceError> {
        self.get(code)
            .ok_or_else(|| ReferenceError::UnknownCountry(code.to_string()))
    }

    /// All country codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.countries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::builtin()
    }
}
