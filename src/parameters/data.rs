//! Request data structures matching the calculator's input shape
//!
//! Field names serialize in camelCase so a request posted by the UI layer
//! deserializes directly. All rates are decimals, all money is in major
//! currency units.

use serde::{Deserialize, Serialize};

/// Default analysis horizon in years
pub const DEFAULT_YEARS_TO_ANALYZE: u32 = 30;

/// Default annual home appreciation (3%)
pub const DEFAULT_HOME_APPRECIATION_RATE: f64 = 0.03;

/// Default selling cost as a fraction of sale price (6%)
pub const DEFAULT_SELLING_COST_RATE: f64 = 0.06;

fn default_years_to_analyze() -> u32 {
    DEFAULT_YEARS_TO_ANALYZE
}
fn default_home_appreciation_rate() -> f64 {
    DEFAULT_HOME_APPRECIATION_RATE
}
fn default_selling_cost_rate() -> f64 {
    DEFAULT_SELLING_COST_RATE
}

/// Terms of the hypothetical purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseParameters {
    /// Purchase price
    pub home_price: f64,

    /// Down payment as a fraction of price (0.2 = 20%)
    pub down_payment_percent: f64,

    /// Annual mortgage rate (0.065 = 6.5%)
    pub interest_rate: f64,

    /// Mortgage term in years, typically 15 or 30
    pub loan_term_years: u32,

    /// One-time closing costs as a fraction of price
    pub closing_cost_rate: f64,

    /// Annual property tax as a fraction of home value
    pub property_tax_rate: f64,

    /// Annual maintenance as a fraction of home value
    pub maintenance_rate: f64,
}

/// Terms of the rental alternative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalParameters {
    /// Starting monthly rent
    pub monthly_rent: f64,

    /// Security deposit, in months of rent
    #[serde(default)]
    pub security_deposit_months: f64,

    /// Broker fee, in months of rent
    #[serde(default)]
    pub broker_fee_months: f64,

    /// Annual rent increase
    pub rent_inflation_rate: f64,
}

/// Market and tax assumptions shared by both scenarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialParameters {
    /// Annual return on the renter's invested capital
    pub investment_return_rate: f64,

    /// Marginal income tax rate applied to deductible mortgage interest
    pub marginal_tax_rate: f64,
}

/// Complete, immutable input for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub purchase: PurchaseParameters,
    pub rental: RentalParameters,
    pub financial: FinancialParameters,

    /// Horizon in years; the result holds one point per year plus year 0
    #[serde(default = "default_years_to_analyze")]
    pub years_to_analyze: u32,

    #[serde(default = "default_home_appreciation_rate")]
    pub home_appreciation_rate: f64,

    #[serde(default = "default_selling_cost_rate")]
    pub selling_cost_rate: f64,
}

impl AnalysisRequest {
    /// Create a request with the default horizon, appreciation and selling costs
    pub fn new(
        purchase: PurchaseParameters,
        rental: RentalParameters,
        financial: FinancialParameters,
    ) -> Self {
        Self {
            purchase,
            rental,
            financial,
            years_to_analyze: DEFAULT_YEARS_TO_ANALYZE,
            home_appreciation_rate: DEFAULT_HOME_APPRECIATION_RATE,
            selling_cost_rate: DEFAULT_SELLING_COST_RATE,
        }
    }

    /// Cash put down at purchase
    pub fn down_payment(&self) -> f64 {
        self.purchase.home_price * self.purchase.down_payment_percent
    }

    /// Amount financed by the mortgage
    pub fn loan_amount(&self) -> f64 {
        self.purchase.home_price - self.down_payment()
    }

    /// One-time closing costs at purchase
    pub fn closing_costs(&self) -> f64 {
        self.purchase.home_price * self.purchase.closing_cost_rate
    }

    /// Security deposit plus broker fee paid when the lease is signed
    pub fn upfront_rental_costs(&self) -> f64 {
        self.rental.monthly_rent
            * (self.rental.security_deposit_months + self.rental.broker_fee_months)
    }
}

#[cfg(test)]
impl AnalysisRequest {
    /// Typical US scenario used across the test modules
    pub(crate) fn sample() -> Self {
        Self::new(
            PurchaseParameters {
                home_price: 450_000.0,
                down_payment_percent: 0.20,
                interest_rate: 0.065,
                loan_term_years: 30,
                closing_cost_rate: 0.03,
                property_tax_rate: 0.011,
                maintenance_rate: 0.01,
            },
            RentalParameters {
                monthly_rent: 2_200.0,
                security_deposit_months: 1.0,
                broker_fee_months: 0.0,
                rent_inflation_rate: 0.03,
            },
            FinancialParameters {
                investment_return_rate: 0.07,
                marginal_tax_rate: 0.24,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_amounts() {
        let request = AnalysisRequest::sample();
        assert_relative_eq!(request.down_payment(), 90_000.0, max_relative = 1e-12);
        assert_relative_eq!(request.loan_amount(), 360_000.0, max_relative = 1e-12);
        assert_relative_eq!(request.closing_costs(), 13_500.0, max_relative = 1e-12);
        assert_relative_eq!(request.upfront_rental_costs(), 2_200.0);
    }

    #[test]
    fn test_defaults_applied_when_missing() {
        let json = r#"{
            "purchase": {
                "homePrice": 300000,
                "downPaymentPercent": 0.1,
                "interestRate": 0.06,
                "loanTermYears": 15,
                "closingCostRate": 0.02,
                "propertyTaxRate": 0.01,
                "maintenanceRate": 0.01
            },
            "rental": { "monthlyRent": 1500, "rentInflationRate": 0.025 },
            "financial": { "investmentReturnRate": 0.06, "marginalTaxRate": 0.22 }
        }"#;

        let request: AnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.years_to_analyze, DEFAULT_YEARS_TO_ANALYZE);
        assert_eq!(request.home_appreciation_rate, DEFAULT_HOME_APPRECIATION_RATE);
        assert_eq!(request.selling_cost_rate, DEFAULT_SELLING_COST_RATE);
        assert_eq!(request.rental.security_deposit_months, 0.0);
        assert_eq!(request.purchase.loan_term_years, 15);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(AnalysisRequest::sample()).unwrap();
        assert!(value["purchase"].get("homePrice").is_some());
        assert!(value.get("yearsToAnalyze").is_some());
        assert!(value.get("years_to_analyze").is_none());
    }
}
