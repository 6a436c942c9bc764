//! Resolve country defaults into a complete request

use super::CountryConfig;
use crate::parameters::{
    AnalysisRequest, FinancialParameters, PurchaseParameters, RentalParameters,
    DEFAULT_HOME_APPRECIATION_RATE, DEFAULT_SELLING_COST_RATE, DEFAULT_YEARS_TO_ANALYZE,
};

/// Calculator defaults that are not jurisdiction specific
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDefaults {
    pub down_payment_percent: f64,
    pub interest_rate: f64,
    pub loan_term_years: u32,
    pub maintenance_rate: f64,
    pub security_deposit_months: f64,
    pub rent_inflation_rate: f64,
    pub investment_return_rate: f64,
    pub years_to_analyze: u32,
    pub home_appreciation_rate: f64,
    pub selling_cost_rate: f64,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            down_payment_percent: 0.20,
            interest_rate: 0.065,
            loan_term_years: 30,
            maintenance_rate: 0.01,
            security_deposit_months: 1.0,
            rent_inflation_rate: 0.03,
            investment_return_rate: 0.07,
            years_to_analyze: DEFAULT_YEARS_TO_ANALYZE,
            home_appreciation_rate: DEFAULT_HOME_APPRECIATION_RATE,
            selling_cost_rate: DEFAULT_SELLING_COST_RATE,
        }
    }
}

impl AnalysisRequest {
    /// Request for a home in `country` using the standard calculator defaults
    pub fn for_country(country: &CountryConfig, home_price: f64, monthly_rent: f64) -> Self {
        Self::for_country_with(country, home_price, monthly_rent, &RequestDefaults::default())
    }

    /// Request for a home in `country` with explicit non-jurisdiction defaults
    pub fn for_country_with(
        country: &CountryConfig,
        home_price: f64,
        monthly_rent: f64,
        defaults: &RequestDefaults,
    ) -> Self {
        Self {
            purchase: PurchaseParameters {
                home_price,
                down_payment_percent: defaults.down_payment_percent,
                interest_rate: defaults.interest_rate,
                loan_term_years: defaults.loan_term_years,
                closing_cost_rate: country.closing_cost_rate,
                property_tax_rate: country.property_tax_rate,
                maintenance_rate: defaults.maintenance_rate,
            },
            rental: RentalParameters {
                monthly_rent,
                security_deposit_months: defaults.security_deposit_months,
                broker_fee_months: country.broker_fee_months,
                rent_inflation_rate: defaults.rent_inflation_rate,
            },
            financial: FinancialParameters {
                investment_return_rate: defaults.investment_return_rate,
                marginal_tax_rate: country.default_marginal_tax_rate,
            },
            years_to_analyze: defaults.years_to_analyze,
            home_appreciation_rate: defaults.home_appreciation_rate,
            selling_cost_rate: defaults.selling_cost_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::calculate_rent_vs_buy;
    use crate::reference::CountryTable;

    #[test]
    fn test_country_rates_flow_into_request() {
        let table = CountryTable::builtin();
        let de = table.get("DE").unwrap();
        let request = AnalysisRequest::for_country(de, 500_000.0, 1_800.0);

        assert_eq!(request.purchase.closing_cost_rate, 0.10);
        assert_eq!(request.purchase.property_tax_rate, 0.003);
        assert_eq!(request.rental.broker_fee_months, 2.38);
        assert_eq!(request.financial.marginal_tax_rate, 0.0);
        assert_eq!(request.purchase.loan_term_years, 30);
        assert_eq!(request.years_to_analyze, DEFAULT_YEARS_TO_ANALYZE);
    }

    #[test]
    fn test_every_builtin_country_projects() {
        let table = CountryTable::builtin();
        for code in table.codes() {
            let request = AnalysisRequest::for_country(table.get(code).unwrap(), 400_000.0, 1_600.0);
            let result = calculate_rent_vs_buy(&request).unwrap();
            assert_eq!(result.data_points.len(), 31, "country {}", code);
        }
    }

    #[test]
    fn test_custom_defaults() {
        let us = CountryTable::builtin().get("US").cloned().unwrap();
        let defaults = RequestDefaults {
            loan_term_years: 15,
            years_to_analyze: 20,
            ..Default::default()
        };
        let request = AnalysisRequest::for_country_with(&us, 300_000.0, 1_500.0, &defaults);
        assert_eq!(request.purchase.loan_term_years, 15);
        assert_eq!(request.years_to_analyze, 20);
        assert_eq!(request.financial.marginal_tax_rate, 0.24);
    }
}
