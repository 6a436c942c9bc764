//! Input guards shared by the mortgage math and the projection engine
//!
//! Only the interest rate is range-checked beyond finiteness; the other
//! rates are the caller's responsibility.

use crate::error::{ProjectionError, Result};
use crate::parameters::AnalysisRequest;

/// Upper bound for a decimal interest rate. Anything above this is almost
/// certainly a percentage typed in as a whole number (6.5 instead of 0.065).
pub const MAX_INTEREST_RATE: f64 = 1.0;

/// Longest horizon a request may project, in years
pub const MAX_YEARS_TO_ANALYZE: u32 = 200;

pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProjectionError::invalid(field, format!("must be a finite number, got {}", value)))
    }
}

pub fn ensure_positive(field: &'static str, value: f64) -> Result<f64> {
    ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ProjectionError::invalid(field, format!("must be greater than zero, got {}", value)))
    }
}

pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    ensure_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ProjectionError::invalid(field, format!("must not be negative, got {}", value)))
    }
}

pub fn ensure_unit_interval(field: &'static str, value: f64) -> Result<f64> {
    ensure_finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ProjectionError::invalid(
            field,
            format!("must be a decimal between 0 and 1, got {}", value),
        ))
    }
}

/// Validate loan terms as used by every amortization function
pub fn validate_loan_terms(principal: f64, annual_rate: f64, term_years: f64) -> Result<()> {
    ensure_positive("principal", principal)?;
    ensure_positive("loanTermYears", term_years)?;
    ensure_finite("interestRate", annual_rate)?;
    if annual_rate < 0.0 {
        return Err(ProjectionError::invalid(
            "interestRate",
            format!("must not be negative, got {}", annual_rate),
        ));
    }
    if annual_rate > MAX_INTEREST_RATE {
        return Err(ProjectionError::invalid(
            "interestRate",
            format!(
                "{} looks like a percentage; rates are decimals (e.g. 0.065 for 6.5%)",
                annual_rate
            ),
        ));
    }
    Ok(())
}

/// Validate a complete request before any simulation runs
pub fn validate_request(request: &AnalysisRequest) -> Result<()> {
    let purchase = &request.purchase;
    ensure_positive("homePrice", purchase.home_price)?;
    ensure_unit_interval("downPaymentPercent", purchase.down_payment_percent)?;
    ensure_finite("closingCostRate", purchase.closing_cost_rate)?;
    ensure_finite("propertyTaxRate", purchase.property_tax_rate)?;
    ensure_finite("maintenanceRate", purchase.maintenance_rate)?;

    let rental = &request.rental;
    ensure_positive("monthlyRent", rental.monthly_rent)?;
    ensure_non_negative("securityDepositMonths", rental.security_deposit_months)?;
    ensure_non_negative("brokerFeeMonths", rental.broker_fee_months)?;
    ensure_finite("rentInflationRate", rental.rent_inflation_rate)?;

    ensure_finite("investmentReturnRate", request.financial.investment_return_rate)?;
    ensure_finite("marginalTaxRate", request.financial.marginal_tax_rate)?;

    ensure_finite("homeAppreciationRate", request.home_appreciation_rate)?;
    ensure_finite("sellingCostRate", request.selling_cost_rate)?;

    if request.years_to_analyze == 0 {
        return Err(ProjectionError::invalid("yearsToAnalyze", "must be at least 1"));
    }
    if request.years_to_analyze > MAX_YEARS_TO_ANALYZE {
        return Err(ProjectionError::invalid(
            "yearsToAnalyze",
            format!(
                "must be at most {}, got {}",
                MAX_YEARS_TO_ANALYZE, request.years_to_analyze
            ),
        ));
    }

    validate_loan_terms(
        request.loan_amount(),
        purchase.interest_rate,
        purchase.loan_term_years as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_finite() {
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert!(ensure_finite("x", f64::INFINITY).is_err());
        assert!(ensure_positive("x", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_rate_guard() {
        assert!(validate_loan_terms(100_000.0, 0.0, 30.0).is_ok());
        assert!(validate_loan_terms(100_000.0, 1.0, 30.0).is_ok());

        let err = validate_loan_terms(100_000.0, 6.5, 30.0).unwrap_err();
        assert_eq!(err.field(), "interestRate");

        let err = validate_loan_terms(100_000.0, -0.01, 30.0).unwrap_err();
        assert_eq!(err.field(), "interestRate");
    }

    #[test]
    fn test_principal_and_term_guard() {
        assert_eq!(validate_loan_terms(0.0, 0.05, 30.0).unwrap_err().field(), "principal");
        assert_eq!(validate_loan_terms(1.0, 0.05, 0.0).unwrap_err().field(), "loanTermYears");
    }

    #[test]
    fn test_request_guard() {
        let mut request = AnalysisRequest::sample();
        assert!(validate_request(&request).is_ok());

        request.rental.monthly_rent = 0.0;
        assert_eq!(validate_request(&request).unwrap_err().field(), "monthlyRent");

        let mut request = AnalysisRequest::sample();
        request.years_to_analyze = 0;
        assert_eq!(validate_request(&request).unwrap_err().field(), "yearsToAnalyze");

        let mut request = AnalysisRequest::sample();
        request.years_to_analyze = MAX_YEARS_TO_ANALYZE;
        assert!(validate_request(&request).is_ok());
        request.years_to_analyze = 4_000_000_000;
        assert_eq!(validate_request(&request).unwrap_err().field(), "yearsToAnalyze");

        let mut request = AnalysisRequest::sample();
        request.purchase.down_payment_percent = 1.2;
        assert_eq!(validate_request(&request).unwrap_err().field(), "downPaymentPercent");

        let mut request = AnalysisRequest::sample();
        request.financial.investment_return_rate = f64::NAN;
        assert_eq!(validate_request(&request).unwrap_err().field(), "investmentReturnRate");
    }

    #[test]
    fn test_full_cash_purchase_rejected() {
        // A 100% down payment leaves no loan to amortize
        let mut request = AnalysisRequest::sample();
        request.purchase.down_payment_percent = 1.0;
        assert_eq!(validate_request(&request).unwrap_err().field(), "principal");
    }
}
