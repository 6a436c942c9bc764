//! Closed-form amortization for fixed-rate loans
//!
//! With r = annual_rate / 12 and n = term_years * 12:
//! - payment:  M = P * r(1+r)^n / ((1+r)^n - 1)
//! - balance:  B(m) = P * ((1+r)^n - (1+r)^m) / ((1+r)^n - 1)
//! - interest: I(m) = M*m - (P - B(m))
//!
//! Both are evaluated in the equivalent discount form, with (1+r)^-n and
//! (1+r)^(m-n), which stays finite however long the term is. A zero rate
//! degenerates to straight-line repayment (M = P / n).

use crate::error::{ProjectionError, Result};
use crate::validation::validate_loan_terms;

/// A validated fixed-rate loan
///
/// Construction checks the terms once; every query after that is infallible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mortgage {
    principal: f64,
    annual_rate: f64,
    term_years: f64,
    payment: f64,
}

impl Mortgage {
    pub fn new(principal: f64, annual_rate: f64, term_years: f64) -> Result<Self> {
        validate_loan_terms(principal, annual_rate, term_years)?;

        let n = term_years * 12.0;
        let payment = if annual_rate == 0.0 {
            principal / n
        } else {
            let r = annual_rate / 12.0;
            principal * r / (1.0 - (1.0 + r).powf(-n))
        };

        Ok(Self {
            principal,
            annual_rate,
            term_years,
            payment,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    pub fn term_years(&self) -> f64 {
        self.term_years
    }

    /// Level monthly payment (principal + interest)
    pub fn monthly_payment(&self) -> f64 {
        self.payment
    }

    /// Total number of scheduled payments
    pub fn term_months(&self) -> f64 {
        self.term_years * 12.0
    }

    /// Outstanding balance after `months_paid` payments; zero once the term is reached
    pub fn balance_after(&self, months_paid: u32) -> f64 {
        self.balance_at(months_paid as f64)
    }

    fn balance_at(&self, months_paid: f64) -> f64 {
        let n = self.term_months();
        let m = months_paid;
        if m >= n {
            return 0.0;
        }
        if m <= 0.0 {
            return self.principal;
        }

        if self.annual_rate == 0.0 {
            return self.principal * (1.0 - m / n);
        }

        let r = self.annual_rate / 12.0;
        let remaining = (1.0 + r).powf(m - n);
        let discount_n = (1.0 + r).powf(-n);
        self.principal * (1.0 - remaining) / (1.0 - discount_n)
    }

    /// Cumulative interest paid through `months_paid` payments
    ///
    /// Negative months mean "before origination" and yield zero. Months past
    /// the term are capped at the term since no payments follow payoff.
    pub fn interest_through(&self, months_paid: i64) -> f64 {
        if months_paid <= 0 {
            return 0.0;
        }
        let n = self.term_months();
        let months = (months_paid as f64).min(n);
        let balance = self.balance_at(months);
        self.payment * months - (self.principal - balance)
    }

    /// Number of payments actually made during a 1-indexed loan year
    pub fn payments_in_year(&self, year: u32) -> f64 {
        if year == 0 {
            return 0.0;
        }
        let start = (year - 1) as f64 * 12.0;
        (self.term_months() - start).clamp(0.0, 12.0)
    }
}

/// Monthly payment for a fixed-rate loan
///
/// Fails when the principal or term is not positive, the rate is outside
/// [0, 1], or any argument is NaN/infinite.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_years: f64) -> Result<f64> {
    Ok(Mortgage::new(principal, annual_rate, term_years)?.monthly_payment())
}

/// Outstanding balance after `months_paid` payments
///
/// Returns 0 once the loan is fully paid. Negative months are rejected.
pub fn remaining_balance(
    principal: f64,
    annual_rate: f64,
    term_years: f64,
    months_paid: i64,
) -> Result<f64> {
    let mortgage = Mortgage::new(principal, annual_rate, term_years)?;
    if months_paid < 0 {
        return Err(ProjectionError::invalid(
            "monthsPaid",
            format!("must not be negative, got {}", months_paid),
        ));
    }
    Ok(mortgage.balance_at(months_paid as f64))
}

/// Cumulative interest paid through `months_paid` payments
///
/// Callers isolate one year's interest by subtracting the figure twelve
/// months earlier, so negative months are accepted and treated as zero.
pub fn interest_paid_through(
    principal: f64,
    annual_rate: f64,
    term_years: f64,
    months_paid: i64,
) -> Result<f64> {
    Ok(Mortgage::new(principal, annual_rate, term_years)?.interest_through(months_paid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_standard_payment() {
        let payment = monthly_payment(360_000.0, 0.065, 30.0).unwrap();
        // Closed form gives 2275.4449; published tables round this to 2275.44-2275.46
        assert_abs_diff_eq!(payment, 2275.44, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_payment() {
        let payment = monthly_payment(120_000.0, 0.0, 10.0).unwrap();
        assert_relative_eq!(payment, 1000.0);
    }

    #[test]
    fn test_balance_endpoints() {
        for &(p, r, n) in &[(360_000.0, 0.065, 30.0), (200_000.0, 0.0, 15.0), (50_000.0, 0.12, 10.0)] {
            assert_relative_eq!(remaining_balance(p, r, n, 0).unwrap(), p);
            assert_eq!(remaining_balance(p, r, n, (n * 12.0) as i64).unwrap(), 0.0);
            assert_eq!(remaining_balance(p, r, n, 1_000).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_balance_non_increasing() {
        let mut previous = f64::INFINITY;
        for month in 0..=360 {
            let balance = remaining_balance(360_000.0, 0.065, 30.0, month).unwrap();
            assert!(balance <= previous, "balance rose at month {}", month);
            previous = balance;
        }
    }

    #[test]
    fn test_interest_identity() {
        let mortgage = Mortgage::new(360_000.0, 0.065, 30.0).unwrap();

        // First month's interest is simply the balance times the monthly rate
        assert_relative_eq!(mortgage.interest_through(1), 360_000.0 * 0.065 / 12.0, max_relative = 1e-6);

        // Over the full term, interest is total paid minus principal
        let total = mortgage.monthly_payment() * 360.0 - 360_000.0;
        assert_relative_eq!(mortgage.interest_through(360), total, max_relative = 1e-9);
        assert_relative_eq!(mortgage.interest_through(480), total, max_relative = 1e-9);
    }

    #[test]
    fn test_interest_before_origination() {
        assert_eq!(interest_paid_through(360_000.0, 0.065, 30.0, -12).unwrap(), 0.0);
        assert_eq!(interest_paid_through(360_000.0, 0.065, 30.0, 0).unwrap(), 0.0);

        // Year 1 interest via the subtract-twelve-months convention
        let year_1 = interest_paid_through(360_000.0, 0.065, 30.0, 12).unwrap()
            - interest_paid_through(360_000.0, 0.065, 30.0, 0).unwrap();
        assert!(year_1 > 23_000.0 && year_1 < 23_400.0, "year 1 interest {}", year_1);
    }

    #[test]
    fn test_zero_rate_has_no_interest() {
        let interest = interest_paid_through(120_000.0, 0.0, 10.0, 60).unwrap();
        assert_abs_diff_eq!(interest, 0.0, epsilon = 1e-6);
        assert_relative_eq!(remaining_balance(120_000.0, 0.0, 10.0, 60).unwrap(), 60_000.0);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(monthly_payment(-1000.0, 0.065, 30.0).is_err());
        assert!(monthly_payment(360_000.0, 1.5, 30.0).is_err());
        assert!(monthly_payment(360_000.0, 0.065, 0.0).is_err());
        assert!(monthly_payment(f64::NAN, 0.065, 30.0).is_err());
        assert!(monthly_payment(360_000.0, f64::INFINITY, 30.0).is_err());
        assert!(remaining_balance(360_000.0, 0.065, 30.0, -1).is_err());

        match monthly_payment(360_000.0, 6.5, 30.0) {
            Err(ProjectionError::InvalidInput { field, .. }) => assert_eq!(field, "interestRate"),
            other => panic!("expected invalid interest rate, got {:?}", other),
        }
    }

    #[test]
    fn test_months_beyond_u32_range() {
        // Straight-line balance at month counts past u32::MAX
        let n_months = 1.0e9 * 12.0;
        let early = remaining_balance(120_000.0, 0.0, 1.0e9, 4_000_000_000).unwrap();
        let late = remaining_balance(120_000.0, 0.0, 1.0e9, 5_000_000_000).unwrap();
        assert_relative_eq!(early, 120_000.0 * (1.0 - 4.0e9 / n_months), max_relative = 1e-12);
        assert_relative_eq!(late, 120_000.0 * (1.0 - 5.0e9 / n_months), max_relative = 1e-12);
        assert!(late < early);
    }

    #[test]
    fn test_very_long_term_stays_finite() {
        // (1+r)^n overflows here; the payment tends to interest-only
        let mortgage = Mortgage::new(100_000.0, 0.05, 1.0e9).unwrap();
        assert_relative_eq!(mortgage.monthly_payment(), 100_000.0 * 0.05 / 12.0, max_relative = 1e-12);

        let mut previous = f64::INFINITY;
        for months in [0_i64, 12, 4_000_000_000, 5_000_000_000, 11_999_999_999] {
            let balance = remaining_balance(100_000.0, 0.05, 1.0e9, months).unwrap();
            assert!(balance.is_finite(), "balance not finite at month {}", months);
            assert!(balance <= previous, "balance rose at month {}", months);
            previous = balance;
        }
        assert!(interest_paid_through(100_000.0, 0.05, 1.0e9, 5_000_000_000).unwrap().is_finite());
    }

    #[test]
    fn test_payments_in_year() {
        let mortgage = Mortgage::new(100_000.0, 0.05, 15.0).unwrap();
        assert_eq!(mortgage.payments_in_year(0), 0.0);
        assert_eq!(mortgage.payments_in_year(1), 12.0);
        assert_eq!(mortgage.payments_in_year(15), 12.0);
        assert_eq!(mortgage.payments_in_year(16), 0.0);
    }
}
