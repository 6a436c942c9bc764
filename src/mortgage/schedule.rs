//! Annual amortization schedule

use serde::{Deserialize, Serialize};

use super::Mortgage;
use crate::error::Result;

/// One loan year of the amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationYear {
    /// Loan year (1-indexed)
    pub year: u32,
    /// Total of payments made this year
    pub payments: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    /// Balance at the end of the year
    pub ending_balance: f64,
}

impl Mortgage {
    /// Breakdown of a single 1-indexed loan year
    pub fn year_breakdown(&self, year: u32) -> AmortizationYear {
        let end_month = year.saturating_mul(12);
        let start_month = end_month.saturating_sub(12);

        let opening = self.balance_after(start_month);
        let ending_balance = self.balance_after(end_month);
        let interest_paid =
            self.interest_through(i64::from(end_month)) - self.interest_through(i64::from(start_month));

        AmortizationYear {
            year,
            payments: self.monthly_payment() * self.payments_in_year(year),
            principal_paid: opening - ending_balance,
            interest_paid,
            ending_balance,
        }
    }
}

/// Year-by-year schedule over the full loan term
pub fn amortization_schedule(
    principal: f64,
    annual_rate: f64,
    term_years: f64,
) -> Result<Vec<AmortizationYear>> {
    let mortgage = Mortgage::new(principal, annual_rate, term_years)?;
    let years = term_years.ceil() as u32;
    Ok((1..=years).map(|year| mortgage.year_breakdown(year)).collect())
}
