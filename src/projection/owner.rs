//! Buy-and-amortize scenario

use log::{trace, warn};

use super::state::OwnerState;
use crate::mortgage::Mortgage;
use crate::parameters::AnalysisRequest;

/// Owner's position at the end of one projection year
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerYear {
    pub year: u32,
    pub net_worth: f64,
    pub cumulative_cost: f64,
    pub home_value: f64,
    pub mortgage_balance: f64,
    pub home_equity: f64,
}

impl OwnerYear {
    fn capture(state: &OwnerState, selling_cost_rate: f64) -> Self {
        Self {
            year: state.year,
            net_worth: state.net_worth(selling_cost_rate),
            cumulative_cost: state.cumulative_cost,
            home_value: state.home_value,
            mortgage_balance: state.mortgage_balance,
            home_equity: state.home_equity(),
        }
    }
}

/// Costs of owning for one projection year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OwnershipYearCost {
    pub mortgage_payments: f64,
    pub property_tax: f64,
    pub maintenance: f64,
    pub interest: f64,
    pub tax_deduction: f64,
}

impl OwnershipYearCost {
    pub fn net(&self) -> f64 {
        self.mortgage_payments + self.property_tax + self.maintenance - self.tax_deduction
    }
}

/// Year `year` costs, with tax and upkeep on that year's appreciated value
pub fn ownership_year_cost(
    request: &AnalysisRequest,
    mortgage: &Mortgage,
    year: u32,
    home_value: f64,
) -> OwnershipYearCost {
    let breakdown = mortgage.year_breakdown(year);
    OwnershipYearCost {
        mortgage_payments: breakdown.payments,
        property_tax: home_value * request.purchase.property_tax_rate,
        maintenance: home_value * request.purchase.maintenance_rate,
        interest: breakdown.interest_paid,
        tax_deduction: breakdown.interest_paid * request.financial.marginal_tax_rate,
    }
}

/// Simulate the owner for `years_to_analyze` years, returning N+1 points
///
/// Net worth assumes a sale at the end of every year, so selling costs are
/// charged against each point, not only the last.
pub fn simulate_owner(request: &AnalysisRequest, mortgage: &Mortgage) -> Vec<OwnerYear> {
    let price = request.purchase.home_price;
    let appreciation = 1.0 + request.home_appreciation_rate;

    let mut state = OwnerState::from_request(request);
    let mut series = Vec::with_capacity(request.years_to_analyze as usize + 1);
    series.push(OwnerYear::capture(&state, request.selling_cost_rate));

    for year in 1..=request.years_to_analyze {
        state.year = year;
        state.home_value = price * appreciation.powi(year as i32);
        state.mortgage_balance = mortgage.balance_after(year.saturating_mul(12));

        let cost = ownership_year_cost(request, mortgage, year, state.home_value);
        state.cumulative_cost += cost.net();

        if state.home_equity() < 0.0 {
            warn!(
                "owner equity is negative in year {} ({:.2}); home value fell below the loan balance",
                year,
                state.home_equity()
            );
        }
        trace!(
            "owner year {}: value={:.2} balance={:.2} interest={:.2} net_cost={:.2}",
            year,
            state.home_value,
            state.mortgage_balance,
            cost.interest,
            cost.net()
        );
        series.push(OwnerYear::capture(&state, request.selling_cost_rate));
    }

    series
}
