//! Rent-and-invest scenario
//!
//! The renter starts with the capital the buyer would have locked into the
//! down payment and invests it. Each month the balance compounds, then the
//! renter banks whatever owning would have cost beyond that month's rent.

use log::trace;

use super::state::RenterState;
use crate::mortgage::Mortgage;
use crate::parameters::AnalysisRequest;

/// Renter's position at the end of one projection year
#[derive(Debug, Clone, PartialEq)]
pub struct RenterYear {
    pub year: u32,
    pub net_worth: f64,
    pub cumulative_cost: f64,
    pub investment_balance: f64,
}

impl From<&RenterState> for RenterYear {
    fn from(state: &RenterState) -> Self {
        Self {
            year: state.year,
            net_worth: state.net_worth(),
            cumulative_cost: state.cumulative_cost,
            investment_balance: state.investment_balance,
        }
    }
}

/// Monthly cost of owning used to size the renter's savings
///
/// Tax and maintenance are taken on the original purchase price, not the
/// appreciated value the owner scenario uses, and the figure is the same
/// every year.
pub fn counterfactual_ownership_cost(request: &AnalysisRequest, mortgage: &Mortgage) -> f64 {
    let price = request.purchase.home_price;
    mortgage.monthly_payment()
        + price * request.purchase.property_tax_rate / 12.0
        + price * request.purchase.maintenance_rate / 12.0
}

/// Simulate the renter for `years_to_analyze` years, returning N+1 points
pub fn simulate_renter(request: &AnalysisRequest, mortgage: &Mortgage) -> Vec<RenterYear> {
    let monthly_return = request.financial.investment_return_rate / 12.0;
    let ownership_cost = counterfactual_ownership_cost(request, mortgage);

    let mut state = RenterState::from_request(request);
    let mut series = Vec::with_capacity(request.years_to_analyze as usize + 1);
    series.push(RenterYear::from(&state));

    for _year in 1..=request.years_to_analyze {
        state.advance_year(request.rental.rent_inflation_rate);

        let contribution = (ownership_cost - state.monthly_rent).max(0.0);
        for _month in 0..12 {
            state.apply_month(monthly_return, contribution);
        }

        trace!(
            "renter year {}: rent={:.2} contribution={:.2} balance={:.2}",
            state.year,
            state.monthly_rent,
            contribution,
            state.investment_balance
        );
        series.push(RenterYear::from(&state));
    }

    series
}
