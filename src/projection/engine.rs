//! Projection engine: runs both scenarios and merges them into a result

use log::debug;

use super::breakeven::find_break_even;
use super::owner::{simulate_owner, OwnerYear};
use super::renter::{simulate_renter, RenterYear};
use super::results::{AnalysisResult, AnalysisSummary, YearlyDataPoint};
use crate::error::Result;
use crate::mortgage::Mortgage;
use crate::parameters::AnalysisRequest;
use crate::validation::validate_request;

/// Validated engine for a single request
///
/// Holds no state beyond the request, so `run` is repeatable and always
/// produces the same result.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    request: AnalysisRequest,
    mortgage: Mortgage,
}

impl ProjectionEngine {
    /// Validate the request and prepare the mortgage terms
    pub fn new(request: AnalysisRequest) -> Result<Self> {
        validate_request(&request)?;
        let mortgage = Mortgage::new(
            request.loan_amount(),
            request.purchase.interest_rate,
            request.purchase.loan_term_years as f64,
        )?;
        Ok(Self { request, mortgage })
    }

    pub fn request(&self) -> &AnalysisRequest {
        &self.request
    }

    pub fn mortgage(&self) -> &Mortgage {
        &self.mortgage
    }

    /// Run both scenarios over the full horizon
    pub fn run(&self) -> AnalysisResult {
        debug!(
            "projecting {} years: price={:.2} loan={:.2} payment={:.2} rent={:.2}",
            self.request.years_to_analyze,
            self.request.purchase.home_price,
            self.mortgage.principal(),
            self.mortgage.monthly_payment(),
            self.request.rental.monthly_rent
        );

        let renter = simulate_renter(&self.request, &self.mortgage);
        let owner = simulate_owner(&self.request, &self.mortgage);
        let data_points = merge_series(&renter, &owner);

        let break_even = find_break_even(&data_points);
        // Horizon is at least one year, so there is always a final point
        let summary = AnalysisSummary::from_final(&data_points[data_points.len() - 1]);

        debug!(
            "break-even={:?} recommendation={}",
            break_even.exact_point,
            summary.recommendation.as_str()
        );

        AnalysisResult {
            data_points,
            break_even,
            summary,
        }
    }
}

/// Merge the two per-year series by year index
fn merge_series(renter: &[RenterYear], owner: &[OwnerYear]) -> Vec<YearlyDataPoint> {
    renter
        .iter()
        .zip(owner)
        .map(|(r, o)| {
            debug_assert_eq!(r.year, o.year);
            YearlyDataPoint {
                year: r.year,
                renter_net_worth: r.net_worth,
                owner_net_worth: o.net_worth,
                renter_cumulative_cost: r.cumulative_cost,
                owner_cumulative_cost: o.cumulative_cost,
                renter_investment_growth: r.investment_balance,
                home_equity: o.home_equity,
                home_value: o.home_value,
                mortgage_balance: o.mortgage_balance,
            }
        })
        .collect()
}

/// Compare renting against buying for one request
///
/// Fails on invalid input before any projection runs; never returns a
/// partial result.
pub fn calculate_rent_vs_buy(request: &AnalysisRequest) -> Result<AnalysisResult> {
    Ok(ProjectionEngine::new(request.clone())?.run())
}
