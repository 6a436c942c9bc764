//! Rent-versus-buy projection: both scenarios, merged series and break-even

mod state;
mod renter;
mod owner;
mod breakeven;
mod results;
mod engine;

pub use state::{OwnerState, RenterState};
pub use renter::{counterfactual_ownership_cost, simulate_renter, RenterYear};
pub use owner::{ownership_year_cost, simulate_owner, OwnerYear, OwnershipYearCost};
pub use breakeven::find_break_even;
pub use results::{
    AnalysisResult, AnalysisSummary, BreakEvenResult, Recommendation, YearlyDataPoint,
    RECOMMENDATION_MARGIN,
};
pub use engine::{calculate_rent_vs_buy, ProjectionEngine};
