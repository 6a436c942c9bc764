//! Rent vs Buy - deterministic wealth projection for renting versus buying a home
//!
//! This library provides:
//! - Fixed-rate mortgage math (payment, balance, cumulative interest, schedules)
//! - Renter (rent-and-invest) and owner (buy-and-amortize) year-by-year simulations
//! - Break-even detection and a buy/rent/neutral recommendation
//! - Country reference defaults and one-parameter sensitivity sweeps
//!
//! The engine is a pure function of its [`AnalysisRequest`]: no I/O, no
//! shared state, identical inputs give identical results.

pub mod error;
pub mod validation;
pub mod mortgage;
pub mod parameters;
pub mod projection;
pub mod reference;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, ReferenceError, RequestError, Result};
pub use mortgage::{interest_paid_through, monthly_payment, remaining_balance, Mortgage};
pub use parameters::{AnalysisRequest, FinancialParameters, PurchaseParameters, RentalParameters};
pub use projection::{
    calculate_rent_vs_buy, AnalysisResult, AnalysisSummary, BreakEvenResult, ProjectionEngine,
    Recommendation, YearlyDataPoint,
};
pub use reference::{CountryConfig, CountryTable};
pub use scenario::{ScenarioRunner, SweepParameter};
