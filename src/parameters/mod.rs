//! Request parameters for a rent-versus-buy analysis

mod data;
pub mod loader;

pub use data::{
    AnalysisRequest, FinancialParameters, PurchaseParameters, RentalParameters,
    DEFAULT_HOME_APPRECIATION_RATE, DEFAULT_SELLING_COST_RATE, DEFAULT_YEARS_TO_ANALYZE,
};
pub use loader::{load_request, load_request_from_reader};
