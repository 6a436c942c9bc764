//! Scenario runner for sensitivity sweeps
//!
//! Holds one base request and re-runs the engine with a single parameter
//! overridden per run. Runs are sequential and independent.

use serde::Serialize;

use crate::error::Result;
use crate::parameters::AnalysisRequest;
use crate::projection::{calculate_rent_vs_buy, AnalysisResult};

/// Request field varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SweepParameter {
    InvestmentReturnRate,
    HomeAppreciationRate,
    InterestRate,
    RentInflationRate,
    DownPaymentPercent,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 5] = [
        SweepParameter::InvestmentReturnRate,
        SweepParameter::HomeAppreciationRate,
        SweepParameter::InterestRate,
        SweepParameter::RentInflationRate,
        SweepParameter::DownPaymentPercent,
    ];

    /// Copy of `base` with this parameter set to `value`
    pub fn apply(&self, base: &AnalysisRequest, value: f64) -> AnalysisRequest {
        let mut request = base.clone();
        match self {
            SweepParameter::InvestmentReturnRate => request.financial.investment_return_rate = value,
            SweepParameter::HomeAppreciationRate => request.home_appreciation_rate = value,
            SweepParameter::InterestRate => request.purchase.interest_rate = value,
            SweepParameter::RentInflationRate => request.rental.rent_inflation_rate = value,
            SweepParameter::DownPaymentPercent => request.purchase.down_payment_percent = value,
        }
        request
    }

    pub fn name(&self) -> &'static str {
        match self {
            SweepParameter::InvestmentReturnRate => "investmentReturnRate",
            SweepParameter::HomeAppreciationRate => "homeAppreciationRate",
            SweepParameter::InterestRate => "interestRate",
            SweepParameter::RentInflationRate => "rentInflationRate",
            SweepParameter::DownPaymentPercent => "downPaymentPercent",
        }
    }

    /// Parse a camelCase or snake_case parameter name
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.replace('_', "").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name().to_ascii_lowercase() == normalized)
    }
}

/// One run of a sweep
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    pub value: f64,
    pub result: AnalysisResult,
}

/// Runner bound to a base request
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(request);
/// let points = runner.sweep(SweepParameter::InvestmentReturnRate, &[0.04, 0.06, 0.08])?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_request: AnalysisRequest,
}

impl ScenarioRunner {
    pub fn new(base_request: AnalysisRequest) -> Self {
        Self { base_request }
    }

    /// Run the base request unchanged
    pub fn run(&self) -> Result<AnalysisResult> {
        calculate_rent_vs_buy(&self.base_request)
    }

    /// Run once per value, in order; stops at the first invalid value
    pub fn sweep(&self, parameter: SweepParameter, values: &[f64]) -> Result<Vec<SweepPoint>> {
        values
            .iter()
            .map(|&value| -> Result<SweepPoint> {
                let request = parameter.apply(&self.base_request, value);
                Ok(SweepPoint {
                    value,
                    result: calculate_rent_vs_buy(&request)?,
                })
            })
            .collect()
    }

    /// Run several independent requests
    pub fn run_batch(requests: &[AnalysisRequest]) -> Result<Vec<AnalysisResult>> {
        requests.iter().map(calculate_rent_vs_buy).collect()
    }

    pub fn base_request(&self) -> &AnalysisRequest {
        &self.base_request
    }

    /// Mutable access for adjusting the base between sweeps
    pub fn base_request_mut(&mut self) -> &mut AnalysisRequest {
        &mut self.base_request
    }
}

/// Evenly spaced values from `start` to `end` inclusive
pub fn linear_steps(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps - 1) as f64;
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}
