//! Output structures for a rent-versus-buy analysis

use serde::{Deserialize, Serialize};

/// Margin by which one scenario must beat the other before it is recommended
pub const RECOMMENDATION_MARGIN: f64 = 1.1;

/// Both scenarios at the end of one projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyDataPoint {
    pub year: u32,

    // Net worth
    pub renter_net_worth: f64,
    pub owner_net_worth: f64,

    // Cumulative outlays
    pub renter_cumulative_cost: f64,
    pub owner_cumulative_cost: f64,

    /// Renter's invested balance before costs are subtracted
    pub renter_investment_growth: f64,

    // Property
    pub home_equity: f64,
    pub home_value: f64,
    pub mortgage_balance: f64,
}

impl YearlyDataPoint {
    /// Owner net worth minus renter net worth
    pub fn ownership_advantage(&self) -> f64 {
        self.owner_net_worth - self.renter_net_worth
    }
}

/// Point at which owning first overtakes renting
///
/// All fields are `None` when no crossover happens within the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenResult {
    /// First year index at which the owner is ahead
    pub year: Option<u32>,
    /// Month within the crossing year (0-11)
    pub month: Option<u32>,
    /// Interpolated crossing point in fractional years
    pub exact_point: Option<f64>,
}

impl BreakEvenResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        self.year.is_some()
    }
}

/// Headline recommendation from final-year net worths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Rent,
    Neutral,
}

impl Recommendation {
    /// Classify final net worths; within a 10% band the outcomes are treated as equivalent
    pub fn classify(final_owner_net_worth: f64, final_renter_net_worth: f64) -> Self {
        if final_owner_net_worth > final_renter_net_worth * RECOMMENDATION_MARGIN {
            Recommendation::Buy
        } else if final_renter_net_worth > final_owner_net_worth * RECOMMENDATION_MARGIN {
            Recommendation::Rent
        } else {
            Recommendation::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Buy => "buy",
            Recommendation::Rent => "rent",
            Recommendation::Neutral => "neutral",
        }
    }
}

/// Totals and recommendation for the final year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_renter_cost: f64,
    pub total_owner_cost: f64,
    pub final_renter_net_worth: f64,
    pub final_owner_net_worth: f64,
    pub recommendation: Recommendation,
}

impl AnalysisSummary {
    /// Summarize the final data point
    pub fn from_final(point: &YearlyDataPoint) -> Self {
        Self {
            total_renter_cost: point.renter_cumulative_cost,
            total_owner_cost: point.owner_cumulative_cost,
            final_renter_net_worth: point.renter_net_worth,
            final_owner_net_worth: point.owner_net_worth,
            recommendation: Recommendation::classify(point.owner_net_worth, point.renter_net_worth),
        }
    }
}

/// Complete analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// One point per year, index == year
    pub data_points: Vec<YearlyDataPoint>,
    pub break_even: BreakEvenResult,
    pub summary: AnalysisSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_band() {
        assert_eq!(Recommendation::classify(120.0, 100.0), Recommendation::Buy);
        assert_eq!(Recommendation::classify(100.0, 120.0), Recommendation::Rent);
        assert_eq!(Recommendation::classify(105.0, 100.0), Recommendation::Neutral);
        assert_eq!(Recommendation::classify(100.0, 110.0), Recommendation::Neutral);
    }

    #[test]
    fn test_recommendation_serializes_lowercase() {
        let json = serde_json::to_string(&Recommendation::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
        assert_eq!(Recommendation::Buy.as_str(), "buy");
    }

    #[test]
    fn test_missing_break_even_serializes_nulls() {
        let value = serde_json::to_value(BreakEvenResult::none()).unwrap();
        assert!(value["year"].is_null());
        assert!(value["month"].is_null());
        assert!(value["exactPoint"].is_null());
    }
}
