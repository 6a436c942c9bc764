//! Running state of each scenario during a projection

use crate::parameters::AnalysisRequest;

/// Renter's position at a point in the projection
#[derive(Debug, Clone)]
pub struct RenterState {
    /// Projection year (0 = lease signed)
    pub year: u32,

    /// Rent charged for each month of the current year
    pub monthly_rent: f64,

    /// Invested balance: seeded down payment plus contributions and growth
    pub investment_balance: f64,

    /// Rent paid so far, including deposit and broker fee
    pub cumulative_cost: f64,
}

impl RenterState {
    /// Year-0 state: initial rent, capital not yet grown, upfront lease costs paid
    pub fn from_request(request: &AnalysisRequest) -> Self {
        Self {
            year: 0,
            monthly_rent: request.rental.monthly_rent,
            investment_balance: request.down_payment(),
            cumulative_cost: request.upfront_rental_costs(),
        }
    }

    /// Move to the next year, applying that year's rent increase
    pub fn advance_year(&mut self, rent_inflation_rate: f64) {
        self.year += 1;
        self.monthly_rent *= 1.0 + rent_inflation_rate;
    }

    /// Grow the investment one month, then bank the month's saving and pay rent
    pub fn apply_month(&mut self, monthly_return: f64, contribution: f64) {
        self.investment_balance = self.investment_balance * (1.0 + monthly_return) + contribution;
        self.cumulative_cost += self.monthly_rent;
    }

    pub fn net_worth(&self) -> f64 {
        self.investment_balance - self.cumulative_cost
    }
}

/// Owner's position at a point in the projection
#[derive(Debug, Clone)]
pub struct OwnerState {
    /// Projection year (0 = closing day)
    pub year: u32,

    /// Appreciated market value
    pub home_value: f64,

    /// Outstanding loan balance
    pub mortgage_balance: f64,

    /// Cash spent so far: down payment, closing, payments, tax, upkeep, net of deductions
    pub cumulative_cost: f64,
}

impl OwnerState {
    /// Year-0 state: purchase closed, nothing amortized yet
    pub fn from_request(request: &AnalysisRequest) -> Self {
        Self {
            year: 0,
            home_value: request.purchase.home_price,
            mortgage_balance: request.loan_amount(),
            cumulative_cost: request.down_payment() + request.closing_costs(),
        }
    }

    pub fn home_equity(&self) -> f64 {
        self.home_value - self.mortgage_balance
    }

    /// Equity left after a hypothetical sale this year, minus everything spent
    pub fn net_worth(&self, selling_cost_rate: f64) -> f64 {
        (self.home_equity() - self.home_value * selling_cost_rate) - self.cumulative_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_states() {
        let request = AnalysisRequest::sample();

        let renter = RenterState::from_request(&request);
        assert_eq!(renter.year, 0);
        assert_relative_eq!(renter.net_worth(), 90_000.0 - 2_200.0);

        let owner = OwnerState::from_request(&request);
        assert_relative_eq!(owner.home_equity(), 90_000.0);
        // Down payment cancels against equity, leaving closing + selling costs
        assert_relative_eq!(owner.net_worth(0.06), -(13_500.0 + 27_000.0), max_relative = 1e-12);
    }

    #[test]
    fn test_renter_month() {
        let request = AnalysisRequest::sample();
        let mut renter = RenterState::from_request(&request);
        renter.apply_month(0.01, 100.0);
        assert_relative_eq!(renter.investment_balance, 90_000.0 * 1.01 + 100.0);
        assert_relative_eq!(renter.cumulative_cost, 4_400.0);
    }
}
